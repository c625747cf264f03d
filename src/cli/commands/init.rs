use crate::config::Config;
use crate::core::store::StoreLogic;
use crate::db::log;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database (prod or test mode)
///  - all pending DB migrations
///  - one sample record, when the records slot has never been written
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1. Prepare configuration
    //
    // Config::init_all creates:
    //   ~/.shiftlog/
    //   ~/.shiftlog/shiftlog.conf
    // and records the configured DB path.
    //
    if let Some(custom) = &cli.db {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let cfg = Config::load();
    // In test mode the config file is left untouched, so the --db
    // override has to win here as well.
    let db_path = cli.db.clone().unwrap_or_else(|| cfg.database.clone());

    println!("⚙️  Initializing shiftlog…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", &db_path);

    //
    // 2. Open DB
    //
    let pool = DbPool::new(&db_path)?;

    //
    // 3. Schema + migrations
    //
    init_db(&pool.conn)?;

    println!("✅ Database initialized at {}", &db_path);

    //
    // 4. Seed a first record so a fresh logbook has something to show
    //
    if StoreLogic::seed_if_absent(&pool)? {
        println!("🎫 Seeded one sample ticket (try 'shiftlog list').");
    }

    //
    // 5. Internal audit log (non-blocking)
    //
    if let Err(e) = log::audit(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 shiftlog initialization completed!");
    Ok(())
}
