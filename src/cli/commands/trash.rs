use crate::config::Config;
use crate::core::session::require_login;
use crate::core::store::StoreLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::render;
use crate::utils::formatting::count_noun;

/// List tombstoned records. Read-only: the trash has no restore
/// operation, it exists so deletions stay auditable.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open(&cfg.database)?;
    require_login(&pool)?;

    let tombstones = StoreLogic::load_tombstones(&pool)?;

    if tombstones.is_empty() {
        info("Trash is empty.");
        return Ok(());
    }

    println!("{}", render::trash_table(&tombstones, cfg));
    println!("{} in the trash", count_noun(tombstones.len(), "record"));
    Ok(())
}
