use crate::config::Config;
use crate::core::store::StoreLogic;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Single-user logbook: every session belongs to the same account.
const ADMIN_TARGET: &str = "admin";

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open(&cfg.database)?;

    if !StoreLogic::is_logged_in(&pool)? {
        info("No session is open.");
        return Ok(());
    }

    StoreLogic::set_logged_in(&pool, false)?;
    success("Logged out.");
    audit(&pool.conn, "logout", ADMIN_TARGET, "Session closed")?;
    Ok(())
}
