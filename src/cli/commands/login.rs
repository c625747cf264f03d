use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::StoreLogic;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{prompt_line, success};

/// The only credential pair the logbook accepts.
const ADMIN_USER: &str = "admin";
const ADMIN_PASS: &str = "admin";

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { username, password } = cmd {
        //
        // 1. Collect credentials (prompt for whatever was omitted)
        //
        let user = match username {
            Some(u) => u.trim().to_string(),
            None => prompt_line("Username")?,
        };
        let pass = match password {
            Some(p) => p.trim().to_string(),
            None => prompt_line("Password")?,
        };

        if user != ADMIN_USER || pass != ADMIN_PASS {
            return Err(AppError::BadCredentials);
        }

        //
        // 2. Persist the session flag
        //
        let pool = DbPool::open(&cfg.database)?;
        StoreLogic::set_logged_in(&pool, true)?;

        success(format!("Logged in as {}.", user));
        audit(&pool.conn, "login", &user, "Session opened")?;
    }
    Ok(())
}
