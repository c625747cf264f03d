use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::require_login;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filter,
        force,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;
        require_login(&pool)?;
        ExportLogic::export(&pool, format.clone(), file, filter, *force)?;
    }
    Ok(())
}
