use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::require_login;
use crate::core::store::StoreLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::ui::render;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let pool = DbPool::open(&cfg.database)?;
        require_login(&pool)?;

        let records = StoreLogic::load_records(&pool)?;
        let full_id = StoreLogic::resolve_id(&records, id)?;

        let Some(record) = records.iter().find(|r| r.id == full_id) else {
            return Err(AppError::RecordNotFound(id.clone()));
        };

        header(format!("Record {}", record.short_id()));
        print!("{}", render::detail(record));
    }
    Ok(())
}
