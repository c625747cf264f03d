use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{Session, require_login};
use crate::core::state::Action;
use crate::core::store::StoreLogic;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::Draft;
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        ids,
        ticket,
        operator,
        shift,
        region,
        date: date_arg,
        source,
        case,
        action,
        remark,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;
        require_login(&pool)?;

        let mut session = Session::open(&pool)?;

        //
        // 1. Resolve prefixes into the selection
        //
        for needle in ids {
            let full = StoreLogic::resolve_id(&session.state.records, needle)?;
            session.dispatch(Action::ToggleSelection(full))?;
        }

        // The edit form takes exactly one record.
        if session.state.selection.len() != 1 {
            return Err(AppError::EditCardinality(session.state.selection.len()));
        }
        let Some(target_id) = session.state.selection.iter().next().map(str::to_string) else {
            return Err(AppError::EmptySelection);
        };

        //
        // 2. Merge flags over the stored values
        //
        let Some(current) = session.state.records.iter().find(|r| r.id == target_id) else {
            return Err(AppError::RecordNotFound(target_id));
        };
        let short = current.short_id().to_string();

        let mut draft = Draft::from(current);
        if let Some(v) = ticket {
            draft.ticket_number = v.clone();
        }
        if let Some(v) = operator {
            draft.operator_name = v.clone();
        }
        if let Some(v) = shift {
            draft.shift = v.clone();
        }
        if let Some(v) = region {
            draft.region = v.clone();
        }
        if let Some(v) = date_arg {
            date::parse_date(v).ok_or_else(|| AppError::InvalidDate(v.to_string()))?;
            draft.date = v.clone();
        }
        if let Some(v) = source {
            draft.source = v.clone();
        }
        if let Some(v) = case {
            draft.case_details = v.clone();
        }
        if let Some(v) = action {
            draft.action_taken = v.clone();
        }
        if let Some(v) = remark {
            draft.remark = v.clone();
        }
        let draft = draft.trimmed();

        if draft.ticket_number.is_empty() {
            return Err(AppError::Other("Ticket number cannot be empty".to_string()));
        }
        let ticket_label = draft.ticket_number.clone();

        //
        // 3. Run the transition and persist
        //
        session.dispatch(Action::UpdateRecord {
            id: target_id,
            draft,
        })?;

        success(format!("Updated record {}.", short));
        audit(
            &pool.conn,
            "edit",
            &ticket_label,
            &format!("Record {} updated", short),
        )?;
    }
    Ok(())
}
