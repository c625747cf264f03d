use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{Session, require_login};
use crate::core::state::Action;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::Draft;
use crate::ui::messages::success;
use crate::ui::render;
use crate::utils::date;

/// Add a ticket record to the logbook.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
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

        //
        // 1. Resolve the date (default = today)
        //
        let date_str = match date_arg {
            Some(d) => {
                date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
                d.clone()
            }
            None => date::today_string(),
        };

        //
        // 2. Assemble the draft (unset flags stay empty)
        //
        let draft = Draft {
            ticket_number: ticket.clone(),
            operator_name: operator.clone().unwrap_or_default(),
            shift: shift.clone().unwrap_or_else(|| cfg.default_shift.clone()),
            region: region.clone().unwrap_or_default(),
            date: date_str,
            source: source.clone().unwrap_or_default(),
            case_details: case.clone().unwrap_or_default(),
            action_taken: action.clone().unwrap_or_default(),
            remark: remark.clone().unwrap_or_default(),
        }
        .trimmed();

        if draft.ticket_number.is_empty() {
            return Err(AppError::Other("Ticket number cannot be empty".to_string()));
        }
        let ticket_label = draft.ticket_number.clone();

        //
        // 3. Run the transition and persist
        //
        let mut session = Session::open(&pool)?;
        session.dispatch(Action::AddRecord(draft))?;

        let short = session
            .state
            .records
            .last()
            .map(|r| r.short_id().to_string())
            .unwrap_or_default();

        success(format!("Added record {} ({}).", short, ticket_label));

        //
        // 4. Show the refreshed view
        //
        let per_page = cfg.records_per_page;
        let rows = session.state.page(per_page);
        if !rows.is_empty() {
            println!("{}", render::page_table(rows, cfg));
        }
        println!("{}", render::counts_line(&session.state, per_page));

        audit(
            &pool.conn,
            "add",
            &ticket_label,
            &format!("Record {} created", short),
        )?;
    }
    Ok(())
}
