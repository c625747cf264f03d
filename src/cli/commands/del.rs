use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{Session, require_login};
use crate::core::state::Action;
use crate::core::store::StoreLogic;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, success, warning};
use crate::utils::formatting::count_noun;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        ids,
        all,
        filter,
        yes,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;
        require_login(&pool)?;

        let mut session = Session::open(&pool)?;

        if let Some(term) = filter {
            session.dispatch(Action::SetFilter(term.clone()))?;
        }

        //
        // 1. Build the selection
        //
        // Prefixes resolve against the visible rows, like checking
        // boxes in the table; a filtered-out record cannot be picked.
        //
        let target;
        if *all {
            let visible: Vec<String> = session
                .state
                .filtered
                .iter()
                .map(|r| r.id.clone())
                .collect();
            target = filter.clone().unwrap_or_else(|| "all".to_string());
            session.dispatch(Action::SelectAll {
                ids: visible,
                checked: true,
            })?;
        } else {
            let mut shorts = Vec::new();
            for needle in ids {
                let full = StoreLogic::resolve_id(&session.state.filtered, needle)?;
                shorts.push(full.chars().take(7).collect::<String>());
                session.dispatch(Action::ToggleSelection(full))?;
            }
            target = shorts.join(",");
        }

        let count = session.state.selection.len();
        if count == 0 {
            return Err(AppError::EmptySelection);
        }

        //
        // 2. Confirmation prompt
        //
        if !*yes {
            warning(format!(
                "Move {} to the trash? This action is irreversible.",
                count_noun(count, "record")
            ));
            if !confirm("Proceed?")? {
                info("Delete cancelled.");
                return Ok(());
            }
        }

        //
        // 3. Execute deletion
        //
        session.dispatch(Action::DeleteRecords)?;

        success(format!("Moved {} to the trash.", count_noun(count, "record")));
        audit(
            &pool.conn,
            "del",
            &target,
            &format!("{} tombstoned", count_noun(count, "record")),
        )?;
    }
    Ok(())
}
