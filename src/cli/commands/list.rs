use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{Session, require_login};
use crate::core::state::Action;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{Direction, Field};
use crate::ui::render;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        filter,
        sort,
        asc,
        desc,
        page,
        all,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;
        require_login(&pool)?;

        let mut session = Session::open(&pool)?;

        //
        // 1. Drive the view pipeline
        //
        if let Some(term) = filter {
            session.dispatch(Action::SetFilter(term.clone()))?;
        }

        if let Some(key) = sort {
            let direction = resolve_direction(*key, *asc, *desc);
            session.dispatch(Action::SetSort {
                key: *key,
                direction: Some(direction),
            })?;
        } else if *asc || *desc {
            // direction flag without a key applies to the active sort
            let key = session.state.view.sort.key;
            let direction = resolve_direction(key, *asc, *desc);
            session.dispatch(Action::SetSort {
                key,
                direction: Some(direction),
            })?;
        }

        if let Some(p) = page {
            session.dispatch(Action::SetPage(*p))?;
        }

        //
        // 2. Render the page
        //
        let per_page = if *all {
            session.state.filtered.len().max(1)
        } else {
            cfg.records_per_page
        };

        let rows = session.state.page(per_page);
        if !rows.is_empty() {
            println!("{}", render::page_table(rows, cfg));
        }
        println!("{}", render::counts_line(&session.state, per_page));
        println!("{}", render::status_line(&session.state, per_page));
    }
    Ok(())
}

/// Explicit flag wins; otherwise the column's natural default.
fn resolve_direction(key: Field, asc: bool, desc: bool) -> Direction {
    if asc {
        Direction::Asc
    } else if desc {
        Direction::Desc
    } else {
        key.default_direction()
    }
}
