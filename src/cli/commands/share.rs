use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{Session, require_login};
use crate::core::state::Action;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{Direction, Field};
use crate::share::{Snapshot, codec, link};
use crate::ui::messages::{success, warning};
use crate::utils::formatting::count_noun;
use arboard::Clipboard;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Share {
        filter,
        sort,
        asc,
        desc,
        no_copy,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;
        require_login(&pool)?;

        let mut session = Session::open(&pool)?;

        //
        // 1. Shape the view to share
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
            let key = session.state.view.sort.key;
            let direction = resolve_direction(key, *asc, *desc);
            session.dispatch(Action::SetSort {
                key,
                direction: Some(direction),
            })?;
        }

        //
        // 2. Encode the whole visible view, not just one page
        //
        let snapshots: Vec<Snapshot> = session.state.filtered.iter().map(Snapshot::from).collect();

        if snapshots.is_empty() {
            warning("Nothing to share: no records match.");
            return Ok(());
        }

        let payload = codec::encode(&snapshots);
        let url = link::build(&cfg.share_origin, &payload);

        //
        // 3. Clipboard (best effort) + always print the link
        //
        if !*no_copy {
            match Clipboard::new().and_then(|mut cb| cb.set_text(url.clone())) {
                Ok(()) => success(format!(
                    "Link for {} copied to the clipboard.",
                    count_noun(snapshots.len(), "record")
                )),
                Err(e) => warning(format!("Clipboard unavailable ({}); copy the link below.", e)),
            }
        }

        println!("{}", url);

        audit(
            &pool.conn,
            "share",
            &count_noun(snapshots.len(), "record"),
            "Handover link created",
        )?;
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
