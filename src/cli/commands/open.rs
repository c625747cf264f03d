use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::share::{codec, link};
use crate::ui::messages::{header, info};
use crate::ui::render;
use crate::utils::formatting::count_noun;

/// Decode a handover link and show its records. Needs no login and no
/// database: everything the receiver sees travels inside the link.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Open { input } = cmd {
        let payload = link::extract_payload(input);

        let Some(snapshots) = codec::decode(payload) else {
            return Err(AppError::InvalidPayload);
        };

        if snapshots.is_empty() {
            info("The handover link holds no records.");
            return Ok(());
        }

        header(format!(
            "Handover snapshot ({})",
            count_noun(snapshots.len(), "record")
        ));
        println!("{}", render::snapshot_table(&snapshots, cfg));
    }
    Ok(())
}
