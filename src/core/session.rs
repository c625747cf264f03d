//! One command's working session: owns the single mutable state
//! instance and carries reducer effects into the slot store.

use crate::core::state::{Action, AppState, Effect, reduce};
use crate::core::store::StoreLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use chrono::Utc;

pub struct Session<'a> {
    pool: &'a DbPool,
    pub state: AppState,
}

impl<'a> Session<'a> {
    /// Hydrate the state from the records slot.
    pub fn open(pool: &'a DbPool) -> AppResult<Self> {
        let records = StoreLogic::load_records(pool)?;
        Ok(Self {
            pool,
            state: AppState::with_records(records),
        })
    }

    /// Run one action through the reducer and execute its effects.
    ///
    /// A full store downgrades to a warning: the in-memory state keeps
    /// the change, the slot keeps its previous value. Tombstones are
    /// written before the live slot, in the order the reducer emitted
    /// them.
    pub fn dispatch(&mut self, action: Action) -> AppResult<()> {
        let effects = reduce(&mut self.state, action, Utc::now());
        for effect in effects {
            let saved = match effect {
                Effect::SaveRecords => StoreLogic::save_records(self.pool, &self.state.records),
                Effect::SaveTombstones(tombstones) => {
                    StoreLogic::append_tombstones(self.pool, tombstones)
                }
            };
            match saved {
                Err(AppError::StorageFull) => {
                    warning("Storage is full. The change is visible now but was not saved.");
                }
                other => other?,
            }
        }
        Ok(())
    }
}

/// Gate for record-facing commands.
pub fn require_login(pool: &DbPool) -> AppResult<()> {
    if StoreLogic::is_logged_in(pool)? {
        Ok(())
    } else {
        Err(AppError::NotLoggedIn)
    }
}
