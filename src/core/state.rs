//! Application state and its reducer.
//!
//! Every mutation goes through [`reduce`] as an explicit [`Action`];
//! the reducer returns the persistence work as [`Effect`]s so state
//! transitions stay pure and the caller decides how to store them.

use crate::core::selection::Selection;
use crate::core::view;
use crate::models::record::iso_timestamp;
use crate::models::{DeletedRecord, Direction, Draft, Field, Record, SortSpec};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// What the user is currently looking at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub filter: String,
    pub sort: SortSpec,
    /// 1-based page number.
    pub page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filter: String::new(),
            sort: SortSpec::default(),
            page: 1,
        }
    }
}

/// The whole application state.
/// `filtered` is derived and rebuilt in full whenever the records, the
/// filter, or the sort change; nothing updates it incrementally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub records: Vec<Record>,
    pub filtered: Vec<Record>,
    pub view: ViewState,
    pub selection: Selection,
}

impl AppState {
    pub fn with_records(records: Vec<Record>) -> Self {
        let mut state = Self {
            records,
            ..Self::default()
        };
        state.recompute();
        state
    }

    /// Rebuild the derived view and drop selected ids the filter no
    /// longer shows.
    pub fn recompute(&mut self) {
        self.filtered = view::apply(&self.records, &self.view.filter, &self.view.sort);
        let visible: HashSet<&str> = self.filtered.iter().map(|r| r.id.as_str()).collect();
        self.selection.prune(&visible);
    }

    /// Records on the current page.
    pub fn page(&self, per_page: usize) -> &[Record] {
        view::page_slice(&self.filtered, self.view.page, per_page)
    }

    pub fn page_count(&self, per_page: usize) -> usize {
        view::page_count(self.filtered.len(), per_page)
    }
}

/// Every state transition in the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddRecord(Draft),
    UpdateRecord { id: String, draft: Draft },
    /// Tombstone the current selection.
    DeleteRecords,
    SetFilter(String),
    /// `direction: None` picks the key's natural default, or flips the
    /// current direction when the key is already active.
    SetSort {
        key: Field,
        direction: Option<Direction>,
    },
    SetPage(usize),
    ToggleSelection(String),
    SelectAll { ids: Vec<String>, checked: bool },
    ClearSelection,
}

/// Persistence work a transition asks the caller to carry out,
/// in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Write the live records to their slot.
    SaveRecords,
    /// Append these tombstones to the deleted slot. Always ordered
    /// before the matching [`Effect::SaveRecords`].
    SaveTombstones(Vec<DeletedRecord>),
}

/// Apply one action to the state.
/// The clock is passed in; the only other impurity is id generation
/// for new records.
pub fn reduce(state: &mut AppState, action: Action, now: DateTime<Utc>) -> Vec<Effect> {
    match action {
        Action::AddRecord(draft) => {
            state.records.push(Record::new(draft, now));
            state.view.page = 1;
            state.recompute();
            vec![Effect::SaveRecords]
        }

        Action::UpdateRecord { id, draft } => {
            let Some(rec) = state.records.iter_mut().find(|r| r.id == id) else {
                return Vec::new();
            };
            rec.apply(draft, now);
            state.view.page = 1;
            state.recompute();
            vec![Effect::SaveRecords]
        }

        Action::DeleteRecords => {
            if state.selection.is_empty() {
                return Vec::new();
            }
            let deleted_at = iso_timestamp(now);
            let selection = std::mem::take(&mut state.selection);
            let (kept, dropped): (Vec<Record>, Vec<Record>) = state
                .records
                .drain(..)
                .partition(|r| !selection.contains(&r.id));
            state.records = kept;
            let tombstones: Vec<DeletedRecord> = dropped
                .into_iter()
                .map(|record| DeletedRecord {
                    record,
                    deleted_at: deleted_at.clone(),
                })
                .collect();
            state.view.page = 1;
            state.recompute();
            vec![Effect::SaveTombstones(tombstones), Effect::SaveRecords]
        }

        Action::SetFilter(term) => {
            state.view.filter = term;
            state.view.page = 1;
            state.recompute();
            Vec::new()
        }

        Action::SetSort { key, direction } => {
            let sort = &mut state.view.sort;
            sort.direction = match direction {
                Some(d) => d,
                None if sort.key == key => sort.direction.flipped(),
                None => key.default_direction(),
            };
            sort.key = key;
            state.view.page = 1;
            state.recompute();
            Vec::new()
        }

        Action::SetPage(page) => {
            state.view.page = page.max(1);
            Vec::new()
        }

        Action::ToggleSelection(id) => {
            state.selection.toggle(&id);
            Vec::new()
        }

        Action::SelectAll { ids, checked } => {
            state.selection.set_all(&ids, checked);
            Vec::new()
        }

        Action::ClearSelection => {
            state.selection.clear();
            Vec::new()
        }
    }
}
