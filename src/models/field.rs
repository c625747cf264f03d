use crate::models::record::Record;
use clap::ValueEnum;

/// A sortable record column, as exposed on the command line
/// (`--sort ticket`, `--sort timestamp`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Field {
    Ticket,
    Operator,
    Shift,
    Region,
    Date,
    Source,
    Case,
    Action,
    Remark,
    Timestamp,
}

impl Field {
    /// Column header used by tables and exports.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Ticket => "Ticket #",
            Field::Operator => "Operator",
            Field::Shift => "Shift",
            Field::Region => "Region",
            Field::Date => "Date",
            Field::Source => "Source",
            Field::Case => "Case Details",
            Field::Action => "Action Taken",
            Field::Remark => "Remark",
            Field::Timestamp => "Updated",
        }
    }

    pub fn value<'a>(&self, r: &'a Record) -> &'a str {
        match self {
            Field::Ticket => &r.ticket_number,
            Field::Operator => &r.operator_name,
            Field::Shift => &r.shift,
            Field::Region => &r.region,
            Field::Date => &r.date,
            Field::Source => &r.source,
            Field::Case => &r.case_details,
            Field::Action => &r.action_taken,
            Field::Remark => &r.remark,
            Field::Timestamp => &r.timestamp,
        }
    }

    /// Direction a column starts with when first selected.
    /// Newest-first for the timestamp, A-to-Z for everything else.
    pub fn default_direction(&self) -> Direction {
        match self {
            Field::Timestamp => Direction::Desc,
            _ => Direction::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn flipped(&self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Direction::Asc => "↑",
            Direction::Desc => "↓",
        }
    }
}

/// Active sort of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: Field,
    pub direction: Direction,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: Field::Timestamp,
            direction: Direction::Desc,
        }
    }
}
