pub mod field;
pub mod record;

pub use field::{Direction, Field, SortSpec};
pub use record::{DeletedRecord, Draft, Record};
