pub mod codec;
pub mod link;

pub use codec::Snapshot;
