pub mod backup;
pub mod log;
pub mod selection;
pub mod session;
pub mod state;
pub mod store;
pub mod view;
