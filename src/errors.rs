//! Unified application error type.
//! All modules (db, core, cli, share) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Stored data under '{0}' is corrupt: {1}")]
    CorruptSlot(String, String),

    #[error("Storage is full")]
    StorageFull,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid handover payload")]
    InvalidPayload,

    // ---------------------------
    // Session errors
    // ---------------------------
    #[error("Not logged in. Run 'shiftlog login' first")]
    NotLoggedIn,

    #[error("Invalid username or password")]
    BadCredentials,

    // ---------------------------
    // Record errors
    // ---------------------------
    #[error("No record matches id '{0}'")]
    RecordNotFound(String),

    #[error("Id '{0}' matches more than one record")]
    AmbiguousId(String),

    #[error("No records selected")]
    EmptySelection,

    #[error("Exactly one record must be selected to edit, got {0}")]
    EditCardinality(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
