//! Unified application error type.
//! Every module (models, core, db, cli, config) returns AppError so that the
//! CLI shell can report failures consistently.

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

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid date/time: {0}")]
    InvalidTimestamp(String),

    #[error("Pain level {0} is out of range (expected 0-10)")]
    OutOfRangePainLevel(i64),

    // ---------------------------
    // Persistence
    // ---------------------------
    #[error("Could not load saved entries: {0}")]
    PersistenceLoad(String),

    #[error("Could not save entries: {0}")]
    PersistenceSave(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
