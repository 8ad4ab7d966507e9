//! Error types for the overlap core

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Invalid ring: {0}")]
    InvalidRing(String),

    #[error("UTC offset {0} is outside -12..=14")]
    InvalidOffset(i32),

    #[error("Invalid work window: {start}..{end}")]
    InvalidWorkWindow { start: f64, end: f64 },

    #[error("Hour {0} is outside 0..24")]
    InvalidHour(u32),

    #[error("Meeting title must not be empty")]
    EmptyTitle,

    #[error("Ring assignment must place each location on exactly one ring")]
    RingConflict,
}

pub type Result<T> = std::result::Result<T, CoreError>;
