//! Error types for the game and its tools.

use std::io;
use thiserror::Error;

/// Numeric error codes carried by [`GameUnitError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitErrorCode {
    Unspecified,
    HealthMeter,
    Attack,
}

impl UnitErrorCode {
    pub fn code(&self) -> u32 {
        match self {
            UnitErrorCode::Unspecified => 0,
            UnitErrorCode::HealthMeter => 101,
            UnitErrorCode::Attack => 102,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            UnitErrorCode::Unspecified => "ERROR-000: Unspecified Error!",
            UnitErrorCode::HealthMeter => "ERROR-101: Health Meter Problem!",
            UnitErrorCode::Attack => "ERROR-102: Attack issue! Ignored",
        }
    }
}

/// Error raised by game units, carrying a numeric code and a canned message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.framed_message())]
pub struct GameUnitError {
    pub code: UnitErrorCode,
    pub detail: String,
}

impl GameUnitError {
    pub fn new(code: UnitErrorCode, detail: impl Into<String>) -> Self {
        Self {
            code,
            detail: detail.into(),
        }
    }

    /// The canned message framed by tilde rules, as the game prints it.
    pub fn framed_message(&self) -> String {
        let rule = "~".repeat(50);
        format!("{}\n{}\n{}", rule, self.code.message(), rule)
    }
}

/// Top-level error for the binary entry points.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Unit(#[from] GameUnitError),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("save data corrupt: {0}")]
    CorruptSave(String),
}
