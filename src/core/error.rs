//! Error type shared by the library and the binary.

use std::fmt;

#[derive(Debug)]
pub enum GameError {
    /// Reading player input or writing game output failed.
    Io(std::io::Error),

    /// A die needs at least one side.
    InvalidSides(u32),

    /// A configuration override could not be parsed.
    InvalidConfig { key: String, value: String },
}

impl GameError {
    pub fn invalid_config(key: &str, value: &str) -> Self {
        Self::InvalidConfig {
            key: key.to_owned(),
            value: value.to_owned(),
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> GameError {
        GameError::Io(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Io(err) => write!(f, "I/O error: {}", err),
            GameError::InvalidSides(sides) => {
                write!(f, "a die must have at least 1 side, got {}", sides)
            }
            GameError::InvalidConfig { key, value } => {
                write!(f, "invalid value {:?} for {}", value, key)
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
