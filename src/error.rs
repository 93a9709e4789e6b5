use thiserror::Error;

use crate::game::{Agent, Position};

/// Errors raised by the game, its input sources and its stores.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move for the {agent}: {to} is off the board or blocked")]
    InvalidMove { agent: Agent, to: Position },

    #[error("invalid configuration: {message}")]
    Configuration { message: String },

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("input error: {0}")]
    Input(#[from] rustyline::error::ReadlineError),

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    pub(crate) fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
