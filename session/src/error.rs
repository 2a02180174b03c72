//! Session and description-file errors.

use std::io;

use thiserror::Error;

/// Error produced while parsing a machine description or driving a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The description or one of the session streams could not be read or
    /// written.
    #[error("could not read input: {0}")]
    Io(#[from] io::Error),

    /// The description ended before a required element.
    #[error("configuration file truncated: expected {expected}")]
    Truncated {
        /// What the parser was looking for when the tokens ran out.
        expected: &'static str,
    },

    /// A token in the description does not fit the grammar.
    #[error("bad configuration token {token:?}: expected {expected}")]
    BadToken {
        /// The offending token as written.
        token: String,
        /// What the grammar allows at that point.
        expected: &'static str,
    },

    /// A rotor description used a kind tag other than `M<notches>`, `N`,
    /// or `R`.
    #[error("rotor {name} has unknown kind {tag:?}")]
    UnknownKind {
        /// Name of the rotor being described.
        name: String,
        /// The kind tag as written.
        tag: String,
    },

    /// A message line arrived before the first settings line.
    #[error("message line before the first settings line")]
    MessageBeforeSettings,

    /// A settings line does not carry a rotor name per slot plus the
    /// settings field.
    #[error("settings line too short: {line:?}")]
    ShortSettingsLine {
        /// The settings line as written.
        line: String,
    },

    /// The machine rejected a configuration or conversion request.
    #[error(transparent)]
    Machine(#[from] walze::Error),
}

impl From<walze::ConfigError> for SessionError {
    fn from(err: walze::ConfigError) -> Self {
        Self::Machine(err.into())
    }
}

impl From<walze::RangeError> for SessionError {
    fn from(err: walze::RangeError) -> Self {
        Self::Machine(err.into())
    }
}
