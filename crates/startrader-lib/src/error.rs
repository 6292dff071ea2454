use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the Star Trader library.
pub type Result<T> = std::result::Result<T, Error>;

/// Load-time error type.
///
/// Everything here is fatal: a world file that fails to load leaves no
/// partially-populated world behind. Recoverable, in-game command failures
/// are represented separately by [`crate::engine::Rejection`].
#[derive(Debug, Error)]
pub enum Error {
    /// World file could not be opened or read.
    #[error("failed to open world file {path}")]
    WorldFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line in the world file failed to parse or referenced an unknown
    /// entity. `line` is 1-based.
    #[error("failed parsing {file} [line {line}]: {message}")]
    Parse {
        file: String,
        line: usize,
        message: String,
    },

    /// The world file ended without defining the player.
    #[error("world file {file} does not define a PLAYER section")]
    MissingPlayer { file: String },
}

/// Render name suggestions for "unknown name" messages.
pub(crate) fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(" Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            " Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
