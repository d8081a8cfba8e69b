//! Loading of state and game definition files.
//!
//! A state file names its game definition in its `game` field; the definition
//! is read from `<game>.yaml` next to the state file. State files ending in
//! `.json` are read as JSON, everything else as YAML.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::board::{GameDefinition, StateSnapshot};

/// File extension appended to a state's game reference.
pub const GAME_EXTENSION: &str = "yaml";

/// Errors that can occur while reading input files.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// Loads a state snapshot.
pub fn load_state(path: &Path) -> Result<StateSnapshot, LoadError> {
    let data = read(path)?;
    let state = if is_json(path) {
        serde_json::from_str(&data).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        serde_yaml::from_str(&data).map_err(|source| LoadError::Yaml {
            path: path.to_path_buf(),
            source,
        })?
    };
    debug!(path = %path.display(), "loaded state");
    Ok(state)
}

/// Loads a game definition.
pub fn load_game(path: &Path) -> Result<GameDefinition, LoadError> {
    let data = read(path)?;
    let game = serde_yaml::from_str(&data).map_err(|source| LoadError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loaded game definition");
    Ok(game)
}

/// Returns the path of the game definition a state refers to.
pub fn game_path(state_path: &Path, game_ref: &str) -> PathBuf {
    let dir = state_path.parent().unwrap_or_else(|| Path::new(""));
    dir.join(format!("{}.{}", game_ref, GAME_EXTENSION))
}

/// Loads a state file and the game definition it refers to.
pub fn load(state_path: &Path) -> Result<(GameDefinition, StateSnapshot), LoadError> {
    let state = load_state(state_path)?;
    let game = load_game(&game_path(state_path, &state.game_ref))?;
    Ok((game, state))
}
