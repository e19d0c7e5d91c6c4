//! The one piece of durable state: whether this player has seen the
//! instructions before.
//!
//! The site shows its how-to-play panel on a first visit and never again,
//! keyed by a single flag in client-local storage. This module is that
//! flag for native frontends: a tiny JSON file, read once at startup and
//! written once when the flag flips. The game engine itself never reads
//! or writes it.

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};

use crate::{PrefsError, Result};

/// The well-known preferences file name.
pub const PREFS_FILE: &str = "tvwordle.json";

/// Client-local player preferences.
///
/// # Examples
///
/// ```rust,no_run
/// use tvwordle::prefs::{Prefs, PREFS_FILE};
///
/// let path = std::env::temp_dir().join(PREFS_FILE);
///
/// let mut prefs = Prefs::load(&path)?;
/// if !prefs.has_played() {
///     // ...show the instructions...
///     prefs.mark_played();
///     prefs.store(&path)?;
/// }
/// #
/// # Ok::<_, tvwordle::TvWordleError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(crate = "serde_crate", rename_all = "camelCase", default)]
pub struct Prefs {
    has_played: bool,
}

impl Prefs {
    /// Reads preferences from `path`.
    ///
    /// A missing file is not an error: it means a first visit, and the
    /// defaults come back.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(serde_json::from_str(&contents).map_err(PrefsError::from)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Prefs::default()),
            Err(e) => Err(PrefsError::from(e).into()),
        }
    }

    /// Writes preferences to `path`.
    pub fn store(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents = serde_json::to_string(self).map_err(PrefsError::from)?;
        fs::write(path, contents).map_err(PrefsError::from)?;
        Ok(())
    }

    /// True once the player has been shown the instructions.
    pub fn has_played(&self) -> bool {
        self.has_played
    }

    /// Records that the player has now seen the instructions.
    ///
    /// Returns true if the flag flipped, which is the caller's cue to
    /// [`store()`](Prefs::store) once.
    pub fn mark_played(&mut self) -> bool {
        if self.has_played {
            false
        } else {
            self.has_played = true;
            true
        }
    }
}
