#![doc = include_str!("../README.md")]

// Required to rename serde
#[cfg(feature = "serde")]
extern crate serde_crate as serde;

use thiserror::Error;

pub mod show;
pub use show::{Dataset, EndYear, ShowRecord};

pub mod game;
pub use game::{Evaluation, Feedback, Field, Game, Status};

pub mod share;
pub use share::ShareSummary;

#[cfg(feature = "serde")]
pub mod prefs;

/// Alias for results produced by this crate.
pub type Result<T, E = TvWordleError> = std::result::Result<T, E>;

/// The errors that `tvwordle` can produce.
#[derive(Debug, Error)]
pub enum TvWordleError {
    #[error("game session encountered error")]
    Game {
        #[from]
        kind: GameError,
    },

    #[error("show dataset encountered error")]
    Dataset {
        #[from]
        kind: DatasetError,
    },

    #[cfg(feature = "serde")]
    #[error("preference store encountered error")]
    Prefs {
        #[from]
        kind: PrefsError,
    },
}

#[derive(Debug, Error)]
pub enum GameError {
    /// A game cannot start without at least one show to draw the mystery
    /// from.
    #[error("cannot start a game from an empty dataset")]
    EmptyDataset,

    /// The index provided when picking a mystery show does not correspond
    /// to a dataset entry.
    #[error("the index {0} does not correspond to a show in the dataset")]
    InvalidIndex(usize),

    /// A guess or a concession was submitted to a finished session.
    #[error("the game has already finished ({0})")]
    Finished(Status),

    /// Giving up is only allowed once at least one guess has been made.
    #[error("cannot give up before making a guess")]
    NothingGuessed,
}

#[derive(Debug, Error)]
pub enum DatasetError {
    /// Titles identify shows, so no two records may share one.
    #[error("the title \"{0}\" appears more than once in the dataset")]
    DuplicateTitle(String),

    /// An end year must be either a year or the `Running` marker.
    #[error("\"{0}\" is neither a year nor the Running marker")]
    InvalidEndYear(String),
}

#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("could not read or write the preferences file")]
    Io(#[from] std::io::Error),

    #[error("trouble serializing or deserializing preferences")]
    Serde(#[from] serde_json::Error),
}
