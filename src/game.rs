//! Game sessions: the state machine and the per-field feedback.

use std::{cmp::Ordering, fmt::Display};

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    share::ShareSummary,
    show::{Dataset, ShowRecord},
    GameError, Result,
};

/// The lifecycle of a game session.
///
/// A session starts in [`InProgress`](Status::InProgress) and ends in
/// exactly one of the three terminal states. No operation ever leaves a
/// terminal state; starting over means building a fresh [`Game`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Status {
    /// Guessing is still open.
    InProgress,

    /// A guess named the mystery show.
    Won,

    /// Every guess was used without naming the mystery show.
    Lost,

    /// The player conceded.
    GaveUp,
}

impl Status {
    /// Returns true once the session can no longer change.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Status::InProgress => "in progress",
            Status::Won => "won",
            Status::Lost => "out of guesses",
            Status::GaveUp => "gave up",
        };
        write!(f, "{}", text)
    }
}

/// Feedback for a single field of a guess.
///
/// `Exact` means the guessed value equals the mystery show's value. For
/// the numeric fields, `Higher` and `Lower` point at where the mystery
/// show's value lies relative to the guess. `Miss` carries no direction:
/// a non-numeric mismatch, or an end-year comparison involving the
/// `Running` marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Feedback {
    /// The guessed value matches the mystery show's value.
    Exact,

    /// The mystery show's value is higher than the guessed value.
    Higher,

    /// The mystery show's value is lower than the guessed value.
    Lower,

    /// The values differ and no direction applies.
    Miss,
}

impl Feedback {
    /// Returns true for [`Feedback::Exact`].
    pub fn is_exact(self) -> bool {
        matches!(self, Feedback::Exact)
    }

    fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Equal => Feedback::Exact,
            Ordering::Less => Feedback::Higher,
            Ordering::Greater => Feedback::Lower,
        }
    }
}

/// A feedback-bearing column of the guess table.
///
/// The title is not a field: naming the mystery show's title wins the
/// game outright instead of being graded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Genre,
    StartYear,
    EndYear,
    Seasons,
    Network,
}

impl Field {
    /// The five fields in dataset column order.
    pub const ALL: [Field; 5] = [
        Field::Genre,
        Field::StartYear,
        Field::EndYear,
        Field::Seasons,
        Field::Network,
    ];

    /// Grades one field of `guess` against `target`.
    ///
    /// The genre and network compare by equality only. The start year and
    /// season count order numerically. The end year orders through
    /// [`EndYear`](crate::EndYear)'s partial ordering, so the `Running`
    /// marker is resolved before any numeric comparison can happen and a
    /// marker-versus-year pairing grades as [`Feedback::Miss`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tvwordle::{EndYear, Feedback, Field, ShowRecord};
    ///
    /// # fn show(start_year: u16, end_year: EndYear) -> ShowRecord {
    /// #     ShowRecord {
    /// #         title: start_year.to_string(),
    /// #         genre: "Drama".into(),
    /// #         start_year,
    /// #         end_year,
    /// #         seasons: 5,
    /// #         network: "AMC".into(),
    /// #     }
    /// # }
    /// let target = show(2011, EndYear::Running);
    /// let guess = show(2008, EndYear::Ended(2013));
    ///
    /// // The mystery show started later than the guess.
    /// assert_eq!(Field::StartYear.evaluate(&guess, &target), Feedback::Higher);
    /// // A running show gives no direction against a concrete end year.
    /// assert_eq!(Field::EndYear.evaluate(&guess, &target), Feedback::Miss);
    /// assert_eq!(Field::Seasons.evaluate(&guess, &target), Feedback::Exact);
    /// ```
    pub fn evaluate(self, guess: &ShowRecord, target: &ShowRecord) -> Feedback {
        match self {
            Field::Genre if guess.genre == target.genre => Feedback::Exact,
            Field::Genre => Feedback::Miss,
            Field::Network if guess.network == target.network => Feedback::Exact,
            Field::Network => Feedback::Miss,
            Field::StartYear => {
                Feedback::from_ordering(guess.start_year.cmp(&target.start_year))
            }
            Field::Seasons => Feedback::from_ordering(guess.seasons.cmp(&target.seasons)),
            Field::EndYear => guess
                .end_year
                .partial_cmp(&target.end_year)
                .map_or(Feedback::Miss, Feedback::from_ordering),
        }
    }
}

/// The five-field feedback produced for one guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Evaluation {
    pub genre: Feedback,
    pub start_year: Feedback,
    pub end_year: Feedback,
    pub seasons: Feedback,
    pub network: Feedback,
}

impl Evaluation {
    /// Grades every field of `guess` against `target`.
    pub fn new(guess: &ShowRecord, target: &ShowRecord) -> Self {
        Evaluation {
            genre: Field::Genre.evaluate(guess, target),
            start_year: Field::StartYear.evaluate(guess, target),
            end_year: Field::EndYear.evaluate(guess, target),
            seasons: Field::Seasons.evaluate(guess, target),
            network: Field::Network.evaluate(guess, target),
        }
    }

    /// The feedback cells in dataset column order.
    pub fn cells(self) -> [Feedback; 5] {
        [
            self.genre,
            self.start_year,
            self.end_year,
            self.seasons,
            self.network,
        ]
    }
}

/// A single game session.
///
/// A session owns its mystery show, its ordered guess list, and its
/// [`Status`]. It is mutated only through [`guess()`](Game::guess) and
/// [`give_up()`](Game::give_up); a new round means a new `Game`.
///
/// # Examples
///
/// ```rust
/// use tvwordle::{Dataset, EndYear, Game, ShowRecord, Status};
///
/// # fn show(title: &str, seasons: u32) -> ShowRecord {
/// #     ShowRecord {
/// #         title: title.into(),
/// #         genre: "Drama".into(),
/// #         start_year: 2008,
/// #         end_year: EndYear::Ended(2013),
/// #         seasons,
/// #         network: "AMC".into(),
/// #     }
/// # }
/// let dataset = Dataset::new(vec![show("Breaking Bad", 5), show("Lost", 6)])?;
/// let mut game = Game::with_mystery(&dataset, 0)?;
///
/// let (evaluation, correct) = game.guess(&dataset[1])?.unwrap();
/// assert!(!correct);
/// assert_eq!(game.status(), Status::InProgress);
/// assert_eq!(game.remaining(), Game::MAX_GUESSES - 1);
///
/// let (_, correct) = game.guess(&dataset[0])?.unwrap();
/// assert!(correct);
/// assert_eq!(game.status(), Status::Won);
/// #
/// # Ok::<_, tvwordle::TvWordleError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Game {
    mystery: ShowRecord,
    guesses: Vec<ShowRecord>,
    max_guesses: usize,
    status: Status,
}

impl Game {
    /// The number of guesses a session allows.
    pub const MAX_GUESSES: usize = 8;

    /// Starts a session with a mystery show drawn uniformly at random
    /// from `dataset`.
    ///
    /// Returns [`GameError::EmptyDataset`] if there is nothing to draw
    /// from.
    pub fn new(dataset: &Dataset) -> Result<Self> {
        Self::with_rng(dataset, &mut rand::thread_rng())
    }

    /// Starts a session like [`new()`](Game::new), drawing the mystery
    /// show through the provided source of randomness.
    pub fn with_rng<R: Rng + ?Sized>(dataset: &Dataset, rng: &mut R) -> Result<Self> {
        if dataset.is_empty() {
            return Err(GameError::EmptyDataset.into());
        }

        Self::with_mystery(dataset, rng.gen_range(0..dataset.len()))
    }

    /// Starts a session whose mystery show is the dataset entry at
    /// `index`.
    pub fn with_mystery(dataset: &Dataset, index: usize) -> Result<Self> {
        if dataset.is_empty() {
            return Err(GameError::EmptyDataset.into());
        }

        let mystery = dataset
            .get(index)
            .cloned()
            .ok_or(GameError::InvalidIndex(index))?;

        Ok(Game {
            mystery,
            guesses: Vec::new(),
            max_guesses: Self::MAX_GUESSES,
            status: Status::InProgress,
        })
    }

    /// The show this session is hiding.
    pub fn mystery(&self) -> &ShowRecord {
        &self.mystery
    }

    /// The guesses made so far, in guess order.
    pub fn guesses(&self) -> &[ShowRecord] {
        self.guesses.as_slice()
    }

    /// The session's guess bound.
    pub fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Guesses left before the session locks.
    pub fn remaining(&self) -> usize {
        self.max_guesses - self.guesses.len()
    }

    /// Where the session stands.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns true if a show with this title has already been guessed.
    pub fn guessed(&self, title: &str) -> bool {
        self.guesses.iter().any(|guess| guess.title == title)
    }

    /// Submits `candidate` as the next guess.
    ///
    /// On a live session this appends the candidate, grades it against
    /// the mystery show, and returns the [`Evaluation`] together with a
    /// flag for whether the guess named the mystery show. The status
    /// moves to [`Won`](Status::Won) on a correct guess, to
    /// [`Lost`](Status::Lost) when the final allowed guess misses, and
    /// stays [`InProgress`](Status::InProgress) otherwise.
    ///
    /// Re-guessing a title that is already on the board is not an error:
    /// the pick is dropped and `Ok(None)` comes back, leaving the session
    /// untouched. Guessing against a finished session fails with
    /// [`GameError::Finished`] and also leaves it untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tvwordle::{Dataset, EndYear, Feedback, Game, ShowRecord};
    ///
    /// # fn show(title: &str, start_year: u16) -> ShowRecord {
    /// #     ShowRecord {
    /// #         title: title.into(),
    /// #         genre: "Drama".into(),
    /// #         start_year,
    /// #         end_year: EndYear::Ended(2013),
    /// #         seasons: 5,
    /// #         network: "AMC".into(),
    /// #     }
    /// # }
    /// let dataset = Dataset::new(vec![show("Breaking Bad", 2008), show("Lost", 2004)])?;
    /// let mut game = Game::with_mystery(&dataset, 0)?;
    ///
    /// let (evaluation, correct) = game.guess(&dataset[1])?.unwrap();
    /// assert!(!correct);
    /// assert_eq!(evaluation.start_year, Feedback::Higher);
    ///
    /// // The same pick again is silently dropped.
    /// assert!(game.guess(&dataset[1])?.is_none());
    /// assert_eq!(game.guesses().len(), 1);
    /// #
    /// # Ok::<_, tvwordle::TvWordleError>(())
    /// ```
    pub fn guess(&mut self, candidate: &ShowRecord) -> Result<Option<(Evaluation, bool)>> {
        if self.status.is_terminal() {
            return Err(GameError::Finished(self.status).into());
        }

        if self.guessed(&candidate.title) {
            return Ok(None);
        }

        let evaluation = Evaluation::new(candidate, &self.mystery);
        let correct = candidate.title == self.mystery.title;
        self.guesses.push(candidate.clone());

        if correct {
            self.status = Status::Won;
        } else if self.guesses.len() >= self.max_guesses {
            self.status = Status::Lost;
        }

        Ok(Some((evaluation, correct)))
    }

    /// Concedes the session.
    ///
    /// Giving up is only open on a live session that has at least one
    /// guess on the board; a blank board fails with
    /// [`GameError::NothingGuessed`] and a finished session with
    /// [`GameError::Finished`]. Succeeding moves the status to
    /// [`GaveUp`](Status::GaveUp), terminally.
    pub fn give_up(&mut self) -> Result<()> {
        if self.status.is_terminal() {
            return Err(GameError::Finished(self.status).into());
        }

        if self.guesses.is_empty() {
            return Err(GameError::NothingGuessed.into());
        }

        self.status = Status::GaveUp;
        Ok(())
    }

    /// Grades `guess` against this session's mystery show.
    pub fn evaluate(&self, guess: &ShowRecord) -> Evaluation {
        Evaluation::new(guess, &self.mystery)
    }

    /// The guesses made so far, each paired with its feedback, in guess
    /// order.
    pub fn board(&self) -> impl Iterator<Item = (&ShowRecord, Evaluation)> + '_ {
        self.guesses
            .iter()
            .map(move |guess| (guess, Evaluation::new(guess, &self.mystery)))
    }

    /// Dataset entries whose titles contain `pattern`, case-insensitively,
    /// and which have not been guessed yet, in dataset order.
    ///
    /// This backs the search box: type a fragment, pick from what comes
    /// back.
    pub fn candidates<'a>(&self, dataset: &'a Dataset, pattern: &str) -> Vec<&'a ShowRecord> {
        let pattern = pattern.to_lowercase();
        dataset
            .iter()
            .filter(|show| show.title.to_lowercase().contains(&pattern))
            .filter(|show| !self.guessed(&show.title))
            .collect()
    }

    /// The shareable transcript of this session.
    ///
    /// See [`ShareSummary`] for the format.
    pub fn share(&self) -> ShareSummary<'_> {
        ShareSummary::new(self)
    }
}
