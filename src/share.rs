//! Shareable result transcripts.

use std::fmt::Display;

use itertools::Itertools;

use crate::game::{Game, Status};

const MATCH: char = '🟩';
const NO_MATCH: char = '⬜';

/// The shareable transcript of a session, produced by
/// [`Game::share()`](Game::share).
///
/// Rendering is deterministic: a header naming the mystery show, the
/// outcome (`I got it in n/8 guesses!` on a win, `I gave up!` otherwise),
/// then one row of 🟩/⬜ cells per guess in guess order, and the
/// promotional footer. The rows only distinguish exact matches from
/// everything else; directional hints stay on the board. Copying the text
/// to a clipboard is the caller's business.
///
/// # Examples
///
/// ```rust
/// use tvwordle::{Dataset, EndYear, Game, ShowRecord};
///
/// # fn show(title: &str, network: &str) -> ShowRecord {
/// #     ShowRecord {
/// #         title: title.into(),
/// #         genre: "Drama".into(),
/// #         start_year: 2008,
/// #         end_year: EndYear::Ended(2013),
/// #         seasons: 5,
/// #         network: network.into(),
/// #     }
/// # }
/// let dataset = Dataset::new(vec![show("Breaking Bad", "AMC"), show("Lost", "ABC")])?;
/// let mut game = Game::with_mystery(&dataset, 0)?;
/// game.guess(&dataset[1])?;
/// game.guess(&dataset[0])?;
///
/// assert_eq!(
///     game.share().to_string(),
///     "TV Wordle - Breaking Bad\n\
///      I got it in 2/8 guesses!\n\
///      \n\
///      🟩🟩🟩🟩⬜\n\
///      🟩🟩🟩🟩🟩\n\
///      \n\
///      Play at: https://tvwordle.me"
/// );
/// #
/// # Ok::<_, tvwordle::TvWordleError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ShareSummary<'a> {
    game: &'a Game,
}

impl<'a> ShareSummary<'a> {
    pub(crate) fn new(game: &'a Game) -> Self {
        ShareSummary { game }
    }
}

impl Display for ShareSummary<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let game = self.game;

        writeln!(f, "TV Wordle - {}", game.mystery().title)?;
        if game.status() == Status::Won {
            writeln!(
                f,
                "I got it in {}/{} guesses!",
                game.guesses().len(),
                game.max_guesses()
            )?;
        } else {
            writeln!(f, "I gave up!")?;
        }
        writeln!(f)?;

        let grid = game
            .board()
            .map(|(_, evaluation)| {
                evaluation
                    .cells()
                    .iter()
                    .map(|feedback| if feedback.is_exact() { MATCH } else { NO_MATCH })
                    .collect::<String>()
            })
            .join("\n");
        writeln!(f, "{}", grid)?;
        writeln!(f)?;

        write!(f, "Play at: https://tvwordle.me")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        show::{Dataset, EndYear, ShowRecord},
        TvWordleError,
    };

    fn record(
        title: &str,
        genre: &str,
        start_year: u16,
        end_year: EndYear,
        seasons: u32,
        network: &str,
    ) -> ShowRecord {
        ShowRecord {
            title: title.to_string(),
            genre: genre.to_string(),
            start_year,
            end_year,
            seasons,
            network: network.to_string(),
        }
    }

    fn shows() -> Dataset {
        Dataset::new(vec![
            record("Friends", "Comedy", 1994, EndYear::Ended(2004), 10, "NBC"),
            record("The Office", "Comedy", 2005, EndYear::Ended(2013), 9, "NBC"),
            record("Breaking Bad", "Drama", 2008, EndYear::Ended(2013), 5, "AMC"),
        ])
        .unwrap()
    }

    #[test]
    fn winning_transcript() -> Result<(), TvWordleError> {
        let shows = shows();
        let mut game = Game::with_mystery(&shows, 0)?;

        game.guess(shows.find("The Office").unwrap())?;
        game.guess(shows.find("Friends").unwrap())?;

        assert_eq!(
            game.share().to_string(),
            "TV Wordle - Friends\n\
             I got it in 2/8 guesses!\n\
             \n\
             🟩⬜⬜⬜🟩\n\
             🟩🟩🟩🟩🟩\n\
             \n\
             Play at: https://tvwordle.me"
        );

        Ok(())
    }

    #[test]
    fn conceded_transcript() -> Result<(), TvWordleError> {
        let shows = shows();
        let mut game = Game::with_mystery(&shows, 0)?;

        game.guess(shows.find("Breaking Bad").unwrap())?;
        game.give_up()?;

        assert_eq!(
            game.share().to_string(),
            "TV Wordle - Friends\n\
             I gave up!\n\
             \n\
             ⬜⬜⬜⬜⬜\n\
             \n\
             Play at: https://tvwordle.me"
        );

        Ok(())
    }
}
