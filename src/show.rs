//! The show catalog that game sessions draw from.

use std::{
    cmp::Ordering,
    collections::HashSet,
    fmt::Display,
    ops::Deref,
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::DatasetError;

/// A single TV show as it appears in the dataset.
///
/// Records are plain immutable values. Within one [`Dataset`] the `title`
/// uniquely identifies a record; everything else is the material that
/// guesses are graded on.
///
/// With the `serde` feature on, records (de)serialize with the camelCase
/// field names of the upstream dataset (`startYear`, `endYear`, ...), and
/// the end year accepts either a year or the literal `Running` marker.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "camelCase")
)]
pub struct ShowRecord {
    pub title: String,
    pub genre: String,
    pub start_year: u16,
    pub end_year: EndYear,
    pub seasons: u32,
    pub network: String,
}

/// The year a show went off the air, or the marker for one still running.
///
/// The upstream dataset mixes concrete years and a `Running` marker into
/// the same column. Here the marker is a proper variant so that it can
/// never be mistaken for a year. The `PartialOrd` impl is deliberately
/// partial: two concrete years order normally, two `Running`s are equal,
/// and a marker compared against a year is simply not ordered.
///
/// # Examples
///
/// ```rust
/// use tvwordle::EndYear;
///
/// assert!(EndYear::Ended(2004) < EndYear::Ended(2013));
/// assert_eq!(EndYear::Running.partial_cmp(&EndYear::Running), Some(std::cmp::Ordering::Equal));
/// assert_eq!(EndYear::Running.partial_cmp(&EndYear::Ended(2013)), None);
///
/// assert_eq!("Running".parse::<EndYear>()?, EndYear::Running);
/// assert_eq!("2013".parse::<EndYear>()?, EndYear::Ended(2013));
/// assert!("never".parse::<EndYear>().is_err());
/// #
/// # Ok::<_, tvwordle::DatasetError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", try_from = "EndYearRepr", into = "EndYearRepr")
)]
pub enum EndYear {
    /// The show ended in the given year.
    Ended(u16),

    /// The show is still on the air.
    Running,
}

impl PartialOrd for EndYear {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (EndYear::Ended(a), EndYear::Ended(b)) => a.partial_cmp(b),
            (EndYear::Running, EndYear::Running) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl Display for EndYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndYear::Ended(year) => write!(f, "{}", year),
            EndYear::Running => write!(f, "Running"),
        }
    }
}

impl FromStr for EndYear {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("running") {
            Ok(EndYear::Running)
        } else {
            s.parse::<u16>()
                .map(EndYear::Ended)
                .map_err(|_| DatasetError::InvalidEndYear(s.to_string()))
        }
    }
}

/// Wire shape of [`EndYear`]: a bare year or the `Running` string.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
#[serde(crate = "serde_crate", untagged)]
enum EndYearRepr {
    Year(u16),
    Marker(String),
}

#[cfg(feature = "serde")]
impl TryFrom<EndYearRepr> for EndYear {
    type Error = DatasetError;

    fn try_from(repr: EndYearRepr) -> Result<Self, Self::Error> {
        match repr {
            EndYearRepr::Year(year) => Ok(EndYear::Ended(year)),
            EndYearRepr::Marker(marker) => marker.parse(),
        }
    }
}

#[cfg(feature = "serde")]
impl From<EndYear> for EndYearRepr {
    fn from(year: EndYear) -> Self {
        match year {
            EndYear::Ended(year) => EndYearRepr::Year(year),
            EndYear::Running => EndYearRepr::Marker(year.to_string()),
        }
    }
}

/// An ordered, validated collection of [`ShowRecord`]s.
///
/// Construction checks the one dataset invariant: titles are unique. The
/// collection is immutable afterwards and a [`Game`](crate::Game) treats
/// it as an opaque list to draw the mystery show from.
///
/// # Examples
///
/// ```rust
/// use tvwordle::{Dataset, DatasetError, EndYear, ShowRecord};
///
/// # fn show(title: &str) -> ShowRecord {
/// #     ShowRecord {
/// #         title: title.into(),
/// #         genre: "Drama".into(),
/// #         start_year: 2008,
/// #         end_year: EndYear::Ended(2013),
/// #         seasons: 5,
/// #         network: "AMC".into(),
/// #     }
/// # }
/// let dataset = Dataset::new(vec![show("Breaking Bad"), show("Lost")])?;
/// assert_eq!(dataset.len(), 2);
/// assert_eq!(dataset.find("lost").unwrap().title, "Lost");
///
/// let err = Dataset::new(vec![show("Lost"), show("Lost")]).unwrap_err();
/// assert!(matches!(err, DatasetError::DuplicateTitle(_)));
/// #
/// # Ok::<_, tvwordle::DatasetError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        crate = "serde_crate",
        try_from = "Vec<ShowRecord>",
        into = "Vec<ShowRecord>"
    )
)]
pub struct Dataset {
    records: Vec<ShowRecord>,
}

impl Dataset {
    /// Builds a dataset from records, rejecting duplicate titles.
    pub fn new(records: Vec<ShowRecord>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.title.as_str()) {
                return Err(DatasetError::DuplicateTitle(record.title.clone()));
            }
        }

        Ok(Dataset { records })
    }

    /// Looks up a show by its full title, ignoring ASCII case.
    pub fn find(&self, title: &str) -> Option<&ShowRecord> {
        self.records
            .iter()
            .find(|record| record.title.eq_ignore_ascii_case(title))
    }
}

impl Deref for Dataset {
    type Target = [ShowRecord];

    fn deref(&self) -> &Self::Target {
        self.records.as_slice()
    }
}

impl TryFrom<Vec<ShowRecord>> for Dataset {
    type Error = DatasetError;

    fn try_from(records: Vec<ShowRecord>) -> Result<Self, Self::Error> {
        Self::new(records)
    }
}

impl From<Dataset> for Vec<ShowRecord> {
    fn from(dataset: Dataset) -> Self {
        dataset.records
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn show(title: &str, end_year: EndYear) -> ShowRecord {
        ShowRecord {
            title: title.to_string(),
            genre: "Drama".to_string(),
            start_year: 2008,
            end_year,
            seasons: 5,
            network: "AMC".to_string(),
        }
    }

    #[test]
    fn end_year_ordering_is_partial() {
        assert!(EndYear::Ended(2004) < EndYear::Ended(2013));
        assert!(EndYear::Ended(2013) > EndYear::Ended(2004));
        assert_eq!(
            EndYear::Ended(2013).partial_cmp(&EndYear::Ended(2013)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            EndYear::Running.partial_cmp(&EndYear::Running),
            Some(Ordering::Equal)
        );

        // The marker is never ordered against a concrete year.
        assert_eq!(EndYear::Running.partial_cmp(&EndYear::Ended(2013)), None);
        assert_eq!(EndYear::Ended(2013).partial_cmp(&EndYear::Running), None);
    }

    #[test]
    fn end_year_parses_marker_and_years() {
        assert_eq!("Running".parse::<EndYear>().unwrap(), EndYear::Running);
        assert_eq!("running".parse::<EndYear>().unwrap(), EndYear::Running);
        assert_eq!("2013".parse::<EndYear>().unwrap(), EndYear::Ended(2013));
        assert!(matches!(
            "never".parse::<EndYear>(),
            Err(DatasetError::InvalidEndYear(_))
        ));
        assert_eq!(EndYear::Running.to_string(), "Running");
        assert_eq!(EndYear::Ended(2013).to_string(), "2013");
    }

    #[test]
    fn dataset_rejects_duplicate_titles() {
        let err = Dataset::new(vec![
            show("Lost", EndYear::Ended(2010)),
            show("Lost", EndYear::Running),
        ])
        .unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateTitle(title) if title == "Lost"));
    }

    #[test]
    fn dataset_lookup_ignores_case() {
        let dataset = Dataset::new(vec![
            show("Breaking Bad", EndYear::Ended(2013)),
            show("Lost", EndYear::Ended(2010)),
        ])
        .unwrap();

        assert_eq!(dataset.find("breaking bad").unwrap().title, "Breaking Bad");
        assert_eq!(dataset.find("LOST").unwrap().title, "Lost");
        assert!(dataset.find("Los").is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn record_round_trips_upstream_shape() {
        let json = r#"{
            "title": "Breaking Bad",
            "genre": "Drama",
            "startYear": 2008,
            "endYear": 2013,
            "seasons": 5,
            "network": "AMC"
        }"#;
        let record: ShowRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, show("Breaking Bad", EndYear::Ended(2013)));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["startYear"], 2008);
        assert_eq!(value["endYear"], 2013);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn running_marker_round_trips() {
        let json = r#"{
            "title": "The Simpsons",
            "genre": "Animation",
            "startYear": 1989,
            "endYear": "Running",
            "seasons": 35,
            "network": "Fox"
        }"#;
        let record: ShowRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.end_year, EndYear::Running);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["endYear"], "Running");

        // A stringly-typed year still parses, the way the CSV-fed variant
        // of the site delivers it.
        let record: ShowRecord =
            serde_json::from_str(&json.replace("\"Running\"", "\"1989\"")).unwrap();
        assert_eq!(record.end_year, EndYear::Ended(1989));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn dataset_validates_on_deserialize() {
        let json = r#"[
            {"title": "Lost", "genre": "Drama", "startYear": 2004, "endYear": 2010, "seasons": 6, "network": "ABC"},
            {"title": "Lost", "genre": "Drama", "startYear": 2004, "endYear": 2010, "seasons": 6, "network": "ABC"}
        ]"#;
        assert!(serde_json::from_str::<Dataset>(json).is_err());
    }
}
