//! Named predicates over players and clubs, as they arrive in query strings.
//!
//! Supported keys:
//! - text keys (`name`, `club` for players; `name`, `location` for clubs):
//!   case-insensitive substring match;
//! - `search`: substring of the name or of the club name (players) or of
//!   the name or location (clubs);
//! - `min_<field>` / `max_<field>`: inclusive bounds on any stat field;
//! - `position` (players only): `GK`, `DF`, `MF` or `FW`;
//! - `ordering`: `name` or a stat field, prefixed with `-` for descending.
//!
//! Predicates are combined with AND. Other keys are ignored so that paging
//! or formatting parameters can travel in the same query string.

use derive_more::Display;
use stattrackr_api::Position;

use crate::entity::{Club, Player};
use crate::fields::StatField;
use crate::ranking::{self, Ranked};

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[display(fmt = "Invalid category: {_0}")]
    InvalidCategory(String),

    #[display(fmt = "Invalid limit: {_0}")]
    InvalidLimit(String),

    #[display(fmt = "Invalid value for {key}: {value}")]
    InvalidFilterValue { key: String, value: String },

    #[display(fmt = "Unknown position: {_0}")]
    UnknownPosition(String),

    #[display(fmt = "Query parameter is required")]
    EmptySearchQuery,
}

impl std::error::Error for QueryError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    ClubName,
    Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate<F> {
    /// Needle is stored lowercased.
    Contains(TextField, String),
    Search(String),
    Min(F, i64),
    Max(F, i64),
    Position(Position),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey<F> {
    Name,
    Stat(F),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ordering<F> {
    pub key: SortKey<F>,
    pub descending: bool,
}

impl<F> Ordering<F> {
    pub fn desc(field: F) -> Self {
        Self {
            key: SortKey::Stat(field),
            descending: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateSet<F> {
    pub predicates: Vec<Predicate<F>>,
    pub ordering: Option<Ordering<F>>,
}

impl<F> Default for PredicateSet<F> {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
            ordering: None,
        }
    }
}

pub trait Filterable: Ranked {
    const TEXT_KEYS: &'static [(&'static str, TextField)];
    const HAS_POSITION: bool;

    fn text(&self, field: TextField) -> Option<&str>;
    fn position_tag(&self) -> Option<Position>;
    /// `needle` is lowercased.
    fn matches_search(&self, needle: &str) -> bool;
}

impl Filterable for Player {
    const TEXT_KEYS: &'static [(&'static str, TextField)] =
        &[("name", TextField::Name), ("club", TextField::ClubName)];
    const HAS_POSITION: bool = true;

    fn text(&self, field: TextField) -> Option<&str> {
        match field {
            TextField::Name => Some(&self.name),
            TextField::ClubName => Some(&self.club.name),
            TextField::Location => None,
        }
    }

    fn position_tag(&self) -> Option<Position> {
        Some(self.position())
    }

    fn matches_search(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle) || contains_ci(&self.club.name, needle)
    }
}

impl Filterable for Club {
    const TEXT_KEYS: &'static [(&'static str, TextField)] =
        &[("name", TextField::Name), ("location", TextField::Location)];
    const HAS_POSITION: bool = false;

    fn text(&self, field: TextField) -> Option<&str> {
        match field {
            TextField::Name => Some(&self.name),
            TextField::Location => Some(&self.location),
            TextField::ClubName => None,
        }
    }

    fn position_tag(&self) -> Option<Position> {
        None
    }

    fn matches_search(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle) || contains_ci(&self.location, needle)
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

pub fn parse_predicates<'p, E: Filterable>(
    params: impl IntoIterator<Item = (&'p str, &'p str)>,
) -> Result<PredicateSet<E::Field>, QueryError> {
    let mut params = params
        .into_iter()
        .map(|(k, v)| (k, v.trim()))
        .filter(|(_, v)| !v.is_empty())
        .collect::<Vec<_>>();
    // Deterministic error reporting regardless of the map the params came from.
    params.sort();
    let mut set = PredicateSet::default();
    for (key, value) in params {
        if let Some(&(_, field)) = E::TEXT_KEYS.iter().find(|(k, _)| *k == key) {
            set.predicates
                .push(Predicate::Contains(field, value.to_lowercase()));
            continue;
        }
        match key {
            "search" => set.predicates.push(Predicate::Search(value.to_lowercase())),
            "position" if E::HAS_POSITION => {
                let position = Position::parse(value)
                    .ok_or_else(|| QueryError::UnknownPosition(value.to_owned()))?;
                set.predicates.push(Predicate::Position(position));
            }
            "ordering" => set.ordering = Some(parse_ordering::<E::Field>(value)?),
            _ => {
                if let Some(name) = key.strip_prefix("min_") {
                    let (field, bound) = parse_bound::<E::Field>(key, name, value)?;
                    set.predicates.push(Predicate::Min(field, bound));
                } else if let Some(name) = key.strip_prefix("max_") {
                    let (field, bound) = parse_bound::<E::Field>(key, name, value)?;
                    set.predicates.push(Predicate::Max(field, bound));
                }
            }
        }
    }
    Ok(set)
}

fn parse_bound<F: StatField>(key: &str, name: &str, value: &str) -> Result<(F, i64), QueryError> {
    let field = F::parse(name).ok_or_else(|| QueryError::InvalidCategory(name.to_owned()))?;
    let bound = value
        .parse::<i64>()
        .map_err(|_| QueryError::InvalidFilterValue {
            key: key.to_owned(),
            value: value.to_owned(),
        })?;
    Ok((field, bound))
}

pub fn parse_ordering<F: StatField>(value: &str) -> Result<Ordering<F>, QueryError> {
    let (descending, name) = match value.strip_prefix('-') {
        Some(name) => (true, name),
        None => (false, value),
    };
    // Accept the `stats__goals` spelling used by older clients.
    let name = name.strip_prefix("stats__").unwrap_or(name);
    let key = if name == "name" {
        SortKey::Name
    } else {
        SortKey::Stat(F::parse(name).ok_or_else(|| QueryError::InvalidCategory(name.to_owned()))?)
    };
    Ok(Ordering { key, descending })
}

impl<F: StatField> Predicate<F> {
    fn matches<E: Filterable<Field = F>>(&self, e: &E) -> bool {
        match self {
            Predicate::Contains(field, needle) => e.text(*field).is_some_and(|t| contains_ci(t, needle)),
            Predicate::Search(needle) => e.matches_search(needle),
            Predicate::Min(field, bound) => e.stat(*field) as i64 >= *bound,
            Predicate::Max(field, bound) => e.stat(*field) as i64 <= *bound,
            Predicate::Position(position) => e.position_tag() == Some(*position),
        }
    }
}

/// Entities matching every predicate, in input order.
pub fn filter<'a, E: Filterable>(entities: &'a [E], set: &PredicateSet<E::Field>) -> Vec<&'a E> {
    entities
        .iter()
        .filter(|e| set.predicates.iter().all(|p| p.matches(*e)))
        .collect()
}

pub fn sort<E: Ranked>(entities: &mut [&E], ordering: Ordering<E::Field>) {
    match (ordering.key, ordering.descending) {
        (SortKey::Name, false) => entities.sort_by(|a, b| ranking::by_identity(*a, *b)),
        (SortKey::Name, true) => entities.sort_by(|a, b| ranking::by_identity(*b, *a)),
        (SortKey::Stat(field), true) => {
            let cmp = ranking::by_stat_desc::<E>(field);
            entities.sort_by(|a, b| cmp(*a, *b));
        }
        (SortKey::Stat(field), false) => {
            let cmp = ranking::by_stat_asc::<E>(field);
            entities.sort_by(|a, b| cmp(*a, *b));
        }
    }
}

/// Filters and orders, falling back to `default_ordering` when the set
/// does not name one.
pub fn select<'a, E: Filterable>(
    entities: &'a [E],
    set: &PredicateSet<E::Field>,
    default_ordering: Ordering<E::Field>,
) -> Vec<&'a E> {
    let mut selected = filter(entities, set);
    sort(&mut selected, set.ordering.unwrap_or(default_ordering));
    selected
}

/// Free-text search over both kinds of entity. Each kind is capped
/// independently and ordered by name.
pub fn search<'a>(
    players: &'a [Player],
    clubs: &'a [Club],
    query: &str,
    cap: usize,
) -> Result<(Vec<&'a Player>, Vec<&'a Club>), QueryError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(QueryError::EmptySearchQuery);
    }
    let needle = query.to_lowercase();
    let mut found_players = players
        .iter()
        .filter(|p| p.matches_search(&needle))
        .collect::<Vec<_>>();
    let mut found_clubs = clubs
        .iter()
        .filter(|c| c.matches_search(&needle))
        .collect::<Vec<_>>();
    found_players.sort_by(|a, b| ranking::by_identity(*a, *b));
    found_clubs.sort_by(|a, b| ranking::by_identity(*a, *b));
    found_players.truncate(cap);
    found_clubs.truncate(cap);
    Ok((found_players, found_clubs))
}

/// Parses a ranking limit, falling back to `default` when absent. Values
/// above `max` are clamped; non-positive values are passed through and
/// give empty rankings.
pub fn parse_limit(raw: Option<&str>, default: i64, max: i64) -> Result<i64, QueryError> {
    let limit = match raw.map(str::trim) {
        None | Some("") => default,
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| QueryError::InvalidLimit(raw.to_owned()))?,
    };
    Ok(limit.min(max))
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;
    use crate::entity::fixtures::*;
    use crate::fields::{ClubField, PlayerField};
    use stattrackr_api::records::ClubStatsRecord;

    struct Data {
        clubs: Vec<Arc<Club>>,
        players: Vec<Player>,
    }

    fn data() -> Data {
        let united = club(
            1,
            "Manchester United",
            "Manchester",
            ClubStatsRecord {
                wins: 15,
                losses: 5,
                ..Default::default()
            },
        );
        let liverpool = club(
            2,
            "Liverpool",
            "Liverpool",
            ClubStatsRecord {
                wins: 14,
                losses: 6,
                ..Default::default()
            },
        );
        let city = club(3, "Manchester City", "Manchester", ClubStatsRecord::default());
        let players = vec![
            scorer(1, "Marcus Rashford", &united, Position::Forward, 15),
            scorer(2, "Mohamed Salah", &liverpool, Position::Forward, 18),
            scorer(3, "Bruno Fernandes", &united, Position::Midfielder, 10),
            scorer(4, "Darwin Nunez", &liverpool, Position::Forward, 9),
            scorer(5, "Virgil van Dijk", &liverpool, Position::Defender, 3),
            scorer(6, "Alisson", &liverpool, Position::Goalkeeper, 0),
        ];
        Data {
            clubs: vec![united, liverpool, city],
            players,
        }
    }

    fn club_list(d: &Data) -> Vec<Club> {
        d.clubs.iter().map(|c| (**c).clone()).collect()
    }

    fn ids<E: Ranked>(v: &[&E]) -> Vec<i64> {
        v.iter().map(|e| e.id()).collect()
    }

    #[test]
    fn test_empty_predicate_set_returns_everything() {
        let d = data();
        let set = parse_predicates::<Player>([] as [(&str, &str); 0]).unwrap();
        assert_eq!(set, PredicateSet::default());
        assert_eq!(ids(&filter(&d.players, &set)), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_min_goals_and_position() {
        let d = data();
        let set = parse_predicates::<Player>([("min_goals", "10"), ("position", "FW")]).unwrap();
        let got = filter(&d.players, &set)
            .into_iter()
            .map(|p| p.id)
            .collect::<HashSet<_>>();
        assert_eq!(got, HashSet::from([1, 2]));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let d = data();
        let set =
            parse_predicates::<Player>([("min_goals", "9"), ("max_goals", "15")]).unwrap();
        assert_eq!(ids(&filter(&d.players, &set)), vec![1, 3, 4]);
    }

    #[test]
    fn test_text_predicates_are_case_insensitive() {
        let d = data();
        let set = parse_predicates::<Player>([("club", "LIVER")]).unwrap();
        assert_eq!(ids(&filter(&d.players, &set)), vec![2, 4, 5, 6]);
        let set = parse_predicates::<Player>([("name", "sal")]).unwrap();
        assert_eq!(ids(&filter(&d.players, &set)), vec![2]);

        let clubs = club_list(&d);
        let set = parse_predicates::<Club>([("location", "manchester")]).unwrap();
        assert_eq!(ids(&filter(&clubs, &set)), vec![1, 3]);
        // Players-only keys are ignored for clubs.
        let set = parse_predicates::<Club>([("position", "FW"), ("club", "x")]).unwrap();
        assert_eq!(ids(&filter(&clubs, &set)), vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_predicates::<Player>([("min_wins", "3")]),
            Err(QueryError::InvalidCategory("wins".to_owned()))
        );
        assert_eq!(
            parse_predicates::<Player>([("min_goals", "ten")]),
            Err(QueryError::InvalidFilterValue {
                key: "min_goals".to_owned(),
                value: "ten".to_owned()
            })
        );
        assert_eq!(
            parse_predicates::<Player>([("position", "striker")]),
            Err(QueryError::UnknownPosition("striker".to_owned()))
        );
        assert_eq!(
            parse_predicates::<Club>([("ordering", "-assists")]),
            Err(QueryError::InvalidCategory("assists".to_owned()))
        );
        // Blank values and unknown keys are ignored.
        assert_eq!(
            parse_predicates::<Player>([("min_goals", " "), ("page", "2")]),
            Ok(PredicateSet::default())
        );
    }

    #[test]
    fn test_select_orders() {
        let d = data();
        let set = PredicateSet::default();
        let got = select(&d.players, &set, Ordering::desc(PlayerField::Goals));
        assert_eq!(ids(&got), vec![2, 1, 3, 4, 5, 6]);

        let set = parse_predicates::<Player>([("ordering", "name")]).unwrap();
        let got = select(&d.players, &set, Ordering::desc(PlayerField::Goals));
        assert_eq!(ids(&got), vec![6, 3, 4, 1, 2, 5]);

        let set = parse_predicates::<Player>([("ordering", "stats__goals")]).unwrap();
        let got = select(&d.players, &set, Ordering::desc(PlayerField::Goals));
        assert_eq!(ids(&got), vec![6, 5, 4, 3, 1, 2]);

        let clubs = club_list(&d);
        let got = select(&clubs, &PredicateSet::default(), Ordering::desc(ClubField::Wins));
        assert_eq!(ids(&got), vec![1, 2, 3]);
    }

    #[test]
    fn test_search() {
        let d = data();
        let clubs = club_list(&d);
        let (players, found_clubs) = search(&d.players, &clubs, "manchester", 10).unwrap();
        // Players match through their club's name, clubs through name or location.
        assert_eq!(ids(&players), vec![3, 1]);
        assert_eq!(ids(&found_clubs), vec![3, 1]);

        let (players, found_clubs) = search(&d.players, &clubs, "liverpool", 2).unwrap();
        assert_eq!(ids(&players), vec![6, 4]);
        assert_eq!(ids(&found_clubs), vec![2]);

        assert_eq!(
            search(&d.players, &clubs, "  ", 10),
            Err(QueryError::EmptySearchQuery)
        );
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit(None, 10, 1000), Ok(10));
        assert_eq!(parse_limit(Some(" 3 "), 10, 1000), Ok(3));
        assert_eq!(parse_limit(Some("-2"), 10, 1000), Ok(-2));
        assert_eq!(parse_limit(Some("5000"), 10, 1000), Ok(1000));
        assert_eq!(
            parse_limit(Some("five"), 10, 1000),
            Err(QueryError::InvalidLimit("five".to_owned()))
        );
        assert_eq!(
            parse_limit(Some("2.5"), 10, 1000),
            Err(QueryError::InvalidLimit("2.5".to_owned()))
        );
    }
}
