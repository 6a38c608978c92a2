//! Read-side views: dashboards, rankings, listings and search, built from a
//! snapshot of players and clubs.

use stattrackr_api::views::{
    ClubLeaders, ClubView, Dashboard, PlayerLeaders, PlayerView, SearchResults,
};

use crate::config::ReportingConfig;
use crate::entity::{Club, Player};
use crate::fields::{ClubField, PlayerField, CLUB_CATEGORIES, PLAYER_CATEGORIES};
use crate::query::{self, Ordering, QueryError};
use crate::ranking::top_n;

pub const DEFAULT_PLAYER_CATEGORY: &str = "goals";
pub const DEFAULT_CLUB_CATEGORY: &str = "wins";

pub fn club_view(club: &Club) -> ClubView {
    ClubView {
        id: club.id,
        name: club.name.clone(),
        location: club.location.clone(),
        stats: club.stats.record().clone(),
        win_percentage: club.win_percentage(),
        goals_per_game: club.goals_per_game(),
        created_at: club.created_at,
        updated_at: club.updated_at,
    }
}

pub fn player_view(player: &Player) -> PlayerView {
    PlayerView {
        id: player.id,
        name: player.name.clone(),
        club: club_view(&player.club),
        position: player.position(),
        stats: player.stats.record().clone(),
        goal_contributions: player.goal_contributions(),
        shots_accuracy: player.shots_accuracy(),
        created_at: player.created_at,
        updated_at: player.updated_at,
    }
}

fn player_views<'a>(players: impl IntoIterator<Item = &'a Player>) -> Vec<PlayerView> {
    players.into_iter().map(player_view).collect()
}

fn club_views<'a>(clubs: impl IntoIterator<Item = &'a Club>) -> Vec<ClubView> {
    clubs.into_iter().map(club_view).collect()
}

pub fn dashboard(players: &[Player], clubs: &[Club], size: usize) -> Dashboard {
    let size = i64::try_from(size).unwrap_or(i64::MAX);
    Dashboard {
        player_stats: PlayerLeaders {
            top_scorers: player_views(top_n(players, PlayerField::Goals, size)),
            top_assisters: player_views(top_n(players, PlayerField::Assists, size)),
            top_passers: player_views(top_n(players, PlayerField::Passes, size)),
            top_shooters: player_views(top_n(players, PlayerField::Shots, size)),
        },
        club_stats: ClubLeaders {
            top_scoring_clubs: club_views(top_n(clubs, ClubField::Goals, size)),
            top_winning_clubs: club_views(top_n(clubs, ClubField::Wins, size)),
            most_tackles_clubs: club_views(top_n(clubs, ClubField::Tackles, size)),
        },
    }
}

fn category_or<'a>(category: Option<&'a str>, default: &'a str) -> &'a str {
    match category.map(str::trim) {
        None | Some("") => default,
        Some(c) => c,
    }
}

fn max_limit(cfg: &ReportingConfig) -> i64 {
    i64::try_from(cfg.max_page_size).unwrap_or(i64::MAX)
}

pub fn top_players(
    players: &[Player],
    category: Option<&str>,
    limit: Option<&str>,
    cfg: &ReportingConfig,
) -> Result<Vec<PlayerView>, QueryError> {
    let category = category_or(category, DEFAULT_PLAYER_CATEGORY);
    let field = PLAYER_CATEGORIES
        .resolve(category)
        .ok_or_else(|| QueryError::InvalidCategory(category.to_owned()))?;
    let limit = query::parse_limit(limit, cfg.default_top_limit, max_limit(cfg))?;
    Ok(player_views(top_n(players, field, limit)))
}

pub fn top_clubs(
    clubs: &[Club],
    category: Option<&str>,
    limit: Option<&str>,
    cfg: &ReportingConfig,
) -> Result<Vec<ClubView>, QueryError> {
    let category = category_or(category, DEFAULT_CLUB_CATEGORY);
    let field = CLUB_CATEGORIES
        .resolve(category)
        .ok_or_else(|| QueryError::InvalidCategory(category.to_owned()))?;
    let limit = query::parse_limit(limit, cfg.default_top_limit, max_limit(cfg))?;
    Ok(club_views(top_n(clubs, field, limit)))
}

pub fn list_players<'p>(
    players: &[Player],
    params: impl IntoIterator<Item = (&'p str, &'p str)>,
    cfg: &ReportingConfig,
) -> Result<Vec<PlayerView>, QueryError> {
    let set = query::parse_predicates::<Player>(params)?;
    let selected = query::select(players, &set, Ordering::desc(PlayerField::Goals));
    Ok(player_views(selected.into_iter().take(cfg.max_page_size)))
}

pub fn list_clubs<'p>(
    clubs: &[Club],
    params: impl IntoIterator<Item = (&'p str, &'p str)>,
    cfg: &ReportingConfig,
) -> Result<Vec<ClubView>, QueryError> {
    let set = query::parse_predicates::<Club>(params)?;
    let selected = query::select(clubs, &set, Ordering::desc(ClubField::Wins));
    Ok(club_views(selected.into_iter().take(cfg.max_page_size)))
}

pub fn search(
    players: &[Player],
    clubs: &[Club],
    q: Option<&str>,
    cfg: &ReportingConfig,
) -> Result<SearchResults, QueryError> {
    let (players, clubs) = query::search(players, clubs, q.unwrap_or(""), cfg.search_cap)?;
    Ok(SearchResults {
        players: player_views(players),
        clubs: club_views(clubs),
    })
}
