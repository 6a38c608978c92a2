pub mod prelude;

pub mod club_stats;
pub mod clubs;
pub mod player_stats;
pub mod players;
