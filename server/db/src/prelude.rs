pub use super::club_stats::Entity as ClubStats;
pub use super::clubs::Entity as Clubs;
pub use super::player_stats::Entity as PlayerStats;
pub use super::players::Entity as Players;
