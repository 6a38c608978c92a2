pub mod prelude;

pub mod edit_club;
pub mod edit_player;
pub mod get_clubs;
pub mod get_dashboard;
pub mod get_index;
pub mod get_players;
pub mod get_search;
pub mod post_create_club;
pub mod post_create_player;
