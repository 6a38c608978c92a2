//! Wire types shared between the StatTrackr server and its tools.
//!
//! Field names here are the canonical stat vocabulary: `goals`, `assists`,
//! `shots_on_target` and so on. Storage and transport map onto them.

pub mod records;
pub mod seed;
pub mod views;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DF")]
    Defender,
    #[serde(rename = "MF")]
    Midfielder,
    #[serde(rename = "FW")]
    Forward,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DF",
            Position::Midfielder => "MF",
            Position::Forward => "FW",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
        }
    }

    /// Accepts the two-letter code or the full name, case-insensitively.
    pub fn parse(s: &str) -> Option<Position> {
        let s = s.trim();
        Position::ALL
            .into_iter()
            .find(|p| p.code().eq_ignore_ascii_case(s) || p.display_name().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
