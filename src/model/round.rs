use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::types::RoundType;

pub const MIN_ROUND_NUMBER: u8 = 1;
pub const MAX_ROUND_NUMBER: u8 = 4;
pub const MIN_HOLE_COUNT: u8 = 1;
pub const MAX_HOLE_COUNT: u8 = 18;

/// Player name as it appears on the export: printable, non-empty, at most
/// 60 characters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlayerName(String);

impl PlayerName {
    /// # Panics
    ///
    /// Will panic if the regex is invalid
    #[must_use]
    pub fn new(input: &str) -> Option<Self> {
        use std::sync::OnceLock;
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| {
            Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 .,'\-]{0,59}$")
                .expect("Invalid regex pattern - this is a programming error")
        });

        if re.is_match(input) {
            Some(PlayerName(input.trim_end().to_string()))
        } else {
            None
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// # Errors
    ///
    /// Will return `Err` if the input is empty, too long, or carries
    /// characters outside the printable name set
    pub fn parse(input: &str) -> Result<Self, EngineError> {
        Self::new(input).ok_or_else(|| {
            EngineError::validation("player", "player name must be 1-60 printable characters")
        })
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Round-level metadata, immutable once submitted; a later submission
/// replaces the whole value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RoundMeta {
    pub player: PlayerName,
    pub date: NaiveDate,
    pub tournament: String,
    pub round_number: u8,
    pub round_type: RoundType,
    pub hole_count: u8,
}

impl RoundMeta {
    /// # Errors
    ///
    /// Will return `Err` if the round number or hole count is out of range
    pub fn new(
        player: PlayerName,
        date: NaiveDate,
        tournament: String,
        round_number: u8,
        round_type: RoundType,
        hole_count: u8,
    ) -> Result<Self, EngineError> {
        if !(MIN_ROUND_NUMBER..=MAX_ROUND_NUMBER).contains(&round_number) {
            return Err(EngineError::validation(
                "round",
                format!("round number must be {MIN_ROUND_NUMBER}-{MAX_ROUND_NUMBER}"),
            ));
        }
        if !(MIN_HOLE_COUNT..=MAX_HOLE_COUNT).contains(&hole_count) {
            return Err(EngineError::validation(
                "holes",
                format!("hole count must be {MIN_HOLE_COUNT}-{MAX_HOLE_COUNT}"),
            ));
        }
        Ok(RoundMeta {
            player,
            date,
            tournament,
            round_number,
            round_type,
            hole_count,
        })
    }
}
