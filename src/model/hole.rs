use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::round::{MAX_HOLE_COUNT, MIN_HOLE_COUNT};
use super::types::PinPosition;

pub const MIN_PAR: u8 = 3;
pub const MAX_PAR: u8 = 5;
pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;
pub const MIN_YARDAGE: u16 = 50;
pub const MAX_YARDAGE: u16 = 800;

/// One scorecard row. Fields stay `None` until the hole has been entered;
/// a freshly padded hole carries nothing but its number.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoleRecord {
    pub hole_number: u8,
    pub par: Option<u8>,
    pub score: Option<u8>,
    pub yardage: Option<u16>,
    pub pin: Option<PinPosition>,
}

impl HoleRecord {
    #[must_use]
    pub fn unset(hole_number: u8) -> Self {
        HoleRecord {
            hole_number,
            par: None,
            score: None,
            yardage: None,
            pin: None,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.par.is_some() && self.score.is_some() && self.yardage.is_some() && self.pin.is_some()
    }
}

/// The scorecard: one record per hole 1..N, contiguous. Source of truth
/// for how many shots each hole needs.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct HoleStore {
    holes: Vec<HoleRecord>,
}

impl HoleStore {
    #[must_use]
    pub fn new() -> Self {
        HoleStore { holes: Vec::new() }
    }

    /// Resizes the scorecard, padding new holes unset and truncating
    /// extras. Returns whether the count actually changed, so the session
    /// knows to discard shot data keyed to the old scores.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `n` is outside 1-18
    pub fn set_hole_count(&mut self, n: u8) -> Result<bool, EngineError> {
        if !(MIN_HOLE_COUNT..=MAX_HOLE_COUNT).contains(&n) {
            return Err(EngineError::validation(
                "holes",
                format!("hole count must be {MIN_HOLE_COUNT}-{MAX_HOLE_COUNT}"),
            ));
        }
        let n = usize::from(n);
        if n == self.holes.len() {
            return Ok(false);
        }
        if n < self.holes.len() {
            self.holes.truncate(n);
        } else {
            for hole_number in self.holes.len() + 1..=n {
                self.holes.push(HoleRecord::unset(hole_number as u8));
            }
        }
        Ok(true)
    }

    #[must_use]
    pub fn hole_count(&self) -> u8 {
        self.holes.len() as u8
    }

    /// # Errors
    ///
    /// Will return `Err` if the hole number is out of range or any field
    /// fails its range check; the store is left unchanged on error
    pub fn set_hole(
        &mut self,
        hole_number: u8,
        par: u8,
        score: u8,
        yardage: u16,
        pin: PinPosition,
    ) -> Result<(), EngineError> {
        let idx = self.index_of(hole_number)?;
        if !(MIN_PAR..=MAX_PAR).contains(&par) {
            return Err(EngineError::validation(
                format!("par_{hole_number}"),
                format!("par must be {MIN_PAR}-{MAX_PAR}"),
            ));
        }
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(EngineError::validation(
                format!("score_{hole_number}"),
                format!("score must be {MIN_SCORE}-{MAX_SCORE}"),
            ));
        }
        if !(MIN_YARDAGE..=MAX_YARDAGE).contains(&yardage) {
            return Err(EngineError::validation(
                format!("yardage_{hole_number}"),
                format!("yardage must be {MIN_YARDAGE}-{MAX_YARDAGE}"),
            ));
        }
        self.holes[idx] = HoleRecord {
            hole_number,
            par: Some(par),
            score: Some(score),
            yardage: Some(yardage),
            pin: Some(pin),
        };
        Ok(())
    }

    #[must_use]
    pub fn hole(&self, hole_number: u8) -> Option<&HoleRecord> {
        self.holes.get(usize::from(hole_number.checked_sub(1)?))
    }

    #[must_use]
    pub fn holes(&self) -> &[HoleRecord] {
        &self.holes
    }

    /// True iff every hole in range has all five fields set.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.holes.is_empty() && self.holes.iter().all(HoleRecord::is_complete)
    }

    /// Hole numbers still missing at least one field.
    #[must_use]
    pub fn incomplete_holes(&self) -> Vec<u8> {
        self.holes
            .iter()
            .filter(|h| !h.is_complete())
            .map(|h| h.hole_number)
            .collect()
    }

    #[must_use]
    pub fn total_par(&self) -> u16 {
        self.holes.iter().filter_map(|h| h.par).map(u16::from).sum()
    }

    #[must_use]
    pub fn total_score(&self) -> u16 {
        self.holes
            .iter()
            .filter_map(|h| h.score)
            .map(u16::from)
            .sum()
    }

    fn index_of(&self, hole_number: u8) -> Result<usize, EngineError> {
        let count = self.holes.len();
        match hole_number {
            0 => Err(EngineError::validation("hole", "hole numbers start at 1")),
            n if usize::from(n) > count => Err(EngineError::validation(
                "hole",
                format!("hole {n} is outside the configured {count} holes"),
            )),
            n => Ok(usize::from(n) - 1),
        }
    }
}
