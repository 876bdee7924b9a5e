use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::hole::{HoleRecord, HoleStore};
use super::round::RoundMeta;
use super::shot::{ShotInput, ShotRecord};
use super::types::PinPosition;

/// Scorecard entry pages nine holes at a time, like a paper card's front
/// and back nine.
pub const HOLES_PER_PAGE: u8 = 9;

/// Where the session sits in the entry flow. Derived from the owned data,
/// never stored separately, so it cannot drift.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum EntryPhase {
    /// No complete scorecard committed yet.
    Empty,
    /// Scorecard committed, no hole saved.
    HolesConfigured,
    /// Some holes saved, some not.
    InProgress,
    /// Every hole number is in the saved-set.
    AllSaved,
}

/// One editing session. Owns the round metadata, the scorecard, committed
/// and staged shot data, the saved-set, and the active-hole pointer.
/// Every mutation is an atomic transition: on error the session is
/// unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RoundSession {
    meta: Option<RoundMeta>,
    holes: HoleStore,
    shot_log: BTreeMap<u8, Vec<ShotRecord>>,
    staged: BTreeMap<u8, Vec<ShotInput>>,
    saved: BTreeSet<u8>,
    holes_configured: bool,
    active_hole: u8,
    hole_page: u8,
}

impl RoundSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ----- round metadata -----

    /// Overwrites the round metadata. A changed hole count resizes the
    /// scorecard and discards all shot data, since shot counts are keyed
    /// to per-hole scores; an unchanged count keeps everything.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the hole count is out of range
    pub fn set_round_meta(&mut self, meta: RoundMeta) -> Result<(), EngineError> {
        let changed = self.holes.set_hole_count(meta.hole_count)?;
        if changed {
            self.reset_shot_data();
            self.hole_page = 0;
        }
        self.meta = Some(meta);
        Ok(())
    }

    #[must_use]
    pub fn round_meta(&self) -> Option<&RoundMeta> {
        self.meta.as_ref()
    }

    // ----- scorecard -----

    /// # Errors
    ///
    /// Will return `Err` if any field fails its range check. No side
    /// effect on the shot log.
    pub fn set_hole(
        &mut self,
        hole_number: u8,
        par: u8,
        score: u8,
        yardage: u16,
        pin: PinPosition,
    ) -> Result<(), EngineError> {
        self.holes.set_hole(hole_number, par, score, yardage, pin)
    }

    #[must_use]
    pub fn hole_store(&self) -> &HoleStore {
        &self.holes
    }

    #[must_use]
    pub fn hole(&self, hole_number: u8) -> Option<&HoleRecord> {
        self.holes.hole(hole_number)
    }

    /// Commits the scorecard and opens shot entry. Destructive: clears the
    /// shot log and saved-set from any state.
    ///
    /// # Errors
    ///
    /// Will return `Err` with the missing hole numbers while any hole
    /// still lacks a field
    pub fn configure_holes(&mut self) -> Result<(), EngineError> {
        if !self.holes.is_complete() {
            return Err(EngineError::incomplete(self.missing_holes()));
        }
        self.reset_shot_data();
        self.holes_configured = true;
        self.active_hole = 1;
        Ok(())
    }

    // ----- shot entry -----

    /// Parks raw shot submissions for a hole without committing them.
    /// Validation happens on save; staging only checks the target exists.
    ///
    /// # Errors
    ///
    /// Will return `Err` if shot entry is not open or the hole is out of
    /// range
    pub fn stage_shots(
        &mut self,
        hole_number: u8,
        shots: Vec<ShotInput>,
    ) -> Result<(), EngineError> {
        self.ensure_shot_entry_open()?;
        self.expect_hole(hole_number)?;
        self.staged.insert(hole_number, shots);
        Ok(())
    }

    /// The single save path every caller goes through: explicit save,
    /// save-and-advance, and auto-save-on-navigate all end up here.
    ///
    /// Validates the staged list against the hole's score: shot numbers
    /// must run 1..k contiguously, more shots than the score is a stale
    /// score/shot mismatch and is rejected, fewer are padded with schema
    /// defaults. Each shot is normalized against its own `(lie, par)`, so
    /// out-of-schema fields are dropped, then the hole's committed list is
    /// replaced and the hole joins the saved-set.
    ///
    /// # Errors
    ///
    /// Will return `Err` if shot entry is not open, the hole is out of
    /// range, or the staged shots mismatch the hole's score; the session
    /// is unchanged on error
    pub fn save_hole(&mut self, hole_number: u8, shots: &[ShotInput]) -> Result<(), EngineError> {
        self.ensure_shot_entry_open()?;
        let record = *self.expect_hole(hole_number)?;
        let par = record.par.unwrap_or_default();
        let score = record.score.unwrap_or_default();

        if shots.len() > usize::from(score) {
            return Err(EngineError::validation(
                "shots",
                format!(
                    "{} shots staged but hole {hole_number} has a score of {score}; resubmit after fixing the scorecard",
                    shots.len()
                ),
            ));
        }
        for (idx, shot) in shots.iter().enumerate() {
            let expected = idx as u8 + 1;
            if shot.shot_number != expected {
                return Err(EngineError::validation(
                    "shots",
                    format!(
                        "shot numbers must be sequential from 1; found {} at position {expected}",
                        shot.shot_number
                    ),
                ));
            }
        }

        let mut committed: Vec<ShotRecord> =
            shots.iter().map(|s| ShotRecord::normalize(s, par)).collect();
        for shot_number in shots.len() as u8 + 1..=score {
            committed.push(ShotRecord::normalize(
                &ShotInput::blank(shot_number, None),
                par,
            ));
        }

        self.shot_log.insert(hole_number, committed);
        self.saved.insert(hole_number);
        self.staged.remove(&hole_number);
        Ok(())
    }

    /// Navigation with auto-save: whatever is staged for the currently
    /// active hole is committed through `save_hole` before the pointer
    /// moves. A failed auto-save blocks the navigation. First visits with
    /// nothing staged move without saving.
    ///
    /// # Errors
    ///
    /// Will return `Err` if shot entry is not open, the target is out of
    /// range, or the auto-save is rejected
    pub fn select_hole(&mut self, hole_number: u8) -> Result<(), EngineError> {
        self.ensure_shot_entry_open()?;
        self.expect_hole(hole_number)?;
        if let Some(staged) = self.staged.get(&self.active_hole).cloned() {
            self.save_hole(self.active_hole, &staged)?;
        }
        self.active_hole = hole_number;
        Ok(())
    }

    /// Explicit "save shots" action: commits what is staged for the active
    /// hole (nothing staged saves a full set of schema defaults) and
    /// advances to the next hole when one exists.
    ///
    /// # Errors
    ///
    /// Will return `Err` if shot entry is not open or the staged shots are
    /// rejected
    pub fn save_active_and_advance(&mut self) -> Result<u8, EngineError> {
        self.ensure_shot_entry_open()?;
        let hole_number = self.active_hole;
        let staged = self.staged.get(&hole_number).cloned().unwrap_or_default();
        self.save_hole(hole_number, &staged)?;
        if hole_number < self.holes.hole_count() {
            self.active_hole = hole_number + 1;
        }
        Ok(self.active_hole)
    }

    // ----- reads -----

    #[must_use]
    pub fn phase(&self) -> EntryPhase {
        if !self.holes_configured {
            EntryPhase::Empty
        } else if self.saved.is_empty() {
            EntryPhase::HolesConfigured
        } else if self.saved.len() < usize::from(self.holes.hole_count()) {
            EntryPhase::InProgress
        } else {
            EntryPhase::AllSaved
        }
    }

    #[must_use]
    pub fn shot_entry_open(&self) -> bool {
        self.holes_configured
    }

    #[must_use]
    pub fn active_hole(&self) -> u8 {
        self.active_hole
    }

    #[must_use]
    pub fn is_saved(&self, hole_number: u8) -> bool {
        self.saved.contains(&hole_number)
    }

    #[must_use]
    pub fn saved_holes(&self) -> Vec<u8> {
        self.saved.iter().copied().collect()
    }

    #[must_use]
    pub fn unsaved_holes(&self) -> Vec<u8> {
        (1..=self.holes.hole_count())
            .filter(|h| !self.saved.contains(h))
            .collect()
    }

    #[must_use]
    pub fn shots(&self, hole_number: u8) -> Option<&[ShotRecord]> {
        self.shot_log.get(&hole_number).map(Vec::as_slice)
    }

    /// What the shot form for a hole should display: staged edits first,
    /// then the committed save, then blanks (shot 1 defaulting its pin
    /// distance to the hole yardage), always exactly `score` entries.
    #[must_use]
    pub fn form_inputs(&self, hole_number: u8) -> Vec<ShotInput> {
        let record = self.holes.hole(hole_number);
        let score = record.and_then(|r| r.score).unwrap_or_default();
        let yardage = record.and_then(|r| r.yardage);

        let mut inputs: Vec<ShotInput> = match self.staged.get(&hole_number) {
            Some(staged) => staged.clone(),
            None => self
                .shot_log
                .get(&hole_number)
                .map(|shots| shots.iter().map(ShotRecord::to_input).collect())
                .unwrap_or_default(),
        };
        inputs.truncate(usize::from(score));
        for shot_number in inputs.len() as u8 + 1..=score {
            inputs.push(ShotInput::blank(shot_number, yardage));
        }
        inputs
    }

    // ----- pagination -----

    #[must_use]
    pub fn hole_page(&self) -> u8 {
        self.hole_page
    }

    #[must_use]
    pub fn total_pages(&self) -> u8 {
        let count = self.holes.hole_count();
        if count == 0 {
            1
        } else {
            (count - 1) / HOLES_PER_PAGE + 1
        }
    }

    /// Hole numbers on the current scorecard page.
    #[must_use]
    pub fn page_holes(&self) -> std::ops::RangeInclusive<u8> {
        let start = self.hole_page * HOLES_PER_PAGE + 1;
        let end = (start + HOLES_PER_PAGE - 1).min(self.holes.hole_count().max(start));
        start..=end
    }

    pub fn next_page(&mut self) {
        if self.hole_page + 1 < self.total_pages() {
            self.hole_page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.hole_page = self.hole_page.saturating_sub(1);
    }

    // ----- snapshot -----

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase(),
            active_hole: self.active_hole,
            hole_count: self.holes.hole_count(),
            saved_holes: self.saved_holes(),
            unsaved_holes: self.unsaved_holes(),
            holes: self
                .holes
                .holes()
                .iter()
                .map(|h| HoleSnapshot {
                    hole_number: h.hole_number,
                    par: h.par,
                    score: h.score,
                    yardage: h.yardage,
                    pin: h.pin,
                    complete: h.is_complete(),
                    saved: self.saved.contains(&h.hole_number),
                })
                .collect(),
            round: self.meta.clone(),
        }
    }

    // ----- internals -----

    fn reset_shot_data(&mut self) {
        self.shot_log.clear();
        self.staged.clear();
        self.saved.clear();
        self.holes_configured = false;
        self.active_hole = 1;
    }

    fn ensure_shot_entry_open(&self) -> Result<(), EngineError> {
        if self.holes_configured {
            Ok(())
        } else {
            Err(EngineError::incomplete(self.missing_holes()))
        }
    }

    fn expect_hole(&self, hole_number: u8) -> Result<&HoleRecord, EngineError> {
        self.holes.hole(hole_number).ok_or_else(|| {
            EngineError::validation(
                "hole",
                format!(
                    "hole {hole_number} is outside the configured {} holes",
                    self.holes.hole_count()
                ),
            )
        })
    }

    fn missing_holes(&self) -> Vec<u8> {
        if self.holes.hole_count() == 0 {
            self.meta
                .as_ref()
                .map(|m| (1..=m.hole_count).collect())
                .unwrap_or_default()
        } else {
            self.holes.incomplete_holes()
        }
    }
}

/// Read-only view of the session for the UI collaborator and the `/state`
/// endpoint.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SessionSnapshot {
    pub phase: EntryPhase,
    pub active_hole: u8,
    pub hole_count: u8,
    pub saved_holes: Vec<u8>,
    pub unsaved_holes: Vec<u8>,
    pub holes: Vec<HoleSnapshot>,
    pub round: Option<RoundMeta>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HoleSnapshot {
    pub hole_number: u8,
    pub par: Option<u8>,
    pub score: Option<u8>,
    pub yardage: Option<u16>,
    pub pin: Option<PinPosition>,
    pub complete: bool,
    pub saved: bool,
}
