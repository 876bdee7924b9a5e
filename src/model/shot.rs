use serde::{Deserialize, Serialize};

use super::types::{Lie, MissDirection, PuttBreak, TriState};

pub const MAX_PIN_DISTANCE: u32 = 1000;

/// Which conditional field set applies to a shot, selected by
/// `(lie, par of its hole)`.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShotSchema {
    /// Tee shot on a par 3: pin-high + on-line.
    TeePar3,
    /// Tee shot on a par 4/5: foul ball.
    TeeDrive,
    /// On the green: putt break.
    GreenPutt,
    /// Everything else (fairway, rough, sand, other, unset): pin-high +
    /// on-line.
    Approach,
}

impl ShotSchema {
    #[must_use]
    pub fn has_aim_fields(&self) -> bool {
        matches!(self, ShotSchema::TeePar3 | ShotSchema::Approach)
    }

    #[must_use]
    pub fn has_foul_ball(&self) -> bool {
        matches!(self, ShotSchema::TeeDrive)
    }

    #[must_use]
    pub fn has_putt_break(&self) -> bool {
        matches!(self, ShotSchema::GreenPutt)
    }
}

/// Pure and total over every lie value; every `(lie, par)` pair maps to
/// exactly one field set. Unrecognized lies are rejected at input
/// validation, never here.
#[must_use]
pub fn resolve_shot_schema(lie: Lie, par: u8) -> ShotSchema {
    match lie {
        Lie::Tee if par == 3 => ShotSchema::TeePar3,
        Lie::Tee => ShotSchema::TeeDrive,
        Lie::Green => ShotSchema::GreenPutt,
        Lie::Fairway | Lie::Rough | Lie::Sand | Lie::Other | Lie::Unset => ShotSchema::Approach,
    }
}

/// Conditional fields actually stored on a shot; exactly the set its
/// schema dictates, so a lie change can never leak stale fields into the
/// export.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShotExtras {
    Aim { pin_high: TriState, on_line: TriState },
    Tee { foul_ball: bool },
    Putt { putt_break: PuttBreak },
}

/// Raw per-shot submission from the UI collaborator: the full superset of
/// fields, already parsed into domain types. Normalization picks the
/// subset the shot's own schema allows.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ShotInput {
    pub shot_number: u8,
    pub club: String,
    pub lie: Lie,
    pub pin_distance: Option<u32>,
    pub miss_direction: MissDirection,
    pub pin_high: TriState,
    pub on_line: TriState,
    pub putt_break: Option<PuttBreak>,
    pub foul_ball: Option<bool>,
}

impl ShotInput {
    /// Blank entry for a shot nothing has been staged for. Shot 1 defaults
    /// its pin distance to the hole yardage, later shots to unset.
    #[must_use]
    pub fn blank(shot_number: u8, first_shot_yardage: Option<u16>) -> Self {
        let pin_distance = if shot_number == 1 {
            first_shot_yardage.map(u32::from)
        } else {
            None
        };
        ShotInput {
            shot_number,
            club: String::new(),
            lie: Lie::Unset,
            pin_distance,
            miss_direction: MissDirection::None,
            pin_high: TriState::Unset,
            on_line: TriState::Unset,
            putt_break: None,
            foul_ball: None,
        }
    }
}

/// A committed shot. Belongs to exactly one (hole, shot-number) pair.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ShotRecord {
    pub shot_number: u8,
    pub club: String,
    pub lie: Lie,
    pub pin_distance: Option<u32>,
    pub miss_direction: MissDirection,
    pub extras: ShotExtras,
}

impl ShotRecord {
    /// Normalizes a raw submission against the schema for its own
    /// `(lie, par)`: fields outside the resolved set are dropped, absent
    /// in-schema fields take their defaults.
    #[must_use]
    pub fn normalize(input: &ShotInput, par: u8) -> Self {
        let schema = resolve_shot_schema(input.lie, par);
        let extras = match schema {
            ShotSchema::TeePar3 | ShotSchema::Approach => ShotExtras::Aim {
                pin_high: input.pin_high,
                on_line: input.on_line,
            },
            ShotSchema::TeeDrive => ShotExtras::Tee {
                foul_ball: input.foul_ball.unwrap_or(false),
            },
            ShotSchema::GreenPutt => ShotExtras::Putt {
                putt_break: input.putt_break.unwrap_or_default(),
            },
        };
        ShotRecord {
            shot_number: input.shot_number,
            club: input.club.clone(),
            lie: input.lie,
            pin_distance: input.pin_distance,
            miss_direction: input.miss_direction,
            extras,
        }
    }

    #[must_use]
    pub fn pin_high(&self) -> Option<TriState> {
        match self.extras {
            ShotExtras::Aim { pin_high, .. } => Some(pin_high),
            _ => None,
        }
    }

    #[must_use]
    pub fn on_line(&self) -> Option<TriState> {
        match self.extras {
            ShotExtras::Aim { on_line, .. } => Some(on_line),
            _ => None,
        }
    }

    #[must_use]
    pub fn foul_ball(&self) -> Option<bool> {
        match self.extras {
            ShotExtras::Tee { foul_ball } => Some(foul_ball),
            _ => None,
        }
    }

    #[must_use]
    pub fn putt_break(&self) -> Option<PuttBreak> {
        match self.extras {
            ShotExtras::Putt { putt_break } => Some(putt_break),
            _ => None,
        }
    }

    /// Back to form-superset shape, for redisplaying a saved hole.
    #[must_use]
    pub fn to_input(&self) -> ShotInput {
        ShotInput {
            shot_number: self.shot_number,
            club: self.club.clone(),
            lie: self.lie,
            pin_distance: self.pin_distance,
            miss_direction: self.miss_direction,
            pin_high: self.pin_high().unwrap_or_default(),
            on_line: self.on_line().unwrap_or_default(),
            putt_break: self.putt_break(),
            foul_ball: self.foul_ball(),
        }
    }
}
