use serde::{Deserialize, Serialize};

/// Terrain a shot is played from. `Unset` is the explicit "not entered"
/// variant, distinct from every real lie.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Lie {
    Tee,
    Fairway,
    Rough,
    Sand,
    Green,
    Other,
    #[default]
    Unset,
}

impl Lie {
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "Tee" => Some(Lie::Tee),
            "Fairway" => Some(Lie::Fairway),
            "Rough" => Some(Lie::Rough),
            "Sand" => Some(Lie::Sand),
            "Green" => Some(Lie::Green),
            "Other" => Some(Lie::Other),
            "" => Some(Lie::Unset),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Lie::Tee => "Tee",
            Lie::Fairway => "Fairway",
            Lie::Rough => "Rough",
            Lie::Sand => "Sand",
            Lie::Green => "Green",
            Lie::Other => "Other",
            Lie::Unset => "",
        }
    }

    /// Every selectable value, in form display order.
    pub const ALL: [Lie; 7] = [
        Lie::Tee,
        Lie::Fairway,
        Lie::Rough,
        Lie::Sand,
        Lie::Green,
        Lie::Other,
        Lie::Unset,
    ];
}

impl std::fmt::Display for Lie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Flag position on the green, stored as the scorecard's short codes.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PinPosition {
    #[default]
    Center,
    FrontLeft,
    FrontRight,
    BackLeft,
    BackRight,
}

impl PinPosition {
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "C" => Some(PinPosition::Center),
            "FL" => Some(PinPosition::FrontLeft),
            "FR" => Some(PinPosition::FrontRight),
            "BL" => Some(PinPosition::BackLeft),
            "BR" => Some(PinPosition::BackRight),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PinPosition::Center => "C",
            PinPosition::FrontLeft => "FL",
            PinPosition::FrontRight => "FR",
            PinPosition::BackLeft => "BL",
            PinPosition::BackRight => "BR",
        }
    }

    pub const ALL: [PinPosition; 5] = [
        PinPosition::Center,
        PinPosition::FrontLeft,
        PinPosition::FrontRight,
        PinPosition::BackLeft,
        PinPosition::BackRight,
    ];
}

impl std::fmt::Display for PinPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Qualitative direction a shot missed its target. `None` means the shot
/// did not miss (or nothing was entered) and displays as empty.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MissDirection {
    #[default]
    None,
    Left,
    Right,
    Short,
    Long,
}

impl MissDirection {
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "" => Some(MissDirection::None),
            "Left" => Some(MissDirection::Left),
            "Right" => Some(MissDirection::Right),
            "Short" => Some(MissDirection::Short),
            "Long" => Some(MissDirection::Long),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MissDirection::None => "",
            MissDirection::Left => "Left",
            MissDirection::Right => "Right",
            MissDirection::Short => "Short",
            MissDirection::Long => "Long",
        }
    }

    pub const ALL: [MissDirection; 5] = [
        MissDirection::None,
        MissDirection::Left,
        MissDirection::Right,
        MissDirection::Short,
        MissDirection::Long,
    ];
}

impl std::fmt::Display for MissDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Break read on a putt.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PuttBreak {
    #[default]
    Straight,
    UphillL2R,
    UphillR2L,
    DownhillL2R,
    DownhillR2L,
    TapIn,
}

impl PuttBreak {
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "Straight" => Some(PuttBreak::Straight),
            "Uphill-L2R" => Some(PuttBreak::UphillL2R),
            "Uphill-R2L" => Some(PuttBreak::UphillR2L),
            "Downhill-L2R" => Some(PuttBreak::DownhillL2R),
            "Downhill-R2L" => Some(PuttBreak::DownhillR2L),
            "Tap-In" => Some(PuttBreak::TapIn),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PuttBreak::Straight => "Straight",
            PuttBreak::UphillL2R => "Uphill-L2R",
            PuttBreak::UphillR2L => "Uphill-R2L",
            PuttBreak::DownhillL2R => "Downhill-L2R",
            PuttBreak::DownhillR2L => "Downhill-R2L",
            PuttBreak::TapIn => "Tap-In",
        }
    }

    pub const ALL: [PuttBreak; 6] = [
        PuttBreak::Straight,
        PuttBreak::UphillL2R,
        PuttBreak::UphillR2L,
        PuttBreak::DownhillL2R,
        PuttBreak::DownhillR2L,
        PuttBreak::TapIn,
    ];
}

impl std::fmt::Display for PuttBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Yes/no answer where "not entered" is a real state, displayed as
/// 1 / 0 / empty like the original entry sheet.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TriState {
    Yes,
    No,
    #[default]
    Unset,
}

impl TriState {
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(TriState::Yes),
            "0" => Some(TriState::No),
            "" => Some(TriState::Unset),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TriState::Yes => "1",
            TriState::No => "0",
            TriState::Unset => "",
        }
    }

    pub const ALL: [TriState; 3] = [TriState::Unset, TriState::Yes, TriState::No];
}

impl std::fmt::Display for TriState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RoundType {
    #[default]
    Competitive,
    Practice,
}

impl RoundType {
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "Competitive" => Some(RoundType::Competitive),
            "Practice" => Some(RoundType::Practice),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundType::Competitive => "Competitive",
            RoundType::Practice => "Practice",
        }
    }

    pub const ALL: [RoundType; 2] = [RoundType::Competitive, RoundType::Practice];
}

impl std::fmt::Display for RoundType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scorecard marker shape for a hole score relative to par.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScoreShape {
    EagleOrBetter,
    Birdie,
    Par,
    Bogey,
    DoubleBogeyOrWorse,
}

impl ScoreShape {
    #[must_use]
    pub fn from_diff(diff: i32) -> Self {
        match diff {
            d if d <= -2 => ScoreShape::EagleOrBetter,
            -1 => ScoreShape::Birdie,
            0 => ScoreShape::Par,
            1 => ScoreShape::Bogey,
            _ => ScoreShape::DoubleBogeyOrWorse,
        }
    }

    /// CSS class used by the scorecard views.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreShape::EagleOrBetter => "score-eagle",
            ScoreShape::Birdie => "score-birdie",
            ScoreShape::Par => "score-par",
            ScoreShape::Bogey => "score-bogey",
            ScoreShape::DoubleBogeyOrWorse => "score-double-bogey",
        }
    }
}

impl From<i32> for ScoreShape {
    fn from(value: i32) -> Self {
        Self::from_diff(value)
    }
}

/// "E", "+n" or "-n" label for a total relative to par.
#[must_use]
pub fn relative_to_par_label(diff: i32) -> String {
    match diff {
        0 => "E".to_string(),
        d if d > 0 => format!("+{d}"),
        d => format!("{d}"),
    }
}
