use chrono::NaiveDate;

use stroke_trail::model::{
    Lie, MissDirection, PinPosition, PlayerName, PuttBreak, RoundMeta, RoundSession, RoundType,
    ShotInput, TriState,
};

pub fn sample_meta(hole_count: u8) -> RoundMeta {
    RoundMeta::new(
        PlayerName::new("Jordan Baker").expect("valid player name"),
        NaiveDate::from_ymd_opt(2025, 6, 14).expect("valid date"),
        "Club Championship".to_string(),
        2,
        RoundType::Competitive,
        hole_count,
    )
    .expect("valid round meta")
}

/// Three holes, pars [4, 3, 5], scores [5, 4, 6], scorecard committed.
pub fn three_hole_session() -> RoundSession {
    let mut session = RoundSession::new();
    session
        .set_round_meta(sample_meta(3))
        .expect("meta accepted");
    session
        .set_hole(1, 4, 5, 420, PinPosition::Center)
        .expect("hole 1 accepted");
    session
        .set_hole(2, 3, 4, 170, PinPosition::FrontLeft)
        .expect("hole 2 accepted");
    session
        .set_hole(3, 5, 6, 540, PinPosition::BackRight)
        .expect("hole 3 accepted");
    session.configure_holes().expect("scorecard complete");
    session
}

/// A shot with nothing but its number, lie, and club filled in.
pub fn shot(shot_number: u8, lie: Lie, club: &str) -> ShotInput {
    ShotInput {
        shot_number,
        club: club.to_string(),
        lie,
        pin_distance: None,
        miss_direction: MissDirection::None,
        pin_high: TriState::Unset,
        on_line: TriState::Unset,
        putt_break: None,
        foul_ball: None,
    }
}

/// Five realistic shots for a par-4 scored 5: drive, approach, chip, two
/// putts.
pub fn par4_five_shots() -> Vec<ShotInput> {
    vec![
        ShotInput {
            pin_distance: Some(420),
            foul_ball: Some(false),
            ..shot(1, Lie::Tee, "Driver")
        },
        ShotInput {
            pin_distance: Some(160),
            miss_direction: MissDirection::Right,
            pin_high: TriState::Yes,
            on_line: TriState::No,
            ..shot(2, Lie::Fairway, "7i")
        },
        ShotInput {
            pin_distance: Some(25),
            pin_high: TriState::No,
            on_line: TriState::Yes,
            ..shot(3, Lie::Rough, "PW")
        },
        ShotInput {
            pin_distance: Some(6),
            putt_break: Some(PuttBreak::UphillL2R),
            ..shot(4, Lie::Green, "Putter")
        },
        ShotInput {
            pin_distance: Some(1),
            putt_break: Some(PuttBreak::TapIn),
            ..shot(5, Lie::Green, "Putter")
        },
    ]
}
