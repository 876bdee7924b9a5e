use stroke_trail::model::{
    Lie, PuttBreak, ShotExtras, ShotInput, ShotRecord, ShotSchema, TriState, resolve_shot_schema,
};

mod common;
use common::shot;

#[test]
fn test1_resolver_covers_every_lie_par_pair() {
    for par in 3..=5u8 {
        for lie in Lie::ALL {
            let schema = resolve_shot_schema(lie, par);
            let expected = match lie {
                Lie::Tee if par == 3 => ShotSchema::TeePar3,
                Lie::Tee => ShotSchema::TeeDrive,
                Lie::Green => ShotSchema::GreenPutt,
                _ => ShotSchema::Approach,
            };
            assert_eq!(
                schema, expected,
                "lie {lie:?} with par {par} resolved to the wrong field set"
            );

            // Exactly one of the conditional field groups applies.
            let groups = [
                schema.has_aim_fields(),
                schema.has_foul_ball(),
                schema.has_putt_break(),
            ];
            assert_eq!(
                groups.iter().filter(|g| **g).count(),
                1,
                "schema {schema:?} must enable exactly one field group"
            );
        }
    }
}

#[test]
fn test1_resolver_is_stable_under_repeated_calls() {
    for par in 3..=5u8 {
        for lie in Lie::ALL {
            let first = resolve_shot_schema(lie, par);
            for _ in 0..3 {
                assert_eq!(first, resolve_shot_schema(lie, par));
            }
        }
    }
}

#[test]
fn test1_normalize_drops_fields_outside_the_schema() {
    // A green shot submitted with leftover tee-shot fields keeps only the
    // putt break.
    let input = ShotInput {
        pin_high: TriState::Yes,
        on_line: TriState::No,
        foul_ball: Some(true),
        putt_break: Some(PuttBreak::DownhillR2L),
        ..shot(1, Lie::Green, "Putter")
    };
    let record = ShotRecord::normalize(&input, 4);
    assert_eq!(
        record.extras,
        ShotExtras::Putt {
            putt_break: PuttBreak::DownhillR2L
        }
    );
    assert_eq!(record.pin_high(), None);
    assert_eq!(record.on_line(), None);
    assert_eq!(record.foul_ball(), None);
}

#[test]
fn test1_normalize_par3_tee_shot_never_stores_foul_ball() {
    let input = ShotInput {
        foul_ball: Some(true),
        pin_high: TriState::Yes,
        on_line: TriState::Unset,
        ..shot(1, Lie::Tee, "5i")
    };
    let record = ShotRecord::normalize(&input, 3);
    assert_eq!(record.foul_ball(), None);
    assert_eq!(record.pin_high(), Some(TriState::Yes));
    assert_eq!(record.on_line(), Some(TriState::Unset));
}

#[test]
fn test1_normalize_defaults_absent_in_schema_fields() {
    // Tee shot on a par 4 without a foul-ball answer defaults to No.
    let record = ShotRecord::normalize(&shot(1, Lie::Tee, "Driver"), 4);
    assert_eq!(record.foul_ball(), Some(false));

    // Green shot without a break defaults to Straight.
    let record = ShotRecord::normalize(&shot(2, Lie::Green, "Putter"), 4);
    assert_eq!(record.putt_break(), Some(PuttBreak::Straight));
}

#[test]
fn test1_unset_lie_takes_the_approach_fields() {
    let record = ShotRecord::normalize(&shot(1, Lie::Unset, ""), 5);
    assert!(matches!(record.extras, ShotExtras::Aim { .. }));
}
