use stroke_trail::model::{
    EngineError, EntryPhase, Lie, PinPosition, RoundSession, TriState,
};

mod common;
use common::{par4_five_shots, sample_meta, shot, three_hole_session};

#[test]
fn test3_phase_walks_empty_to_all_saved() -> Result<(), EngineError> {
    let mut session = RoundSession::new();
    assert_eq!(session.phase(), EntryPhase::Empty);

    session.set_round_meta(sample_meta(2))?;
    assert_eq!(session.phase(), EntryPhase::Empty, "meta alone opens nothing");

    session.set_hole(1, 4, 4, 400, PinPosition::Center)?;
    session.set_hole(2, 3, 3, 150, PinPosition::Center)?;
    session.configure_holes()?;
    assert_eq!(session.phase(), EntryPhase::HolesConfigured);
    assert_eq!(session.active_hole(), 1);

    session.save_hole(1, &[])?;
    assert_eq!(session.phase(), EntryPhase::InProgress);

    session.save_hole(2, &[])?;
    assert_eq!(session.phase(), EntryPhase::AllSaved);
    assert!(session.unsaved_holes().is_empty());
    Ok(())
}

#[test]
fn test3_shot_entry_is_gated_on_a_complete_scorecard() -> Result<(), EngineError> {
    let mut session = RoundSession::new();
    session.set_round_meta(sample_meta(3))?;
    session.set_hole(1, 4, 5, 420, PinPosition::Center)?;

    let err = session.configure_holes().expect_err("holes 2-3 missing");
    assert_eq!(err, EngineError::incomplete(vec![2, 3]));

    // Saving, staging and navigation all report the same blocking holes.
    let err = session.save_hole(1, &[]).expect_err("shot entry not open");
    assert_eq!(err, EngineError::incomplete(vec![2, 3]));
    let err = session.select_hole(2).expect_err("shot entry not open");
    assert_eq!(err, EngineError::incomplete(vec![2, 3]));
    Ok(())
}

#[test]
fn test3_configure_holes_resets_saved_set_and_shot_log() -> Result<(), EngineError> {
    let mut session = three_hole_session();
    session.save_hole(1, &par4_five_shots())?;
    assert!(session.is_saved(1));
    assert!(session.shots(1).is_some());

    session.configure_holes()?;
    assert!(session.saved_holes().is_empty());
    assert!(session.shots(1).is_none());
    assert_eq!(session.phase(), EntryPhase::HolesConfigured);
    Ok(())
}

#[test]
fn test3_changed_hole_count_discards_shot_data() -> Result<(), EngineError> {
    let mut session = three_hole_session();
    session.save_hole(1, &par4_five_shots())?;

    // Same count keeps everything.
    session.set_round_meta(sample_meta(3))?;
    assert!(session.is_saved(1));

    // A different count clears the log and saved-set entirely.
    session.set_round_meta(sample_meta(9))?;
    assert!(session.saved_holes().is_empty());
    assert!(session.shots(1).is_none());
    assert_eq!(session.phase(), EntryPhase::Empty);
    Ok(())
}

#[test]
fn test3_save_pads_short_lists_with_schema_defaults() -> Result<(), EngineError> {
    let mut session = three_hole_session();

    // Hole 1 scored 5; stage only two shots.
    session.save_hole(1, &par4_five_shots()[..2])?;
    let shots = session.shots(1).expect("hole 1 committed");
    assert_eq!(shots.len(), 5, "padded to the hole's score");
    assert_eq!(shots[2].lie, Lie::Unset);
    assert_eq!(shots[2].club, "");
    assert_eq!(shots[2].pin_distance, None);
    assert_eq!(shots[2].pin_high(), Some(TriState::Unset));
    assert_eq!(shots[4].shot_number, 5);
    Ok(())
}

#[test]
fn test3_save_rejects_more_shots_than_the_score() {
    let mut session = three_hole_session();

    // Hole 2 scored 4; six staged shots means the scorecard is stale.
    let staged: Vec<_> = (1..=6).map(|n| shot(n, Lie::Fairway, "8i")).collect();
    let err = session.save_hole(2, &staged).expect_err("must surface the mismatch");
    assert!(matches!(err, EngineError::Validation { ref field, .. } if field == "shots"));
    assert!(!session.is_saved(2), "rejected save leaves the hole unsaved");
    assert!(session.shots(2).is_none());
}

#[test]
fn test3_save_rejects_non_sequential_shot_numbers() {
    let mut session = three_hole_session();
    let staged = vec![shot(1, Lie::Tee, "Driver"), shot(3, Lie::Fairway, "9i")];
    let err = session.save_hole(1, &staged).expect_err("gap in shot numbers");
    assert!(matches!(err, EngineError::Validation { ref field, .. } if field == "shots"));
}

#[test]
fn test3_navigating_away_auto_saves_staged_shots() -> Result<(), EngineError> {
    let mut session = three_hole_session();
    assert_eq!(session.active_hole(), 1);

    session.stage_shots(1, par4_five_shots())?;
    assert!(!session.is_saved(1), "staging alone never saves");

    session.select_hole(3)?;
    assert!(session.is_saved(1), "navigation committed the staged hole");
    assert_eq!(session.active_hole(), 3);
    assert_eq!(session.shots(1).map(<[_]>::len), Some(5));
    Ok(())
}

#[test]
fn test3_first_visit_navigation_is_a_no_op_save() -> Result<(), EngineError> {
    let mut session = three_hole_session();
    session.select_hole(2)?;
    assert!(session.saved_holes().is_empty(), "nothing staged, nothing saved");
    assert_eq!(session.active_hole(), 2);
    Ok(())
}

#[test]
fn test3_failed_auto_save_blocks_navigation() -> Result<(), EngineError> {
    let mut session = three_hole_session();
    // Stage more shots than hole 1's score allows.
    let staged: Vec<_> = (1..=7).map(|n| shot(n, Lie::Rough, "LW")).collect();
    session.stage_shots(1, staged)?;

    let err = session.select_hole(2).expect_err("auto-save must fail");
    assert!(matches!(err, EngineError::Validation { .. }));
    assert_eq!(session.active_hole(), 1, "pointer stays until the save succeeds");
    Ok(())
}

#[test]
fn test3_save_and_advance_moves_to_the_next_hole() -> Result<(), EngineError> {
    let mut session = three_hole_session();
    session.stage_shots(1, par4_five_shots())?;

    let now_active = session.save_active_and_advance()?;
    assert_eq!(now_active, 2);
    assert!(session.is_saved(1));

    // On the last hole the pointer stays put.
    session.select_hole(3)?;
    let now_active = session.save_active_and_advance()?;
    assert_eq!(now_active, 3);
    assert_eq!(session.phase(), EntryPhase::InProgress);
    Ok(())
}

#[test]
fn test3_form_inputs_default_first_shot_distance_to_yardage() {
    let session = three_hole_session();
    let inputs = session.form_inputs(1);
    assert_eq!(inputs.len(), 5);
    assert_eq!(inputs[0].pin_distance, Some(420));
    assert_eq!(inputs[1].pin_distance, None);
}

#[test]
fn test3_form_inputs_prefer_staged_then_committed() -> Result<(), EngineError> {
    let mut session = three_hole_session();
    session.save_hole(1, &par4_five_shots())?;

    let committed = session.form_inputs(1);
    assert_eq!(committed[0].club, "Driver");

    let mut edited = par4_five_shots();
    edited[0].club = "3w".to_string();
    session.stage_shots(1, edited)?;
    let staged = session.form_inputs(1);
    assert_eq!(staged[0].club, "3w", "staged edits shadow the committed save");
    Ok(())
}

#[test]
fn test3_select_rejects_out_of_range_holes() {
    let mut session = three_hole_session();
    let err = session.select_hole(4).expect_err("only 3 holes configured");
    assert!(matches!(err, EngineError::Validation { ref field, .. } if field == "hole"));
}
