use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use actix_web::web::{Data, Form};
use actix_web::{HttpResponse, Responder};
use chrono::NaiveDate;
use serde_json::json;

use crate::controller::export::{EXPORT_COLUMNS, build_export, export_filename, to_csv};
use crate::model::{
    EngineError, Lie, MAX_PIN_DISTANCE, MissDirection, PinPosition, PlayerName, PuttBreak,
    RoundMeta, RoundSession, RoundType, ShotInput, TriState,
};
use crate::view::entry::{render_entry_page, render_export_preview};

/// The one shared mutable resource: the editing session, serialized
/// behind a mutex so each user action is one atomic transition.
#[derive(Default)]
pub struct SessionStore {
    session: Mutex<RoundSession>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RoundSession> {
        match self.session.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

pub async fn entry_page(store: Data<SessionStore>) -> impl Responder {
    let session = store.lock();
    let markup = render_entry_page(&session);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn submit_round(
    form: Form<HashMap<String, String>>,
    store: Data<SessionStore>,
) -> HttpResponse {
    let meta = match parse_round_meta(&form) {
        Ok(meta) => meta,
        Err(e) => return error_response(&e),
    };
    let mut session = store.lock();
    match session.set_round_meta(meta) {
        Ok(()) => see_other(),
        Err(e) => error_response(&e),
    }
}

pub async fn submit_holes(
    form: Form<HashMap<String, String>>,
    store: Data<SessionStore>,
) -> HttpResponse {
    let mut session = store.lock();

    // Apply to a scratch copy so a rejected field can't leave a
    // half-updated scorecard behind.
    let mut scratch = session.clone();
    for hole_number in scratch.page_holes() {
        if !form.contains_key(&format!("par_{hole_number}")) {
            continue;
        }
        let parsed = parse_hole_fields(&form, hole_number)
            .and_then(|(par, score, yardage, pin)| {
                scratch.set_hole(hole_number, par, score, yardage, pin)
            });
        if let Err(e) = parsed {
            return error_response(&e);
        }
    }

    let outcome = match field(&form, "action") {
        "prev" => {
            scratch.prev_page();
            Ok(())
        }
        "next" => {
            scratch.next_page();
            Ok(())
        }
        _ => scratch.configure_holes(),
    };
    match outcome {
        Ok(()) => {
            *session = scratch;
            see_other()
        }
        Err(e) => error_response(&e),
    }
}

pub async fn submit_shots(
    form: Form<HashMap<String, String>>,
    store: Data<SessionStore>,
) -> HttpResponse {
    let mut session = store.lock();
    let active = session.active_hole();
    let score = session.hole(active).and_then(|h| h.score).unwrap_or_default();

    let inputs = match parse_shot_inputs(&form, score) {
        Ok(inputs) => inputs,
        Err(e) => return error_response(&e),
    };
    if let Err(e) = session.stage_shots(active, inputs) {
        return error_response(&e);
    }

    let outcome = match field(&form, "action") {
        "save" => session.save_active_and_advance().map(|_| ()),
        "stage" => Ok(()),
        action => match action.strip_prefix("select_").map(str::parse::<u8>) {
            Some(Ok(target)) => session.select_hole(target),
            _ => Err(EngineError::validation(
                "action",
                format!("unknown shot action '{action}'"),
            )),
        },
    };
    match outcome {
        Ok(()) => see_other(),
        Err(e) => error_response(&e),
    }
}

pub async fn export_csv(store: Data<SessionStore>) -> HttpResponse {
    let session = store.lock();
    let table = match build_export(&session) {
        Ok(table) => table,
        Err(e) => return error_response(&e),
    };
    // build_export guarantees metadata is present.
    let Some(meta) = session.round_meta() else {
        return error_response(&EngineError::validation(
            "round",
            "round information has not been submitted",
        ));
    };
    match to_csv(meta, &table) {
        Ok(csv) => {
            let filename = export_filename(meta.player.value());
            HttpResponse::Ok()
                .content_type("text/csv")
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{filename}\""),
                ))
                .body(csv)
        }
        Err(e) => error_response(&e),
    }
}

pub async fn export_preview(store: Data<SessionStore>) -> HttpResponse {
    let session = store.lock();
    let table = match build_export(&session) {
        Ok(table) => table,
        Err(e) => return error_response(&e),
    };
    let Some(meta) = session.round_meta() else {
        return error_response(&EngineError::validation(
            "round",
            "round information has not been submitted",
        ));
    };
    let records: Vec<Vec<String>> = table.rows.iter().map(|r| r.to_record(meta)).collect();
    let markup = render_export_preview(&EXPORT_COLUMNS, &records, &table.excluded_holes);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn session_state(store: Data<SessionStore>) -> HttpResponse {
    let session = store.lock();
    HttpResponse::Ok().json(session.snapshot())
}

// ----- form parsing -----

fn field<'a>(form: &'a HashMap<String, String>, key: &str) -> &'a str {
    form.get(key).map(|s| s.trim()).unwrap_or("")
}

fn parse_round_meta(form: &HashMap<String, String>) -> Result<RoundMeta, EngineError> {
    let player = PlayerName::parse(field(form, "player"))?;
    let date = NaiveDate::parse_from_str(field(form, "date"), "%Y-%m-%d")
        .map_err(|_| EngineError::validation("date", "round date must be YYYY-MM-DD"))?;
    let tournament = field(form, "tournament").to_string();
    let round_number: u8 = field(form, "round")
        .parse()
        .map_err(|_| EngineError::validation("round", "round number must be 1-4"))?;
    let round_type = RoundType::parse(field(form, "round_type")).ok_or_else(|| {
        EngineError::validation("round_type", "round type must be Competitive or Practice")
    })?;
    let hole_count: u8 = field(form, "holes")
        .parse()
        .map_err(|_| EngineError::validation("holes", "hole count must be 1-18"))?;
    RoundMeta::new(player, date, tournament, round_number, round_type, hole_count)
}

type HoleFields = (u8, u8, u16, PinPosition);

fn parse_hole_fields(
    form: &HashMap<String, String>,
    hole_number: u8,
) -> Result<HoleFields, EngineError> {
    let par: u8 = field(form, &format!("par_{hole_number}"))
        .parse()
        .map_err(|_| {
            EngineError::validation(format!("par_{hole_number}"), "par must be a number")
        })?;
    let score: u8 = field(form, &format!("score_{hole_number}"))
        .parse()
        .map_err(|_| {
            EngineError::validation(format!("score_{hole_number}"), "score must be a number")
        })?;
    let yardage: u16 = field(form, &format!("yardage_{hole_number}"))
        .parse()
        .map_err(|_| {
            EngineError::validation(format!("yardage_{hole_number}"), "yardage must be a number")
        })?;
    let pin = PinPosition::parse(field(form, &format!("pin_{hole_number}"))).ok_or_else(|| {
        EngineError::validation(
            format!("pin_{hole_number}"),
            "pin must be one of C, FL, FR, BL, BR",
        )
    })?;
    Ok((par, score, yardage, pin))
}

/// One `ShotInput` per expected shot; absent fields take their entry-form
/// defaults, unknown enumeration values are rejected with the offending
/// field named.
fn parse_shot_inputs(
    form: &HashMap<String, String>,
    score: u8,
) -> Result<Vec<ShotInput>, EngineError> {
    let mut inputs = Vec::with_capacity(usize::from(score));
    for shot in 1..=score {
        let lie = Lie::parse(field(form, &format!("lie_{shot}"))).ok_or_else(|| {
            EngineError::validation(format!("lie_{shot}"), "unknown lie value")
        })?;
        let pin_distance = match field(form, &format!("pd_{shot}")) {
            "" => None,
            raw => {
                let value: u32 = raw.parse().map_err(|_| {
                    EngineError::validation(
                        format!("pd_{shot}"),
                        "pin distance must be a whole number",
                    )
                })?;
                if value > MAX_PIN_DISTANCE {
                    return Err(EngineError::validation(
                        format!("pd_{shot}"),
                        format!("pin distance must be at most {MAX_PIN_DISTANCE}"),
                    ));
                }
                Some(value)
            }
        };
        let miss_direction = MissDirection::parse(field(form, &format!("md_{shot}")))
            .ok_or_else(|| {
                EngineError::validation(format!("md_{shot}"), "unknown miss direction")
            })?;
        let pin_high = TriState::parse(field(form, &format!("ph_{shot}"))).ok_or_else(|| {
            EngineError::validation(format!("ph_{shot}"), "pin-high must be 1, 0 or empty")
        })?;
        let on_line = TriState::parse(field(form, &format!("ol_{shot}"))).ok_or_else(|| {
            EngineError::validation(format!("ol_{shot}"), "on-line must be 1, 0 or empty")
        })?;
        let putt_break = match form.get(&format!("pb_{shot}")) {
            None => None,
            Some(raw) => Some(PuttBreak::parse(raw.trim()).ok_or_else(|| {
                EngineError::validation(format!("pb_{shot}"), "unknown putt break")
            })?),
        };
        let foul_ball = match form.get(&format!("fb_{shot}")) {
            None => None,
            Some(raw) => match raw.trim() {
                "Yes" => Some(true),
                "No" => Some(false),
                _ => {
                    return Err(EngineError::validation(
                        format!("fb_{shot}"),
                        "foul ball must be Yes or No",
                    ));
                }
            },
        };

        inputs.push(ShotInput {
            shot_number: shot,
            club: field(form, &format!("club_{shot}")).to_string(),
            lie,
            pin_distance,
            miss_direction,
            pin_high,
            on_line,
            putt_break,
            foul_ball,
        });
    }
    Ok(inputs)
}

// ----- responses -----

fn see_other() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/"))
        .finish()
}

fn error_response(e: &EngineError) -> HttpResponse {
    match e {
        EngineError::Validation { field, .. } => {
            HttpResponse::BadRequest().json(json!({"error": e.to_string(), "field": field}))
        }
        EngineError::IncompleteState { holes } => {
            HttpResponse::Conflict().json(json!({"error": e.to_string(), "holes": holes}))
        }
    }
}
