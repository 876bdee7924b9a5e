use csv::WriterBuilder;

use crate::model::{
    EngineError, Lie, MissDirection, PinPosition, PuttBreak, RoundMeta, RoundSession, TriState,
};

/// Fixed export header, in exactly this order.
pub const EXPORT_COLUMNS: [&str; 17] = [
    "Player",
    "RoundDate",
    "Tournament",
    "Round",
    "RoundType",
    "Hole",
    "Par",
    "Stroke",
    "Club",
    "Lie",
    "PinDistance",
    "PinLocation",
    "MissDirection",
    "PinHigh",
    "OnLine",
    "PuttBreak",
    "FoulBall",
];

/// Marker for a conditional column the shot's schema excludes. Distinct
/// from the empty string, which means applicable but not entered.
pub const NOT_APPLICABLE: &str = "NA";

/// One flattened (hole, shot) row. Conditional fields are `None` when the
/// shot's schema excludes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub hole_number: u8,
    pub par: u8,
    pub stroke: u8,
    pub club: String,
    pub lie: Lie,
    pub pin_distance: Option<u32>,
    pub pin_location: PinPosition,
    pub miss_direction: MissDirection,
    pub pin_high: Option<TriState>,
    pub on_line: Option<TriState>,
    pub putt_break: Option<PuttBreak>,
    pub foul_ball: Option<bool>,
}

/// Flattened session plus the holes the partial-export policy left out.
#[derive(Debug, Clone)]
pub struct ExportTable {
    pub rows: Vec<ExportRow>,
    pub excluded_holes: Vec<u8>,
}

/// Flattens the session into one row per (hole, shot) over the saved-set
/// only, ascending hole-then-shot. Unsaved holes are excluded from the
/// rows and reported back for the caller to surface as a warning.
///
/// # Errors
///
/// Will return `Err` if round metadata was never submitted or no hole has
/// been saved yet (nothing to export; the error lists every hole)
pub fn build_export(session: &RoundSession) -> Result<ExportTable, EngineError> {
    if session.round_meta().is_none() {
        return Err(EngineError::validation(
            "round",
            "round information has not been submitted",
        ));
    }
    let saved = session.saved_holes();
    if saved.is_empty() {
        return Err(EngineError::incomplete(session.unsaved_holes()));
    }

    let mut rows = Vec::new();
    for hole_number in saved {
        // Saved holes always carry a complete record and a full shot list.
        let Some(record) = session.hole(hole_number) else {
            continue;
        };
        let par = record.par.unwrap_or_default();
        let pin = record.pin.unwrap_or_default();
        for shot in session.shots(hole_number).unwrap_or_default() {
            rows.push(ExportRow {
                hole_number,
                par,
                stroke: shot.shot_number,
                club: shot.club.clone(),
                lie: shot.lie,
                pin_distance: shot.pin_distance,
                pin_location: pin,
                miss_direction: shot.miss_direction,
                pin_high: shot.pin_high(),
                on_line: shot.on_line(),
                putt_break: shot.putt_break(),
                foul_ball: shot.foul_ball(),
            });
        }
    }

    Ok(ExportTable {
        rows,
        excluded_holes: session.unsaved_holes(),
    })
}

impl ExportRow {
    /// Serializes the row as display values in fixed column order, the
    /// round metadata repeated per row.
    #[must_use]
    pub fn to_record(&self, meta: &RoundMeta) -> Vec<String> {
        vec![
            meta.player.value().to_string(),
            meta.date.to_string(),
            meta.tournament.clone(),
            meta.round_number.to_string(),
            meta.round_type.to_string(),
            self.hole_number.to_string(),
            self.par.to_string(),
            self.stroke.to_string(),
            self.club.clone(),
            self.lie.to_string(),
            self.pin_distance.map(|d| d.to_string()).unwrap_or_default(),
            self.pin_location.to_string(),
            self.miss_direction.to_string(),
            tri_state_column(self.pin_high),
            tri_state_column(self.on_line),
            self.putt_break
                .map_or_else(|| NOT_APPLICABLE.to_string(), |b| b.to_string()),
            self.foul_ball.map_or_else(
                || NOT_APPLICABLE.to_string(),
                |fb| if fb { "Yes".to_string() } else { "No".to_string() },
            ),
        ]
    }
}

fn tri_state_column(value: Option<TriState>) -> String {
    value.map_or_else(|| NOT_APPLICABLE.to_string(), |t| t.to_string())
}

/// Writes the header plus one record per row.
///
/// # Errors
///
/// Will return `Err` if the CSV writer rejects a record
pub fn to_csv(meta: &RoundMeta, table: &ExportTable) -> Result<String, EngineError> {
    let mut wtr = WriterBuilder::new().from_writer(Vec::new());
    wtr.write_record(EXPORT_COLUMNS)?;
    for row in &table.rows {
        wtr.write_record(row.to_record(meta))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| EngineError::validation("export", e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| EngineError::validation("export", e.to_string()))
}

impl From<csv::Error> for EngineError {
    fn from(e: csv::Error) -> Self {
        EngineError::validation("export", e.to_string())
    }
}

/// `<player-name-with-spaces-as-underscores>_Stroke_Trail.csv`
#[must_use]
pub fn export_filename(player_name: &str) -> String {
    format!("{}_Stroke_Trail.csv", player_name.replace(' ', "_"))
}
