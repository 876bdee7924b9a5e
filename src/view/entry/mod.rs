pub mod scorecard;
pub mod shots;

pub use scorecard::*;
pub use shots::*;

use maud::{Markup, html};

use crate::model::{
    EntryPhase, PinPosition, RoundSession, RoundType, MAX_HOLE_COUNT, MAX_PAR, MAX_SCORE,
    MAX_YARDAGE, MIN_HOLE_COUNT, MIN_PAR, MIN_SCORE, MIN_YARDAGE,
};
use crate::view::index::render_page;

pub const PAGE_TITLE: &str = "Golf Round Entry - Stroke Trail Logger";

/// Full entry page: each step appears once the one before it has data.
#[must_use]
pub fn render_entry_page(session: &RoundSession) -> Markup {
    let body = html! {
        (round_info_section(session))
        @if session.round_meta().is_some() {
            (hole_info_section(session))
        }
        @if session.shot_entry_open() {
            (render_scorecard_summary(session.hole_store()))
            (shot_entry_section(session))
            (export_section(session))
        }
    };
    render_page(PAGE_TITLE, body)
}

fn round_info_section(session: &RoundSession) -> Markup {
    let meta = session.round_meta();
    html! {
        section id="round-info" {
            h2 { "Step 1: Round Info" }
            form method="post" action="/round" {
                label { "Player Name"
                    input type="text" name="player"
                        value=[meta.map(|m| m.player.value())];
                }
                label { "Round Date"
                    input type="date" name="date"
                        value=[meta.map(|m| m.date.to_string())];
                }
                label { "Tournament"
                    input type="text" name="tournament"
                        value=[meta.map(|m| m.tournament.as_str())];
                }
                label { "Round"
                    select name="round" {
                        @for n in 1..=4u8 {
                            option value=(n)
                                selected[meta.is_some_and(|m| m.round_number == n)] { (n) }
                        }
                    }
                }
                label { "Holes"
                    input type="number" name="holes"
                        min=(MIN_HOLE_COUNT) max=(MAX_HOLE_COUNT)
                        value=(meta.map_or(18, |m| m.hole_count));
                }
                label { "Type"
                    select name="round_type" {
                        @for rt in RoundType::ALL {
                            option value=(rt.as_str())
                                selected[meta.is_some_and(|m| m.round_type == rt)] { (rt.as_str()) }
                        }
                    }
                }
                button type="submit" { "Submit Round Info" }
            }
        }
    }
}

fn hole_info_section(session: &RoundSession) -> Markup {
    let store = session.hole_store();
    let pages = session.total_pages();
    html! {
        section id="hole-info" {
            h2 { "Step 2: Hole Info" }
            form method="post" action="/holes" {
                table class="styled-table hole-entry" {
                    tbody {
                        tr {
                            th { "Hole" }
                            @for n in session.page_holes() {
                                td class="hole-number" { (n) }
                            }
                        }
                        tr {
                            th { "Par" }
                            @for n in session.page_holes() {
                                @let par = store.hole(n).and_then(|h| h.par).unwrap_or(4);
                                td {
                                    input type="number" name={ "par_" (n) }
                                        min=(MIN_PAR) max=(MAX_PAR) value=(par);
                                }
                            }
                        }
                        tr {
                            th { "Score" }
                            @for n in session.page_holes() {
                                @let score = store.hole(n).and_then(|h| h.score).unwrap_or(4);
                                td {
                                    input type="number" name={ "score_" (n) }
                                        min=(MIN_SCORE) max=(MAX_SCORE) value=(score);
                                }
                            }
                        }
                        tr {
                            th { "Yardage" }
                            @for n in session.page_holes() {
                                @let yardage = store.hole(n).and_then(|h| h.yardage).unwrap_or(400);
                                td {
                                    input type="number" name={ "yardage_" (n) }
                                        min=(MIN_YARDAGE) max=(MAX_YARDAGE) value=(yardage);
                                }
                            }
                        }
                        tr {
                            th { "Pin" }
                            @for n in session.page_holes() {
                                @let pin = store.hole(n).and_then(|h| h.pin).unwrap_or_default();
                                td {
                                    select name={ "pin_" (n) } {
                                        @for p in PinPosition::ALL {
                                            option value=(p.as_str()) selected[pin == p] { (p.as_str()) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                @if pages > 1 {
                    div class="pager" {
                        button type="submit" name="action" value="prev"
                            disabled[session.hole_page() == 0] { "First Nine" }
                        button type="submit" name="action" value="next"
                            disabled[session.hole_page() + 1 >= pages] { "Second Nine" }
                    }
                }

                button type="submit" name="action" value="save" { "Submit Hole Info" }
            }
        }
    }
}

fn shot_entry_section(session: &RoundSession) -> Markup {
    let active = session.active_hole();
    let record = session.hole(active);
    let par = record.and_then(|h| h.par).unwrap_or_default();
    let score = record.and_then(|h| h.score).unwrap_or_default();
    let yardage = record.and_then(|h| h.yardage).unwrap_or_default();
    let pin = record.and_then(|h| h.pin).unwrap_or_default();
    let inputs = session.form_inputs(active);

    html! {
        section id="shot-info" {
            h2 { "Step 3: Shot Info" }
            form method="post" action="/shots" {
                h3 { "Select a Hole" }
                div class="hole-selector" {
                    @for n in 1..=session.hole_store().hole_count() {
                        @let saved = session.is_saved(n);
                        @let chip_class = if saved { "save-status saved" } else { "save-status unsaved" };
                        div class="hole-pick" {
                            div class=(chip_class) {
                                @if saved { "Saved" } @else { "Not Saved" }
                            }
                            button type="submit" name="action" value={ "select_" (n) }
                                class=(if n == active { "hole-button active" } else { "hole-button" }) {
                                "Hole " (n)
                            }
                        }
                    }
                }

                h3 { "Shot Entry for Hole " (active) }
                h3 class="hole-header" {
                    "Par " (par) " – " (yardage) " yds – "
                    (score_with_shape(score, par)) " Strokes – Pin (" (pin) ")"
                }

                (render_shot_rows(par, &inputs))

                div class="shot-actions" {
                    button type="submit" name="action" value="stage" { "Update Fields" }
                    button type="submit" name="action" value="save" { "Save Shots & Next Hole" }
                }
            }
        }
    }
}

fn export_section(session: &RoundSession) -> Markup {
    let unsaved = session.unsaved_holes();
    html! {
        section id="export" {
            h2 { "Step 4: Export Data" }
            @if session.phase() == EntryPhase::HolesConfigured {
                p class="warning" { "No holes saved yet; save at least one hole to export." }
            } @else {
                @if !unsaved.is_empty() {
                    p class="warning" {
                        "Shots for holes "
                        (unsaved.iter().map(u8::to_string).collect::<Vec<_>>().join(", "))
                        " are not saved and will be excluded."
                    }
                }
                p {
                    a class="button" href="/export" { "Download CSV" }
                    " "
                    a class="button" href="/export/preview" { "Preview" }
                }
            }
        }
    }
}

/// Export preview: the flattened table rendered as HTML, with the
/// partial-export warning when holes were left out.
#[must_use]
pub fn render_export_preview(
    columns: &[&str],
    records: &[Vec<String>],
    excluded_holes: &[u8],
) -> Markup {
    let body = html! {
        section id="export-preview" {
            h2 { "Export Preview" }
            @if !excluded_holes.is_empty() {
                p class="warning" {
                    "Note: shots for holes "
                    (excluded_holes.iter().map(u8::to_string).collect::<Vec<_>>().join(", "))
                    " were not saved and have been excluded."
                }
            }
            table class="styled-table export-preview" {
                thead {
                    tr {
                        @for col in columns {
                            th { (col) }
                        }
                    }
                }
                tbody {
                    @for record in records {
                        tr {
                            @for value in record {
                                td { (value) }
                            }
                        }
                    }
                }
            }
            p { a class="button" href="/" { "Back to entry" } }
        }
    };
    render_page(PAGE_TITLE, body)
}
