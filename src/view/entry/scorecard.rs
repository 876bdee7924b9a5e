use maud::{Markup, html};

use crate::model::{HoleStore, ScoreShape, relative_to_par_label};

/// Score cell with the scorecard marker shape for its result vs par.
#[must_use]
pub fn score_with_shape(score: u8, par: u8) -> Markup {
    let shape = ScoreShape::from_diff(i32::from(score) - i32::from(par));
    html! {
        span class={ "score-box " (shape.css_class()) } { (score) }
    }
}

/// Hole / par / score summary table with totals, shown once the
/// scorecard has been committed.
#[must_use]
pub fn render_scorecard_summary(store: &HoleStore) -> Markup {
    let total_par = store.total_par();
    let total_score = store.total_score();
    let diff = i32::from(total_score) - i32::from(total_par);

    html! {
        h4 class="scorecard-heading" { "Scorecard Summary" }

        table class="styled-table scorecard" {
            tbody {
                tr {
                    th { "Hole" }
                    @for hole in store.holes() {
                        td { (hole.hole_number) }
                    }
                    th { "Total" }
                }
                tr {
                    th { "Par" }
                    @for hole in store.holes() {
                        td {
                            @if let Some(par) = hole.par { (par) }
                        }
                    }
                    td class="scorecard-total" { (total_par) }
                }
                tr {
                    th { "Score" }
                    @for hole in store.holes() {
                        td {
                            @if let (Some(score), Some(par)) = (hole.score, hole.par) {
                                (score_with_shape(score, par))
                            }
                        }
                    }
                    td class="scorecard-total" {
                        (total_score) " (" (relative_to_par_label(diff)) ")"
                    }
                }
            }
        }
    }
}
