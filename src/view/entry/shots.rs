use maud::{Markup, html};

use crate::model::{
    Lie, MissDirection, PuttBreak, ShotInput, ShotSchema, TriState, resolve_shot_schema,
};

/// One row of inputs per shot. Field names are indexed by shot number
/// only; the hole is whichever one is active when the form posts back.
#[must_use]
pub fn render_shot_rows(par: u8, inputs: &[ShotInput]) -> Markup {
    html! {
        @for input in inputs {
            (render_shot_row(par, input))
        }
    }
}

fn render_shot_row(par: u8, input: &ShotInput) -> Markup {
    let shot = input.shot_number;
    let schema = resolve_shot_schema(input.lie, par);

    html! {
        fieldset class="shot-row" data-shot=(shot) {
            legend { "Shot " (shot) }

            label { "Club"
                input type="text" name={ "club_" (shot) } value=(input.club);
            }
            label { "Lie"
                select name={ "lie_" (shot) } {
                    @for lie in Lie::ALL {
                        @let label = if lie == Lie::Unset { "-" } else { lie.as_str() };
                        option value=(lie.as_str()) selected[input.lie == lie] { (label) }
                    }
                }
            }
            label { "Pin Distance"
                input type="number" name={ "pd_" (shot) } min="0" max="1000"
                    value=[input.pin_distance];
            }
            label { "Miss Direction"
                select name={ "md_" (shot) } {
                    @for md in MissDirection::ALL {
                        @let label = if md == MissDirection::None { "-" } else { md.as_str() };
                        option value=(md.as_str()) selected[input.miss_direction == md] { (label) }
                    }
                }
            }

            @match schema {
                ShotSchema::TeePar3 | ShotSchema::Approach => {
                    (tri_state_select("Pin-High", &format!("ph_{shot}"), input.pin_high))
                    (tri_state_select("On-Line", &format!("ol_{shot}"), input.on_line))
                }
                ShotSchema::TeeDrive => {
                    label { "Foul Ball"
                        select name={ "fb_" (shot) } {
                            @let fb = input.foul_ball.unwrap_or(false);
                            option value="No" selected[!fb] { "No" }
                            option value="Yes" selected[fb] { "Yes" }
                        }
                    }
                }
                ShotSchema::GreenPutt => {
                    label { "Putt Break"
                        select name={ "pb_" (shot) } {
                            @let current = input.putt_break.unwrap_or_default();
                            @for pb in PuttBreak::ALL {
                                option value=(pb.as_str()) selected[current == pb] { (pb.as_str()) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn tri_state_select(label: &str, name: &str, current: TriState) -> Markup {
    html! {
        label { (label)
            select name=(name) {
                @for t in TriState::ALL {
                    @let text = match t {
                        TriState::Yes => "1",
                        TriState::No => "0",
                        TriState::Unset => "-",
                    };
                    option value=(t.as_str()) selected[current == t] { (text) }
                }
            }
        }
    }
}
