use maud::{Markup, html};

use crate::logo_cache::LogoLookup;
use crate::model::{Conference, Standings, StandingsRow};
use crate::view::types::RenderOptions;
use crate::view::utils::{DetailKind, detail_href, empty_placeholder, linked_row, logo_img};

pub const NO_STANDINGS: &str = "No standings available.";

#[must_use]
pub fn render_standings_table(
    rows: &[StandingsRow],
    logos: &LogoLookup,
    opts: &RenderOptions,
) -> Markup {
    html! {
        @if rows.is_empty() {
            (empty_placeholder(NO_STANDINGS))
        } @else {
            table class="styled-table standings-table" {
                thead {
                    tr {
                        th { "#" }
                        th { "Team" }
                        th { "W" }
                        th { "L" }
                        th { "GB" }
                    }
                }
                tbody {
                    @for (idx, row) in rows.iter().enumerate() {
                        @let cells = html! {
                            td class="rank" { (idx + 1) }
                            td class="team" {
                                (logo_img(logos.logo_for(row.team_id.as_deref()), &row.team_name, "team-logo-sm", opts))
                                span { (row.team_name) }
                            }
                            td { (row.wins) }
                            td { (row.losses) }
                            td { (row.games_back) }
                        };
                        (linked_row(detail_href(DetailKind::Team, row.team_id.as_deref()).as_deref(), &cells))
                    }
                }
            }
        }
    }
}

/// Both conference boxes; each degrades to the no-data message on its own.
#[must_use]
pub fn render_standings(standings: &Standings, logos: &LogoLookup, opts: &RenderOptions) -> Markup {
    html! {
        div class="standings" {
            @for conference in [Conference::East, Conference::West] {
                div class="conference-box" id=(conference.dom_id()) {
                    h3 { (conference.title()) }
                    (render_standings_table(standings.conference(conference), logos, opts))
                }
            }
        }
    }
}
