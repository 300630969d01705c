use maud::{Markup, html};

use crate::model::TeamSummary;
use crate::view::types::RenderOptions;
use crate::view::utils::{DetailKind, detail_href, empty_placeholder, logo_img};

pub const NO_TEAMS: &str = "No teams available.";

#[must_use]
pub fn render_team_card(team: &TeamSummary, opts: &RenderOptions) -> Markup {
    let body = html! {
        (logo_img(team.logo.as_deref(), &team.name, "team-logo-lg", opts))
        div class="team-name" { (team.name) }
        div class="team-abbr" { (team.abbreviation) }
    };
    html! {
        @if let Some(href) = detail_href(DetailKind::Team, team.id.as_deref()) {
            a class="team-card clickable" href=(href) { (body) }
        } @else {
            div class="team-card" { (body) }
        }
    }
}

#[must_use]
pub fn render_teams_grid(teams: &[TeamSummary], opts: &RenderOptions) -> Markup {
    html! {
        @if teams.is_empty() {
            (empty_placeholder(NO_TEAMS))
        } @else {
            div class="teams-grid" {
                @for team in teams {
                    (render_team_card(team, opts))
                }
            }
        }
    }
}
