use maud::{Markup, html};

use crate::model::{LeaderEntry, LeadersHome, StatCode, leader_columns};
use crate::view::utils::{DetailKind, detail_href, empty_placeholder, linked_row};

pub const NO_LEADERS: &str = "No leaders available.";

/// Entries per stat on the home card.
pub const HOME_CARD_LIMIT: usize = 3;

fn player_href(entry: &LeaderEntry) -> Option<String> {
    detail_href(DetailKind::Player, entry.player_id.as_deref())
}

#[must_use]
pub fn render_leaders_card(leaders: &LeadersHome) -> Markup {
    html! {
        div class="leaders-card" {
            @for (stat, entries) in &leaders.by_stat {
                div class="leader-group" data-stat=(stat.code()) {
                    h4 { (stat.label()) }
                    @if entries.is_empty() {
                        (empty_placeholder(NO_LEADERS))
                    } @else {
                        table class="styled-table leaders-mini" {
                            tbody {
                                @for (idx, entry) in entries.iter().take(HOME_CARD_LIMIT).enumerate() {
                                    @let cells = html! {
                                        td class="rank" { (idx + 1) }
                                        td class="player" { (entry.player_name) }
                                        td class="team" { (entry.team) }
                                        td class="value" { (entry.stat(*stat)) }
                                    };
                                    (linked_row(player_href(entry).as_deref(), &cells))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Full leaders table ranked by `ranked_by`, always showing PTS/REB/AST alongside it.
#[must_use]
pub fn render_leaders_table(entries: &[LeaderEntry], ranked_by: StatCode) -> Markup {
    let columns = leader_columns(ranked_by);
    html! {
        @if entries.is_empty() {
            (empty_placeholder(NO_LEADERS))
        } @else {
            table class="styled-table leaders-table" data-stat=(ranked_by.code()) {
                thead {
                    tr {
                        th { "#" }
                        th { "Player" }
                        th { "Team" }
                        @for column in &columns {
                            th class=[(*column == ranked_by).then_some("sorted")] { (column.code()) }
                        }
                    }
                }
                tbody {
                    @for (idx, entry) in entries.iter().enumerate() {
                        @let cells = html! {
                            td class="rank" { (idx + 1) }
                            td class="player" { (entry.player_name) }
                            td class="team" { (entry.team) }
                            @for column in &columns {
                                td class=[(*column == ranked_by).then_some("sorted")] { (entry.stat(*column)) }
                            }
                        };
                        (linked_row(player_href(entry).as_deref(), &cells))
                    }
                }
            }
        }
    }
}

/// The stat selector driving the leaders page.
#[must_use]
pub fn render_stat_filter(selected: StatCode) -> Markup {
    html! {
        label for="stat-filter" { "Stat" }
        select id="stat-filter" name="stat" {
            @for stat in StatCode::all() {
                option value=(stat.code()) selected[stat == selected] { (stat.label()) }
            }
        }
    }
}
