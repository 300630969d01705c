use maud::{DOCTYPE, Markup, html};

use crate::mvu::dashboard::{
    Container, ContainerState, DashboardModel, NavItem, NavTarget, View, nav_items,
};
use crate::view::leaders::render_stat_filter;

pub const PAGE_TITLE: &str = "GameTrack";

fn render_nav_item(item: &NavItem, model: &DashboardModel) -> Markup {
    match &item.target {
        NavTarget::View(view) => html! {
            a.nav-link.active[model.is_visible(*view)] href="#"
                data-view=(view.name()) { (item.label) }
        },
        NavTarget::Url(url) => html! {
            a class="nav-link" href=(url) { (item.label) }
        },
    }
}

fn render_container(model: &DashboardModel, container: Container) -> Markup {
    let body = model
        .state(container)
        .unwrap_or(&ContainerState::Loading)
        .render(container);
    html! {
        div id=(container.dom_id()) class="container-body" { (body) }
    }
}

fn render_view_section(model: &DashboardModel, view: View) -> Markup {
    html! {
        section id=(view.dom_id()) class="view" hidden[!model.is_visible(view)] {
            @match view {
                View::Home => {
                    @if model.layout.has(Container::Scoreboard) {
                        div class="card" {
                            h2 { "Today's Games" }
                            (render_container(model, Container::Scoreboard))
                        }
                    }
                    @if model.layout.has(Container::Standings) {
                        div class="card" {
                            h2 { "Standings" }
                            (render_container(model, Container::Standings))
                        }
                    }
                    @if model.layout.has(Container::LeadersCard) {
                        div class="card" {
                            h2 { "League Leaders" }
                            (render_container(model, Container::LeadersCard))
                        }
                    }
                }
                View::Leaders => {
                    div class="card" {
                        h2 { "League Leaders" }
                        div class="filters" { (render_stat_filter(model.stat)) }
                        (render_container(model, Container::LeadersTable))
                    }
                }
            }
        }
    }
}

/// The whole page as the controller currently sees it: navigation, every view the page
/// has, and any standalone containers such as the teams grid.
#[must_use]
pub fn render_page(model: &DashboardModel) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                link rel="stylesheet" href="/static/styles.css";
                title { (PAGE_TITLE) }
            }
            body {
                nav class="top-nav" {
                    span class="brand" { (PAGE_TITLE) }
                    @for item in nav_items() {
                        (render_nav_item(&item, model))
                    }
                }
                main {
                    @for view in View::ALL {
                        @if model.layout.has_view(view) {
                            (render_view_section(model, view))
                        }
                    }
                    @if model.layout.has(Container::TeamsGrid) {
                        section class="view" id="teams-view" {
                            h2 { "Teams" }
                            (render_container(model, Container::TeamsGrid))
                        }
                    }
                }
            }
        }
    }
}
