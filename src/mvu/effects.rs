use maud::Markup;
use tracing::{debug, info, warn};

use crate::api::DashboardApi;
use crate::error::DashboardError;
use crate::logo_cache::LogoCache;
use crate::model::{
    StatCode, games_from_scoreboard, leaders_from_body, leaders_home_from_body,
    standings_from_body, teams_from_body,
};
use crate::mvu::dashboard::{Container, Effect, LoadOutcome, Msg};
use crate::view::leaders::{render_leaders_card, render_leaders_table};
use crate::view::scoreboard::render_scoreboard;
use crate::view::standings::render_standings;
use crate::view::teams::render_teams_grid;
use crate::view::types::RenderOptions;

#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub api: &'a dyn DashboardApi,
    pub logos: &'a LogoCache,
    pub options: &'a RenderOptions,
}

fn rendered(is_empty: bool, markup: Markup) -> LoadOutcome {
    if is_empty {
        LoadOutcome::Empty(markup)
    } else {
        LoadOutcome::Content(markup)
    }
}

fn failed(container: Container, err: &DashboardError) -> LoadOutcome {
    warn!(container = container.dom_id(), error = %err, "load failed");
    LoadOutcome::Failed(err.user_message())
}

pub async fn load_scoreboard(deps: Deps<'_>) -> LoadOutcome {
    match deps.api.scoreboard().await {
        Ok(body) => {
            let games = games_from_scoreboard(&body);
            debug!(games = games.len(), "scoreboard loaded");
            rendered(games.is_empty(), render_scoreboard(&games, deps.options))
        }
        Err(e) => failed(Container::Scoreboard, &e),
    }
}

pub async fn load_standings(deps: Deps<'_>) -> LoadOutcome {
    match deps.api.standings().await {
        Ok(body) => {
            let standings = standings_from_body(&body);
            // logos resolve before rendering so every row sees the same map
            let logos = deps.logos.ensure(deps.api).await;
            rendered(
                standings.is_empty(),
                render_standings(&standings, &logos, deps.options),
            )
        }
        Err(e) => failed(Container::Standings, &e),
    }
}

pub async fn load_leaders_card(deps: Deps<'_>) -> LoadOutcome {
    match deps.api.leaders_homepage().await {
        Ok(body) => {
            let leaders = leaders_home_from_body(&body);
            rendered(leaders.is_empty(), render_leaders_card(&leaders))
        }
        Err(e) => failed(Container::LeadersCard, &e),
    }
}

pub async fn load_leaders(deps: Deps<'_>, stat: StatCode) -> LoadOutcome {
    match deps.api.leaders_by_stat(stat).await {
        Ok(body) => {
            let entries = leaders_from_body(&body, stat);
            debug!(stat = stat.code(), entries = entries.len(), "leaders loaded");
            rendered(entries.is_empty(), render_leaders_table(&entries, stat))
        }
        Err(e) => failed(Container::LeadersTable, &e),
    }
}

pub async fn load_teams(deps: Deps<'_>) -> LoadOutcome {
    match deps.api.teams().await {
        Ok(body) => {
            let teams = teams_from_body(&body);
            rendered(teams.is_empty(), render_teams_grid(&teams, deps.options))
        }
        Err(e) => failed(Container::TeamsGrid, &e),
    }
}

/// Runs one effect. Loads always answer with a message, failed or not; full navigation has
/// nothing to report back.
pub async fn run_effect(effect: Effect, deps: Deps<'_>) -> Option<Msg> {
    let (container, generation, outcome) = match effect {
        Effect::LoadScoreboard { generation } => {
            (Container::Scoreboard, generation, load_scoreboard(deps).await)
        }
        Effect::LoadStandings { generation } => {
            (Container::Standings, generation, load_standings(deps).await)
        }
        Effect::LoadLeadersCard { generation } => {
            (Container::LeadersCard, generation, load_leaders_card(deps).await)
        }
        Effect::LoadLeaders { generation, stat } => {
            (Container::LeadersTable, generation, load_leaders(deps, stat).await)
        }
        Effect::LoadTeams { generation } => {
            (Container::TeamsGrid, generation, load_teams(deps).await)
        }
        Effect::FullNavigation(url) => {
            info!(%url, "leaving the dashboard page");
            return None;
        }
    };
    Some(Msg::Loaded {
        container,
        generation,
        outcome,
    })
}
