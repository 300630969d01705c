use maud::Markup;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, warn};

use crate::model::StatCode;
use crate::view::utils::{error_placeholder, loading_placeholder};

/// Mutually exclusive regions of the dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum View {
    Home,
    Leaders,
}

impl View {
    pub const ALL: [View; 2] = [View::Home, View::Leaders];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Leaders => "leaders",
        }
    }

    #[must_use]
    pub fn dom_id(self) -> &'static str {
        match self {
            View::Home => "home-view",
            View::Leaders => "leaders-view",
        }
    }

    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        View::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(input.trim()))
    }
}

/// A region one loader renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Container {
    Scoreboard,
    Standings,
    LeadersCard,
    LeadersTable,
    TeamsGrid,
}

impl Container {
    #[must_use]
    pub fn dom_id(self) -> &'static str {
        match self {
            Container::Scoreboard => "scoreboard",
            Container::Standings => "standings",
            Container::LeadersCard => "leaders-card",
            Container::LeadersTable => "leaders-table",
            Container::TeamsGrid => "teams-grid",
        }
    }

    /// What the loading placeholder names.
    #[must_use]
    pub fn subject(self) -> &'static str {
        match self {
            Container::Scoreboard => "scoreboard",
            Container::Standings => "standings",
            Container::LeadersCard | Container::LeadersTable => "leaders",
            Container::TeamsGrid => "teams",
        }
    }

    /// The view a container belongs to. The teams grid lives on its own page.
    #[must_use]
    pub fn view(self) -> Option<View> {
        match self {
            Container::Scoreboard | Container::Standings | Container::LeadersCard => {
                Some(View::Home)
            }
            Container::LeadersTable => Some(View::Leaders),
            Container::TeamsGrid => None,
        }
    }
}

/// Which containers the current page actually has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    containers: BTreeSet<Container>,
}

impl PageLayout {
    #[must_use]
    pub fn new(containers: impl IntoIterator<Item = Container>) -> Self {
        Self {
            containers: containers.into_iter().collect(),
        }
    }

    /// The dashboard page: both views.
    #[must_use]
    pub fn home_page() -> Self {
        Self::new([
            Container::Scoreboard,
            Container::Standings,
            Container::LeadersCard,
            Container::LeadersTable,
        ])
    }

    #[must_use]
    pub fn leaders_page() -> Self {
        Self::new([Container::LeadersTable])
    }

    #[must_use]
    pub fn teams_page() -> Self {
        Self::new([Container::TeamsGrid])
    }

    #[must_use]
    pub fn has(&self, container: Container) -> bool {
        self.containers.contains(&container)
    }

    #[must_use]
    pub fn has_view(&self, view: View) -> bool {
        self.containers.iter().any(|c| c.view() == Some(view))
    }

    pub fn containers(&self) -> impl Iterator<Item = Container> + '_ {
        self.containers.iter().copied()
    }

    pub fn containers_of(&self, view: View) -> impl Iterator<Item = Container> + '_ {
        self.containers().filter(move |c| c.view() == Some(view))
    }
}

#[derive(Debug, Clone)]
pub enum ContainerState {
    Loading,
    Ready(Markup),
    /// Rendered, but from a well-formed response with no records.
    Empty(Markup),
    Failed(String),
}

impl ContainerState {
    #[must_use]
    pub fn render(&self, container: Container) -> Markup {
        match self {
            ContainerState::Loading => loading_placeholder(container.subject()),
            ContainerState::Ready(markup) | ContainerState::Empty(markup) => markup.clone(),
            ContainerState::Failed(message) => error_placeholder(message),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, ContainerState::Loading)
    }
}

#[derive(Debug, Clone)]
pub enum LoadOutcome {
    Content(Markup),
    Empty(Markup),
    Failed(String),
}

impl From<LoadOutcome> for ContainerState {
    fn from(outcome: LoadOutcome) -> Self {
        match outcome {
            LoadOutcome::Content(markup) => ContainerState::Ready(markup),
            LoadOutcome::Empty(markup) => ContainerState::Empty(markup),
            LoadOutcome::Failed(message) => ContainerState::Failed(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// Switch views in place.
    View(View),
    /// Leave the page.
    Url(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: NavTarget,
}

#[must_use]
pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem {
            label: "Home",
            target: NavTarget::View(View::Home),
        },
        NavItem {
            label: "Leaders",
            target: NavTarget::View(View::Leaders),
        },
        NavItem {
            label: "Teams",
            target: NavTarget::Url("/teams".to_string()),
        },
        NavItem {
            label: "Charts",
            target: NavTarget::Url("/charts".to_string()),
        },
    ]
}

#[derive(Debug, Clone)]
pub struct DashboardModel {
    pub layout: PageLayout,
    pub active_view: Option<View>,
    /// Bumped on every view activation; loads issued under an older value are stale.
    pub generation: u64,
    pub stat: StatCode,
    pub containers: BTreeMap<Container, ContainerState>,
    pub navigated_to: Option<String>,
}

impl DashboardModel {
    #[must_use]
    pub fn new(layout: PageLayout, stat: StatCode) -> Self {
        let containers = layout
            .containers()
            .map(|c| (c, ContainerState::Loading))
            .collect();
        Self {
            layout,
            active_view: None,
            generation: 0,
            stat,
            containers,
            navigated_to: None,
        }
    }

    #[must_use]
    pub fn state(&self, container: Container) -> Option<&ContainerState> {
        self.containers.get(&container)
    }

    #[must_use]
    pub fn is_visible(&self, view: View) -> bool {
        self.active_view == Some(view)
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    Startup,
    Navigate(NavTarget),
    SelectStat(StatCode),
    Loaded {
        container: Container,
        generation: u64,
        outcome: LoadOutcome,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadScoreboard { generation: u64 },
    LoadStandings { generation: u64 },
    LoadLeadersCard { generation: u64 },
    LoadLeaders { generation: u64, stat: StatCode },
    LoadTeams { generation: u64 },
    FullNavigation(String),
}

fn load_effect(container: Container, generation: u64, stat: StatCode) -> Effect {
    match container {
        Container::Scoreboard => Effect::LoadScoreboard { generation },
        Container::Standings => Effect::LoadStandings { generation },
        Container::LeadersCard => Effect::LoadLeadersCard { generation },
        Container::LeadersTable => Effect::LoadLeaders { generation, stat },
        Container::TeamsGrid => Effect::LoadTeams { generation },
    }
}

/// Shows `view`, hides the rest, and reloads every container of `view` on this page.
fn activate(model: &mut DashboardModel, view: View) -> Vec<Effect> {
    if !model.layout.has_view(view) {
        warn!(view = view.name(), "view has no container on this page; ignoring");
        return vec![];
    }
    model.active_view = Some(view);
    model.generation += 1;
    debug!(view = view.name(), generation = model.generation, "view activated");

    let targets: Vec<Container> = model.layout.containers_of(view).collect();
    targets
        .into_iter()
        .map(|container| {
            model.containers.insert(container, ContainerState::Loading);
            load_effect(container, model.generation, model.stat)
        })
        .collect()
}

pub fn update(model: &mut DashboardModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::Startup => {
            if model.layout.has_view(View::Home) {
                return activate(model, View::Home);
            }
            let mut effects = Vec::new();
            if model.layout.has_view(View::Leaders) {
                effects.extend(activate(model, View::Leaders));
            }
            if model.layout.has(Container::TeamsGrid) {
                model
                    .containers
                    .insert(Container::TeamsGrid, ContainerState::Loading);
                effects.push(Effect::LoadTeams {
                    generation: model.generation,
                });
            }
            effects
        }
        Msg::Navigate(NavTarget::View(view)) => activate(model, view),
        Msg::Navigate(NavTarget::Url(url)) => {
            info!(%url, "full navigation");
            model.navigated_to = Some(url.clone());
            vec![Effect::FullNavigation(url)]
        }
        Msg::SelectStat(stat) => {
            model.stat = stat;
            if model.is_visible(View::Leaders) {
                activate(model, View::Leaders)
            } else {
                vec![]
            }
        }
        Msg::Loaded {
            container,
            generation,
            outcome,
        } => {
            if !model.layout.has(container) {
                return vec![];
            }
            if container.view().is_some() && generation != model.generation {
                debug!(
                    container = container.dom_id(),
                    generation,
                    current = model.generation,
                    "discarding stale load"
                );
                return vec![];
            }
            model.containers.insert(container, outcome.into());
            vec![]
        }
    }
}
