use futures::StreamExt;
use futures::stream::FuturesUnordered;
use maud::Markup;

use crate::api::DashboardApi;
use crate::logo_cache::LogoCache;
use crate::model::StatCode;
use crate::mvu::dashboard::{DashboardModel, Msg, PageLayout, update};
use crate::mvu::effects::{Deps, run_effect};
use crate::view::page::render_page;
use crate::view::types::RenderOptions;

/// Runs the MVU loop for the dashboard: seeds with `init_msg` and drains effects.
///
/// Effects run concurrently and each result is applied as soon as it arrives, so one slow or
/// failing loader never holds back the others.
pub async fn run_dashboard(model: &mut DashboardModel, init_msg: Msg, deps: Deps<'_>) {
    let mut pending = FuturesUnordered::new();
    for effect in update(model, init_msg) {
        pending.push(run_effect(effect, deps));
    }
    while let Some(msg) = pending.next().await {
        let Some(msg) = msg else { continue };
        for effect in update(model, msg) {
            pending.push(run_effect(effect, deps));
        }
    }
}

/// The controller for one page: owns the api client, the logo cache and the model.
pub struct Dashboard<A: DashboardApi> {
    api: A,
    logos: LogoCache,
    options: RenderOptions,
    model: DashboardModel,
}

impl<A: DashboardApi> Dashboard<A> {
    #[must_use]
    pub fn new(api: A, layout: PageLayout, options: RenderOptions, stat: StatCode) -> Self {
        Self {
            api,
            logos: LogoCache::new(),
            options,
            model: DashboardModel::new(layout, stat),
        }
    }

    pub async fn dispatch(&mut self, msg: Msg) {
        let deps = Deps {
            api: &self.api,
            logos: &self.logos,
            options: &self.options,
        };
        run_dashboard(&mut self.model, msg, deps).await;
    }

    #[must_use]
    pub fn model(&self) -> &DashboardModel {
        &self.model
    }

    #[must_use]
    pub fn logos(&self) -> &LogoCache {
        &self.logos
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub fn render(&self) -> Markup {
        render_page(&self.model)
    }
}
