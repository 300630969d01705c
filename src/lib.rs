pub mod api;
pub mod args;
pub mod error;
pub mod logo_cache;
pub mod model;
pub mod view;

pub mod mvu {
    pub mod dashboard;
    pub mod effects;
    pub mod runtime;
}

pub use api::{DashboardApi, HttpDashboardApi, Resource};
pub use error::DashboardError;
pub use logo_cache::LogoCache;
pub use mvu::dashboard::{Container, ContainerState, Msg, NavTarget, PageLayout, View};
pub use mvu::runtime::Dashboard;
