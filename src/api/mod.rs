pub mod client;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::DashboardError;
use crate::model::StatCode;

pub use client::HttpDashboardApi;

/// One upstream resource and the relative path it lives at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Scoreboard,
    Standings,
    LeadersHomepage,
    LeadersByStat(StatCode),
    Teams,
}

impl Resource {
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Resource::Scoreboard => "/api/games/scoreboard".to_string(),
            Resource::Standings => "/api/standings".to_string(),
            Resource::LeadersHomepage => "/api/leaders/homepage".to_string(),
            Resource::LeadersByStat(stat) => {
                format!("/api/leaders/{}", stat.code().to_uppercase())
            }
            Resource::Teams => "/api/teams".to_string(),
        }
    }

    /// Used when a failed response carries no message of its own.
    #[must_use]
    pub fn failure_message(self) -> String {
        match self {
            Resource::Scoreboard => "Failed to load scoreboard".to_string(),
            Resource::Standings => "Failed to load standings".to_string(),
            Resource::LeadersHomepage => "Failed to load league leaders".to_string(),
            Resource::LeadersByStat(stat) => format!("Failed to load {} leaders", stat.code()),
            Resource::Teams => "Failed to load teams".to_string(),
        }
    }
}

/// Fire-once access to the dashboard api. Bodies come back as parsed JSON, unshaped; callers
/// pick the collection out of them.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn fetch(&self, resource: Resource) -> Result<Value, DashboardError>;

    async fn scoreboard(&self) -> Result<Value, DashboardError> {
        self.fetch(Resource::Scoreboard).await
    }

    async fn standings(&self) -> Result<Value, DashboardError> {
        self.fetch(Resource::Standings).await
    }

    async fn leaders_homepage(&self) -> Result<Value, DashboardError> {
        self.fetch(Resource::LeadersHomepage).await
    }

    async fn leaders_by_stat(&self, stat: StatCode) -> Result<Value, DashboardError> {
        self.fetch(Resource::LeadersByStat(stat)).await
    }

    async fn teams(&self) -> Result<Value, DashboardError> {
        self.fetch(Resource::Teams).await
    }
}
