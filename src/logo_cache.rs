use ahash::RandomState;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::api::DashboardApi;
use crate::error::DashboardError;
use crate::model::{TeamSummary, teams_from_body};

/// Team identifier to logo URL.
pub type LogoMap = HashMap<String, String, RandomState>;

/// Lazily populated team logo lookup, owned by the dashboard for its whole session.
///
/// The first caller fetches the team list; callers arriving while that fetch is in flight
/// wait on it instead of fetching again. A failed fetch leaves the cache empty so a later
/// load can try again.
#[derive(Debug, Default)]
pub struct LogoCache {
    cell: Mutex<Arc<OnceCell<LogoMap>>>,
}

impl LogoCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn current(&self) -> Arc<OnceCell<LogoMap>> {
        match self.cell.lock() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Populates the cache on first use and returns a lookup over it. Never fails: when the
    /// team list cannot be loaded the lookup is empty and every logo falls back.
    pub async fn ensure(&self, api: &dyn DashboardApi) -> LogoLookup {
        let cell = self.current();
        let populated = cell
            .get_or_try_init(|| async {
                let body = api.teams().await?;
                let map = logo_map(&teams_from_body(&body));
                debug!(teams = map.len(), "logo cache populated");
                Ok::<_, DashboardError>(map)
            })
            .await;
        if let Err(e) = populated {
            warn!(error = %e, "logo cache population failed; using placeholder logos");
        }
        LogoLookup { cell }
    }

    /// Lookup over whatever is cached right now, without fetching.
    #[must_use]
    pub fn snapshot(&self) -> LogoLookup {
        LogoLookup {
            cell: self.current(),
        }
    }

    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.current().initialized()
    }

    /// Drops the cached map; the next `ensure` fetches again.
    pub fn clear(&self) {
        let fresh = Arc::new(OnceCell::new());
        match self.cell.lock() {
            Ok(mut guard) => *guard = fresh,
            Err(poisoned) => *poisoned.into_inner() = fresh,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LogoLookup {
    cell: Arc<OnceCell<LogoMap>>,
}

impl LogoLookup {
    #[must_use]
    pub fn logo_for(&self, team_id: Option<&str>) -> Option<&str> {
        let id = team_id?;
        self.cell.get()?.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cell.get().map_or(0, HashMap::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<LogoMap> for LogoLookup {
    fn from(map: LogoMap) -> Self {
        Self {
            cell: Arc::new(OnceCell::from(map)),
        }
    }
}

/// Teams without an identifier or a logo are left out.
#[must_use]
pub fn logo_map(teams: &[TeamSummary]) -> LogoMap {
    teams
        .iter()
        .filter_map(|team| Some((team.id.clone()?, team.logo.clone()?)))
        .collect()
}
