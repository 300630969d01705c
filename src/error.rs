use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("http error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("{0}")]
    Other(String),
}

impl DashboardError {
    /// Text shown inside a container that failed to load.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::Http { message, .. } => message.clone(),
            DashboardError::Network(_) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            DashboardError::Parse(_) => "The server sent an unexpected response.".to_string(),
            DashboardError::Other(s) => s.clone(),
        }
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<String> for DashboardError {
    fn from(e: String) -> Self {
        Self::Other(e)
    }
}

impl From<&str> for DashboardError {
    fn from(e: &str) -> Self {
        Self::Other(e.to_string())
    }
}
