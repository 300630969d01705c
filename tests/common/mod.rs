#![allow(dead_code)]

use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use async_trait::async_trait;
use chrono::FixedOffset;
use scraper::{Html, Selector};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use gametrack::view::types::RenderOptions;
use gametrack::{DashboardApi, DashboardError, Resource};

/// In-memory api keyed by resource path. Unknown resources answer 404.
pub struct FakeApi {
    responses: HashMap<String, Result<Value, DashboardError>>,
    calls: Mutex<HashMap<String, usize>>,
    teams_delay: Duration,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            calls: Mutex::new(HashMap::new()),
            teams_delay: Duration::ZERO,
        }
    }

    pub fn ok(mut self, resource: Resource, body: Value) -> Self {
        self.responses.insert(resource.path(), Ok(body));
        self
    }

    pub fn failing(mut self, resource: Resource, err: DashboardError) -> Self {
        self.responses.insert(resource.path(), Err(err));
        self
    }

    pub fn with_teams_delay(mut self, delay: Duration) -> Self {
        self.teams_delay = delay;
        self
    }

    pub fn calls(&self, resource: Resource) -> usize {
        self.calls
            .lock()
            .expect("calls lock")
            .get(&resource.path())
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl DashboardApi for FakeApi {
    async fn fetch(&self, resource: Resource) -> Result<Value, DashboardError> {
        let path = resource.path();
        *self
            .calls
            .lock()
            .expect("calls lock")
            .entry(path.clone())
            .or_default() += 1;
        if resource == Resource::Teams && !self.teams_delay.is_zero() {
            tokio::time::sleep(self.teams_delay).await;
        }
        self.responses.get(&path).cloned().unwrap_or_else(|| {
            Err(DashboardError::Http {
                status: 404,
                message: resource.failure_message(),
            })
        })
    }
}

pub fn utc_options() -> RenderOptions {
    RenderOptions::default().with_offset(FixedOffset::east_opt(0).expect("zero offset"))
}

pub fn texts(doc: &Html, selector: &str) -> Vec<String> {
    let selector = Selector::parse(selector).expect("valid selector");
    doc.select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

pub fn count(doc: &Html, selector: &str) -> usize {
    let selector = Selector::parse(selector).expect("valid selector");
    doc.select(&selector).count()
}

pub fn attrs(doc: &Html, selector: &str, attr: &str) -> Vec<String> {
    let selector = Selector::parse(selector).expect("valid selector");
    doc.select(&selector)
        .filter_map(|el| el.value().attr(attr).map(str::to_string))
        .collect()
}

pub fn scoreboard_body() -> Value {
    json!({
        "games": [
            {
                "gameId": "0022500101",
                "gameStatus": "Final",
                "homeTeam": "Los Angeles Lakers", "homeAbbr": "LAL",
                "homeLogo": "https://cdn.nba.com/logos/nba/1610612747/global/L/logo.svg",
                "awayTeam": "Golden State Warriors", "awayAbbr": "GSW",
                "awayLogo": "https://cdn.nba.com/logos/nba/1610612744/global/L/logo.svg",
                "homeScore": 112, "awayScore": 108,
                "startTimeUTC": "2025-11-02T00:00:00",
                "arena": "Crypto.com Arena"
            },
            {
                "gameId": "0022500102",
                "gameStatus": "3rd Qtr",
                "homeTeam": "Boston Celtics", "homeAbbr": "BOS",
                "awayTeam": "Milwaukee Bucks", "awayAbbr": "MIL",
                "homeScore": 77, "awayScore": 80
            },
            {
                "gameId": "0022500103",
                "gameStatus": "",
                "homeTeam": "Denver Nuggets", "homeAbbr": "DEN",
                "awayTeam": "Phoenix Suns", "awayAbbr": "PHX",
                "startTimeUTC": "2025-11-02T02:30:00Z"
            }
        ]
    })
}

pub fn standings_body() -> Value {
    json!({
        "east": [
            { "TeamName": "Boston Celtics", "TeamID": 1610612738, "WINS": 50, "LOSSES": 22, "GamesBack": 0 },
            { "TeamName": "Milwaukee Bucks", "TeamID": 1610612749, "WINS": 45, "LOSSES": 27, "GamesBack": 5 }
        ],
        "west": [
            { "teamName": "Phoenix Suns", "WINS": 48, "LOSSES": 24, "GamesBack": 0 }
        ]
    })
}

pub fn teams_body() -> Value {
    json!([
        { "id": 1610612738, "full_name": "Boston Celtics", "abbreviation": "BOS",
          "logoUrl": "https://cdn.nba.com/logos/nba/1610612738/global/L/logo.svg" },
        { "id": 1610612749, "full_name": "Milwaukee Bucks", "abbreviation": "MIL" },
        { "full_name": "Mystery Team", "abbreviation": "???", "logoUrl": "/static/mystery.png" }
    ])
}

/// `n` leader records for one stat, in the homepage shape (no identifiers).
pub fn leader_rows(stat: &str, n: usize) -> Value {
    Value::Array(
        (0..n)
            .map(|i| json!({ "PLAYER": format!("Player {i}"), "TEAM": "LAL", stat: 30.0 - i as f64 }))
            .collect(),
    )
}

pub fn leaders_home_body(n: usize) -> Value {
    json!({
        "PTS": leader_rows("PTS", n),
        "REB": leader_rows("REB", n),
        "AST": leader_rows("AST", n),
    })
}

/// `n` full leader records with identifiers, stats and mixed key casing.
pub fn leaders_body(n: usize) -> Value {
    Value::Array(
        (0..n)
            .map(|i| {
                json!({
                    "PLAYER_ID": 2000 + i,
                    "PLAYER_NAME": format!("Player {i}"),
                    "TEAM_ABBREVIATION": "GSW",
                    "PTS": 30 - i as i64,
                    "reb": 5,
                    "AST": 0
                })
            })
            .collect(),
    )
}

#[derive(Clone)]
pub struct CannedRoute {
    pub path: &'static str,
    pub status: u16,
    pub body: String,
}

impl CannedRoute {
    pub fn json(path: &'static str, status: u16, body: &Value) -> Self {
        Self {
            path,
            status,
            body: body.to_string(),
        }
    }

    pub fn raw(path: &'static str, status: u16, body: &str) -> Self {
        Self {
            path,
            status,
            body: body.to_string(),
        }
    }
}

async fn serve_canned(req: HttpRequest, routes: web::Data<Vec<CannedRoute>>) -> HttpResponse {
    match routes.iter().find(|r| r.path == req.path()) {
        Some(route) => HttpResponse::build(
            StatusCode::from_u16(route.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        )
        .content_type("application/json")
        .body(route.body.clone()),
        None => HttpResponse::NotFound().finish(),
    }
}

/// Serves `routes` on an ephemeral local port and returns the origin.
pub async fn spawn_upstream(routes: Vec<CannedRoute>) -> std::io::Result<String> {
    let routes = web::Data::new(routes);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(routes.clone())
            .default_service(web::to(serve_canned))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))?;
    let addr = server
        .addrs()
        .first()
        .copied()
        .ok_or_else(|| std::io::Error::other("server bound no address"))?;
    actix_web::rt::spawn(server.run());
    Ok(format!("http://{addr}"))
}

/// An origin nothing listens on.
pub fn dead_origin() -> std::io::Result<String> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}"))
}
