//! In-process stand-in for the remote player service.

#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use common::models::{Player, PlayerDraft};
use serde_json::json;
use warp::{http::StatusCode, reply::Response, Filter, Reply};

pub const COHORT: &str = "test-cohort";

#[derive(Default)]
struct Roster {
    players: Vec<Player>,
    next_id: i64,
}

#[derive(Clone, Default)]
pub struct StandIn {
    roster: Arc<Mutex<Roster>>,
}

impl StandIn {
    pub fn with_players(players: Vec<Player>) -> StandIn {
        let next_id = players
            .iter()
            .filter_map(|p| p.id.as_str().parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        StandIn {
            roster: Arc::new(Mutex::new(Roster { players, next_id })),
        }
    }

    pub fn players(&self) -> Vec<Player> {
        self.roster.lock().unwrap().players.clone()
    }

    /// Serves the API on an ephemeral port and returns the base url for
    /// `COHORT`.
    pub fn spawn(&self) -> String {
        let (addr, server) =
            warp::serve(self.routes()).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);
        base_url(addr)
    }

    fn routes(&self) -> impl Filter<Extract = (Response,), Error = warp::Rejection> + Clone {
        let list = {
            let roster = self.roster.clone();
            warp::path!("api" / String / "players")
                .and(warp::get())
                .map(move |_cohort: String| {
                    let players = roster.lock().unwrap().players.clone();
                    envelope(StatusCode::OK, json!({ "players": players, "teams": [] }))
                })
        };

        let get = {
            let roster = self.roster.clone();
            warp::path!("api" / String / "players" / String)
                .and(warp::get())
                .map(move |_cohort: String, id: String| {
                    let roster = roster.lock().unwrap();
                    match roster.players.iter().find(|p| p.id.as_str() == id) {
                        Some(player) => envelope(StatusCode::OK, json!({ "player": player })),
                        None => not_found(&id),
                    }
                })
        };

        let create = {
            let roster = self.roster.clone();
            warp::path!("api" / String / "players")
                .and(warp::post())
                .and(warp::body::json())
                .map(move |_cohort: String, draft: PlayerDraft| {
                    let mut roster = roster.lock().unwrap();
                    if draft.name.trim().is_empty() {
                        return failure(StatusCode::BAD_REQUEST, "ValidationError", "name is required");
                    }
                    roster.next_id += 1;
                    let player = Player::new(roster.next_id.to_string().as_str(), draft.name)
                        .with_breed(draft.breed)
                        .with_image_url(draft.image_url);
                    roster.players.push(player.clone());
                    envelope(StatusCode::OK, json!({ "newPlayer": player }))
                })
        };

        let delete = {
            let roster = self.roster.clone();
            warp::path!("api" / String / "players" / String)
                .and(warp::delete())
                .map(move |_cohort: String, id: String| {
                    let mut roster = roster.lock().unwrap();
                    let before = roster.players.len();
                    roster.players.retain(|p| p.id.as_str() != id);
                    if roster.players.len() == before {
                        not_found(&id)
                    } else {
                        envelope(StatusCode::OK, serde_json::Value::Null)
                    }
                })
        };

        list.or(get).unify().or(create).unify().or(delete).unify()
    }
}

fn envelope(status: StatusCode, data: serde_json::Value) -> Response {
    warp::reply::with_status(
        warp::reply::json(&json!({ "success": true, "error": null, "data": data })),
        status,
    )
    .into_response()
}

fn failure(status: StatusCode, name: &str, message: &str) -> Response {
    warp::reply::with_status(
        warp::reply::json(&json!({
            "success": false,
            "error": { "name": name, "message": message },
            "data": null
        })),
        status,
    )
    .into_response()
}

fn not_found(id: &str) -> Response {
    failure(
        StatusCode::NOT_FOUND,
        "PlayerNotFound",
        &format!("No player found with id {}", id),
    )
}

fn base_url(addr: SocketAddr) -> String {
    format!("http://{}/api/{}", addr, COHORT)
}

/// A server whose every answer is a 200 with an HTML body.
pub fn spawn_garbage() -> String {
    let route = warp::any().map(|| warp::reply::html("<html>maintenance</html>"));
    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    base_url(addr)
}

/// A server that answers with well formed but unsuccessful envelopes.
pub fn spawn_rejecting() -> String {
    let route = warp::any().map(|| {
        warp::reply::json(&json!({
            "success": false,
            "error": { "message": "cohort is closed" },
            "data": null
        }))
    });
    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    base_url(addr)
}

/// Base url of a port nobody is listening on.
pub fn unreachable() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    base_url(addr)
}

pub fn seed() -> Vec<Player> {
    vec![
        Player::new("1", "Anise").with_breed("Golden Retriever"),
        Player::new("7", "Crumpet").with_breed("Corgi"),
        Player::new("42", "Biscuit")
            .with_breed("Pug")
            .with_image_url("http://x/biscuit.png"),
    ]
}
