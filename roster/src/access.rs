//! The four calls against the player service.
//!
//! Each one logs its own failure and hands the error back untouched; only
//! [`list_players`] and [`get_player`] write to [`ClientState`], and only on
//! success.

use common::models::{DeleteEnvelope, Player, PlayerDraft, PlayerEnvelope, PlayerId};
use tracing::{error, info};

use crate::{
    error::{ApiError, ApiResult},
    service::PlayerService,
    state::ClientState,
};

pub async fn list_players<S: PlayerService>(
    service: &S,
    state: &mut ClientState,
) -> ApiResult<Vec<Player>> {
    let result = service.fetch_players().await.and_then(|envelope| {
        envelope
            .data
            .map(|data| data.players)
            .ok_or_else(|| ApiError::missing("data.players"))
    });

    match result {
        Ok(players) => {
            info!(count = players.len(), "Fetched players");
            state.replace_players(players.clone());
            Ok(players)
        }
        Err(err) => {
            error!(error = %err, "Trouble fetching players");
            Err(err)
        }
    }
}

pub async fn get_player<S: PlayerService>(
    service: &S,
    state: &mut ClientState,
    id: &PlayerId,
) -> ApiResult<PlayerEnvelope> {
    let result = service.fetch_player(id).await.and_then(|envelope| {
        let player = envelope
            .data
            .as_ref()
            .map(|data| data.player.clone())
            .ok_or_else(|| ApiError::missing("data.player"))?;
        Ok((envelope, player))
    });

    match result {
        Ok((envelope, player)) => {
            info!(player_id = %id, name = %player.name, "Fetched player");
            state.replace_single_player(player);
            Ok(envelope)
        }
        Err(err) => {
            error!(player_id = %id, error = %err, "Trouble fetching player");
            Err(err)
        }
    }
}

/// Does not refresh the roster; callers list again afterwards.
pub async fn create_player<S: PlayerService>(service: &S, draft: &PlayerDraft) -> ApiResult<Player> {
    let result = service.add_player(draft).await.and_then(|envelope| {
        envelope
            .data
            .map(|data| data.new_player)
            .ok_or_else(|| ApiError::missing("data.newPlayer"))
    });

    match result {
        Ok(player) => {
            info!(player_id = %player.id, name = %player.name, "Added player");
            Ok(player)
        }
        Err(err) => {
            error!(name = %draft.name, error = %err, "Something went wrong adding player");
            Err(err)
        }
    }
}

/// Does not refresh the roster; callers list again afterwards.
pub async fn delete_player<S: PlayerService>(
    service: &S,
    id: &PlayerId,
) -> ApiResult<DeleteEnvelope> {
    match service.remove_player(id).await {
        Ok(ack) => {
            info!(player_id = %id, "Removed player from the roster");
            Ok(ack)
        }
        Err(err) => {
            error!(player_id = %id, error = %err, "Trouble removing player from the roster");
            Err(err)
        }
    }
}
