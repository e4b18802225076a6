use common::models::Player;

/// What was last fetched from the player service.
///
/// Only the fetch operations in [`crate::access`] write here, and always by
/// replacing a whole slot. Renderers only read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientState {
    players: Vec<Player>,
    single_player: Option<Player>,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn single_player(&self) -> Option<&Player> {
        self.single_player.as_ref()
    }

    pub(crate) fn replace_players(&mut self, players: Vec<Player>) {
        self.players = players;
    }

    pub(crate) fn replace_single_player(&mut self, player: Player) {
        self.single_player = Some(player);
    }
}
