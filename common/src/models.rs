use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Label shown for players without a team.
pub const UNASSIGNED: &str = "Unassigned";

/// Opaque player identifier.
///
/// The service sends ids as JSON numbers, but they are only ever used as
/// lookup keys, so both numbers and strings are accepted and kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> PlayerId {
        PlayerId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        PlayerId::new(id)
    }
}

impl From<i64> for PlayerId {
    fn from(id: i64) -> Self {
        PlayerId(id.to_string())
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => PlayerId::from(n),
            RawId::Text(s) => PlayerId(s),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
}

/// A contest participant as the service reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    /// `field` or `bench`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cohort_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Player {
        Player {
            id: id.into(),
            name: name.into(),
            breed: None,
            status: None,
            image_url: None,
            team_id: None,
            cohort_id: None,
            team: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_breed(mut self, breed: impl Into<String>) -> Player {
        self.breed = Some(breed.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Player {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_team(mut self, team: Team) -> Player {
        self.team_id = team.id;
        self.team = Some(team);
        self
    }

    pub fn team_name(&self) -> &str {
        self.team
            .as_ref()
            .map(|team| team.name.as_str())
            .unwrap_or(UNASSIGNED)
    }

    pub fn image_alt(&self) -> String {
        format!("picture of {}", self.name)
    }
}

/// Form input for a player that does not exist yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDraft {
    pub name: String,
    pub breed: String,
    pub image_url: String,
}

impl PlayerDraft {
    pub fn new(
        name: impl Into<String>,
        breed: impl Into<String>,
        image_url: impl Into<String>,
    ) -> PlayerDraft {
        PlayerDraft {
            name: name.into(),
            breed: breed.into(),
            image_url: image_url.into(),
        }
    }
}

/// Outer structure of every service response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    pub error: Option<Value>,
    pub data: Option<T>,
}

fn default_success() -> bool {
    true
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Envelope<T> {
        Envelope {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    /// Human readable reason from the `error` member, if there is one.
    pub fn error_message(&self) -> Option<String> {
        let error = self.error.as_ref()?;
        match error {
            Value::Null => None,
            Value::String(message) => Some(message.clone()),
            Value::Object(fields) => Some(
                fields
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| error.to_string()),
            ),
            other => Some(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayersData {
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerData {
    pub player: Player,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayerData {
    pub new_player: Player,
}

pub type PlayersEnvelope = Envelope<PlayersData>;
pub type PlayerEnvelope = Envelope<PlayerData>;
pub type NewPlayerEnvelope = Envelope<NewPlayerData>;
/// Deletion acknowledgments carry no fixed shape.
pub type DeleteEnvelope = Envelope<Value>;
