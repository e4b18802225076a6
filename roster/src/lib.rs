pub mod access;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod render;
pub mod service;
pub mod shell;
pub mod state;

pub use config::Config;
pub use controller::{Action, Controller, Gesture};
pub use error::{ApiError, ApiResult};
pub use service::{HttpPlayerService, PlayerService};
pub use state::ClientState;
