use common::models::{PlayerDraft, PlayerId};
use tracing::{debug, warn};

use crate::{
    access,
    dom::{Document, Element, Region},
    render::{self, ALL_BUTTON, BREED_INPUT, DELETE_BUTTON, IMAGE_URL_INPUT, INFO_BUTTON, NAME_INPUT},
    service::PlayerService,
    state::ClientState,
};

/// What a click on the players region asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ShowDetail(PlayerId),
    Delete(PlayerId),
    BackToAll,
}

impl Action {
    /// Routes a clicked element by its role class and `data-id`. Anything
    /// that is not one of our controls yields `None`.
    pub fn from_target(target: &Element) -> Option<Action> {
        let id = || target.get_data("id").map(PlayerId::new);

        if target.has_class(DELETE_BUTTON) {
            id().map(Action::Delete)
        } else if target.has_class(INFO_BUTTON) {
            id().map(Action::ShowDetail)
        } else if target.has_class(ALL_BUTTON) {
            Some(Action::BackToAll)
        } else {
            None
        }
    }
}

/// A user gesture against the document.
#[derive(Debug, Clone)]
pub enum Gesture {
    Click(Element),
    Submit,
}

/// Owns the service, the client state and the page, and runs each gesture
/// to completion before returning.
pub struct Controller<S> {
    service: S,
    state: ClientState,
    document: Document,
}

impl<S: PlayerService> Controller<S> {
    pub fn new(service: S) -> Self {
        Controller {
            service,
            state: ClientState::new(),
            document: Document::default(),
        }
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Fetches the roster and draws the list and the creation form.
    pub async fn init(&mut self) {
        self.refresh().await;
        render::render_creation_form(&mut self.document);
    }

    /// Lists again and redraws the list. A failed fetch redraws stale data.
    pub async fn refresh(&mut self) {
        if let Err(err) = access::list_players(&self.service, &mut self.state).await {
            warn!(error = %err, "Showing last known roster");
        }
        render::render_player_list(&self.state, &mut self.document);
    }

    pub async fn dispatch(&mut self, gesture: Gesture) -> bool {
        match gesture {
            Gesture::Click(target) => self.on_click(&target).await,
            Gesture::Submit => {
                self.on_submit().await;
                true
            }
        }
    }

    /// Delegated click handler for the players region. Returns whether the
    /// target was one of our controls.
    pub async fn on_click(&mut self, target: &Element) -> bool {
        match Action::from_target(target) {
            Some(action) => {
                self.perform(action).await;
                true
            }
            None => {
                debug!(tag = target.tag(), "Ignoring click outside of controls");
                false
            }
        }
    }

    pub async fn perform(&mut self, action: Action) {
        debug!(?action, "Handling action");
        match action {
            Action::Delete(id) => {
                if let Err(err) = access::delete_player(&self.service, &id).await {
                    warn!(player_id = %id, error = %err, "Delete did not go through");
                }
                self.init().await;
            }
            Action::ShowDetail(id) => {
                if let Err(err) = access::get_player(&self.service, &mut self.state, &id).await {
                    warn!(player_id = %id, error = %err, "Showing last fetched player");
                }
                render::render_player_detail(&self.state, &mut self.document);
            }
            // Redraws from what is already held, no fetch.
            Action::BackToAll => render::render_player_list(&self.state, &mut self.document),
        }
    }

    /// Finds the control with `class` (and `data-id`) currently on screen and
    /// clicks it. Returns false when no such control is showing.
    pub async fn click(&mut self, class: &str, id: Option<&str>) -> bool {
        let target = self
            .document
            .find_control(Region::Players, class, id)
            .cloned();
        match target {
            Some(target) => self.on_click(&target).await,
            None => false,
        }
    }

    pub fn fill_form(&mut self, draft: &PlayerDraft) -> bool {
        self.document.set_input_value(NAME_INPUT, &draft.name)
            && self.document.set_input_value(BREED_INPUT, &draft.breed)
            && self.document.set_input_value(IMAGE_URL_INPUT, &draft.image_url)
    }

    /// Reads the form into a draft as it stands.
    pub fn draft_from_form(&self) -> PlayerDraft {
        let value = |name| self.document.input_value(name).unwrap_or("").to_string();
        PlayerDraft::new(value(NAME_INPUT), value(BREED_INPUT), value(IMAGE_URL_INPUT))
    }

    /// Creates a player from the form, then lists and redraws whatever the
    /// outcome of the create was.
    pub async fn on_submit(&mut self) {
        let draft = self.draft_from_form();
        if let Err(err) = access::create_player(&self.service, &draft).await {
            warn!(name = %draft.name, error = %err, "Player was not added");
        }
        self.refresh().await;
    }
}
