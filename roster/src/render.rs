use colored::Colorize;
use common::models::{Player, UNASSIGNED};

use crate::{
    dom::{Document, Element, Node, Region},
    state::ClientState,
};

pub const CARD_CLASS: &str = "puppyCard";
pub const DETAIL_CARD_CLASS: &str = "puppyCard detail";
pub const INFO_BUTTON: &str = "infoButton";
pub const DELETE_BUTTON: &str = "deleteButton";
pub const ALL_BUTTON: &str = "allButton";
pub const EMPTY_MESSAGE: &str = "Sorry, no players on the roster yet.";

const UNKNOWN: &str = "unknown";

/// Form input names, in the order they are rendered.
pub const NAME_INPUT: &str = "name";
pub const BREED_INPUT: &str = "breed";
pub const IMAGE_URL_INPUT: &str = "imageUrl";

fn player_image(player: &Player) -> Element {
    Element::new("img")
        .attr("src", player.image_url.clone().unwrap_or_default())
        .attr("alt", player.image_alt())
}

fn control(class: &str, label: &str, id: Option<&str>) -> Element {
    let button = Element::new("button").attr("type", "button").class(class);
    let button = match id {
        Some(id) => button.data("id", id),
        None => button,
    };
    button.text(label)
}

fn list_card(player: &Player) -> Node {
    let id = player.id.as_str();
    Element::new("li")
        .child(
            Element::new("div")
                .class(CARD_CLASS)
                .data("id", id)
                .child(Element::new("h2").text(format!("Player: {}", player.name)))
                .child(Element::new("p").text(format!("ID: {}", id)))
                .child(player_image(player))
                .child(
                    Element::new("div")
                        .class("buttons")
                        .child(control(INFO_BUTTON, "Info", Some(id)))
                        .child(control(DELETE_BUTTON, "Delete", Some(id))),
                ),
        )
        .into()
}

/// Draws one card per player into the players region, or a single
/// placeholder when there are none.
pub fn render_player_list(state: &ClientState, document: &mut Document) {
    let players = state.players();
    let children = if players.is_empty() {
        vec![Element::new("p").class("empty").text(EMPTY_MESSAGE).into()]
    } else {
        players.iter().map(list_card).collect()
    };
    document.replace_children(Region::Players, children);
}

/// Draws the last fetched player. Without one the card still renders, with
/// placeholder fields.
pub fn render_player_detail(state: &ClientState, document: &mut Document) {
    let player = state.single_player();
    let name = player.map(|p| p.name.as_str()).unwrap_or(UNKNOWN);
    let id = player.map(|p| p.id.as_str()).unwrap_or(UNKNOWN);
    let breed = player
        .and_then(|p| p.breed.as_deref())
        .unwrap_or(UNKNOWN);
    let team = player.map(Player::team_name).unwrap_or(UNASSIGNED);

    let image = match player {
        Some(player) => player_image(player),
        None => Element::new("img").attr("src", "").attr("alt", format!("picture of {}", name)),
    };

    let card = Element::new("li")
        .class(DETAIL_CARD_CLASS)
        .data("id", id)
        .child(Element::new("h2").text(format!("Player: {}", name)))
        .child(Element::new("p").text(format!("ID: {}", id)))
        .child(Element::new("p").text(format!("Breed: {}", breed)))
        .child(Element::new("p").text(format!("Team: {}", team)))
        .child(image)
        .child(control(ALL_BUTTON, "Back to all players", None))
        .child(control(DELETE_BUTTON, "Delete", player.map(|p| p.id.as_str())));

    document.replace_children(Region::Players, vec![card.into()]);
}

fn labeled_input(label: &str, name: &str) -> Node {
    Element::new("label")
        .text(label)
        .child(Element::new("input").attr("type", "text").attr("name", name))
        .into()
}

pub fn render_creation_form(document: &mut Document) {
    document.replace_children(
        Region::NewPlayerForm,
        vec![
            labeled_input("Name", NAME_INPUT),
            labeled_input("Breed", BREED_INPUT),
            labeled_input("Image URL", IMAGE_URL_INPUT),
            Element::new("button")
                .attr("type", "submit")
                .text("Add Puppy")
                .into(),
        ],
    );
}

/// Terminal rendition of the players region.
pub fn outline(document: &Document) -> String {
    let mut lines = Vec::new();
    lines.push(format!("{}", "═".repeat(40).blue()));

    for element in document.region(Region::Players).child_elements() {
        outline_element(element, &mut lines);
    }

    lines.push(format!("{}", "═".repeat(40).blue()));
    lines.join("\n")
}

fn outline_element(element: &Element, lines: &mut Vec<String>) {
    match element.tag() {
        "h2" => lines.push(format!("{}", element.text_content().bold().green())),
        "p" if element.has_class("empty") => {
            lines.push(format!("{}", element.text_content().yellow()))
        }
        "p" => lines.push(format!("  {}", element.text_content())),
        "img" => lines.push(format!(
            "  {} {}",
            "image:".dimmed(),
            element.get_attr("src").unwrap_or_default()
        )),
        "button" => {
            let label = format!("[{}]", element.text_content()).cyan();
            match element.get_data("id") {
                Some(id) => lines.push(format!("  {} {}", label, id.dimmed())),
                None => lines.push(format!("  {}", label)),
            }
        }
        "li" => {
            for child in element.child_elements() {
                outline_element(child, lines);
            }
            lines.push(format!("{}", "─".repeat(40).dimmed()));
        }
        _ => {
            for child in element.child_elements() {
                outline_element(child, lines);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::models::{PlayerId, Team};

    fn state_with(players: Vec<Player>) -> ClientState {
        let mut state = ClientState::new();
        state.replace_players(players);
        state
    }

    fn cards(document: &Document) -> Vec<&Element> {
        document
            .region(Region::Players)
            .find_all(|e| e.has_class(CARD_CLASS))
    }

    #[test]
    fn empty_roster_shows_only_the_placeholder() {
        let mut document = Document::default();
        render_player_list(&ClientState::new(), &mut document);

        let players = document.region(Region::Players);
        assert_eq!(players.children().len(), 1);
        assert_eq!(players.text_content(), EMPTY_MESSAGE);
        assert!(cards(&document).is_empty());
    }

    #[test]
    fn every_player_gets_a_tagged_card() {
        let state = state_with(vec![
            Player::new("1", "Anise").with_image_url("http://x/a.png"),
            Player::new("2", "Biscuit"),
            Player::new("3", "Crumpet"),
        ]);
        let mut document = Document::default();
        render_player_list(&state, &mut document);

        let cards = cards(&document);
        assert_eq!(cards.len(), 3);
        for (card, player) in cards.iter().zip(state.players()) {
            let id = Some(player.id.as_str());
            let info = card.find_all(|e| e.has_class(INFO_BUTTON));
            let delete = card.find_all(|e| e.has_class(DELETE_BUTTON));
            assert_eq!(info.len(), 1);
            assert_eq!(delete.len(), 1);
            assert_eq!(info[0].get_data("id"), id);
            assert_eq!(delete[0].get_data("id"), id);

            let text = card.text_content();
            assert!(text.contains(&player.name));
            assert!(text.contains(&format!("ID: {}", player.id)));

            let img = card.find_all(|e| e.tag() == "img");
            assert_eq!(img[0].get_attr("alt"), Some(player.image_alt().as_str()));
        }
    }

    #[test]
    fn rerendering_the_list_never_accumulates_cards() {
        let mut document = Document::default();
        let state = state_with(vec![Player::new("1", "Anise"), Player::new("2", "Biscuit")]);
        render_player_list(&state, &mut document);
        render_player_list(&state, &mut document);
        assert_eq!(cards(&document).len(), 2);

        render_player_list(&state_with(vec![Player::new("2", "Biscuit")]), &mut document);
        assert_eq!(cards(&document).len(), 1);
        assert!(document
            .find_control(Region::Players, INFO_BUTTON, Some("1"))
            .is_none());
    }

    #[test]
    fn detail_replaces_the_list() {
        let mut state = state_with(vec![Player::new("1", "Anise"), Player::new("2", "Biscuit")]);
        state.replace_single_player(
            Player::new("2", "Biscuit")
                .with_breed("Pug")
                .with_team(Team {
                    id: Some(9),
                    name: "Ruff".to_string(),
                }),
        );
        let mut document = Document::default();
        render_player_list(&state, &mut document);
        render_player_detail(&state, &mut document);

        let players = document.region(Region::Players);
        assert_eq!(players.children().len(), 1);
        assert!(cards(&document).iter().all(|c| c.has_class("detail")));

        let text = players.text_content();
        assert!(text.contains("Player: Biscuit"));
        assert!(text.contains("ID: 2"));
        assert!(text.contains("Breed: Pug"));
        assert!(text.contains("Team: Ruff"));

        assert!(document.find_control(Region::Players, ALL_BUTTON, None).is_some());
        assert!(document
            .find_control(Region::Players, DELETE_BUTTON, Some("2"))
            .is_some());
        assert!(document.find_control(Region::Players, INFO_BUTTON, None).is_none());
    }

    #[test]
    fn detail_without_a_fetched_player_uses_placeholders() {
        let mut document = Document::default();
        render_player_detail(&ClientState::new(), &mut document);

        let text = document.region(Region::Players).text_content();
        assert!(text.contains("Player: unknown"));
        assert!(text.contains("Team: Unassigned"));
        let delete = document
            .find_control(Region::Players, DELETE_BUTTON, None)
            .unwrap();
        assert_eq!(delete.get_data("id"), None);
    }

    #[test]
    fn teamless_player_is_unassigned() {
        let mut state = ClientState::new();
        state.replace_single_player(Player::new(PlayerId::new("5"), "Dot"));
        let mut document = Document::default();
        render_player_detail(&state, &mut document);
        let text = document.region(Region::Players).text_content();
        assert!(text.contains("Team: Unassigned"));
        assert!(text.contains("Breed: unknown"));
    }

    #[test]
    fn creation_form_is_idempotent() {
        let mut document = Document::default();
        render_creation_form(&mut document);
        let first = document.region(Region::NewPlayerForm).clone();
        render_creation_form(&mut document);
        let form = document.region(Region::NewPlayerForm);
        assert_eq!(form, &first);

        for name in [NAME_INPUT, BREED_INPUT, IMAGE_URL_INPUT] {
            let inputs = form.find_all(|e| e.tag() == "input" && e.get_attr("name") == Some(name));
            assert_eq!(inputs.len(), 1, "input {}", name);
        }
        let submits = form.find_all(|e| e.get_attr("type") == Some("submit"));
        assert_eq!(submits.len(), 1);
    }

    #[test]
    fn outline_lists_cards_and_controls() {
        colored::control::set_override(false);
        let mut document = Document::default();
        render_player_list(&state_with(vec![Player::new("7", "Anise")]), &mut document);

        let text = outline(&document);
        assert!(text.contains("Player: Anise"));
        assert!(text.contains("ID: 7"));
        assert!(text.contains("[Info] 7"));
        assert!(text.contains("[Delete] 7"));
    }
}
