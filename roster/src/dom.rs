//! A small element tree standing in for the page the roster is drawn on.

use std::fmt::Write;

const VOID_TAGS: &[&str] = &["img", "input", "br", "hr", "meta"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Element {
        Element {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Element {
        self.set_attr(name, value);
        self
    }

    pub fn class(self, class: &str) -> Element {
        self.attr("class", class)
    }

    pub fn data(self, key: &str, value: impl Into<String>) -> Element {
        self.attr(&format!("data-{}", key), value)
    }

    pub fn child(mut self, child: impl Into<Node>) -> Element {
        self.children.push(child.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Element {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.get_attr(&format!("data-{}", key))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn replace_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Every element below this one, depth first, in document order.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_descendants(&mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, found: &mut Vec<&'a Element>) {
        for child in self.child_elements() {
            found.push(child);
            child.collect_descendants(found);
        }
    }

    pub fn find_all(&self, predicate: impl Fn(&Element) -> bool) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|element| predicate(element))
            .collect()
    }

    pub fn find_first_mut(
        &mut self,
        predicate: &dyn Fn(&Element) -> bool,
    ) -> Option<&mut Element> {
        for node in self.children.iter_mut() {
            if let Node::Element(child) = node {
                if predicate(child) {
                    return Some(child);
                }
                if let Some(found) = child.find_first_mut(predicate) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Concatenated text of this element and everything under it.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        for node in &self.children {
            match node {
                Node::Text(t) => text.push_str(t),
                Node::Element(e) => text.push_str(&e.text_content()),
            }
        }
        text
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape(value, true));
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }

        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(&escape(text, false)),
                Node::Element(element) => element.write_html(out),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape(raw: &str, in_attr: bool) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if in_attr => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Named containers of the page that renderers write into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// `<main id="players">`: cards and the detail view.
    Players,
    /// `<form id="new-player-form">`.
    NewPlayerForm,
}

impl Region {
    pub fn element_id(self) -> &'static str {
        match self {
            Region::Players => "players",
            Region::NewPlayerForm => "new-player-form",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    title: String,
    players: Element,
    form: Element,
}

impl Default for Document {
    fn default() -> Self {
        Document::new("Puppy Bowl")
    }
}

impl Document {
    pub fn new(title: &str) -> Document {
        Document {
            title: title.to_string(),
            players: Element::new("main").attr("id", Region::Players.element_id()),
            form: Element::new("form").attr("id", Region::NewPlayerForm.element_id()),
        }
    }

    pub fn region(&self, region: Region) -> &Element {
        match region {
            Region::Players => &self.players,
            Region::NewPlayerForm => &self.form,
        }
    }

    pub fn region_mut(&mut self, region: Region) -> &mut Element {
        match region {
            Region::Players => &mut self.players,
            Region::NewPlayerForm => &mut self.form,
        }
    }

    /// Swaps out everything inside `region`. Nothing from the previous
    /// contents survives.
    pub fn replace_children(&mut self, region: Region, children: Vec<Node>) {
        self.region_mut(region).replace_children(children);
    }

    /// First element in `region` carrying `class`, and `data-id` if given.
    pub fn find_control(&self, region: Region, class: &str, id: Option<&str>) -> Option<&Element> {
        self.region(region)
            .find_all(|element| {
                element.has_class(class) && id.map_or(true, |id| element.get_data("id") == Some(id))
            })
            .into_iter()
            .next()
    }

    /// Sets the `value` of the named input in the form region.
    pub fn set_input_value(&mut self, name: &str, value: &str) -> bool {
        let input = self
            .form
            .find_first_mut(&|e: &Element| e.tag() == "input" && e.get_attr("name") == Some(name));
        match input {
            Some(input) => {
                input.set_attr("value", value);
                true
            }
            None => false,
        }
    }

    pub fn input_value(&self, name: &str) -> Option<&str> {
        self.form
            .find_all(|e| e.tag() == "input" && e.get_attr("name") == Some(name))
            .into_iter()
            .next()
            .map(|input| input.get_attr("value").unwrap_or(""))
    }

    pub fn to_html(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n<h1>{}</h1>\n{}\n{}\n</body></html>\n",
            escape(&self.title, false),
            escape(&self.title, false),
            self.form.to_html(),
            self.players.to_html(),
        )
    }
}
