//! Overlay element tree
//!
//! A retained, framework-agnostic tree produced by the layout renderers.
//! Elements carry CSS classes, attributes, inline styles and semantic event
//! bindings, and serialize to HTML with [`Node::to_html`].

use crate::class::ClassList;
use crate::events::{EventKind, OverlayEvent};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt::Write;

/// Tags rendered without a closing tag
const VOID_TAGS: &[&str] = &["img", "source", "br", "hr", "input"];

/// A node in the overlay tree
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with classes, attributes and event bindings
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: &'static str,
    classes: ClassList,
    attrs: Vec<(Cow<'static, str>, Option<String>)>,
    styles: Vec<(&'static str, String)>,
    handlers: SmallVec<[(EventKind, OverlayEvent); 2]>,
    stop_propagation: bool,
    children: Vec<Node>,
}

/// Create an element with an arbitrary tag
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        classes: ClassList::new(),
        attrs: Vec::new(),
        styles: Vec::new(),
        handlers: SmallVec::new(),
        stop_propagation: false,
        children: Vec::new(),
    }
}

pub fn div() -> Element {
    el("div")
}

pub fn span() -> Element {
    el("span")
}

/// Create a text node
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

impl Element {
    // ========================================================================
    // Builder
    // ========================================================================

    pub fn class(mut self, classes: &'static str) -> Self {
        self.classes.add(classes);
        self
    }

    pub fn class_owned(mut self, classes: impl AsRef<str>) -> Self {
        self.classes.add_owned(classes);
        self
    }

    pub fn class_list(mut self, classes: &ClassList) -> Self {
        self.classes.extend(classes);
        self
    }

    pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), Some(value.into())));
        self
    }

    /// Boolean attribute rendered without a value (`autoplay`, `muted`, ...)
    pub fn flag(mut self, name: &'static str) -> Self {
        self.attrs.push((Cow::Borrowed(name), None));
        self
    }

    pub fn style(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.styles.push((property, value.into()));
        self
    }

    pub fn on(mut self, kind: EventKind, event: OverlayEvent) -> Self {
        self.handlers.retain(|(k, _)| *k != kind);
        self.handlers.push((kind, event));
        self
    }

    pub fn on_click(self, event: OverlayEvent) -> Self {
        self.on(EventKind::Click, event)
    }

    /// Clicks inside this element never reach handlers on its ancestors.
    pub fn stop_propagation(mut self) -> Self {
        self.stop_propagation = true;
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn child_opt(mut self, child: Option<impl Into<Node>>) -> Self {
        if let Some(child) = child {
            self.children.push(child.into());
        }
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.classes.contains(token)
    }

    /// Value of an attribute; flags yield `Some("")`.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    pub fn get_style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn handler(&self, kind: EventKind) -> Option<OverlayEvent> {
        self.handlers
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, e)| *e)
    }

    pub fn stops_propagation(&self) -> bool {
        self.stop_propagation
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_element(&mut out, self);
        out
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// All elements in document order, this node included.
    pub fn elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_elements(self, &mut out);
        out
    }

    pub fn find(&self, predicate: impl Fn(&Element) -> bool) -> Option<&Element> {
        self.elements().into_iter().find(|e| predicate(*e))
    }

    pub fn find_all(&self, predicate: impl Fn(&Element) -> bool) -> Vec<&Element> {
        self.elements().into_iter().filter(|e| predicate(*e)).collect()
    }

    /// Element carrying `data-marquee-part="<part>"`.
    pub fn find_part(&self, part: &str) -> Option<&Element> {
        self.find(|e| e.get_attr("data-marquee-part") == Some(part))
    }

    /// Every bound event in document order.
    pub fn events(&self) -> Vec<OverlayEvent> {
        self.elements()
            .into_iter()
            .flat_map(|e| e.handlers.iter().map(|(_, event)| *event))
            .collect()
    }

    /// Concatenated text of this subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_node(&mut out, self);
        out
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<String> for Node {
    fn from(content: String) -> Self {
        Node::Text(content)
    }
}

impl From<&str> for Node {
    fn from(content: &str) -> Self {
        Node::Text(content.to_string())
    }
}

fn collect_elements<'a>(node: &'a Node, out: &mut Vec<&'a Element>) {
    if let Node::Element(element) = node {
        out.push(element);
        for child in &element.children {
            collect_elements(child, out);
        }
    }
}

fn collect_text(node: &Node, out: &mut String) {
    match node {
        Node::Text(content) => out.push_str(content),
        Node::Element(element) => {
            for child in &element.children {
                collect_text(child, out);
            }
        }
    }
}

// ============================================================================
// HTML serialization
// ============================================================================

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(content) => escape_into(out, content, false),
        Node::Element(element) => write_element(out, element),
    }
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(element.tag);

    if !element.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", element.classes);
    }

    for (name, value) in &element.attrs {
        out.push(' ');
        out.push_str(name);
        if let Some(value) = value {
            out.push_str("=\"");
            escape_into(out, value, true);
            out.push('"');
        }
    }

    if !element.styles.is_empty() {
        out.push_str(" style=\"");
        for (i, (property, value)) in element.styles.iter().enumerate() {
            if i > 0 {
                out.push(';');
            }
            out.push_str(property);
            out.push(':');
            escape_into(out, value, true);
        }
        out.push('"');
    }

    for (kind, event) in &element.handlers {
        let _ = write!(out, " {}=\"{}\"", kind.attr_name(), event);
    }
    if element.stop_propagation {
        out.push_str(" data-marquee-stop");
    }

    out.push('>');

    if VOID_TAGS.contains(&element.tag) {
        return;
    }

    for child in &element.children {
        write_node(out, child);
    }

    let _ = write!(out, "</{}>", element.tag);
}

fn escape_into(out: &mut String, raw: &str, attribute: bool) {
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            '\'' if attribute => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_html_serialization() {
        let node: Node = div()
            .class("p-4 flex")
            .attr("data-marquee-part", "root")
            .style("--accent", "#fff")
            .on_click(OverlayEvent::Backdrop)
            .child(span().class("font-bold").child(text("Hi & bye")))
            .into();

        assert_eq!(
            node.to_html(),
            "<div class=\"p-4 flex\" data-marquee-part=\"root\" style=\"--accent:#fff\" \
             data-marquee-click=\"backdrop\"><span class=\"font-bold\">Hi &amp; bye</span></div>"
        );
    }

    #[test]
    fn test_void_tags_and_flags() {
        let html = el("video")
            .flag("autoplay")
            .flag("muted")
            .child(el("source").attr("src", "a.mp4?x=\"1\""))
            .to_html();
        assert_eq!(
            html,
            "<video autoplay muted><source src=\"a.mp4?x=&quot;1&quot;\"></video>"
        );
    }

    #[test]
    fn test_queries() {
        let node: Node = div()
            .child(div().attr("data-marquee-part", "title").child(text("Title")))
            .child(el("button").on_click(OverlayEvent::Action).child(text("Go")))
            .into();

        assert_eq!(node.find_part("title").map(|e| e.tag()), Some("div"));
        assert_eq!(node.events(), vec![OverlayEvent::Action]);
        assert_eq!(node.text_content(), "TitleGo");
        assert_eq!(node.elements().len(), 3);
    }

    #[test]
    fn test_rebinding_replaces_handler() {
        let element = div()
            .on_click(OverlayEvent::Backdrop)
            .on_click(OverlayEvent::Close);
        assert_eq!(element.handler(EventKind::Click), Some(OverlayEvent::Close));
        assert_eq!(element.handler(EventKind::PointerEnter), None);
    }
}
