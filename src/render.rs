//! Framework-independent description of a rendered progress ring.
//!
//! [`render_progress_circle`] turns a [`ProgressSpec`] into a small tree of
//! elements. The Yew component converts that tree into virtual DOM; the
//! `Display` impl writes it out as markup.

use std::fmt::{self, Write};

use crate::attrs::PassthroughAttrs;
use crate::classes::merge_classes;
use crate::geometry::{percent_label, ProgressSpec, RingGeometry};

pub const CONTAINER_CLASS: &str = "relative inline-flex items-center justify-center";
pub const PROGRESS_CLASS: &str = "transition-all duration-300 ease-in-out";
pub const LABEL_CLASS: &str = "absolute text-sm font-medium";

pub const TRACK_COLOR: &str = "#e5e7eb";
pub const PROGRESS_COLOR: &str = "#3b82f6";

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    fn attr_value(mut self, name: &'static str, value: impl ToString) -> Self {
        self.attrs.push((name, value.to_string()));
        self
    }

    fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    /// First element with the given tag, depth-first, including `self`.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        match self {
            Node::Element(element) if element.tag == tag => Some(element),
            Node::Element(element) => element.children.iter().find_map(|child| child.find(tag)),
            Node::Text(_) => None,
        }
    }

    pub fn find_all<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        if let Node::Element(element) = self {
            if element.tag == tag {
                found.push(element);
            }
            for child in &element.children {
                child.find_all(tag, found);
            }
        }
    }

    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element.children.iter().map(Node::text_content).collect(),
        }
    }
}

fn escape(out: &mut fmt::Formatter<'_>, text: &str, in_attr: bool) -> fmt::Result {
    for c in text.chars() {
        match c {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' if in_attr => out.write_str("&quot;")?,
            c => out.write_char(c)?,
        }
    }
    Ok(())
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(text) => escape(f, text, false),
            Node::Element(element) => {
                write!(f, "<{}", element.tag)?;
                for (name, value) in &element.attrs {
                    write!(f, " {}=\"", name)?;
                    escape(f, value, true)?;
                    f.write_char('"')?;
                }
                f.write_char('>')?;
                for child in &element.children {
                    write!(f, "{}", child)?;
                }
                write!(f, "</{}>", element.tag)
            }
        }
    }
}

/// Builds the ring: a sized container holding a rotated SVG with a track
/// circle and a progress circle, plus the percentage label when enabled.
///
/// `class` and `attrs["class"]` are merged after the container's own classes.
/// `attrs["style"]` is appended after the sizing style. Reserved names are
/// dropped and everything else is copied onto the container verbatim.
pub fn render_progress_circle(
    spec: &ProgressSpec,
    class: Option<&str>,
    attrs: &PassthroughAttrs,
) -> Node {
    let geometry = RingGeometry::compute(spec);
    let diameter = geometry.diameter;
    let center = geometry.center();

    let mut style = format!("width: {}px; height: {}px;", diameter, diameter);
    if let Some(extra) = attrs.get("style") {
        style.push(' ');
        style.push_str(extra);
    }

    let mut container = Element::new("div")
        .attr_value(
            "class",
            merge_classes([Some(CONTAINER_CLASS), class, attrs.get("class")]),
        )
        .attr_value("style", style);
    for (name, value) in attrs.forwarded(&["class", "style"]) {
        container.attrs.push((name, value.to_string()));
    }

    let track = Element::new("circle")
        .attr_value("cx", center)
        .attr_value("cy", center)
        .attr_value("r", geometry.radius)
        .attr_value("fill", "none")
        .attr_value("stroke", TRACK_COLOR)
        .attr_value("stroke-width", geometry.stroke_width);

    let progress = Element::new("circle")
        .attr_value("class", PROGRESS_CLASS)
        .attr_value("cx", center)
        .attr_value("cy", center)
        .attr_value("r", geometry.radius)
        .attr_value("fill", "none")
        .attr_value("stroke", PROGRESS_COLOR)
        .attr_value("stroke-width", geometry.stroke_width)
        .attr_value("stroke-dasharray", geometry.circumference)
        .attr_value("stroke-dashoffset", geometry.dash_offset)
        .attr_value("stroke-linecap", "round");

    let svg = Element::new("svg")
        .attr_value("width", diameter)
        .attr_value("height", diameter)
        .attr_value("viewBox", format!("0 0 {} {}", diameter, diameter))
        .attr_value("transform", format!("rotate(-90 {} {})", center, center))
        .child(track)
        .child(progress);

    container = container.child(svg);

    if spec.show_value {
        let label = Element::new("span")
            .attr_value("class", LABEL_CLASS)
            .child(Node::Text(percent_label(spec.value)));
        container = container.child(label);
    }

    container.into()
}
