use crate::markup::style::Style;

/// A node of the rendered page tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// HTML element.
    Element(Element),
    /// Escaped text content.
    Text(String),
    /// Verbatim content, used for `<style>` bodies.
    Raw(String),
}

/// HTML element with a class list, inline style and children.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub class: Option<String>,
    pub style: Style,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            class: None,
            style: Style::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Whether the class list contains `name` as a whole word.
    pub fn has_class(&self, name: &str) -> bool {
        self.class
            .as_deref()
            .is_some_and(|c| c.split_whitespace().any(|w| w == name))
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Depth-first search for elements matching `pred`.
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut out = Vec::new();
        find_into(self, pred, &mut out);
        out
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for n in nodes {
        match n {
            Node::Element(e) => collect_text(&e.children, out),
            Node::Text(t) => out.push_str(t),
            Node::Raw(_) => {}
        }
    }
}

fn find_into<'a>(e: &'a Element, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
    if pred(e) {
        out.push(e);
    }
    for c in &e.children {
        if let Node::Element(child) = c {
            find_into(child, pred, out);
        }
    }
}

// Elements that never have a closing tag.
const VOID_TAGS: &[&str] = &["meta", "link", "br", "img"];

impl Node {
    /// Serialize as HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(t) => escape_into(t, false, out),
            Node::Raw(r) => out.push_str(r),
            Node::Element(e) => {
                out.push('<');
                out.push_str(e.tag);
                if let Some(class) = &e.class {
                    write_attr("class", class, out);
                }
                if !e.style.is_empty() {
                    write_attr("style", &e.style.to_css(), out);
                }
                for (name, value) in &e.attrs {
                    write_attr(name, value, out);
                }
                out.push('>');
                if VOID_TAGS.contains(&e.tag) {
                    return;
                }
                for c in &e.children {
                    c.write_html(out);
                }
                out.push_str("</");
                out.push_str(e.tag);
                out.push('>');
            }
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }
}

fn write_attr(name: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(value, true, out);
    out.push('"');
}

fn escape_into(s: &str, attr: bool, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attr => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/markup/node.rs"]
mod tests;
