//! Renderable element tree
//!
//! Views build an [`Element`] on every render. The tree carries callbacks as
//! plain data; nothing in it owns state.

use std::fmt;

use strum::Display;

use crate::core::callback::Callback;

/// Tag of a structural node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Tag {
    Div,
    P,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Container {
        tag: Tag,
        children: Vec<Element>,
    },
    Text {
        tag: Tag,
        content: String,
    },
    Button {
        label: String,
        on_activate: Option<Callback<()>>,
    },
    Input {
        value: String,
        on_change: Option<Callback<String>>,
    },
}

/// A focusable node, in tree order
#[derive(Debug, Clone, PartialEq)]
pub enum Interactive {
    Button {
        on_activate: Option<Callback<()>>,
    },
    Input {
        value: String,
        on_change: Option<Callback<String>>,
    },
}

impl Element {
    pub fn div(children: impl IntoIterator<Item = Element>) -> Self {
        Element::Container {
            tag: Tag::Div,
            children: children.into_iter().collect(),
        }
    }

    pub fn paragraph(content: impl Into<String>) -> Self {
        Element::Text {
            tag: Tag::P,
            content: content.into(),
        }
    }

    /// Focusable nodes in pre-order
    pub fn interactives(&self) -> Vec<Interactive> {
        let mut out = Vec::new();
        self.collect_interactives(&mut out);
        out
    }

    fn collect_interactives(&self, out: &mut Vec<Interactive>) {
        match self {
            Element::Container { children, .. } => {
                for child in children {
                    child.collect_interactives(out);
                }
            }
            Element::Text { .. } => {}
            Element::Button { on_activate, .. } => out.push(Interactive::Button {
                on_activate: on_activate.clone(),
            }),
            Element::Input { value, on_change } => out.push(Interactive::Input {
                value: value.clone(),
                on_change: on_change.clone(),
            }),
        }
    }

    /// Rows the element occupies when drawn
    pub fn height(&self) -> u16 {
        match self {
            Element::Container { children, .. } => children
                .iter()
                .fold(0u16, |acc, child| acc.saturating_add(child.height())),
            Element::Text { .. } | Element::Button { .. } => 1,
            Element::Input { .. } => 3,
        }
    }

    /// Concatenated text content, labels and values included
    pub fn text(&self) -> String {
        match self {
            Element::Container { children, .. } => children.iter().map(Element::text).collect(),
            Element::Text { content, .. } => content.clone(),
            Element::Button { label, .. } => label.clone(),
            Element::Input { value, .. } => value.clone(),
        }
    }
}

fn escape(s: &str) -> String {
    s.chars().fold(String::with_capacity(s.len()), |mut acc, c| {
        match c {
            '&' => acc.push_str("&amp;"),
            '<' => acc.push_str("&lt;"),
            '>' => acc.push_str("&gt;"),
            '"' => acc.push_str("&quot;"),
            c => acc.push(c),
        }
        acc
    })
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Container { tag, children } => {
                write!(f, "<{tag}>")?;
                for child in children {
                    write!(f, "{child}")?;
                }
                write!(f, "</{tag}>")
            }
            Element::Text { tag, content } => write!(f, "<{tag}>{}</{tag}>", escape(content)),
            Element::Button { label, .. } => write!(f, "<button>{}</button>", escape(label)),
            Element::Input { value, .. } => write!(f, "<input value=\"{}\"/>", escape(value)),
        }
    }
}
