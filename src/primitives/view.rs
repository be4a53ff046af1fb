//! View - The rectangular element kind.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::Style;

/// Kind name of the only supported element.
pub const VIEW: &str = "View";

/// Props of a View element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewProps {
    pub style: Style,
}

impl ViewProps {
    pub fn new(style: Style) -> Self {
        Self { style }
    }
}

/// One declarative element with its child descriptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub kind: String,
    #[serde(default)]
    pub props: ViewProps,
    #[serde(default)]
    pub children: Vec<Element>,
}

impl Element {
    /// Parse an element tree from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of elements in this description, including this one.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Element::count).sum::<usize>()
    }
}

/// Create an element description.
///
/// `children` keeps its order; it becomes the child order of the built Node.
pub fn make_element(kind: impl Into<String>, props: ViewProps, children: Vec<Element>) -> Element {
    Element {
        kind: kind.into(),
        props,
        children,
    }
}

/// Shorthand for a View description.
pub fn view(style: Style, children: Vec<Element>) -> Element {
    make_element(VIEW, ViewProps::new(style), children)
}
