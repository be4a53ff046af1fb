//! Core types for flexhtml.
//!
//! These types define the foundation that everything builds on.
//! Styles flow from element descriptions into the geometry engine, and solved
//! boxes flow back out of it into the renderer.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Background used when a style does not name one.
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

// =============================================================================
// Flex Enums - For layout
// =============================================================================

/// Flex direction for container layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
    RowReverse,
    ColumnReverse,
}

/// Flex wrap behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlexWrap {
    #[default]
    #[serde(rename = "nowrap")]
    NoWrap,
    #[serde(rename = "wrap")]
    Wrap,
    #[serde(rename = "wrap-reverse")]
    WrapReverse,
}

// =============================================================================
// Style
// =============================================================================

/// Layout and visual options for one element.
///
/// `Style::default()` is the fixed default style. Deserializing a partial
/// mapping merges the given keys over those defaults, so
/// `{"flexGrow": 0.5}` yields a row container with a white background.
///
/// Keys this type does not recognize are collected into [`Style::extra`]
/// and handed to the geometry engine untouched.
///
/// ```
/// use flexhtml::types::{FlexDirection, Style};
///
/// let style: Style = serde_json::from_str(r#"{"width": 400, "flexDirection": "column"}"#).unwrap();
/// assert_eq!(style.width, Some(400.0));
/// assert_eq!(style.flex_direction, FlexDirection::Column);
/// assert_eq!(style.background, "#ffffff");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub flex_direction: FlexDirection,
    pub flex_wrap: FlexWrap,
    pub background: String,
    /// Unrecognized keys, passed through to the geometry engine.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::NoWrap,
            background: DEFAULT_BACKGROUND.to_string(),
            extra: BTreeMap::new(),
        }
    }
}

impl Style {
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn flex_grow(mut self, grow: f32) -> Self {
        self.flex_grow = grow;
        self
    }

    pub fn flex_shrink(mut self, shrink: f32) -> Self {
        self.flex_shrink = shrink;
        self
    }

    pub fn flex_direction(mut self, direction: FlexDirection) -> Self {
        self.flex_direction = direction;
        self
    }

    pub fn flex_wrap(mut self, wrap: FlexWrap) -> Self {
        self.flex_wrap = wrap;
        self
    }

    pub fn background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    /// Set a pass-through key for the geometry engine.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// Opaque reference to one node inside a geometry engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(u64);

impl Handle {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Solved position and size of one node, in pixels.
///
/// `top` and `left` are offsets from the parent's box (the root's are from the
/// origin), which is what nested absolutely-positioned wrappers expect.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SolvedBox {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

/// Space available to a root node when its tree is solved.
///
/// `None` on an axis means unconstrained (max-content), so a root sized by its
/// own style solves to exactly that size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl Viewport {
    pub const UNCONSTRAINED: Self = Self {
        width: None,
        height: None,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }
}
