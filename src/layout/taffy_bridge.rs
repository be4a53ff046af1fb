//! Taffy Bridge - Integration with Taffy layout engine
//!
//! Converts element styles to Taffy styles, keeps a Taffy tree in step with the
//! built element tree, and extracts solved boxes back out of it.

use std::collections::HashSet;

use serde_json::Value;
use taffy::{
    AlignContent as TaffyAlignContent, AlignItems as TaffyAlignItems,
    AlignSelf as TaffyAlignSelf, AvailableSpace, Dimension as TaffyDimension, Display,
    FlexDirection as TaffyFlexDirection, FlexWrap as TaffyFlexWrap,
    JustifyContent as TaffyJustifyContent, LengthPercentage, LengthPercentageAuto, NodeId,
    Position as TaffyPosition, Rect, Size, Style as TaffyStyle, TaffyTree,
};

use crate::error::{LayoutError, Result};
use crate::types::{FlexDirection, FlexWrap, Handle, SolvedBox, Style, Viewport};

use super::GeometryEngine;

// =============================================================================
// ENUM CONVERSIONS
// =============================================================================

fn to_taffy_flex_direction(dir: FlexDirection) -> TaffyFlexDirection {
    match dir {
        FlexDirection::Row => TaffyFlexDirection::Row,
        FlexDirection::Column => TaffyFlexDirection::Column,
        FlexDirection::RowReverse => TaffyFlexDirection::RowReverse,
        FlexDirection::ColumnReverse => TaffyFlexDirection::ColumnReverse,
    }
}

fn to_taffy_flex_wrap(wrap: FlexWrap) -> TaffyFlexWrap {
    match wrap {
        FlexWrap::NoWrap => TaffyFlexWrap::NoWrap,
        FlexWrap::Wrap => TaffyFlexWrap::Wrap,
        FlexWrap::WrapReverse => TaffyFlexWrap::WrapReverse,
    }
}

fn to_taffy_justify_content(value: &str) -> Option<TaffyJustifyContent> {
    Some(match value {
        "flex-start" => TaffyJustifyContent::FlexStart,
        "center" => TaffyJustifyContent::Center,
        "flex-end" => TaffyJustifyContent::FlexEnd,
        "space-between" => TaffyJustifyContent::SpaceBetween,
        "space-around" => TaffyJustifyContent::SpaceAround,
        "space-evenly" => TaffyJustifyContent::SpaceEvenly,
        _ => return None,
    })
}

fn to_taffy_align_items(value: &str) -> Option<TaffyAlignItems> {
    Some(match value {
        "stretch" => TaffyAlignItems::Stretch,
        "flex-start" => TaffyAlignItems::FlexStart,
        "center" => TaffyAlignItems::Center,
        "flex-end" => TaffyAlignItems::FlexEnd,
        "baseline" => TaffyAlignItems::Baseline,
        _ => return None,
    })
}

fn to_taffy_align_content(value: &str) -> Option<TaffyAlignContent> {
    Some(match value {
        "stretch" => TaffyAlignContent::Stretch,
        "flex-start" => TaffyAlignContent::FlexStart,
        "center" => TaffyAlignContent::Center,
        "flex-end" => TaffyAlignContent::FlexEnd,
        "space-between" => TaffyAlignContent::SpaceBetween,
        "space-around" => TaffyAlignContent::SpaceAround,
        _ => return None,
    })
}

/// Inner `None` is `auto`, which inherits from the parent's alignItems.
fn to_taffy_align_self(value: &str) -> Option<Option<TaffyAlignSelf>> {
    Some(match value {
        "auto" => None,
        "stretch" => Some(TaffyAlignSelf::Stretch),
        "flex-start" => Some(TaffyAlignSelf::FlexStart),
        "center" => Some(TaffyAlignSelf::Center),
        "flex-end" => Some(TaffyAlignSelf::FlexEnd),
        "baseline" => Some(TaffyAlignSelf::Baseline),
        _ => return None,
    })
}

fn to_taffy_position(value: &str) -> Option<TaffyPosition> {
    match value {
        "relative" => Some(TaffyPosition::Relative),
        "absolute" => Some(TaffyPosition::Absolute),
        _ => None,
    }
}

// =============================================================================
// VALUE CHECKS
// =============================================================================

fn invalid(key: &str, expected: &str, got: impl std::fmt::Display) -> LayoutError {
    LayoutError::InvalidStyle(format!("{key}: expected {expected}, got {got}"))
}

/// Sizes and flex factors must be finite and non-negative.
fn non_negative(key: &str, value: f32) -> Result<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(invalid(key, "a finite non-negative number", value))
    }
}

fn number(key: &str, value: &Value) -> Result<f32> {
    value
        .as_f64()
        .map(|n| n as f32)
        .filter(|n| n.is_finite())
        .ok_or_else(|| invalid(key, "a number", value))
}

fn keyword<'a>(key: &str, value: &'a Value) -> Result<&'a str> {
    value.as_str().ok_or_else(|| invalid(key, "a string", value))
}

/// A number of pixels, `"auto"`, or a percentage such as `"50%"`.
fn dimension(key: &str, value: &Value) -> Result<TaffyDimension> {
    if let Some(s) = value.as_str() {
        if s == "auto" {
            return Ok(TaffyDimension::Auto);
        }
        if let Some(p) = s.strip_suffix('%') {
            let p: f32 = p
                .trim()
                .parse()
                .map_err(|_| invalid(key, "a percentage", value))?;
            return Ok(TaffyDimension::Percent(non_negative(key, p)? / 100.0));
        }
        return Err(invalid(key, "a number, \"auto\" or a percentage", value));
    }
    Ok(TaffyDimension::Length(non_negative(key, number(key, value)?)?))
}

fn optional_length(key: &str, value: Option<f32>) -> Result<TaffyDimension> {
    match value {
        Some(v) => Ok(TaffyDimension::Length(non_negative(key, v)?)),
        None => Ok(TaffyDimension::Auto),
    }
}

// =============================================================================
// STYLE BUILDING
// =============================================================================

/// Build a Taffy Style from an element style.
///
/// Recognized fields map directly. A handful of pass-through keys are also
/// understood; any other key is ignored.
fn build_style(style: &Style) -> Result<TaffyStyle> {
    let mut taffy_style = TaffyStyle {
        display: Display::Flex,

        flex_direction: to_taffy_flex_direction(style.flex_direction),
        flex_wrap: to_taffy_flex_wrap(style.flex_wrap),

        flex_grow: non_negative("flexGrow", style.flex_grow)?,
        flex_shrink: non_negative("flexShrink", style.flex_shrink)?,

        size: Size {
            width: optional_length("width", style.width)?,
            height: optional_length("height", style.height)?,
        },

        ..Default::default()
    };

    for (key, value) in &style.extra {
        match key.as_str() {
            "justifyContent" => {
                let v = keyword(key, value)?;
                taffy_style.justify_content = Some(
                    to_taffy_justify_content(v).ok_or_else(|| invalid(key, "a justify keyword", v))?,
                );
            }
            "alignItems" => {
                let v = keyword(key, value)?;
                taffy_style.align_items =
                    Some(to_taffy_align_items(v).ok_or_else(|| invalid(key, "an align keyword", v))?);
            }
            "alignSelf" => {
                let v = keyword(key, value)?;
                taffy_style.align_self =
                    to_taffy_align_self(v).ok_or_else(|| invalid(key, "an align keyword", v))?;
            }
            "alignContent" => {
                let v = keyword(key, value)?;
                taffy_style.align_content = Some(
                    to_taffy_align_content(v).ok_or_else(|| invalid(key, "an align keyword", v))?,
                );
            }
            "position" => {
                let v = keyword(key, value)?;
                taffy_style.position =
                    to_taffy_position(v).ok_or_else(|| invalid(key, "relative or absolute", v))?;
            }
            "flexBasis" => taffy_style.flex_basis = dimension(key, value)?,
            "minWidth" => taffy_style.min_size.width = dimension(key, value)?,
            "minHeight" => taffy_style.min_size.height = dimension(key, value)?,
            "maxWidth" => taffy_style.max_size.width = dimension(key, value)?,
            "maxHeight" => taffy_style.max_size.height = dimension(key, value)?,
            "padding" => {
                let v = LengthPercentage::Length(non_negative(key, number(key, value)?)?);
                taffy_style.padding = Rect { top: v, right: v, bottom: v, left: v };
            }
            "margin" => {
                let v = LengthPercentageAuto::Length(number(key, value)?);
                taffy_style.margin = Rect { top: v, right: v, bottom: v, left: v };
            }
            "gap" => {
                let v = LengthPercentage::Length(non_negative(key, number(key, value)?)?);
                taffy_style.gap = Size { width: v, height: v };
            }
            _ => tracing::trace!(key = %key, "ignoring unrecognized style key"),
        }
    }

    Ok(taffy_style)
}

// =============================================================================
// ENGINE
// =============================================================================

/// Geometry engine backed by a [`TaffyTree`].
///
/// Handles are Taffy node ids. The engine tracks which ids are live so a
/// stale or foreign handle is reported as an error instead of reaching Taffy.
/// Solved roots are cached until the next structural change.
pub struct TaffyEngine {
    tree: TaffyTree<()>,
    live: HashSet<NodeId>,
    solved_roots: HashSet<NodeId>,
    viewport: Viewport,
}

impl Default for TaffyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TaffyEngine {
    /// Engine that solves each root against unconstrained space.
    pub fn new() -> Self {
        Self::with_viewport(Viewport::UNCONSTRAINED)
    }

    /// Engine that solves each root against `viewport`.
    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            tree: TaffyTree::new(),
            live: HashSet::new(),
            solved_roots: HashSet::new(),
            viewport,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Change the viewport. Every tree is solved again on its next query.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.invalidate();
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.live.len()
    }

    fn invalidate(&mut self) {
        self.solved_roots.clear();
    }

    fn available_space(&self) -> Size<AvailableSpace> {
        let axis = |v: Option<f32>| v.map_or(AvailableSpace::MaxContent, AvailableSpace::Definite);
        Size {
            width: axis(self.viewport.width),
            height: axis(self.viewport.height),
        }
    }

    fn live_node(&self, handle: Handle) -> Option<NodeId> {
        let id = NodeId::from(handle.raw());
        self.live.contains(&id).then_some(id)
    }

    fn root_of(&self, mut id: NodeId) -> NodeId {
        while let Some(parent) = self.tree.parent(id) {
            id = parent;
        }
        id
    }
}

impl GeometryEngine for TaffyEngine {
    fn create_handle(&mut self, children: &[Handle], style: &Style) -> Result<Handle> {
        let taffy_style = build_style(style)?;

        let mut child_ids = Vec::with_capacity(children.len());
        for &child in children {
            let id = self.live_node(child).ok_or_else(|| {
                LayoutError::HandleConstruction(format!("child handle {child} is not live"))
            })?;
            if self.tree.parent(id).is_some() || child_ids.contains(&id) {
                return Err(LayoutError::HandleConstruction(format!(
                    "child handle {child} is already attached to a parent"
                )));
            }
            child_ids.push(id);
        }

        let id = self.tree.new_with_children(taffy_style, &child_ids)?;
        self.live.insert(id);
        if !child_ids.is_empty() {
            self.invalidate();
        }

        let handle = Handle::new(id.into());
        tracing::debug!(handle = %handle, children = child_ids.len(), "created layout node");
        Ok(handle)
    }

    fn solved_box(&mut self, handle: Handle) -> Result<SolvedBox> {
        let id = self
            .live_node(handle)
            .ok_or(LayoutError::GeometryNotAvailable(handle))?;

        let root = self.root_of(id);
        if !self.solved_roots.contains(&root) {
            self.tree.compute_layout(root, self.available_space())?;
            self.solved_roots.insert(root);
            tracing::debug!(root = u64::from(root), "solved layout");
        }

        let layout = self
            .tree
            .layout(id)
            .map_err(|_| LayoutError::GeometryNotAvailable(handle))?;

        Ok(SolvedBox {
            top: layout.location.y,
            left: layout.location.x,
            width: layout.size.width,
            height: layout.size.height,
        })
    }

    fn release(&mut self, handle: Handle) {
        let Some(id) = self.live_node(handle) else {
            return;
        };
        self.live.remove(&id);
        self.invalidate();
        if let Err(err) = self.tree.remove(id) {
            tracing::warn!(handle = %handle, "failed to remove layout node: {}", err);
        }
    }

    fn contains(&self, handle: Handle) -> bool {
        self.live_node(handle).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn leaf(engine: &mut TaffyEngine, style: Style) -> Handle {
        engine.create_handle(&[], &style).unwrap()
    }

    #[test]
    fn test_single_root() {
        let mut engine = TaffyEngine::new();
        let root = leaf(&mut engine, Style::default().width(40.0).height(10.0));

        let solved = engine.solved_box(root).unwrap();
        assert_eq!(solved, SolvedBox { top: 0.0, left: 0.0, width: 40.0, height: 10.0 });
    }

    #[test]
    fn test_flex_row() {
        let mut engine = TaffyEngine::new();
        let a = leaf(&mut engine, Style::default().width(10.0).height(5.0));
        let b = leaf(&mut engine, Style::default().width(10.0).height(5.0));
        let _parent = engine
            .create_handle(&[a, b], &Style::default().width(40.0).height(10.0))
            .unwrap();

        assert_eq!(engine.solved_box(a).unwrap().left, 0.0);
        assert_eq!(engine.solved_box(b).unwrap().left, 10.0);
    }

    #[test]
    fn test_flex_grow_column() {
        let mut engine = TaffyEngine::new();
        let a = leaf(&mut engine, Style::default().flex_grow(0.5));
        let b = leaf(&mut engine, Style::default().flex_grow(0.5));
        let root = engine
            .create_handle(
                &[a, b],
                &Style::default()
                    .width(400.0)
                    .height(400.0)
                    .flex_direction(FlexDirection::Column),
            )
            .unwrap();

        assert_eq!(engine.solved_box(root).unwrap().height, 400.0);
        assert_eq!(
            engine.solved_box(a).unwrap(),
            SolvedBox { top: 0.0, left: 0.0, width: 400.0, height: 200.0 }
        );
        assert_eq!(
            engine.solved_box(b).unwrap(),
            SolvedBox { top: 200.0, left: 0.0, width: 400.0, height: 200.0 }
        );
    }

    #[test]
    fn test_justify_content_center_pass_through() {
        let mut engine = TaffyEngine::new();
        let child = leaf(&mut engine, Style::default().width(20.0).height(5.0));
        let _parent = engine
            .create_handle(
                &[child],
                &Style::default()
                    .width(100.0)
                    .height(10.0)
                    .with("justifyContent", "center"),
            )
            .unwrap();

        // (100 - 20) / 2
        assert_eq!(engine.solved_box(child).unwrap().left, 40.0);
    }

    #[test]
    fn test_padding_pass_through() {
        let mut engine = TaffyEngine::new();
        let child = leaf(&mut engine, Style::default().width(10.0).height(5.0));
        let _parent = engine
            .create_handle(
                &[child],
                &Style::default().width(40.0).height(10.0).with("padding", 2),
            )
            .unwrap();

        let solved = engine.solved_box(child).unwrap();
        assert_eq!(solved.left, 2.0);
        assert_eq!(solved.top, 2.0);
    }

    #[test]
    fn test_invalid_styles_rejected() {
        let mut engine = TaffyEngine::new();
        let bad = [
            Style::default().width(-1.0),
            Style::default().height(f32::NAN),
            Style::default().flex_grow(-0.5),
            Style::default().flex_shrink(f32::INFINITY),
            Style::default().with("justifyContent", "sideways"),
            Style::default().with("padding", "lots"),
            Style::default().with("flexBasis", "12furlongs"),
        ];
        for style in &bad {
            let err = engine.create_handle(&[], style).unwrap_err();
            assert!(matches!(err, LayoutError::InvalidStyle(_)), "{style:?} gave {err}");
        }
        assert_eq!(engine.node_count(), 0);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut engine = TaffyEngine::new();
        let style = Style::default().width(5.0).height(5.0).with("borderRadius", json!(4));
        let handle = engine.create_handle(&[], &style).unwrap();
        assert_eq!(engine.solved_box(handle).unwrap().width, 5.0);
    }

    #[test]
    fn test_reattach_child_fails() {
        let mut engine = TaffyEngine::new();
        let child = leaf(&mut engine, Style::default());
        engine.create_handle(&[child], &Style::default()).unwrap();

        let err = engine.create_handle(&[child], &Style::default()).unwrap_err();
        assert!(matches!(err, LayoutError::HandleConstruction(_)));
    }

    #[test]
    fn test_duplicate_child_fails() {
        let mut engine = TaffyEngine::new();
        let child = leaf(&mut engine, Style::default());

        let err = engine.create_handle(&[child, child], &Style::default()).unwrap_err();
        assert!(matches!(err, LayoutError::HandleConstruction(_)));
    }

    #[test]
    fn test_released_handle() {
        let mut engine = TaffyEngine::new();
        let handle = leaf(&mut engine, Style::default());
        engine.release(handle);

        assert!(!engine.contains(handle));
        assert!(matches!(
            engine.solved_box(handle),
            Err(LayoutError::GeometryNotAvailable(h)) if h == handle
        ));
        assert!(matches!(
            engine.create_handle(&[handle], &Style::default()),
            Err(LayoutError::HandleConstruction(_))
        ));
    }

    #[test]
    fn test_viewport_constrains_root() {
        let mut engine = TaffyEngine::with_viewport(Viewport::new(80.0, 24.0));
        let child = leaf(&mut engine, Style::default().flex_grow(1.0));
        let root = engine
            .create_handle(&[child], &Style::default().with("minWidth", "100%"))
            .unwrap();

        assert_eq!(engine.solved_box(root).unwrap().width, 80.0);
        assert_eq!(engine.solved_box(child).unwrap().width, 80.0);

        engine.set_viewport(Viewport::new(120.0, 24.0));
        assert_eq!(engine.solved_box(root).unwrap().width, 120.0);
    }

    #[test]
    fn test_dimension_conversion() {
        assert!(matches!(dimension("k", &json!("auto")), Ok(TaffyDimension::Auto)));
        assert!(matches!(dimension("k", &json!(50)), Ok(TaffyDimension::Length(50.0))));
        // Percent: 50% → 0.5
        if let Ok(TaffyDimension::Percent(p)) = dimension("k", &json!("50%")) {
            assert!((p - 0.5).abs() < 0.001);
        } else {
            panic!("Expected Percent variant");
        }
    }
}
