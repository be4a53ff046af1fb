//! Builder - Creates Nodes and registers them with the geometry engine.
//!
//! Trees are built leaves first. A parent can only be built from children that
//! already exist, so every parent handle is created with its children's handles
//! already in place.

use crate::error::{LayoutError, Result};
use crate::layout::{GeometryEngine, TaffyEngine};
use crate::primitives::{Element, VIEW};
use crate::types::{Style, Viewport};

use super::node::Node;
use super::shared::SharedEngine;

pub struct Builder {
    engine: SharedEngine,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    /// Builder over a fresh [`TaffyEngine`] with an unconstrained viewport.
    pub fn new() -> Self {
        Self::with_engine(TaffyEngine::new())
    }

    /// Builder over a fresh [`TaffyEngine`] solving roots against `viewport`.
    pub fn with_viewport(viewport: Viewport) -> Self {
        Self::with_engine(TaffyEngine::with_viewport(viewport))
    }

    pub fn with_engine<E: GeometryEngine + 'static>(engine: E) -> Self {
        Self::from_shared(SharedEngine::new(engine))
    }

    /// Builder over an engine that other builders may also use.
    pub fn from_shared(engine: SharedEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &SharedEngine {
        &self.engine
    }

    /// Build a Node from a style and its already-built children.
    ///
    /// The children are moved into the new Node. On failure they are dropped
    /// and their handles released.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::InvalidStyle`] if the engine rejects `style`
    /// - [`LayoutError::HandleConstruction`] if a child was built by another
    ///   engine or its handle cannot be attached
    pub fn build(&self, style: Style, children: Vec<Node>) -> Result<Node> {
        if let Some(foreign) = children.iter().find(|c| !c.shares_engine(&self.engine)) {
            return Err(LayoutError::HandleConstruction(format!(
                "child handle {} belongs to a different engine",
                foreign.handle()
            )));
        }

        let child_handles: Vec<_> = children.iter().map(Node::handle).collect();
        let handle = self
            .engine
            .borrow_mut()
            .create_handle(&child_handles, &style)?;

        tracing::debug!(
            handle = %handle,
            children = children.len(),
            background = %style.background,
            "built node"
        );

        Ok(Node::new(style, children, handle, self.engine.clone()))
    }

    /// Build a Node tree from an element description, children first.
    ///
    /// # Errors
    ///
    /// [`LayoutError::UnsupportedElement`] for any kind other than `View`,
    /// plus everything [`Builder::build`] can return.
    pub fn build_element(&self, element: &Element) -> Result<Node> {
        if element.kind != VIEW {
            return Err(LayoutError::UnsupportedElement(element.kind.clone()));
        }

        let children = element
            .children
            .iter()
            .map(|child| self.build_element(child))
            .collect::<Result<Vec<_>>>()?;

        self.build(element.props.style.clone(), children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{make_element, ViewProps};
    use crate::types::FlexDirection;

    #[test]
    fn test_build_leaf() {
        let builder = Builder::new();
        let node = builder.build(Style::default().width(10.0), Vec::new()).unwrap();

        assert_eq!(node.count(), 1);
        assert!(node.children().is_empty());
        assert_eq!(node.style().width, Some(10.0));
        assert!(builder.engine().borrow().contains(node.handle()));
    }

    #[test]
    fn test_build_keeps_child_order() {
        let builder = Builder::new();
        let a = builder.build(Style::default().background("a"), Vec::new()).unwrap();
        let b = builder.build(Style::default().background("b"), Vec::new()).unwrap();
        let (ha, hb) = (a.handle(), b.handle());

        let parent = builder.build(Style::default(), vec![a, b]).unwrap();

        let handles: Vec<_> = parent.children().iter().map(Node::handle).collect();
        assert_eq!(handles, vec![ha, hb]);
        assert_eq!(parent.count(), 3);
    }

    #[test]
    fn test_build_invalid_style() {
        let builder = Builder::new();
        let child = builder.build(Style::default(), Vec::new()).unwrap();
        let child_handle = child.handle();

        let err = builder
            .build(Style::default().flex_grow(-1.0), vec![child])
            .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidStyle(_)));

        // The rejected children were dropped and released.
        assert!(!builder.engine().borrow().contains(child_handle));
    }

    #[test]
    fn test_child_from_other_engine() {
        let builder = Builder::new();
        let other = Builder::new();
        let stranger = other.build(Style::default(), Vec::new()).unwrap();

        let err = builder.build(Style::default(), vec![stranger]).unwrap_err();
        assert!(matches!(err, LayoutError::HandleConstruction(_)));
    }

    #[test]
    fn test_shared_engine_builders() {
        let builder = Builder::new();
        let sibling = Builder::from_shared(builder.engine().clone());
        let child = sibling.build(Style::default(), Vec::new()).unwrap();

        assert!(builder.build(Style::default(), vec![child]).is_ok());
    }

    #[test]
    fn test_drop_releases_subtree() {
        let builder = Builder::new();
        let leaf = builder.build(Style::default(), Vec::new()).unwrap();
        let leaf_handle = leaf.handle();
        let root = builder.build(Style::default(), vec![leaf]).unwrap();
        let root_handle = root.handle();

        drop(root);

        let engine = builder.engine().borrow();
        assert!(!engine.contains(root_handle));
        assert!(!engine.contains(leaf_handle));
    }

    #[test]
    fn test_build_element_tree() {
        let element = make_element(
            VIEW,
            ViewProps::new(Style::default().flex_direction(FlexDirection::Column)),
            vec![
                make_element(VIEW, ViewProps::default(), Vec::new()),
                make_element(VIEW, ViewProps::default(), Vec::new()),
            ],
        );

        let node = Builder::new().build_element(&element).unwrap();
        assert_eq!(node.count(), 3);
        assert_eq!(node.style().flex_direction, FlexDirection::Column);
    }

    #[test]
    fn test_build_element_unsupported_kind() {
        let element = make_element(
            VIEW,
            ViewProps::default(),
            vec![make_element("Text", ViewProps::default(), Vec::new())],
        );

        let err = Builder::new().build_element(&element).unwrap_err();
        assert!(matches!(err, LayoutError::UnsupportedElement(kind) if kind == "Text"));
    }
}
