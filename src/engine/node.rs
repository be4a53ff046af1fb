//! Node - One built element of the tree.
//!
//! A Node is created by [`Builder::build`](super::Builder::build) and is
//! immutable afterwards: its style, its children and its geometry handle are
//! fixed. The Node owns its children exclusively, so a built child cannot be
//! attached to a second parent.

use std::fmt;

use crate::types::{Handle, Style};

use super::shared::SharedEngine;

pub struct Node {
    style: Style,
    children: Vec<Node>,
    handle: Handle,
    engine: SharedEngine,
}

impl Node {
    pub(super) fn new(style: Style, children: Vec<Node>, handle: Handle, engine: SharedEngine) -> Self {
        Self {
            style,
            children,
            handle,
            engine,
        }
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Handle of this node inside its geometry engine.
    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// The geometry engine this node was built with.
    pub fn engine(&self) -> &SharedEngine {
        &self.engine
    }

    /// Number of nodes in this subtree, including this one.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }

    pub(super) fn shares_engine(&self, engine: &SharedEngine) -> bool {
        self.engine.same_engine(engine)
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        // Children drop after this and release their own handles.
        self.engine.release(self.handle);
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("handle", &self.handle)
            .field("style", &self.style)
            .field("children", &self.children)
            .finish()
    }
}
