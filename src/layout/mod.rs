//! Layout Module
//!
//! Flexbox geometry for element trees.
//!
//! # Architecture
//!
//! Geometry is delegated to a [`GeometryEngine`]. The engine owns its own tree
//! of layout nodes; callers hold opaque [`Handle`]s into it. The production
//! engine is [`TaffyEngine`], built on
//! [Taffy](https://github.com/DioxusLabs/taffy) for W3C-compliant flexbox.
//!
//! 1. `create_handle` converts a [`Style`] into an engine node and links the
//!    children handles under it, in order
//! 2. `solved_box` solves the tree containing a handle (lazily, once per
//!    structural change) and returns that node's box
//! 3. `release` removes a node when its owner goes away

mod taffy_bridge;

pub use taffy_bridge::TaffyEngine;

use crate::error::Result;
use crate::types::{Handle, SolvedBox, Style};

/// A flex-layout solver the builder and renderer talk to.
pub trait GeometryEngine {
    /// Create a node for `style` whose children are `children`, in order.
    ///
    /// Each child handle must be live and not yet attached to a parent.
    fn create_handle(&mut self, children: &[Handle], style: &Style) -> Result<Handle>;

    /// Solved box for `handle`, solving its tree first if needed.
    fn solved_box(&mut self, handle: Handle) -> Result<SolvedBox>;

    /// Remove `handle` from the engine. Its children become detached roots.
    fn release(&mut self, handle: Handle);

    /// Whether `handle` refers to a live node.
    fn contains(&self, handle: Handle) -> bool;
}
