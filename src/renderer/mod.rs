//! Renderer - Positioned markup output.
//!
//! Turns a built Node tree into nested, absolutely-positioned `<div>`
//! wrappers, one per node, using the solved boxes from the geometry engine.

mod markup;

pub use markup::*;
