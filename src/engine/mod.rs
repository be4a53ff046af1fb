//! Engine - Node construction on top of a geometry engine.
//!
//! The engine manages the built element tree:
//! - Node: immutable element (style, owned children, geometry handle)
//! - Builder: creates Nodes leaves-first, wiring each handle to its children's
//! - SharedEngine: the engine handle every Node keeps, with deferred releases
//!
//! # Architecture
//!
//! ```text
//! Element description → Builder::build (children first) → Node tree
//!                                 │
//!                                 └─ GeometryEngine::create_handle
//! ```
//!
//! Every Node shares the engine that built it, so dropping a Node can release
//! its handle.

mod builder;
mod node;
mod shared;

pub use builder::*;
pub use node::*;
pub use shared::*;
