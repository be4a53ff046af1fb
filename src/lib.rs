//! # flexhtml
//!
//! Render declarative flexbox element trees into absolutely-positioned HTML.
//!
//! Built on [Taffy](https://github.com/DioxusLabs/taffy) for flexbox geometry.
//!
//! ## Architecture
//!
//! The pipeline has two stages, composed top-down then bottom-up:
//! ```text
//! Element descriptions → Builder (leaves first) → Node tree → render → markup
//!                              │                                 │
//!                              └── GeometryEngine::create_handle └── GeometryEngine::solved_box
//! ```
//!
//! ## Example
//!
//! ```
//! use flexhtml::{render, Builder, FlexDirection, Style};
//!
//! let builder = Builder::new();
//! let top = builder.build(Style::default().flex_grow(0.5).background("green"), vec![])?;
//! let bottom = builder.build(Style::default().flex_grow(0.5).background("#3D5AFE"), vec![])?;
//! let root = builder.build(
//!     Style::default().width(400.0).height(400.0).flex_direction(FlexDirection::Column),
//!     vec![top, bottom],
//! )?;
//!
//! let html = render(&root)?;
//! assert!(html.contains("background:#3D5AFE;top:200px;left:0px;width:400px;height:200px;"));
//! # Ok::<(), flexhtml::LayoutError>(())
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (Style, Handle, SolvedBox, Viewport)
//! - [`primitives`] - Element descriptions and `make_element`
//! - [`engine`] - Node and Builder
//! - [`layout`] - GeometryEngine trait and the Taffy engine
//! - [`renderer`] - Markup output

pub mod engine;
pub mod error;
pub mod layout;
pub mod primitives;
pub mod renderer;
pub mod types;

pub use types::*;

pub use error::{LayoutError, Result};

pub use engine::{Builder, Node, SharedEngine};

pub use layout::{GeometryEngine, TaffyEngine};

pub use primitives::{make_element, view, Element, ViewProps, VIEW};

pub use renderer::render;
