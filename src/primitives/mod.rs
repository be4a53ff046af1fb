//! Primitives - Element descriptions.
//!
//! An [`Element`] is the materialized form of one declarative element:
//! its kind, its props and its child descriptions. Descriptions are plain
//! data; [`Builder::build_element`](crate::engine::Builder::build_element)
//! turns them into a Node tree.
//!
//! Descriptions come from [`make_element`] or from JSON:
//!
//! ```
//! use flexhtml::primitives::Element;
//!
//! let element = Element::from_json(r#"{
//!     "kind": "View",
//!     "props": { "style": { "width": 400, "height": 400 } },
//!     "children": [
//!         { "kind": "View", "props": { "style": { "flexGrow": 1, "background": "green" } } }
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(element.children.len(), 1);
//! ```

mod view;

pub use view::*;
