//! Markup renderer.
//!
//! Each node becomes one wrapper:
//!
//! ```text
//! <div style="position:absolute;background:green;top:0px;left:0px;width:400px;height:200px;">
//!   ...children, in declared order...
//! </div>
//! ```
//!
//! (without the whitespace). Offsets are relative to the parent wrapper, which
//! is the containing block of an absolutely-positioned child.

use crate::engine::Node;
use crate::error::Result;
use crate::layout::GeometryEngine;
use crate::types::SolvedBox;

/// Closing marker of every wrapper.
pub const CLOSE_WRAPPER: &str = "</div>";

/// Opening marker prefix shared by every wrapper.
pub const OPEN_WRAPPER: &str = "<div style=\"position:absolute;";

/// Render `node` and its subtree to markup.
///
/// Solving happens inside the engine on the first geometry query after the
/// tree changed. Output is all-or-nothing: on error nothing is returned.
///
/// # Errors
///
/// [`LayoutError::GeometryNotAvailable`](crate::LayoutError::GeometryNotAvailable)
/// if any node's handle has no solved box.
pub fn render(node: &Node) -> Result<String> {
    let mut engine = node.engine().borrow_mut();
    let mut out = String::new();
    render_node(node, &mut *engine, &mut out)?;

    tracing::debug!(nodes = node.count(), bytes = out.len(), "rendered markup");
    Ok(out)
}

fn render_node(node: &Node, engine: &mut dyn GeometryEngine, out: &mut String) -> Result<()> {
    let solved = engine.solved_box(node.handle())?;
    open_wrapper(out, &node.style().background, solved);

    for child in node.children() {
        render_node(child, engine, out)?;
    }

    out.push_str(CLOSE_WRAPPER);
    Ok(())
}

fn open_wrapper(out: &mut String, background: &str, solved: SolvedBox) {
    out.push_str(OPEN_WRAPPER);
    out.push_str("background:");
    escape_attr(out, background);
    out.push(';');
    push_px(out, "top", solved.top);
    push_px(out, "left", solved.left);
    push_px(out, "width", solved.width);
    push_px(out, "height", solved.height);
    out.push_str("\">");
}

fn push_px(out: &mut String, key: &str, value: f32) {
    out.push_str(key);
    out.push(':');
    out.push_str(&value.to_string());
    out.push_str("px;");
}

/// Escape a value for a double-quoted attribute.
fn escape_attr(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}
