//! Layout Example - Nested views rendered to positioned HTML
//!
//! Builds the element tree described in `demos/layout.json` (or a JSON file
//! given as the first argument), solves it with Taffy, and writes the markup
//! to `layout.html` (or the second argument).
//!
//! Run with: RUST_LOG=debug cargo run --example layout

use std::env;
use std::fs;

use flexhtml::{render, Builder, Element};
use tracing_subscriber::EnvFilter;

const DEFAULT_LAYOUT: &str = include_str!("layout.json");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let source = match args.next() {
        Some(path) => fs::read_to_string(path)?,
        None => DEFAULT_LAYOUT.to_string(),
    };
    let output = args.next().unwrap_or_else(|| "layout.html".to_string());

    let element = Element::from_json(&source)?;
    tracing::info!(elements = element.count(), "loaded layout");

    let builder = Builder::new();
    let root = builder.build_element(&element)?;
    let html = render(&root)?;

    fs::write(&output, &html)?;
    println!("Wrote {} bytes to {}", html.len(), output);

    Ok(())
}
