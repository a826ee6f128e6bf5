//! Drives each built-in control the way a host application would and
//! prints the resulting trees.
//!
//! Run with logging to watch dispatch and attribute traffic:
//!
//! ```text
//! RUST_LOG=wicker=trace,wicker_core=trace cargo run --example showcase
//! ```

use std::sync::Arc;

use wicker::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let theme = Arc::new(ThemeContext::detect());
    println!("detected theme: {}\n", theme.theme());

    let mut tree = ComponentTree::new();

    // Counter: two leaves, one authoritative total.
    let counter = tree.mount(None, Box::new(Counter::new())).unwrap();
    let inc = tree.find_child_by_name(counter, "increment").unwrap().unwrap();
    let dec = tree.find_child_by_name(counter, "decrement").unwrap().unwrap();
    for _ in 0..3 {
        tree.activate(inc).unwrap();
    }
    tree.activate(dec).unwrap();
    println!(
        "counter after 3 increments and 1 decrement: {}",
        tree.get::<Counter>(counter).unwrap().value()
    );

    // Theme toggle: press whichever glyph is active.
    let toggle = tree
        .mount(None, Box::new(ThemeToggle::new(theme.clone())))
        .unwrap();
    let moon = tree.find_child_by_name(toggle, "moon").unwrap().unwrap();
    let sun = tree.find_child_by_name(toggle, "sun").unwrap().unwrap();
    let active = if tree.get::<IconGlyph>(moon).unwrap().is_active() {
        moon
    } else {
        sun
    };
    tree.activate(active).unwrap();
    println!("theme after toggling: {}", theme.theme());

    // Navigation menu from declarative links.
    let menu = tree
        .mount(
            None,
            Box::new(NavMenu::with_links_json(
                r#"[
                    {"name": "Home", "url": "/home"},
                    {"name": "Docs", "url": "/docs", "children": [
                        {"name": "Guides", "url": "/docs/guides"}
                    ]}
                ]"#,
            )),
        )
        .unwrap();
    let button = tree.find_child_by_name(menu, "menu-button").unwrap().unwrap();
    tree.activate(button).unwrap();
    println!(
        "menu open after pressing the hamburger: {}",
        tree.get::<NavMenu>(menu).unwrap().is_open()
    );

    // Todo list with data-driven rows.
    let todo = tree.mount(None, Box::new(TodoList::new())).unwrap();
    let input = tree.find_child_by_name(todo, "todo-input").unwrap().unwrap();
    for text in ["write the docs", "ship the release"] {
        tree.get_mut::<TodoInput>(input).unwrap().set_draft(text);
        tree.activate(input).unwrap();
    }
    println!(
        "todo entries: {:?}\n",
        tree.get::<TodoList>(todo)
            .unwrap()
            .entries()
            .iter()
            .map(|entry| entry.text.as_str())
            .collect::<Vec<_>>()
    );

    println!(
        "{}",
        TreeDebug::with_options(&tree, TreeFormatOptions::detailed())
    );
}
