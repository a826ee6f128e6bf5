//! End-to-end tests of the event-mediated composition pattern.
//!
//! Each test drives a mounted control tree the way a host application
//! would: interactions enter through `activate`, events bubble to their
//! authoritative consumer, and presentation is read back through typed
//! accessors and attributes.

use std::sync::Arc;

use parking_lot::Mutex;
use wicker::prelude::*;

// ============================================================================
// Counter
// ============================================================================

#[test]
fn counter_total_is_net_sum_of_deliveries() {
    let mut tree = ComponentTree::new();
    let counter = tree.mount(None, Box::new(Counter::new())).unwrap();
    let inc = tree.find_child_by_name(counter, "increment").unwrap().unwrap();
    let dec = tree.find_child_by_name(counter, "decrement").unwrap().unwrap();

    // An arbitrary interleaving: the total must always equal the net sum.
    let presses = [inc, inc, dec, inc, inc, inc, dec, inc, dec, dec, inc];
    let mut expected = 0i64;
    for &button in &presses {
        tree.activate(button).unwrap();
        expected += if button == inc { 1 } else { -1 };
        assert_eq!(tree.get::<Counter>(counter).unwrap().value(), expected);
    }
    assert_eq!(expected, 3);
}

// ============================================================================
// Todo list
// ============================================================================

fn submit(tree: &mut ComponentTree, input: NodeId, text: &str) -> DispatchResult {
    tree.get_mut::<TodoInput>(input).unwrap().set_draft(text);
    tree.activate(input).unwrap()
}

#[test]
fn todo_submission_appends_one_entry_with_increasing_ids() {
    let mut tree = ComponentTree::new();
    let list = tree.mount(None, Box::new(TodoList::new())).unwrap();
    let input = tree.find_child_by_name(list, "todo-input").unwrap().unwrap();

    let counts = Arc::new(Mutex::new(Vec::new()));
    let counts_clone = counts.clone();
    tree.get::<TodoList>(list)
        .unwrap()
        .count_changed
        .connect(move |&count| counts_clone.lock().push(count));

    assert_eq!(submit(&mut tree, input, "first"), DispatchResult::Accepted);
    assert_eq!(submit(&mut tree, input, "second"), DispatchResult::Accepted);

    // Whitespace-only drafts emit no event and change nothing.
    assert_eq!(submit(&mut tree, input, "   "), DispatchResult::Ignored);

    let todo = tree.get::<TodoList>(list).unwrap();
    assert_eq!(todo.count(), 2);
    assert_eq!(*counts.lock(), vec![1, 2]);

    let ids: Vec<u64> = todo
        .entries()
        .iter()
        .map(|entry| entry.id.strip_prefix("todo-").unwrap().parse().unwrap())
        .collect();
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn todo_delete_removes_exactly_that_entry() {
    let mut tree = ComponentTree::new();
    let list = tree.mount(None, Box::new(TodoList::new())).unwrap();
    let input = tree.find_child_by_name(list, "todo-input").unwrap().unwrap();

    submit(&mut tree, input, "keep me");
    submit(&mut tree, input, "delete me");

    let target = tree.get::<TodoList>(list).unwrap().entries()[1].id.clone();
    let row = tree.find_child_by_name(list, &target).unwrap().unwrap();
    let delete = tree.find_child_by_name(row, "delete").unwrap().unwrap();

    assert_eq!(tree.activate(delete).unwrap(), DispatchResult::Accepted);

    let todo = tree.get::<TodoList>(list).unwrap();
    assert_eq!(todo.count(), 1);
    assert_eq!(todo.entries()[0].text, "keep me");
    assert_eq!(tree.find_child_by_name(list, &target).unwrap(), None);

    // Deleting a nonexistent identifier is a consumed no-op.
    let result = tree.dispatch(
        input,
        Event::new(ControlEvent::TodoDelete { id: target.clone() }),
    );
    assert_eq!(result, DispatchResult::Accepted);
    assert_eq!(tree.get::<TodoList>(list).unwrap().count(), 1);
}

// ============================================================================
// Theme toggle
// ============================================================================

#[test]
fn exactly_one_glyph_active_and_opposite_of_theme() {
    let theme = Arc::new(ThemeContext::new(Theme::Light));
    let mut tree = ComponentTree::new();
    let toggle = tree
        .mount(None, Box::new(ThemeToggle::new(theme.clone())))
        .unwrap();
    let sun = tree.find_child_by_name(toggle, "sun").unwrap().unwrap();
    let moon = tree.find_child_by_name(toggle, "moon").unwrap().unwrap();

    let assert_invariant = |tree: &ComponentTree, current: Theme| {
        let sun_active = tree.attributes(sun).unwrap().is_active("data-active");
        let moon_active = tree.attributes(moon).unwrap().is_active("data-active");
        assert_ne!(sun_active, moon_active);
        match current {
            Theme::Dark => assert!(sun_active),
            Theme::Light => assert!(moon_active),
        }
    };

    assert_invariant(&tree, Theme::Light);

    // Light -> dark via the moon, dark -> light via the sun, repeatedly.
    for _ in 0..2 {
        tree.activate(moon).unwrap();
        assert_eq!(theme.theme(), Theme::Dark);
        assert_invariant(&tree, Theme::Dark);

        tree.activate(sun).unwrap();
        assert_eq!(theme.theme(), Theme::Light);
        assert_invariant(&tree, Theme::Light);
    }
}

#[test]
fn glyph_teardown_releases_theme_subscriptions() {
    let theme = Arc::new(ThemeContext::new(Theme::Light));
    let mut tree = ComponentTree::new();
    let toggle = tree
        .mount(None, Box::new(ThemeToggle::new(theme.clone())))
        .unwrap();
    assert_eq!(theme.watcher_count(), 2);

    // Keep a handle on a glyph's attributes across its destruction.
    let sun = tree.find_child_by_name(toggle, "sun").unwrap().unwrap();
    let sun_attrs = tree.attributes(sun).unwrap();

    tree.unmount(toggle).unwrap();
    assert_eq!(theme.watcher_count(), 0);

    // A theme change after teardown reaches no dangling watcher.
    let before = sun_attrs.get("data-active");
    theme.set_theme(Theme::Dark);
    assert_eq!(sun_attrs.get("data-active"), before);
}

// ============================================================================
// Icon view
// ============================================================================

#[tokio::test]
async fn icon_view_swaps_variant_without_refetching() {
    let root = tempfile::tempdir().unwrap();
    let store = Arc::new(AssetStore::open_in(root.path(), "icons").unwrap());

    // Both variants pre-seeded; the URLs point at a host that refuses
    // connections, so any fetch attempt would surface as Unavailable.
    let light_url = "http://127.0.0.1:9/sun.svg";
    let dark_url = "http://127.0.0.1:9/moon.svg";
    store.put(light_url, b"light-bytes").unwrap();
    store.put(dark_url, b"dark-bytes").unwrap();

    let theme = Arc::new(ThemeContext::new(Theme::Light));
    let resolver = Arc::new(IconResolver::new(
        store,
        Arc::new(AssetFetcher::new().unwrap()),
    ));

    let mut tree = ComponentTree::new();
    let view_id = tree
        .mount(
            None,
            Box::new(IconView::with_sources(
                theme.clone(),
                resolver,
                light_url,
                dark_url,
            )),
        )
        .unwrap();

    tree.get::<IconView>(view_id).unwrap().resolve().await;

    let view = tree.get::<IconView>(view_id).unwrap();
    assert_eq!(view.state(), ResolveState::Ready);
    assert_eq!(view.visible_bytes().unwrap().as_ref(), b"light-bytes");
    assert_eq!(
        tree.attributes(view_id).unwrap().get("data-variant"),
        Some("light".to_string())
    );

    // Swapping the theme changes only the presentation. Had anything been
    // re-fetched, the unreachable host would have produced Unavailable.
    theme.set_theme(Theme::Dark);
    let view = tree.get::<IconView>(view_id).unwrap();
    assert_eq!(view.state(), ResolveState::Ready);
    assert_eq!(view.visible_bytes().unwrap().as_ref(), b"dark-bytes");
    assert_eq!(
        tree.attributes(view_id).unwrap().get("data-variant"),
        Some("dark".to_string())
    );
}

#[tokio::test]
async fn icon_view_skips_unavailable_variant() {
    let root = tempfile::tempdir().unwrap();
    let store = Arc::new(AssetStore::open_in(root.path(), "icons").unwrap());

    let light_url = "http://127.0.0.1:9/sun.svg";
    let dark_url = "http://127.0.0.1:9/moon.svg";
    store.put(light_url, b"light-bytes").unwrap();
    // Dark variant absent from the cache and unreachable over the network.

    let theme = Arc::new(ThemeContext::new(Theme::Dark));
    let resolver = Arc::new(IconResolver::new(
        store,
        Arc::new(AssetFetcher::new().unwrap()),
    ));
    let view = IconView::with_sources(theme.clone(), resolver, light_url, dark_url);

    view.resolve().await;
    assert_eq!(view.state(), ResolveState::Ready);

    // The dark variant is skipped, not substituted.
    assert!(view.visible_bytes().is_none());
    theme.set_theme(Theme::Light);
    assert_eq!(view.visible_bytes().unwrap().as_ref(), b"light-bytes");
}

// ============================================================================
// Navigation menu
// ============================================================================

#[test]
fn menu_toggle_and_link_follow_clear_active_state() {
    let links = r#"[{"name": "Home", "url": "/home"}, {"name": "About", "url": "/about"}]"#;
    let mut tree = ComponentTree::new();
    let menu = tree
        .mount(None, Box::new(NavMenu::with_links_json(links)))
        .unwrap();
    let button = tree.find_child_by_name(menu, "menu-button").unwrap().unwrap();
    let panel = tree.find_child_by_name(menu, "nav-panel").unwrap().unwrap();

    // Icon and panel toggle together.
    tree.activate(button).unwrap();
    assert!(tree.attributes(button).unwrap().is_active("data-active"));
    assert!(tree.attributes(panel).unwrap().is_active("data-active"));

    // Following a generated link closes the menu.
    let about = tree.find_child_by_name(panel, "About").unwrap().unwrap();
    assert_eq!(tree.activate(about).unwrap(), DispatchResult::Accepted);
    assert!(!tree.attributes(button).unwrap().is_active("data-active"));
    assert!(!tree.attributes(panel).unwrap().is_active("data-active"));
    assert!(!tree.get::<NavMenu>(menu).unwrap().is_open());
}

#[test]
fn malformed_links_json_renders_no_entries_and_no_failure() {
    let mut tree = ComponentTree::new();
    let menu = tree
        .mount(None, Box::new(NavMenu::with_links_json("{broken")))
        .unwrap();
    let panel = tree.find_child_by_name(menu, "nav-panel").unwrap().unwrap();

    assert_eq!(tree.children(panel).unwrap().len(), 0);

    // The menu still toggles; only the entries are missing.
    let button = tree.find_child_by_name(menu, "menu-button").unwrap().unwrap();
    assert_eq!(tree.activate(button).unwrap(), DispatchResult::Accepted);
    assert!(tree.get::<NavMenu>(menu).unwrap().is_open());
}

// ============================================================================
// Dispatch semantics
// ============================================================================

#[test]
fn unknown_event_kind_is_silently_ignored() {
    let mut tree = ComponentTree::new();
    let counter = tree.mount(None, Box::new(Counter::new())).unwrap();
    let inc = tree.find_child_by_name(counter, "increment").unwrap().unwrap();

    // A counter subtree implements no menu events; the event falls off the
    // root without error and without a state transition.
    let result = tree.dispatch(inc, Event::new(ControlEvent::MenuToggle));
    assert_eq!(result, DispatchResult::Ignored);
    assert_eq!(tree.get::<Counter>(counter).unwrap().value(), 0);
}

#[test]
fn sibling_composites_do_not_consume_each_others_events() {
    let theme = Arc::new(ThemeContext::new(Theme::Light));
    let mut tree = ComponentTree::new();
    let counter = tree.mount(None, Box::new(Counter::new())).unwrap();
    let toggle = tree
        .mount(None, Box::new(ThemeToggle::new(theme.clone())))
        .unwrap();

    let moon = tree.find_child_by_name(toggle, "moon").unwrap().unwrap();
    tree.activate(moon).unwrap();

    // The toggle's event never reached the counter.
    assert_eq!(tree.get::<Counter>(counter).unwrap().value(), 0);
    assert_eq!(theme.theme(), Theme::Dark);
}

#[test]
fn attribute_writes_settle_before_dispatch_returns() {
    let links = r#"[{"name": "Home", "url": "/home"}]"#;
    let mut tree = ComponentTree::new();
    let menu = tree
        .mount(None, Box::new(NavMenu::with_links_json(links)))
        .unwrap();
    let button = tree.find_child_by_name(menu, "menu-button").unwrap().unwrap();

    let result = tree.activate(button).unwrap();
    // By the time dispatch returned, the top-down writes were applied.
    assert_eq!(result, DispatchResult::Accepted);
    assert!(tree.attributes(button).unwrap().is_active("data-active"));
}
