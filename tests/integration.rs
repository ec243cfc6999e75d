//! Integration tests for weft.
//!
//! These tests exercise the public API from outside the crate: mounting,
//! rebuilding and publishing through a framework, the callback bridge, the
//! overlay mutators, and configuration loading.

use std::fs;
use std::io;
use std::time::Duration;

use pretty_assertions::assert_eq;

use weft::bridge::BridgeResponse;
use weft::dom::WidgetTree;
use weft::prelude::*;
use weft::state::Lifecycle;
use weft::sync::{MemorySink, Patch, StylesheetSink};
use weft::testing::{self, render_to_markup, MemorySurface};
use weft::{RenderError, StateError};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

struct Counter {
    count: u32,
}

impl State for Counter {
    fn build(&self) -> Box<dyn Widget> {
        Box::new(
            Flex::column()
                .child(Text::new(format!("Count: {}", self.count)))
                .child(
                    Button::elevated()
                        .child(Text::new("+"))
                        .on_pressed("increment"),
                ),
        )
    }
}

/// A page with a drawer, a bottom sheet, a dialog and a snack bar.
struct Shell {
    overlays: Overlays,
    saves: u32,
}

impl Shell {
    fn new() -> Self {
        Self {
            overlays: Overlays::new()
                .with_drawer()
                .with_bottom_sheet()
                .with_dialog()
                .with_snack_bar(Duration::from_secs(3)),
            saves: 0,
        }
    }
}

impl State for Shell {
    fn build(&self) -> Box<dyn Widget> {
        let mut scaffold = Scaffold::new()
            .app_bar(
                AppBar::new()
                    .leading(Button::icon().child(Icon::new("bars")).on_pressed("menu"))
                    .title(Text::new("Shell")),
            )
            .drawer(Drawer::new(Text::new("Menu")).open(self.overlays.drawer_open()))
            .body(Text::new(format!("Saves: {}", self.saves)))
            .bottom_sheet(
                BottomSheet::new(Text::new("Share"))
                    .barrier(Color::rgba(0, 0, 0, 50))
                    .open(self.overlays.bottom_sheet_open()),
            )
            .dialog(
                Dialog::new()
                    .title(Text::new("Discard?"))
                    .action(Button::text().child(Text::new("OK")).on_pressed("close_dialog"))
                    .open(self.overlays.dialog_open()),
            );
        if let Some(snack_bar) = self.overlays.snack_bar {
            scaffold = scaffold.snack_bar(
                SnackBar::new(Text::new("Saved"))
                    .visible(snack_bar.visible)
                    .duration(snack_bar.duration),
            );
        }
        Box::new(scaffold)
    }
}

impl HasOverlays for Shell {
    fn overlays(&self) -> &Overlays {
        &self.overlays
    }

    fn overlays_mut(&mut self) -> &mut Overlays {
        &mut self.overlays
    }
}

/// Owns no overlays at all.
#[derive(Default)]
struct Plain {
    overlays: Overlays,
}

impl State for Plain {
    fn build(&self) -> Box<dyn Widget> {
        Box::new(Text::new("plain"))
    }
}

impl HasOverlays for Plain {
    fn overlays(&self) -> &Overlays {
        &self.overlays
    }

    fn overlays_mut(&mut self) -> &mut Overlays {
        &mut self.overlays
    }
}

struct FailingSink;

impl StylesheetSink for FailingSink {
    fn write(&mut self, _: u64, _: &str) -> io::Result<()> {
        Err(io::Error::other("disk full"))
    }
}

fn framework_with(surface: &MemorySurface, sink: &MemorySink) -> Framework {
    Framework::new(FrameworkConfig::new(), surface.clone(), sink.clone())
}

/// Mount `state` and load the initial document into `surface`.
fn boot<S: State>(framework: &mut Framework, surface: &MemorySurface, state: S) -> StateHandle<S> {
    let handle = framework.mount_root(state).unwrap();
    let document = framework.publish_document().unwrap();
    surface.set_document(&document);
    handle
}

// ---------------------------------------------------------------------------
// Counter scenario
// ---------------------------------------------------------------------------

#[test]
fn counter_increment_replaces_root() {
    let surface = MemorySurface::new();
    let sink = MemorySink::new();
    let mut fw = framework_with(&surface, &sink);
    let counter = boot(&mut fw, &surface, Counter { count: 0 });
    fw.register_callback("increment", move |fw, _| {
        fw.set_state_with(counter, |c| c.count += 1).map(drop)
    });

    let old_root = fw.tracked_root(counter).unwrap();
    assert!(surface.document().contains("Count: 0"));

    let message = fw.dispatch_callback("increment", &[]);
    assert_eq!(message, "Callback 'increment' executed successfully.");

    let new_root = fw.tracked_root(counter).unwrap();
    assert_ne!(old_root, new_root);
    assert!(fw.registry().get(old_root).is_none());
    assert!(fw.registry().get(new_root).is_some());

    let markup = fw.tree().render(new_root).unwrap();
    assert_eq!(testing::root_id(&markup), Some(new_root));
    assert!(testing::text_content(&markup).contains("Count: 1"));

    let document = surface.document();
    assert!(document.contains("Count: 1"));
    assert!(!document.contains("Count: 0"));
    assert!(testing::find_element(&document, old_root).is_none());
    assert!(testing::find_element(&document, new_root).is_some());
    assert_eq!(surface.stylesheet_href().as_deref(), Some("styles.css?v=2"));
    assert_eq!(sink.last().map(|(version, _)| version), Some(2));
}

#[test]
fn rebuild_keeps_registry_size_stable() {
    let mut fw = Framework::headless(FrameworkConfig::new());
    let counter = fw.mount_root(Counter { count: 0 }).unwrap();
    let size = fw.registry().len();
    for _ in 0..5 {
        fw.set_state_with(counter, |c| c.count += 1).unwrap();
    }
    assert_eq!(fw.registry().len(), size);
    assert_eq!(fw.state(counter).unwrap().count, 5);
    assert_eq!(fw.version(), 5);
}

// ---------------------------------------------------------------------------
// Interning and the active scan
// ---------------------------------------------------------------------------

#[test]
fn equal_styles_share_a_class() {
    let bold = TextStyle::new().with_font_weight(FontWeight::Bold);
    let (markup, tree) = render_to_markup(
        Flex::column()
            .child(Text::new("a").style(bold.clone()))
            .child(Text::new("b").style(bold))
            .child(Text::new("c")),
    )
    .unwrap();

    let classes: Vec<Vec<String>> = testing::elements(&markup)
        .into_iter()
        .filter(|e| e.tag == "p")
        .map(|e| e.classes)
        .collect();
    assert_eq!(classes[0], classes[1]);
    assert_ne!(classes[0], classes[2]);
    assert_eq!(tree.styles().table::<weft::widgets::text::TextKey>().map(|t| t.len()), Some(2));
}

#[test]
fn active_scan_ignores_disjoint_trees() {
    let mut tree = WidgetTree::new();
    let first = tree
        .mount(
            Box::new(
                Flex::column()
                    .child(Text::new("a"))
                    .child(Text::new("b").align(TextAlign::Center)),
            ),
            None,
        )
        .unwrap();
    let second = tree
        .mount(Box::new(Text::new("c").align(TextAlign::Right)), None)
        .unwrap();

    let css = tree.styles().stylesheet(&tree.registry().active_classes(first));
    assert!(css.contains(".shared-text-0 "));
    assert!(css.contains(".shared-text-1 "));
    assert!(!css.contains(".shared-text-2 "));

    let other = tree.styles().stylesheet(&tree.registry().active_classes(second));
    assert!(other.contains(".shared-text-2 "));
    assert!(!other.contains(".shared-flex-0 "));
}

#[test]
fn every_mounted_node_is_addressable() {
    let mut fw = Framework::headless(FrameworkConfig::new());
    let shell = fw.mount_root(Shell::new()).unwrap();
    let root = fw.registry().root().unwrap();
    assert_eq!(root, shell.id());
    let markup = fw.tree().render(root).unwrap();

    let ids = fw.registry().walk_depth_first(root);
    assert_eq!(ids.len(), fw.registry().len());
    for id in ids {
        let range = testing::find_element(&markup, id)
            .unwrap_or_else(|| panic!("{id} missing from markup"));
        assert_eq!(testing::root_id(&markup[range]), Some(id));
    }
}

// ---------------------------------------------------------------------------
// Degraded publishes
// ---------------------------------------------------------------------------

#[test]
fn missing_surface_element_is_not_fatal() {
    let surface = MemorySurface::new();
    let sink = MemorySink::new();
    let mut fw = framework_with(&surface, &sink);
    let counter = fw.mount_root(Counter { count: 0 }).unwrap();

    let report = fw.set_state_with(counter, |c| c.count = 9).unwrap();
    assert!(!report.element_replaced);
    assert!(report.stylesheet_written);
    assert_eq!(fw.version(), 1);
    assert_eq!(surface.stylesheet_href().as_deref(), Some("styles.css?v=1"));
    assert_eq!(fw.tracked_root(counter).unwrap(), testing::root_id(&report.markup).unwrap());
}

#[test]
fn stylesheet_write_failure_keeps_previous_version() {
    let surface = MemorySurface::new();
    let mut fw = Framework::new(FrameworkConfig::new(), surface.clone(), FailingSink);
    let counter = boot(&mut fw, &surface, Counter { count: 0 });
    assert_eq!(fw.version(), 0);

    let report = fw.set_state_with(counter, |c| c.count = 1).unwrap();
    assert!(!report.stylesheet_written);
    assert!(report.element_replaced);
    assert_eq!(fw.version(), 0);
    assert!(surface.document().contains("Count: 1"));
    assert!(surface
        .patches()
        .iter()
        .all(|patch| matches!(patch, Patch::ReplaceElement { .. })));
}

/// Builds a button without its required child when `broken`.
struct Toggle {
    broken: bool,
}

impl State for Toggle {
    fn build(&self) -> Box<dyn Widget> {
        if self.broken {
            Box::new(Flex::row().child(Button::text()))
        } else {
            Box::new(Text::new("ok"))
        }
    }
}

#[test]
fn render_error_leaves_old_tree_in_place() {
    let surface = MemorySurface::new();
    let sink = MemorySink::new();
    let mut fw = framework_with(&surface, &sink);
    let toggle = boot(&mut fw, &surface, Toggle { broken: false });
    let root = fw.tracked_root(toggle).unwrap();
    let document = surface.document();
    let nodes = fw.registry().len();
    let writes = sink.len();

    let err = fw.set_state_with(toggle, |t| t.broken = true).unwrap_err();
    assert!(matches!(
        err,
        FrameworkError::Render(RenderError::MissingChild { widget: "TextButton", .. })
    ));
    assert_eq!(fw.tracked_root(toggle).unwrap(), root);
    assert_eq!(fw.registry().len(), nodes);
    assert_eq!(fw.registry().children(toggle.id()), vec![root]);
    assert_eq!(surface.document(), document);
    assert_eq!(sink.len(), writes);
    assert_eq!(
        fw.tree().stateful(toggle.id()).unwrap().lifecycle(),
        Lifecycle::Built
    );
}

// ---------------------------------------------------------------------------
// Caller errors
// ---------------------------------------------------------------------------

#[test]
fn set_state_after_teardown_is_not_mounted() {
    let mut fw = Framework::headless(FrameworkConfig::new());
    let counter = fw.mount_root(Counter { count: 0 }).unwrap();
    fw.teardown();
    let err = fw.set_state(counter).unwrap_err();
    assert!(matches!(
        err,
        FrameworkError::State(StateError::NotMounted(id)) if id == counter.id()
    ));
}

#[test]
fn mount_under_unknown_parent_fails() {
    let mut fw = Framework::headless(FrameworkConfig::new());
    let err = fw
        .mount_under(WidgetId::from_raw(42), Slot::CHILD, Plain::default())
        .unwrap_err();
    assert!(matches!(err, FrameworkError::Registry(_)));
    assert!(fw.registry().is_empty());
}

#[test]
fn nested_state_rebuilds_independently() {
    let mut fw = Framework::headless(FrameworkConfig::new());
    let column = fw.mount_widget(Flex::column().child(Text::new("header")), None).unwrap();
    let counter = fw.mount_under(column, Slot::CHILDREN, Counter { count: 0 }).unwrap();
    let header = fw.registry().children(column)[0];

    let report = fw.set_state_with(counter, |c| c.count = 4).unwrap();
    assert!(report.markup.contains("Count: 4"));
    assert!(fw.registry().get(header).is_some());
    assert_eq!(fw.registry().children(column), vec![header, counter.id()]);

    let page = fw.tree().render(column).unwrap();
    assert!(page.contains("header"));
    assert!(page.contains("Count: 4"));
}

// ---------------------------------------------------------------------------
// Bridge
// ---------------------------------------------------------------------------

#[test]
fn bridge_messages_round_trip() {
    let mut fw = Framework::headless(FrameworkConfig::new());
    let counter = fw.mount_root(Counter { count: 0 }).unwrap();
    fw.register_callback("add", move |fw, args| {
        let amount = args.first().and_then(|v| v.as_u64()).unwrap_or(1) as u32;
        fw.set_state_with(counter, |c| c.count += amount).map(drop)
    });

    let reply = fw
        .handle_bridge_message(r#"{"callback": "add", "args": [5]}"#)
        .unwrap();
    let reply: BridgeResponse = serde_json::from_str(&reply).unwrap();
    assert_eq!(reply, BridgeResponse::ok("Callback 'add' executed successfully."));
    assert_eq!(fw.state(counter).unwrap().count, 5);

    let reply = fw.handle_bridge_message(r#"{"callback": "nope"}"#).unwrap();
    assert_eq!(reply, r#"{"ok":false,"message":"Callback 'nope' not found."}"#);

    assert!(matches!(
        fw.handle_bridge_message("not json"),
        Err(FrameworkError::Bridge(_))
    ));
}

#[test]
fn published_markup_references_callbacks() {
    let mut fw = Framework::headless(FrameworkConfig::new());
    fw.mount_root(Shell::new()).unwrap();
    let document = fw.publish_document().unwrap();
    assert!(document.contains("onclick='handleClick(\"menu\")'"));
    assert!(document.contains("<i id="));
    assert!(document.contains("fa fa-bars"));
}

// ---------------------------------------------------------------------------
// Overlays
// ---------------------------------------------------------------------------

fn drawer_class(fw: &Framework) -> String {
    let root = fw.registry().root().unwrap();
    let drawer = fw.registry().find_by_type(root, "Drawer")[0];
    fw.registry().get(drawer).unwrap().class().unwrap().to_string()
}

#[test]
fn drawer_toggle_switches_class() {
    let surface = MemorySurface::new();
    let sink = MemorySink::new();
    let mut fw = framework_with(&surface, &sink);
    let shell = boot(&mut fw, &surface, Shell::new());
    let closed = drawer_class(&fw);
    assert!(sink.last().unwrap().1.contains("margin-left: -291px;"));

    fw.open_drawer(shell).unwrap();
    assert!(fw.state(shell).unwrap().overlays.drawer_open());
    let open = drawer_class(&fw);
    assert_ne!(open, closed);
    let css = sink.last().unwrap().1;
    assert!(css.contains("margin-left: 0px;"));
    assert!(!css.contains("margin-left: -291px;"));

    fw.toggle_drawer(shell).unwrap();
    assert_eq!(drawer_class(&fw), closed);
    fw.close_drawer(shell).unwrap();
    assert!(!fw.state(shell).unwrap().overlays.drawer_open());
}

fn class_of(fw: &Framework, widget_type: &str) -> String {
    let root = fw.registry().root().unwrap();
    let node = fw.registry().find_by_type(root, widget_type)[0];
    fw.registry().get(node).unwrap().class().unwrap().to_string()
}

#[test]
fn bottom_sheet_and_dialog_switch_class() {
    let surface = MemorySurface::new();
    let sink = MemorySink::new();
    let mut fw = framework_with(&surface, &sink);
    let shell = boot(&mut fw, &surface, Shell::new());
    let sheet_closed = class_of(&fw, "BottomSheet");
    let dialog_closed = class_of(&fw, "Dialog");
    assert!(sink.last().unwrap().1.contains("transform: translateY(100%);"));
    assert!(!surface.document().contains("100vw"));

    fw.show_bottom_sheet(shell).unwrap();
    assert!(fw.state(shell).unwrap().overlays.bottom_sheet_open());
    assert_ne!(class_of(&fw, "BottomSheet"), sheet_closed);
    assert_eq!(class_of(&fw, "Dialog"), dialog_closed);
    let css = sink.last().unwrap().1;
    assert!(css.contains("transform: translateY(0px);"));
    assert!(!css.contains("transform: translateY(100%);"));
    assert!(surface.document().contains("z-index: 899;"));

    fw.open_dialog(shell).unwrap();
    assert_ne!(class_of(&fw, "Dialog"), dialog_closed);
    assert!(sink.last().unwrap().1.contains("display: block;"));
    assert!(surface.document().contains("z-index: 999;"));

    fw.hide_bottom_sheet(shell).unwrap();
    fw.close_dialog(shell).unwrap();
    let overlays = &fw.state(shell).unwrap().overlays;
    assert!(!overlays.bottom_sheet_open());
    assert!(!overlays.dialog_open());
    assert_eq!(class_of(&fw, "BottomSheet"), sheet_closed);
    assert_eq!(class_of(&fw, "Dialog"), dialog_closed);
    assert!(!surface.document().contains("100vw"));
}

#[test]
fn mutators_without_overlays_still_rebuild() {
    let mut fw = Framework::headless(FrameworkConfig::new());
    let plain = fw.mount_root(Plain::default()).unwrap();
    fw.open_end_drawer(plain).unwrap();
    fw.close_end_drawer(plain).unwrap();
    fw.show_bottom_sheet(plain).unwrap();
    fw.hide_bottom_sheet(plain).unwrap();
    fw.open_dialog(plain).unwrap();
    fw.close_dialog(plain).unwrap();
    assert_eq!(fw.version(), 6);
    assert_eq!(fw.state(plain).unwrap().overlays, Overlays::new());
}

#[tokio::test(start_paused = true)]
async fn snack_bar_dismisses_itself() {
    let mut fw = Framework::headless(FrameworkConfig::new());
    let shell = fw.mount_root(Shell::new()).unwrap();

    fw.show_snack_bar(shell).unwrap();
    assert!(fw.state(shell).unwrap().overlays.snack_bar_visible());
    assert_eq!(fw.run_pending(), 0);

    let start = tokio::time::Instant::now();
    fw.run_ui_once().await;
    assert!(start.elapsed() >= Duration::from_secs(3));
    assert!(!fw.state(shell).unwrap().overlays.snack_bar_visible());
}

#[tokio::test(start_paused = true)]
async fn stale_snack_bar_timer_is_ignored() {
    let mut fw = Framework::headless(FrameworkConfig::new());
    let shell = fw.mount_root(Shell::new()).unwrap();

    fw.show_snack_bar(shell).unwrap();
    tokio::time::sleep(Duration::from_secs(2)).await;
    fw.show_snack_bar(shell).unwrap();

    // First timer fires at 3s but belongs to the older show.
    fw.run_ui_once().await;
    assert!(fw.state(shell).unwrap().overlays.snack_bar_visible());

    // Second fires at 5s.
    fw.run_ui_once().await;
    assert!(!fw.state(shell).unwrap().overlays.snack_bar_visible());
}

#[tokio::test(start_paused = true)]
async fn timers_from_before_teardown_are_dropped() {
    let mut fw = Framework::headless(FrameworkConfig::new());
    let first = fw.mount_root(Shell::new()).unwrap();
    fw.show_snack_bar(first).unwrap();
    fw.teardown();

    tokio::time::sleep(Duration::from_secs(2)).await;
    let second = fw.mount_root(Shell::new()).unwrap();
    assert_eq!(second.id(), first.id());
    fw.show_snack_bar(second).unwrap();

    // The pre-teardown timer fires after 1s and is discarded; the next task
    // to run is the new snack bar's own dismiss.
    let shown = tokio::time::Instant::now();
    fw.run_ui_once().await;
    assert!(shown.elapsed() >= Duration::from_secs(3));
    assert!(!fw.state(second).unwrap().overlays.snack_bar_visible());
}

fn snack_bar_rule(sink: &MemorySink) -> String {
    let (_, css) = sink.last().unwrap();
    css.lines()
        .find(|line| line.starts_with(".shared-snack-bar-"))
        .unwrap()
        .to_owned()
}

#[test]
fn hide_snack_bar_renders_hidden() {
    let sink = MemorySink::new();
    let mut fw = Framework::new(FrameworkConfig::new(), MemorySurface::new(), sink.clone());
    let shell = fw.mount_root(Shell::new()).unwrap();
    fw.set_state_with(shell, |s| s.saves += 1).unwrap();
    assert!(snack_bar_rule(&sink).contains("display: none;"));
    fw.show_snack_bar(shell).unwrap();
    assert!(!snack_bar_rule(&sink).contains("display: none;"));
    fw.hide_snack_bar(shell).unwrap();
    assert!(snack_bar_rule(&sink).contains("display: none;"));
}

// ---------------------------------------------------------------------------
// Configuration and teardown
// ---------------------------------------------------------------------------

#[test]
fn yaml_config_drives_file_output() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.yaml");
    fs::write(
        &config_path,
        format!(
            "title: Counter\nweb_dir: {}\nstylesheet_name: app.css\n",
            dir.path().display()
        ),
    )
    .unwrap();

    let config = FrameworkConfig::load(&config_path).unwrap();
    assert_eq!(config.title, "Counter");
    let mut fw = Framework::with_surface(config, MemorySurface::new());
    fw.mount_root(Counter { count: 0 }).unwrap();
    let document = fw.publish_document().unwrap();

    assert!(document.contains("<title>Counter</title>"));
    assert!(document.contains("href=\"app.css?v=1\""));
    let css = fs::read_to_string(dir.path().join("app.css")).unwrap();
    assert!(css.contains(".shared-text-0"));
    assert!(css.contains(".shared-button-0"));
}

#[test]
fn teardown_resets_everything() {
    let mut fw = Framework::headless(FrameworkConfig::new());
    fw.mount_root(Counter { count: 0 }).unwrap();
    fw.register_callback("noop", |_, _| Ok(()));
    fw.publish_document().unwrap();

    fw.teardown();
    assert!(fw.registry().is_empty());
    assert!(fw.styles().is_empty());
    assert!(fw.callbacks().is_empty());
    assert_eq!(fw.version(), 0);

    let again = fw.mount_root(Plain::default()).unwrap();
    assert_eq!(again.id(), WidgetId::from_raw(1));
}
