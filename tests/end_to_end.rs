//! Drive the writers and check every panel follows the shared state.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::effect;
use syncboard::components::{analysis, category, current, inspector, menu, status, transforms};
use syncboard::derive::Category;
use syncboard::{ButtonDescriptor, Config, NoopHook, SelectHook};
use syncboard::{App, Snapshot};

fn app() -> App {
    App::with_hook(Config::default(), Box::new(NoopHook))
}

fn select(app: &App, display_text: &str) {
    let index = app.config().find_button(display_text).unwrap();
    assert!(app.selector().select(index));
}

#[test]
fn button_seven_with_abc_updates_every_panel() {
    let app = app();
    select(&app, "Button 7");
    app.input().set_text("abc");
    let snapshot = app.store().snapshot();

    let status = status::view(&snapshot);
    assert_eq!(status.caption, "Button 7 is active");
    assert_eq!(status.active_slot(), None);

    assert_eq!(category::view(&snapshot).category, Category::Odd);
    assert_eq!(menu::view(&snapshot).highlighted, None);

    let transforms = transforms::view(&snapshot);
    assert_eq!(transforms.upper, "ABC");
    assert_eq!(transforms.char_count, 3);
    assert_eq!(transforms.reversed.as_deref(), Some("cba"));

    let inspector = inspector::view(&snapshot);
    assert_eq!(inspector.button_number, "7");
    assert_eq!(inspector.is_even, "false");

    let current = current::view(&snapshot);
    assert_eq!(current.text, "abc");
}

#[test]
fn special_button_wins_over_even() {
    let app = app();
    select(&app, "Button 1000");
    let snapshot = app.store().snapshot();

    assert_eq!(category::view(&snapshot).category, Category::Special);
    assert_eq!(inspector::view(&snapshot).is_even, "true");
    assert_eq!(transforms::view(&snapshot).reversed, None);
}

#[test]
fn button_without_number_looks_idle() {
    let app = app();
    select(&app, "No number");
    app.input().set_text("xyz");
    let snapshot = app.store().snapshot();

    assert_eq!(category::view(&snapshot).category, Category::Idle);
    assert_eq!(inspector::view(&snapshot).button_number, "null");
    assert_eq!(inspector::view(&snapshot).is_even, "false");
    assert_eq!(transforms::view(&snapshot).reversed, None);
    assert_eq!(status::view(&snapshot).active_slot(), None);
}

#[test]
fn analysis_counts_letters() {
    let app = app();
    app.input().set_text("Hello FileMaker");
    let stats = analysis::view(&app.store().snapshot()).stats;

    assert_eq!(stats.word_count(), 2);
    assert_eq!(stats.vowels, 6);
    assert_eq!(stats.consonants, 8);
    assert_eq!(stats.chars, 15);
}

#[test]
fn effects_see_every_write() {
    let app = app();
    let store = app.store().clone();
    let runs = Rc::new(Cell::new(0usize));
    let seen = Rc::new(RefCell::new(Snapshot::default()));

    let runs_in = runs.clone();
    let seen_in = seen.clone();
    let _stop = effect(move || {
        *seen_in.borrow_mut() = store.snapshot();
        runs_in.set(runs_in.get() + 1);
    });
    assert_eq!(runs.get(), 1);

    app.input().set_text("hi");
    assert_eq!(seen.borrow().input_text, "hi");

    select(&app, "Button 2");
    assert_eq!(seen.borrow().selected_button.display_text, "Button 2");
    assert_eq!(runs.get(), 3);
}

#[test]
fn reselecting_the_same_button_is_a_new_revision() {
    let app = app();
    select(&app, "Button 3");
    let first = app.store().revision();
    select(&app, "Button 3");
    assert!(app.store().revision() > first);
}

#[test]
fn composed_frame_shows_state() {
    let app = app();
    select(&app, "Button 2");
    app.input().set_text("Sync me");
    let text = app.render_text(110);

    assert!(text.contains("Button 2 is active"));
    assert!(text.contains("Button 2 is even"));
    assert!(text.contains("Profile is highlighted"));
    assert!(text.contains("SYNC ME"));
    assert!(text.contains("\"Sync me\""));
}

struct RecordingHook(Rc<RefCell<Vec<String>>>);

impl SelectHook for RecordingHook {
    fn on_select(&self, button: &ButtonDescriptor) {
        self.0.borrow_mut().push(button.label_text.clone());
    }
}

#[test]
fn hook_fires_after_each_selection() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let app = App::with_hook(Config::default(), Box::new(RecordingHook(calls.clone())));

    select(&app, "Button 1");
    select(&app, "Button 1");
    app.input().set_text("not a selection");

    let label = app.config().buttons[0].label_text.clone();
    assert_eq!(*calls.borrow(), vec![label.clone(), label]);
}
