// SPDX-License-Identifier: MPL-2.0
use navkit::application::port::{
    CloseHook, DestinationMaterializer, Observer, OwnedWindow, PageFactory, WindowFactory,
};
use navkit::domain::navigation::{Locator, PageKey};
use navkit::{NavigationStack, PageFlavor, WindowFlavor};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// =============================================================================
// Fixtures
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Page {
    locator: String,
    context: Option<String>,
}

#[derive(Default)]
struct Pages;

impl PageFactory for Pages {
    type Page = Rc<Page>;
    type Parameter = String;

    fn load(&mut self, locator: &Locator, parameter: Option<String>) -> Rc<Page> {
        Rc::new(Page {
            locator: locator.to_string(),
            context: parameter,
        })
    }
}

type PageStack = NavigationStack<PageFlavor<Pages>>;

fn page_stack() -> PageStack {
    let stack = NavigationStack::new(PageFlavor::new(Pages));
    stack.register("first", "/View/FirstView");
    stack.register("second", "/View/SecondView");
    stack
}

/// Records the locator of every published top, `-` for an empty stack.
fn record(stack: &PageStack) -> (Rc<RefCell<Vec<String>>>, navkit::Subscription) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let subscription = stack.subscribe(move |top: &Option<Rc<Page>>| {
        sink.borrow_mut().push(
            top.as_ref()
                .map_or_else(|| "-".to_string(), |page| page.locator.clone()),
        );
    });
    (seen, subscription)
}

fn key(stack: &PageStack) -> Option<String> {
    stack.current_page_key().map(|k| k.to_string())
}

// =============================================================================
// Stack transitions
// =============================================================================

#[test]
fn first_second_back_back_scenario() {
    let stack = page_stack();

    stack.navigate_to("first");
    assert_eq!(key(&stack).as_deref(), Some("first"));

    stack.navigate_to("second");
    assert_eq!(key(&stack).as_deref(), Some("second"));
    assert_eq!(stack.depth(), 2);

    stack.go_back();
    assert_eq!(key(&stack).as_deref(), Some("first"));
    assert_eq!(stack.depth(), 1);

    stack.go_back();
    assert_eq!(key(&stack), None);
    assert_eq!(stack.depth(), 0);

    stack.go_back();
    assert_eq!(stack.depth(), 0);
}

#[test]
fn unregistered_key_changes_nothing_and_broadcasts_nothing() {
    let stack = page_stack();
    stack.navigate_to("first");
    let (seen, _sub) = record(&stack);
    seen.borrow_mut().clear();

    stack.navigate_to("missing");

    assert_eq!(stack.depth(), 1);
    assert_eq!(key(&stack).as_deref(), Some("first"));
    assert!(seen.borrow().is_empty());
}

#[test]
fn go_back_on_empty_stack_broadcasts_nothing() {
    let stack = page_stack();
    let (seen, _sub) = record(&stack);

    stack.go_back();

    assert!(seen.borrow().is_empty());
}

#[test]
fn reregistering_key_uses_latest_locator() {
    let stack = page_stack();
    stack.register("first", "/View/Replacement");

    stack.navigate_to("first");

    assert_eq!(
        stack.top().map(|p| p.locator.clone()).as_deref(),
        Some("/View/Replacement")
    );
}

#[test]
fn parameter_becomes_page_context() {
    let stack = page_stack();
    stack.navigate_to_with("second", "order 42".to_string());

    let page = stack.top().expect("page on stack");
    assert_eq!(page.context.as_deref(), Some("order 42"));
}

#[test]
fn current_key_tracks_random_walk() {
    let stack = page_stack();
    let mut model: Vec<&str> = Vec::new();
    let steps = [
        "first", "back", "second", "second", "missing", "back", "first", "back", "back", "back",
        "first",
    ];

    for step in steps {
        match step {
            "back" => {
                stack.go_back();
                model.pop();
            }
            "missing" => stack.navigate_to(step),
            target => {
                stack.navigate_to(target);
                model.push(target);
            }
        }
        assert_eq!(key(&stack).as_deref(), model.last().copied());
        assert_eq!(stack.depth(), model.len());
    }
}

#[test]
fn registry_can_be_filled_from_another_thread() {
    let stack = page_stack();
    let registry = stack.registry();

    std::thread::spawn(move || {
        registry.register("late", "/View/LateView");
    })
    .join()
    .expect("registration thread panicked");

    stack.navigate_to("late");
    assert_eq!(stack.current_page_key(), Some(PageKey::from("late")));
}

// =============================================================================
// Observers
// =============================================================================

#[test]
fn every_transition_notifies_each_observer_once_in_order() {
    let stack = page_stack();
    let order = Rc::new(RefCell::new(Vec::new()));

    let mut subs = Vec::new();
    for name in ["a", "b", "c"] {
        let sink = Rc::clone(&order);
        subs.push(stack.subscribe(move |_top: &Option<Rc<Page>>| {
            sink.borrow_mut().push(name);
        }));
    }

    stack.navigate_to("first");
    stack.go_back();

    assert_eq!(*order.borrow(), vec!["a", "b", "c", "a", "b", "c"]);
}

#[test]
fn subscribe_delivers_current_top_immediately() {
    let stack = page_stack();
    stack.navigate_to("first");

    let (seen, _sub) = record(&stack);

    assert_eq!(*seen.borrow(), vec!["/View/FirstView"]);
}

#[test]
fn subscribe_to_empty_stack_delivers_nothing() {
    let stack = page_stack();
    let (seen, _sub) = record(&stack);
    assert!(seen.borrow().is_empty());

    stack.navigate_to("first");
    stack.go_back();
    assert_eq!(*seen.borrow(), vec!["/View/FirstView", "-"]);
}

#[test]
fn unsubscribed_observer_receives_nothing_more() {
    let stack = page_stack();
    let (seen, sub) = record(&stack);

    stack.navigate_to("first");
    sub.unsubscribe();
    sub.unsubscribe();
    stack.navigate_to("second");

    assert_eq!(*seen.borrow(), vec!["/View/FirstView"]);
    assert!(!sub.is_active());
    assert_eq!(stack.observer_count(), 0);
}

#[test]
fn observer_unsubscribing_itself_does_not_disturb_others() {
    let stack = page_stack();
    let slot: Rc<RefCell<Option<navkit::Subscription>>> = Rc::new(RefCell::new(None));
    let own = Rc::clone(&slot);
    let first = stack.subscribe(move |_top: &Option<Rc<Page>>| {
        if let Some(sub) = own.borrow().as_ref() {
            sub.unsubscribe();
        }
    });
    *slot.borrow_mut() = Some(first);
    let (seen, _sub) = record(&stack);

    stack.navigate_to("first");
    stack.navigate_to("second");

    assert_eq!(*seen.borrow(), vec!["/View/FirstView", "/View/SecondView"]);
    assert_eq!(stack.observer_count(), 1);
}

#[test]
fn observer_added_during_broadcast_misses_in_flight_value() {
    let stack = page_stack();
    let late_seen = Rc::new(RefCell::new(Vec::new()));
    let late_subs = Rc::new(RefCell::new(Vec::new()));

    let handle = stack.clone();
    let sink = Rc::clone(&late_seen);
    let subs = Rc::clone(&late_subs);
    let _adder = stack.subscribe(move |top: &Option<Rc<Page>>| {
        if top.as_ref().is_some_and(|p| p.locator == "/View/FirstView") && subs.borrow().is_empty()
        {
            let sink = Rc::clone(&sink);
            let sub = handle.subscribe(move |top: &Option<Rc<Page>>| {
                sink.borrow_mut().push(top.as_ref().map(|p| p.locator.clone()));
            });
            subs.borrow_mut().push(sub);
        }
    });

    stack.navigate_to("first");
    stack.navigate_to("second");

    // The late observer receives the top it subscribed to, then later values
    assert_eq!(
        *late_seen.borrow(),
        vec![
            Some("/View/FirstView".to_string()),
            Some("/View/SecondView".to_string())
        ]
    );
}

#[test]
fn navigation_from_observer_runs_after_broadcast() {
    let stack = page_stack();
    let log = Rc::new(RefCell::new(Vec::new()));

    let handle = stack.clone();
    let sink = Rc::clone(&log);
    let _redirect = stack.subscribe(move |top: &Option<Rc<Page>>| {
        let locator = top.as_ref().map(|p| p.locator.clone());
        sink.borrow_mut().push(format!("a:{locator:?}"));
        if locator.as_deref() == Some("/View/FirstView") {
            handle.navigate_to("second");
        }
    });
    let sink = Rc::clone(&log);
    let _audit = stack.subscribe(move |top: &Option<Rc<Page>>| {
        let locator = top.as_ref().map(|p| p.locator.clone());
        sink.borrow_mut().push(format!("b:{locator:?}"));
    });

    stack.navigate_to("first");

    assert_eq!(
        *log.borrow(),
        vec![
            "a:Some(\"/View/FirstView\")",
            "b:Some(\"/View/FirstView\")",
            "a:Some(\"/View/SecondView\")",
            "b:Some(\"/View/SecondView\")",
        ]
    );
    assert_eq!(stack.depth(), 2);
}

struct Completion(Rc<Cell<bool>>);

impl Observer<Option<Rc<Page>>> for Completion {
    fn on_next(&mut self, _value: &Option<Rc<Page>>) {}

    fn on_completed(&mut self) {
        self.0.set(true);
    }
}

#[test]
fn complete_notifies_and_detaches_observers() {
    let stack = page_stack();
    let done = Rc::new(Cell::new(false));
    let _sub = stack.subscribe(Completion(Rc::clone(&done)));

    stack.complete();

    assert!(done.get());
    assert_eq!(stack.observer_count(), 0);
}

// =============================================================================
// Owned window flavor
// =============================================================================

#[derive(Clone)]
struct Window {
    key: String,
    open: Rc<Cell<bool>>,
    close_calls: Rc<Cell<u32>>,
    on_closed: Rc<RefCell<Vec<CloseHook>>>,
}

impl Window {
    /// The user clicks the close button.
    fn user_close(&self) {
        self.close();
    }
}

impl OwnedWindow for Window {
    fn close(&self) {
        self.close_calls.set(self.close_calls.get() + 1);
        if !self.open.replace(false) {
            return;
        }
        let hooks = std::mem::take(&mut *self.on_closed.borrow_mut());
        for hook in hooks {
            hook.notify_closed();
        }
    }

    fn on_closed(&self, hook: CloseHook) {
        self.on_closed.borrow_mut().push(hook);
    }
}

#[derive(Default)]
struct Windows {
    created: Rc<RefCell<Vec<Window>>>,
}

impl WindowFactory for Windows {
    type Window = Window;
    type Parameter = ();

    fn create(&mut self, locator: &Locator, _parameter: Option<()>) -> Window {
        let window = Window {
            key: locator.to_string(),
            open: Rc::new(Cell::new(true)),
            close_calls: Rc::new(Cell::new(0)),
            on_closed: Rc::new(RefCell::new(Vec::new())),
        };
        self.created.borrow_mut().push(window.clone());
        window
    }
}

fn window_stack() -> (NavigationStack<WindowFlavor<Windows>>, Rc<RefCell<Vec<Window>>>) {
    let windows = Windows::default();
    let created = Rc::clone(&windows.created);
    let stack = NavigationStack::new(WindowFlavor::new(windows));
    stack.register("settings", "/View/SettingsWindow");
    stack.register("about", "/View/AboutWindow");
    (stack, created)
}

#[test]
fn go_back_closes_window_without_second_pop() {
    let (stack, created) = window_stack();
    stack.navigate_to("settings");
    stack.navigate_to("about");
    let tops = Rc::new(Cell::new(0));
    let counter = Rc::clone(&tops);
    let _sub = stack.subscribe(move |_top: &Option<Window>| counter.set(counter.get() + 1));
    tops.set(0);

    stack.go_back();

    let created = created.borrow();
    assert_eq!(created[1].close_calls.get(), 1);
    assert!(created[0].open.get());
    assert_eq!(stack.current_page_key(), Some(PageKey::from("settings")));
    assert_eq!(tops.get(), 1);
}

#[test]
fn user_closing_top_window_goes_back() {
    let (stack, created) = window_stack();
    stack.navigate_to("settings");
    stack.navigate_to("about");

    let about = created.borrow()[1].clone();
    about.user_close();

    assert_eq!(stack.depth(), 1);
    assert_eq!(stack.top().map(|w| w.key), Some("/View/SettingsWindow".to_string()));
}

#[test]
fn closing_window_that_is_not_on_top_is_ignored() {
    let (stack, created) = window_stack();
    stack.navigate_to("settings");
    stack.navigate_to("about");

    let settings = created.borrow()[0].clone();
    settings.user_close();

    assert_eq!(stack.depth(), 2);
    assert_eq!(stack.current_page_key(), Some(PageKey::from("about")));
}

#[test]
fn same_key_twice_gets_distinct_entries() {
    let (stack, created) = window_stack();
    stack.navigate_to("about");
    stack.navigate_to("about");

    let lower = created.borrow()[0].clone();
    lower.user_close();
    assert_eq!(stack.depth(), 2);

    let upper = created.borrow()[1].clone();
    upper.user_close();
    assert_eq!(stack.depth(), 1);
}

#[test]
fn dropping_stack_closes_remaining_windows() {
    let (stack, created) = window_stack();
    stack.navigate_to("settings");
    stack.navigate_to("about");

    drop(stack);

    assert!(created.borrow().iter().all(|w| !w.open.get()));
}

// =============================================================================
// Custom materializer
// =============================================================================

/// Materializer resolving unknown locators to a placeholder.
struct Placeholder;

impl DestinationMaterializer for Placeholder {
    type Handle = String;
    type Parameter = ();

    fn materialize(&mut self, locator: &Locator, _parameter: Option<()>) -> String {
        if locator.as_str().starts_with("/View/") {
            locator.to_string()
        } else {
            "placeholder".to_string()
        }
    }

    fn release(&mut self, handle: String) {
        drop(handle);
    }
}

#[test]
fn materializer_may_substitute_placeholder() {
    let stack = NavigationStack::new(Placeholder);
    stack.register("broken", "nowhere");

    stack.navigate_to("broken");

    assert_eq!(stack.top().as_deref(), Some("placeholder"));
    assert_eq!(stack.current_page_key(), Some(PageKey::from("broken")));
}
