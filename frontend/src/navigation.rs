use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use yew::prelude::{Callback, Reducible};

use crate::config;

/// `scrolled` drives the compact look of the bar, `mobile_menu_open` the burger menu.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NavState {
    pub mobile_menu_open: bool,
    pub scrolled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavAction {
    ToggleMenu,
    CloseMenu,
    Scrolled(f64),
}

pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > config::SCROLLED_THRESHOLD_PX
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            NavAction::ToggleMenu => NavState {
                mobile_menu_open: !self.mobile_menu_open,
                ..*self
            },
            NavAction::CloseMenu => NavState {
                mobile_menu_open: false,
                ..*self
            },
            NavAction::Scrolled(offset_y) => NavState {
                scrolled: is_scrolled(offset_y),
                ..*self
            },
        };
        if next == *self {
            self
        } else {
            next.into()
        }
    }
}

/// Where sections live on the page and how the viewport is moved.
pub trait ScrollHost {
    /// Top edge of the section relative to the document, if it exists.
    fn section_top(&self, section_id: &str) -> Option<f64>;
    fn smooth_scroll_to(&self, top: f64);
}

/// One-shot delayed callbacks. Dropping the handle cancels the callback.
pub trait Timer {
    type Handle;

    fn after(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Scrolls so the section's top sits just below the fixed bar.
/// Returns false when no section has that id.
pub fn scroll_to_section<H: ScrollHost + ?Sized>(host: &H, section_id: &str) -> bool {
    match host.section_top(section_id) {
        Some(top) => {
            host.smooth_scroll_to(top - config::NAVBAR_OFFSET_PX);
            true
        }
        None => {
            debug!("No section with id '{}', nothing to scroll to", section_id);
            false
        }
    }
}

/// Holds at most one pending delayed scroll.
pub struct SectionScroller<H, T: Timer> {
    host: Rc<H>,
    timer: T,
    pending: Option<T::Handle>,
}

impl<H: ScrollHost + 'static, T: Timer> SectionScroller<H, T> {
    pub fn new(host: H, timer: T) -> Self {
        Self {
            host: Rc::new(host),
            timer,
            pending: None,
        }
    }

    /// A newer request replaces (and so cancels) one that has not fired yet.
    pub fn schedule(&mut self, section_id: &str) {
        let host = Rc::clone(&self.host);
        let section_id = section_id.to_string();
        let handle = self.timer.after(
            config::SCROLL_DELAY_MS,
            Box::new(move || {
                scroll_to_section(host.as_ref(), &section_id);
            }),
        );
        self.pending = Some(handle);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Page-wide navigation: menu state changes go out through `dispatch`,
/// scrolling through the shared scroller. Cloning shares the same scroller.
pub struct NavigationController<H, T: Timer> {
    dispatch: Callback<NavAction>,
    scroller: Rc<RefCell<SectionScroller<H, T>>>,
}

impl<H: ScrollHost + 'static, T: Timer> NavigationController<H, T> {
    pub fn new(dispatch: Callback<NavAction>, host: H, timer: T) -> Self {
        Self {
            dispatch,
            scroller: Rc::new(RefCell::new(SectionScroller::new(host, timer))),
        }
    }

    /// Closes the mobile menu right away, then scrolls to the section once
    /// the close transition has had time to finish.
    pub fn activate(&self, section_id: &str) {
        debug!("Navigating to section '{}'", section_id);
        self.dispatch.emit(NavAction::CloseMenu);
        self.scroller.borrow_mut().schedule(section_id);
    }

    pub fn toggle_menu(&self) {
        self.dispatch.emit(NavAction::ToggleMenu);
    }

    pub fn on_scroll(&self, offset_y: f64) {
        self.dispatch.emit(NavAction::Scrolled(offset_y));
    }

    pub fn cancel_pending(&self) {
        self.scroller.borrow_mut().cancel();
    }
}

impl<H, T: Timer> Clone for NavigationController<H, T> {
    fn clone(&self) -> Self {
        Self {
            dispatch: self.dispatch.clone(),
            scroller: Rc::clone(&self.scroller),
        }
    }
}

impl<H, T: Timer> PartialEq for NavigationController<H, T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.scroller, &other.scroller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakePage {
        sections: HashMap<&'static str, f64>,
        scrolls: Rc<RefCell<Vec<f64>>>,
    }

    impl ScrollHost for FakePage {
        fn section_top(&self, section_id: &str) -> Option<f64> {
            self.sections.get(section_id).copied()
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.scrolls.borrow_mut().push(top);
        }
    }

    struct Scheduled {
        millis: u32,
        callback: Box<dyn FnOnce()>,
        cancelled: Rc<Cell<bool>>,
    }

    #[derive(Clone, Default)]
    struct ManualTimer {
        queue: Rc<RefCell<Vec<Scheduled>>>,
    }

    struct ManualHandle(Rc<Cell<bool>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    impl Timer for ManualTimer {
        type Handle = ManualHandle;

        fn after(&self, millis: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.queue.borrow_mut().push(Scheduled {
                millis,
                callback,
                cancelled: cancelled.clone(),
            });
            ManualHandle(cancelled)
        }
    }

    impl ManualTimer {
        fn pending_delays(&self) -> Vec<u32> {
            self.queue
                .borrow()
                .iter()
                .filter(|s| !s.cancelled.get())
                .map(|s| s.millis)
                .collect()
        }

        fn fire_all(&self) {
            let due: Vec<Scheduled> = self.queue.borrow_mut().drain(..).collect();
            for scheduled in due {
                if !scheduled.cancelled.get() {
                    (scheduled.callback)();
                }
            }
        }
    }

    struct Harness {
        state: Rc<RefCell<Rc<NavState>>>,
        scrolls: Rc<RefCell<Vec<f64>>>,
        timer: ManualTimer,
        controller: NavigationController<FakePage, ManualTimer>,
    }

    fn harness(menu_open: bool) -> Harness {
        let state = Rc::new(RefCell::new(Rc::new(NavState {
            mobile_menu_open: menu_open,
            scrolled: false,
        })));
        let dispatch = {
            let state = state.clone();
            Callback::from(move |action: NavAction| {
                let current = state.borrow().clone();
                *state.borrow_mut() = current.reduce(action);
            })
        };
        let page = FakePage {
            sections: HashMap::from([("home", 0.0), ("contact", 4200.0)]),
            ..FakePage::default()
        };
        let scrolls = page.scrolls.clone();
        let timer = ManualTimer::default();
        let controller = NavigationController::new(dispatch, page, timer.clone());
        Harness {
            state,
            scrolls,
            timer,
            controller,
        }
    }

    #[test]
    fn scrolled_threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(51.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn toggle_flips_menu_and_close_is_idempotent() {
        let state = Rc::new(NavState::default());
        let open = state.reduce(NavAction::ToggleMenu);
        assert!(open.mobile_menu_open);
        let closed = open.reduce(NavAction::ToggleMenu);
        assert!(!closed.mobile_menu_open);
        let still_closed = closed.clone().reduce(NavAction::CloseMenu);
        assert_eq!(*still_closed, *closed);
    }

    #[test]
    fn scroll_updates_leave_menu_alone() {
        let state = Rc::new(NavState {
            mobile_menu_open: true,
            scrolled: false,
        });
        let next = state.reduce(NavAction::Scrolled(300.0));
        assert!(next.scrolled);
        assert!(next.mobile_menu_open);
    }

    #[test]
    fn activate_closes_menu_before_scrolling() {
        let h = harness(true);
        h.controller.activate("contact");

        assert!(!h.state.borrow().mobile_menu_open);
        assert!(h.scrolls.borrow().is_empty());
        assert_eq!(h.timer.pending_delays(), vec![250]);

        h.timer.fire_all();
        assert_eq!(h.scrolls.borrow().as_slice(), [4110.0]);
    }

    #[test]
    fn missing_section_still_closes_menu() {
        let h = harness(true);
        h.controller.activate("nonexistent-section");
        h.timer.fire_all();

        assert!(!h.state.borrow().mobile_menu_open);
        assert!(h.scrolls.borrow().is_empty());
    }

    #[test]
    fn newer_activation_replaces_pending_scroll() {
        let h = harness(false);
        h.controller.activate("home");
        h.controller.activate("contact");
        assert_eq!(h.timer.pending_delays(), vec![250]);

        h.timer.fire_all();
        assert_eq!(h.scrolls.borrow().as_slice(), [4110.0]);
    }

    #[test]
    fn clones_share_the_pending_scroll() {
        let h = harness(false);
        let other = h.controller.clone();
        assert!(other == h.controller);

        h.controller.activate("home");
        other.activate("contact");
        h.timer.fire_all();
        assert_eq!(h.scrolls.borrow().as_slice(), [4110.0]);
    }

    #[test]
    fn cancel_pending_drops_the_scroll() {
        let h = harness(false);
        h.controller.activate("contact");
        h.controller.cancel_pending();
        h.timer.fire_all();
        assert!(h.scrolls.borrow().is_empty());
    }

    #[test]
    fn controller_forwards_scroll_offsets() {
        let h = harness(false);
        h.controller.on_scroll(51.0);
        assert!(h.state.borrow().scrolled);
        h.controller.on_scroll(50.0);
        assert!(!h.state.borrow().scrolled);
    }
}
