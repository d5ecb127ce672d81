use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions,
};

use crate::enquiry::LinkOpener;
use crate::navigation::{NavigationController, ScrollHost, Timer};

pub type NavigationHandle = NavigationController<WindowScrollHost, GlooTimer>;

pub struct WindowScrollHost;

impl ScrollHost for WindowScrollHost {
    fn section_top(&self, section_id: &str) -> Option<f64> {
        let window = web_sys::window()?;
        let element = window.document()?.get_element_by_id(section_id)?;
        let page_offset = window.scroll_y().unwrap_or(0.0);
        Some(element.get_bounding_client_rect().top() + page_offset)
    }

    fn smooth_scroll_to(&self, top: f64) {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

pub struct GlooTimer;

impl Timer for GlooTimer {
    type Handle = Timeout;

    fn after(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(millis, callback)
    }
}

pub struct WindowOpener;

impl LinkOpener for WindowOpener {
    fn open_in_new_tab(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            warn!("No window available to open the enquiry link");
            return;
        };
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => {}
            Ok(None) => warn!("The enquiry tab was blocked by the browser"),
            Err(e) => warn!("Failed to open the enquiry link: {:?}", e),
        }
    }
}

pub fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Calls back once when the target first enters the viewport, then stops
/// watching. Disconnects when dropped.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    /// Returns `None` when the browser has no IntersectionObserver.
    pub fn observe_once(
        target: &Element,
        root_margin: &str,
        on_visible: impl Fn() + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let entered = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if entered {
                observer.disconnect();
                on_visible();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);

        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                warn!("IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };
        observer.observe(target);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
