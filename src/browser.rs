//! Browser glue: clock, window navigation, scroll state and the
//! scroll-reveal observer.
//!
//! Everything that touches `web_sys` lives here so pages only deal with
//! signals and the pure state from `space_core`.

use chrono::NaiveDate;
use dioxus::prelude::*;
use futures::StreamExt;
use gloo::timers::future::sleep;
use space_core::{RevealOptions, RevealSet};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Attribute carrying a reveal anchor's index.
const REVEAL_INDEX_ATTR: &str = "data-reveal-index";

/// Milliseconds since the epoch.
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// Today's date in the visitor's time zone.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Open `url` in a new tab or window (mail client, WhatsApp, project sites).
pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match window.open_with_url_and_target(url, "_blank") {
        Ok(_) => tracing::debug!(scheme = url.split(':').next(), "Opened external link"),
        Err(e) => tracing::warn!(error = ?e, "window.open failed"),
    }
}

/// Point the current tab at `url`; used for `tel:` and `mailto:` links.
pub fn navigate_to(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        tracing::warn!(error = ?e, "Could not follow link");
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Smoothly bring the element with `id` into view.
pub fn scroll_to_element(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => element.scroll_into_view(),
        None => tracing::debug!(%id, "Scroll target not on the page"),
    }
}

/// Stop the page behind an open overlay from scrolling.
pub fn lock_body_scroll(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let value = if locked { "hidden" } else { "auto" };
        let _ = body.style().set_property("overflow", value);
    }
}

fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Hook: `true` once the page is scrolled past `threshold` pixels.
pub fn use_scrolled(threshold: f64) -> Signal<bool> {
    let mut scrolled = use_signal(|| scroll_y() > threshold);

    let listener = use_hook(move || {
        let callback = Closure::<dyn FnMut()>::new(move || {
            let past = scroll_y() > threshold;
            if *scrolled.peek() != past {
                scrolled.set(past);
            }
        });
        if let Some(window) = web_sys::window() {
            if let Err(e) = window
                .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                tracing::warn!(error = ?e, "Could not listen for scroll");
            }
        }
        CopyValue::new(callback)
    });

    use_drop(move || {
        if let Some(window) = web_sys::window() {
            let callback = listener.read();
            let _ = window
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
        }
    });

    scrolled
}

/// The page's `IntersectionObserver` plus the elements it watches.
struct RevealObserver {
    observer: Option<IntersectionObserver>,
    targets: Vec<Element>,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl RevealObserver {
    fn observe(&mut self, element: &Element) {
        if let Some(observer) = &self.observer {
            observer.observe(element);
            self.targets.push(element.clone());
        }
    }

    /// Re-observing makes the browser report every target again.
    /// Elements that left the page are dropped first.
    fn rewatch(&mut self) {
        self.targets.retain(|t| t.is_connected());
        if let Some(observer) = &self.observer {
            observer.disconnect();
            for target in &self.targets {
                observer.observe(target);
            }
        }
    }

    fn disconnect(&self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

/// Scroll-reveal state for one page.
///
/// Anchors render `data-reveal-index` and hand their mount event to
/// [`Reveal::observe`]; their class comes from [`Reveal::class`].
#[derive(Clone, Copy, PartialEq)]
pub struct Reveal {
    visible: Signal<RevealSet>,
    observer: CopyValue<RevealObserver>,
}

impl Reveal {
    /// `base`, plus ` visible` once the anchor has been revealed.
    pub fn class(&self, index: usize, base: &str) -> String {
        self.visible.read().class_for(index, base)
    }

    /// `onmounted` handler for an anchor.
    pub fn observe(&self, event: MountedEvent) {
        let mut observer = self.observer;
        if let Some(element) = event.data().downcast::<Element>() {
            observer.write().observe(element);
        }
    }

    /// Forget what was revealed and let every anchor animate again.
    pub fn reset(&self) {
        let mut visible = self.visible;
        visible.write().reset();
        let mut observer = self.observer;
        observer.write().rewatch();
    }
}

/// Hook: one shared observer for the calling page.
///
/// First intersection of an index schedules its reveal after the stagger
/// delay. Timers scheduled before a [`Reveal::reset`] are ignored; the
/// observer disconnects when the page unmounts and pending timers die with
/// the page's tasks.
pub fn use_scroll_reveal(options: RevealOptions) -> Reveal {
    let mut visible = use_signal(RevealSet::new);

    // Browser callbacks run outside the UI runtime, so they only send indices
    let crossings = use_coroutine(move |mut rx: UnboundedReceiver<usize>| async move {
        while let Some(index) = rx.next().await {
            let (delay, generation) = {
                let mut set = visible.write();
                let Some(delay) = set.schedule(index, &options) else {
                    continue;
                };
                (delay, set.generation())
            };
            spawn(async move {
                sleep(delay).await;
                visible.write().reveal_in(generation, index);
            });
        }
    });

    let observer = use_hook(move || {
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let index = entry
                    .target()
                    .get_attribute(REVEAL_INDEX_ATTR)
                    .and_then(|v| v.parse::<usize>().ok());
                if let Some(index) = index {
                    crossings.send(index);
                }
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);
        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => Some(observer),
                Err(e) => {
                    tracing::warn!(error = ?e, "IntersectionObserver unavailable");
                    None
                }
            };

        CopyValue::new(RevealObserver {
            observer,
            targets: Vec::new(),
            _callback: callback,
        })
    });

    use_drop(move || observer.read().disconnect());

    Reveal { visible, observer }
}
