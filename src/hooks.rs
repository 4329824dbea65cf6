use gloo_timers::callback::Interval;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions,
};
use yew::prelude::*;

use crate::animation::{CountUp, Reveal};
use crate::config;
use crate::content::Stat;
use crate::error::SiteError;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Keeps the observer and its JS callback alive together until teardown.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl RevealObserver {
    fn attach(
        target: &Element,
        threshold: f64,
        on_reveal: impl Fn() + 'static,
    ) -> Result<Self, SiteError> {
        let mut latch = Reveal::default();
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false)
            });
            if latch.observe(intersecting) {
                observer.disconnect();
                on_reveal();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&threshold.into());
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(SiteError::observer)?;
        observer.observe(target);

        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Becomes `true` the first time `threshold` of the node is in view and stays
/// that way.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let reveal = {
                    let visible = visible.clone();
                    move || visible.set(true)
                };
                let observer = match node.cast::<Element>() {
                    Some(element) => {
                        let id = element.id();
                        RevealObserver::attach(&element, threshold, move || {
                            debug!("revealed section #{}", id);
                            reveal();
                        })
                        .map_err(|e| warn!("revealing without animation: {}", e))
                        .ok()
                    }
                    None => {
                        warn!("reveal target is not mounted, showing it immediately");
                        None
                    }
                };
                if observer.is_none() {
                    visible.set(true);
                }
                move || drop(observer)
            },
            node,
        );
    }

    *visible
}

/// Whether a counter still has ticks to show.
fn count_up_pending(running: bool, shown: u32, target: u32) -> bool {
    running && shown < target
}

/// Counts from zero to `stat.target` once `running` turns true.
#[hook]
pub fn use_count_up(stat: Stat, running: bool) -> u32 {
    let value = use_state(|| 0u32);
    let pending = count_up_pending(running, *value, stat.target);

    {
        let value = value.clone();
        // Reaching the target flips the dependency, so the teardown drops the
        // interval outside its own callback.
        use_effect_with_deps(
            move |pending: &bool| {
                let interval = pending.then(|| {
                    let mut counter = CountUp::new(stat.target, stat.duration_ms, config::COUNTER_TICK_MS);
                    Interval::new(config::COUNTER_TICK_MS, move || {
                        if !counter.is_finished() {
                            value.set(counter.tick());
                        }
                    })
                });
                move || drop(interval)
            },
            pending,
        );
    }

    *value
}

/// Tracks whether the window has been scrolled past `threshold` pixels.
#[hook]
pub fn use_scrolled(threshold: f64) -> bool {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let is_scrolled = is_scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    is_scrolled.set(scroll_y > threshold);
                                }
                            }
                        }
                    });
                    if let Err(e) = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
                        warn!("failed to watch scroll position: {:?}", e);
                    }
                    // Initial check for reloads that land mid-page
                    if let Ok(scroll_y) = window.scroll_y() {
                        is_scrolled.set(scroll_y > threshold);
                    }
                    Box::new(move || {
                        if let Err(e) = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
                            warn!("failed to stop watching scroll position: {:?}", e);
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    *is_scrolled
}

/// Smooth-scrolls to the element matching `href` (`#about`, `#contact`, ...).
pub fn scroll_to_section(href: &str) -> Result<(), SiteError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(SiteError::NoWindow)?;
    let target = document
        .query_selector(href)
        .ok()
        .flatten()
        .ok_or_else(|| SiteError::MissingSection(href.to_string()))?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_runs_only_while_visible_and_short_of_target() {
        assert!(!count_up_pending(false, 0, 500));
        assert!(count_up_pending(true, 0, 500));
        assert!(count_up_pending(true, 499, 500));
        assert!(!count_up_pending(true, 500, 500));
        assert!(!count_up_pending(true, 0, 0));
    }
}
