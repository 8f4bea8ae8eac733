// src/viewport.rs
// Browser-boundary adapters: window scroll threshold, per-section entry
// observation, smooth scrolling to anchors.

use leptos::__reexports::send_wrapper::SendWrapper;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollIntoViewOptions,
};

use crate::state::{past_threshold, Section, SectionTracker};

/// Fraction of a section that must be visible before it counts as entered.
pub const SECTION_ENTRY_THRESHOLD: f64 = 0.15;

/// Single owner of the per-section entered flags, provided as context so
/// every section reads the same map.
#[derive(Clone, Copy)]
pub struct SectionVisibility(RwSignal<SectionTracker>);

pub fn provide_section_visibility() {
    provide_context(SectionVisibility(RwSignal::new(SectionTracker::default())));
}

/// Derived boolean that flips while the window scroll offset is past the
/// threshold and flips back below it. The listener is removed on cleanup.
pub fn use_scroll_threshold(threshold: f64) -> ReadSignal<bool> {
    let (scrolled, set_scrolled) = signal(false);

    Effect::new(move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };

        let apply = move || {
            if let Some(win) = web_sys::window() {
                if let Ok(offset) = win.scroll_y() {
                    let past = past_threshold(offset, threshold);
                    if scrolled.get_untracked() != past {
                        set_scrolled.set(past);
                    }
                }
            }
        };

        // The page may already be scrolled when we mount (e.g. reload).
        apply();

        let callback = Closure::<dyn FnMut()>::new(apply);
        if window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("failed to attach scroll listener");
            return;
        }

        // Browser-only `Closure` is `!Send`; wrap it so the cleanup closure
        // satisfies `on_cleanup`'s `Send + Sync` bound. Single-threaded wasm
        // never triggers the wrapper's cross-thread panic.
        let callback = SendWrapper::new(callback);
        on_cleanup(move || {
            if let Some(win) = web_sys::window() {
                let _ = win
                    .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
            }
        });
    });

    scrolled
}

/// Observes the referenced section and flips its entered flag the first time
/// it crosses the visibility threshold. The observer disconnects itself after
/// firing, so re-entering the viewport never replays the entry animation.
pub fn observe_section_entry(node_ref: NodeRef<html::Section>, section: Section) -> Memo<bool> {
    let visibility = expect_context::<SectionVisibility>();
    let tracker = visibility.0;

    Effect::new(move |_| {
        let Some(el) = node_ref.get() else {
            return;
        };
        if tracker.with_untracked(|t| t.is_entered(section)) {
            return;
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let crossed = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|e| e.is_intersecting())
                        .unwrap_or(false)
                });
                if !crossed {
                    return;
                }
                observer.disconnect();
                let newly = tracker
                    .try_update(|t| t.mark_entered(section))
                    .unwrap_or(false);
                if newly {
                    log::debug!("section '{}' entered viewport", section.id());
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from(SECTION_ENTRY_THRESHOLD));

        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            {
                Ok(observer) => observer,
                Err(err) => {
                    log::warn!("intersection observer unavailable: {err:?}");
                    return;
                }
            };
        observer.observe(&el);

        // Browser-only `IntersectionObserver`/`Closure` are `!Send`; wrap them
        // so the cleanup closure satisfies `on_cleanup`'s `Send + Sync` bound.
        // Single-threaded wasm never triggers the wrapper's cross-thread panic.
        let observer = SendWrapper::new(observer);
        let callback = SendWrapper::new(callback);
        on_cleanup(move || {
            observer.disconnect();
            drop(callback);
        });
    });

    Memo::new(move |_| tracker.with(|t| t.is_entered(section)))
}

/// Smooth-scrolls to a section's element. A no-op, not an error, when the
/// element is not currently mounted.
pub fn scroll_to_section(section: Section) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(el) = document.get_element_by_id(section.id()) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}
