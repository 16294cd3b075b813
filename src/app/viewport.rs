use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::{
    navigation::{navigate, NavOutcome, Viewport},
    sections::SectionId,
};

/// The live document. Only touch it from the browser.
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    type Target = Element;

    fn scroll_y(&self) -> f64 {
        window().scroll_y().unwrap_or_default()
    }

    fn section_offsets(&self) -> Vec<(String, f64)> {
        let Ok(nodes) = document().query_selector_all("section") else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(|el| (el.id(), f64::from(el.offset_top())))
            .collect()
    }

    fn find(&self, id: &str) -> Option<Element> {
        document().get_element_by_id(id)
    }

    fn smooth_scroll_to(&self, target: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Click handler target for nav buttons.
pub fn scroll_to_section(id: SectionId) -> NavOutcome {
    navigate(&BrowserViewport, id)
}

/// Window scroll events. Only subscribe from the browser.
#[cfg(feature = "hydrate")]
pub struct WindowScroll;

#[cfg(feature = "hydrate")]
impl crate::navigation::ScrollSource for WindowScroll {
    type Subscription = Box<dyn FnOnce()>;

    fn subscribe(&self, on_scroll: Box<dyn Fn()>) -> Self::Subscription {
        let handle = window_event_listener(leptos::ev::scroll, move |_| on_scroll());
        Box::new(move || handle.remove())
    }

    fn unsubscribe(&self, subscription: Self::Subscription) {
        subscription();
    }
}

/// Tracks which section the reader is in. Starts at [`SectionId::Hero`] and
/// re-evaluates once after mount and on every window scroll. The tracker, and
/// with it the scroll listener, is dropped when the owning component is torn
/// down.
pub fn use_active_section() -> ReadSignal<SectionId> {
    let (active, set_active) = signal(SectionId::default());

    #[cfg(feature = "hydrate")]
    {
        use crate::navigation::SectionTracker;

        let tracker = StoredValue::new_local(None::<SectionTracker<WindowScroll>>);
        Effect::new(move |_| {
            let initial = active.get_untracked();
            tracker.set_value(Some(SectionTracker::mount(
                WindowScroll,
                BrowserViewport,
                initial,
                move |next| set_active(next),
            )));
        });
        on_cleanup(move || tracker.dispose());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_active;

    active
}
