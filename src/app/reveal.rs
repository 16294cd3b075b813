use leptos::{html, prelude::*};
use leptos_use::{use_element_visibility, use_window_scroll};

use crate::motion::{parallax_percent, Reveal};

use super::use_theme;

/// Plays `reveal` the first time the wrapper scrolls into view. Stays shown
/// afterwards.
#[component]
pub fn RevealOnView(
    reveal: Reveal,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let (seen, set_seen) = signal(false);

    Effect::new(move |_| {
        if visible.get() && !seen.get_untracked() {
            set_seen(true);
        }
    });

    view! {
        <div
            node_ref=target
            class=move || format!("{} {class}", reveal.class(seen.get()))
            style=reveal.style()
        >
            {children()}
        </div>
    }
}

/// Plays `reveal` right after the page hydrates.
#[component]
pub fn RevealOnMount(
    reveal: Reveal,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let (shown, set_shown) = signal(false);

    Effect::new(move |_| {
        request_animation_frame(move || set_shown(true));
    });

    view! {
        <div class=move || format!("{} {class}", reveal.class(shown.get())) style=reveal.style()>
            {children()}
        </div>
    }
}

/// Fixed pattern layer that drifts down as the page scrolls.
#[component]
pub fn ParallaxBackground() -> impl IntoView {
    let theme = use_theme();
    let (_, scroll_y) = use_window_scroll();

    let style = move || {
        let (scroll_height, viewport_height) = page_extent();
        let offset = parallax_percent(scroll_y.get(), scroll_height, viewport_height);
        format!(
            "background-image: {}; background-position: 0px 0px; background-size: 60px 60px; transform: translateY({offset:.2}%);",
            theme.get().pattern_url(),
        )
    };

    view! { <div class="fixed inset-0 pointer-events-none z-0" style=style></div> }
}

/// `(document height, viewport height)`.
#[cfg(feature = "hydrate")]
fn page_extent() -> (f64, f64) {
    let scroll_height = document()
        .document_element()
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or_default();
    let viewport_height = window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    (scroll_height, viewport_height)
}

#[cfg(not(feature = "hydrate"))]
fn page_extent() -> (f64, f64) {
    (0.0, 0.0)
}
