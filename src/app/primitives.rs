use leptos::{either::Either, ev::MouseEvent, html, prelude::*};

use crate::ui::{
    button_class, card_class, card_content_class, resolve_element, ButtonElement, ButtonSize,
    ButtonVariant,
};

/// Renders a `<button>`, or with `as_child` the element named by `element`.
///
/// Panics if `as_child` is set without an `element`.
#[component]
pub fn Button(
    #[prop(optional)] variant: Option<Signal<ButtonVariant>>,
    #[prop(optional)] size: ButtonSize,
    #[prop(into)] class: Signal<String>,
    #[prop(optional)] as_child: bool,
    #[prop(optional)] element: Option<ButtonElement>,
    #[prop(optional)] aria_label: Option<&'static str>,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let element = resolve_element(as_child, element).unwrap_or_else(|err| panic!("Button: {err}"));
    let class = move || {
        let variant = variant.map(|v| v.get()).unwrap_or_default();
        button_class(variant, size, &class.get())
    };

    let target = element.link_target();
    match element {
        ButtonElement::Button => Either::Left(view! {
            <button
                type="button"
                class=class
                aria-label=aria_label
                on:click=move |ev| {
                    if let Some(cb) = on_click {
                        cb.run(ev);
                    }
                }
            >
                {children()}
            </button>
        }),
        ButtonElement::Anchor { href, label, .. } => Either::Right(view! {
            <a
                href=href
                class=class
                aria-label=label
                target=target.map(|(target, _)| target)
                rel=target.map(|(_, rel)| rel)
            >
                {children()}
            </a>
        }),
    }
}

#[component]
pub fn Card(#[prop(into)] class: Signal<String>, children: Children) -> impl IntoView {
    view! { <div class=move || card_class(&class.get())>{children()}</div> }
}

#[component]
pub fn CardContent(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=card_content_class(&class)>{children()}</div> }
}

/// Profile picture, replaced by `initials` when the image can't be loaded.
#[component]
pub fn Avatar(
    src: &'static str,
    alt: &'static str,
    initials: &'static str,
    #[prop(into)] class: Signal<String>,
    #[prop(into)] fallback_class: Signal<String>,
) -> impl IntoView {
    let (failed, set_failed) = signal(false);
    let img_ref = NodeRef::<html::Img>::new();

    // the error event can fire before hydration attaches the listener
    Effect::new(move |_| {
        if let Some(img) = img_ref.get() {
            if img.complete() && img.natural_width() == 0 {
                set_failed(true);
            }
        }
    });

    view! {
        <div class=move || class.get()>
            <Show
                when=move || !failed.get()
                fallback=move || {
                    view! {
                        <span class=move || {
                            format!(
                                "flex items-center justify-center rounded-full w-full h-full {}",
                                fallback_class.get(),
                            )
                        }>{initials}</span>
                    }
                }
            >
                <img
                    node_ref=img_ref
                    src=src
                    alt=alt
                    class="w-full h-full object-cover"
                    on:error=move |_| set_failed(true)
                />
            </Show>
        </div>
    }
}
