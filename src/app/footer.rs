use leptos::{either::Either, prelude::*};

use crate::{
    content::SOCIAL_LINKS,
    sections::IconToken,
    theme::palette,
    ui::{ButtonElement, ButtonSize, ButtonVariant},
};

use super::{primitives::Button, use_theme};

#[component]
pub fn Footer() -> impl IntoView {
    let theme = use_theme();
    let ghost = Signal::stored(ButtonVariant::Ghost);

    view! {
        <footer class=move || {
            format!(
                "fixed bottom-0 left-0 right-0 p-4 backdrop-blur-sm flex justify-center items-center space-x-4 z-20 transition-colors duration-300 {}",
                theme.get().of(palette::FOOTER),
            )
        }>
            {SOCIAL_LINKS
                .iter()
                .map(|link| {
                    view! {
                        <Button
                            variant=ghost
                            size=ButtonSize::Icon
                            class=String::new()
                            as_child=true
                            element=ButtonElement::anchor(link.href, link.label)
                        >
                            <i class=move || {
                                format!(
                                    "h-5 w-5 {} {}",
                                    link.icon.class(),
                                    theme.get().of(palette::FOOTER_ICON),
                                )
                            }></i>
                        </Button>
                    }
                })
                .collect_view()}
            <Button
                variant=ghost
                size=ButtonSize::Icon
                class="ml-4".to_string()
                aria_label="Toggle Dark Mode"
                on_click=move |_| theme.update(|t| *t = t.toggle())
            >
                {move || {
                    if theme.get().is_dark() {
                        Either::Left(
                            view! {
                                <i class=format!("h-6 w-6 text-gray-400 {}", IconToken::Sun.class())></i>
                            },
                        )
                    } else {
                        Either::Right(
                            view! {
                                <i class=format!("h-6 w-6 text-blue-400 {}", IconToken::Moon.class())></i>
                            },
                        )
                    }
                }}
            </Button>
        </footer>
    }
}
