use leptos::prelude::*;

use crate::{
    content::PROFILE,
    sections::{SectionId, SECTIONS},
    theme::palette,
    ui::{ButtonSize, ButtonVariant},
};

use super::{
    primitives::{Avatar, Button},
    use_theme,
    viewport::scroll_to_section,
};

#[component]
pub fn NavRail(active: ReadSignal<SectionId>) -> impl IntoView {
    let theme = use_theme();

    view! {
        <nav class=move || {
            format!(
                "w-20 fixed h-full overflow-auto z-10 transition-colors duration-300 flex flex-col items-center py-8 {}",
                theme.get().of(palette::RAIL),
            )
        }>
            <Avatar
                src=PROFILE.avatar
                alt="Profile picture"
                initials=PROFILE.initials
                class=Signal::derive(move || {
                    format!(
                        "w-14 h-14 mb-8 rounded-full overflow-hidden border-2 {}",
                        theme.get().of(palette::AVATAR_BORDER),
                    )
                })
                fallback_class=Signal::derive(move || {
                    theme.get().of(palette::AVATAR_FALLBACK).to_string()
                })
            />
            {SECTIONS
                .iter()
                .map(|section| {
                    let id = section.id;
                    view! {
                        <Button
                            variant=Signal::derive(move || {
                                if active.get() == id {
                                    ButtonVariant::Default
                                } else {
                                    ButtonVariant::Ghost
                                }
                            })
                            size=ButtonSize::Icon
                            class=Signal::derive(move || {
                                format!("mb-4 {}", theme.get().of(palette::RAIL_ICON))
                            })
                            aria_label=section.title
                            on_click=move |_| {
                                scroll_to_section(id);
                            }
                        >
                            <i class=format!("h-6 w-6 {}", section.icon.class())></i>
                        </Button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
