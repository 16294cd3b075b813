mod blocks;
mod footer;
mod nav;
mod primitives;
mod reveal;
mod viewport;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    content::{person_json_ld, PROFILE},
    sections::SECTIONS,
    theme::{palette, Theme},
};

use blocks::{Hero, SectionBlock};
use footer::Footer;
use nav::NavRail;
use reveal::ParallaxBackground;
use viewport::use_active_section;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let json_ld = match person_json_ld() {
        Ok(value) => value.to_string(),
        Err(err) => {
            log::error!("failed to build JSON-LD: {err}");
            String::new()
        }
    };

    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=PROFILE.tagline />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/davc-portfolio.css" />
                <link
                    rel="stylesheet"
                    href="https://unpkg.com/lucide-static@0.460.0/font/lucide.css"
                />
                <script type="application/ld+json" inner_html=json_ld></script>
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// Palette shared by every themed element on the page.
pub(crate) fn use_theme() -> RwSignal<Theme> {
    expect_context::<RwSignal<Theme>>()
}

#[component]
fn Portfolio() -> impl IntoView {
    let theme = RwSignal::new(Theme::default());
    provide_context(theme);
    let active = use_active_section();

    view! {
        <Title text="Portafolio" />
        <div class=move || {
            format!("min-h-screen transition-colors duration-300 {}", theme.get().of(palette::PAGE))
        }>
            <NavRail active />
            <main class="ml-20 p-8">
                <ParallaxBackground />
                <Hero />
                {SECTIONS
                    .iter()
                    .map(|section| view! { <SectionBlock section=*section /> })
                    .collect_view()}
            </main>
            <Footer />
        </div>
    }
}
