use leptos::prelude::*;

use crate::{
    content::{EDUCATION, EXPERIENCE, PROFILE, PROJECTS, SKILLS},
    motion::{Preset, Reveal},
    sections::{Section, SectionId},
    theme::palette,
};

use super::{
    primitives::{Button, Card, CardContent},
    reveal::{RevealOnMount, RevealOnView},
    use_theme,
    viewport::scroll_to_section,
};

#[component]
pub fn Hero() -> impl IntoView {
    let theme = use_theme();

    view! {
        <section
            id=SectionId::Hero.as_str()
            class="relative z-[1] min-h-screen flex items-center justify-center"
        >
            <RevealOnMount reveal=Reveal::new(Preset::Rise) class="text-center">
                <RevealOnMount reveal=Reveal::new(Preset::Pop).delay(200)>
                    <h1 class=move || {
                        format!("text-6xl font-bold mb-4 {}", theme.get().of(palette::HEADING))
                    }>{PROFILE.name}</h1>
                </RevealOnMount>
                <RevealOnMount reveal=Reveal::new(Preset::Rise).delay(400)>
                    <p class=move || {
                        format!("text-xl mb-8 {}", theme.get().of(palette::TAGLINE))
                    }>{PROFILE.tagline}</p>
                </RevealOnMount>
                <RevealOnMount reveal=Reveal::new(Preset::Grow).delay(600)>
                    <Button
                        class=Signal::derive(move || {
                            format!(
                                "transition-colors duration-300 {}",
                                theme.get().of(palette::CTA),
                            )
                        })
                        on_click=move |_| {
                            scroll_to_section(SectionId::About);
                        }
                    >
                        "Conóceme"
                    </Button>
                </RevealOnMount>
            </RevealOnMount>
        </section>
    }
}

#[component]
pub fn SectionBlock(section: Section) -> impl IntoView {
    let theme = use_theme();

    view! {
        <section id=section.id.as_str() class="relative z-[1] min-h-screen py-16 flex items-center">
            <RevealOnView reveal=Reveal::new(Preset::Fade) class="w-full">
                <Card class=Signal::derive(move || {
                    format!("w-full {}", theme.get().of(palette::CARD))
                })>
                    <CardContent>
                        <RevealOnView reveal=Reveal::new(Preset::SlideLeft).delay(200)>
                            <h2 class=move || {
                                format!(
                                    "text-4xl font-bold mb-8 {}",
                                    theme.get().of(palette::HEADING),
                                )
                            }>{section.title}</h2>
                        </RevealOnView>
                        <RevealOnView reveal=Reveal::new(Preset::RiseFar).delay(400)>
                            {body(section.id)}
                        </RevealOnView>
                    </CardContent>
                </Card>
            </RevealOnView>
        </section>
    }
}

fn body(id: SectionId) -> AnyView {
    match id {
        SectionId::About => view! { <About /> }.into_any(),
        SectionId::Experience => view! { <ExperienceList /> }.into_any(),
        SectionId::Skills => view! { <Skills /> }.into_any(),
        SectionId::Education => view! { <EducationList /> }.into_any(),
        SectionId::Projects => view! { <Projects /> }.into_any(),
        SectionId::Hero => ().into_any(),
    }
}

#[component]
fn About() -> impl IntoView {
    let theme = use_theme();
    view! {
        {PROFILE
            .about
            .iter()
            .map(|para| {
                view! {
                    <p class=move || {
                        format!("leading-relaxed mb-2 {}", theme.get().of(palette::BODY))
                    }>{*para}</p>
                }
            })
            .collect_view()}
    }
}

#[component]
fn ExperienceList() -> impl IntoView {
    let theme = use_theme();
    view! {
        <ul class="space-y-4">
            {EXPERIENCE
                .iter()
                .map(|job| {
                    view! {
                        <li>
                            <h3 class=move || {
                                format!("text-xl font-semibold {}", theme.get().of(palette::HEADING))
                            }>{job.role}</h3>
                            <p class=move || theme.get().of(palette::MUTED)>{job.organization}</p>
                            {job
                                .highlights
                                .iter()
                                .map(|h| {
                                    view! {
                                        <p class=move || {
                                            format!("mt-2 {}", theme.get().of(palette::BODY))
                                        }>{*h}</p>
                                    }
                                })
                                .collect_view()}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
fn Skills() -> impl IntoView {
    let theme = use_theme();
    view! {
        <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
            {SKILLS
                .iter()
                .enumerate()
                .map(|(i, skill)| {
                    view! {
                        <RevealOnView reveal=Reveal::new(Preset::Grow).stagger(i, 100)>
                            <div class=move || {
                                format!(
                                    "p-3 rounded-md text-center {}",
                                    theme.get().of(palette::TILE),
                                )
                            }>{*skill}</div>
                        </RevealOnView>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn EducationList() -> impl IntoView {
    let theme = use_theme();
    view! {
        <div>
            {EDUCATION
                .iter()
                .enumerate()
                .map(|(i, school)| {
                    view! {
                        {(i > 0)
                            .then(|| {
                                view! {
                                    <hr class=move || {
                                        format!("my-4 {}", theme.get().of(palette::RULE))
                                    } />
                                }
                            })}
                        <h3 class=move || {
                            format!("text-xl font-semibold {}", theme.get().of(palette::HEADING))
                        }>{school.program}</h3>
                        <p class=move || theme.get().of(palette::MUTED)>{school.institution}</p>
                        <p class="mt-2">
                            <a href=school.url class=move || theme.get().of(palette::BODY)>
                                {school.url}
                            </a>
                        </p>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Projects() -> impl IntoView {
    let theme = use_theme();
    view! {
        <div class="space-y-6">
            {PROJECTS
                .iter()
                .map(|project| {
                    view! {
                        <div class=move || {
                            format!(
                                "border rounded-lg shadow-lg overflow-hidden {}",
                                theme.get().of(palette::PROJECT),
                            )
                        }>
                            <div class="p-4">
                                <h3 class=move || {
                                    format!(
                                        "text-2xl font-semibold {}",
                                        theme.get().of(palette::HEADING),
                                    )
                                }>{project.name}</h3>
                                <p class=move || {
                                    format!("mt-2 {}", theme.get().of(palette::BODY))
                                }>{project.description}</p>
                                <a
                                    href=project.repository
                                    class=move || {
                                        format!(
                                            "mt-4 block hover:underline {}",
                                            theme.get().of(palette::HEADING),
                                        )
                                    }
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    "Ver en GitHub"
                                </a>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
