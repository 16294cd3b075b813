use std::{fmt, str::FromStr};

use thiserror::Error;

/// How far below the top of the viewport a section may start and still count
/// as scrolled into.
pub const SCROLL_LOOKAHEAD: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    /// Intro block above the navigable sections. Never listed in the nav rail.
    #[default]
    Hero,
    About,
    Experience,
    Skills,
    Education,
    Projects,
}

impl SectionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Education => "education",
            Self::Projects => "projects",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section id: {0}")]
pub struct SectionIdError(pub String);

impl FromStr for SectionId {
    type Err = SectionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hero" => Ok(Self::Hero),
            "about" => Ok(Self::About),
            "experience" => Ok(Self::Experience),
            "skills" => Ok(Self::Skills),
            "education" => Ok(Self::Education),
            "projects" => Ok(Self::Projects),
            other => Err(SectionIdError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconToken {
    User,
    Briefcase,
    Code,
    GraduationCap,
    Award,
    Github,
    Twitter,
    Mail,
    Sun,
    Moon,
}

impl IconToken {
    /// Lucide icon font class.
    pub fn class(&self) -> &'static str {
        match self {
            Self::User => "icon-user",
            Self::Briefcase => "icon-briefcase",
            Self::Code => "icon-code",
            Self::GraduationCap => "icon-graduation-cap",
            Self::Award => "icon-award",
            Self::Github => "icon-github",
            Self::Twitter => "icon-twitter",
            Self::Mail => "icon-mail",
            Self::Sun => "icon-sun",
            Self::Moon => "icon-moon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub title: &'static str,
    pub icon: IconToken,
}

/// Navigable sections in render order.
pub static SECTIONS: [Section; 5] = [
    Section {
        id: SectionId::About,
        title: "Sobre mí",
        icon: IconToken::User,
    },
    Section {
        id: SectionId::Experience,
        title: "Experiencia",
        icon: IconToken::Briefcase,
    },
    Section {
        id: SectionId::Skills,
        title: "Habilidades",
        icon: IconToken::Code,
    },
    Section {
        id: SectionId::Education,
        title: "Educación",
        icon: IconToken::GraduationCap,
    },
    Section {
        id: SectionId::Projects,
        title: "Proyectos",
        icon: IconToken::Award,
    },
];

/// Picks the section the reader has scrolled into.
///
/// `sections` is `(id, top offset)` in document order. Every section whose top
/// is at or above `scroll_y + SCROLL_LOOKAHEAD` qualifies and the last one
/// wins. Returns `None` when nothing qualifies, in which case the caller keeps
/// its current value.
///
/// Layouts that are not top-to-bottom still resolve to the last qualifying
/// entry in iteration order, not the nearest one.
pub fn track<I>(sections: I, scroll_y: f64) -> Option<SectionId>
where
    I: IntoIterator<Item = (SectionId, f64)>,
{
    let threshold = scroll_y + SCROLL_LOOKAHEAD;
    sections
        .into_iter()
        .filter(|(_, top)| *top <= threshold)
        .last()
        .map(|(id, _)| id)
}

/// Same as [`track`] but takes raw DOM ids. Ids that aren't sections are skipped.
pub fn track_raw<'a, I>(sections: I, scroll_y: f64) -> Option<SectionId>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    track(
        sections
            .into_iter()
            .filter_map(|(id, top)| id.parse::<SectionId>().ok().map(|id| (id, top))),
        scroll_y,
    )
}
