use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    #[error("as_child requires an element to render")]
    MissingElement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Ghost,
}

impl ButtonVariant {
    fn classes(&self) -> &'static str {
        match self {
            Self::Default => "bg-blue-600/20 ring-1 ring-blue-500",
            Self::Ghost => "bg-transparent hover:bg-gray-500/20",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Icon,
}

impl ButtonSize {
    fn classes(&self) -> &'static str {
        match self {
            Self::Default => "px-4 py-2",
            Self::Icon => "h-10 w-10",
        }
    }
}

/// Element a button renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonElement {
    Button,
    Anchor {
        href: String,
        label: String,
        new_tab: bool,
    },
}

impl ButtonElement {
    /// Link that opens in the current tab.
    pub fn anchor(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Anchor {
            href: href.into(),
            label: label.into(),
            new_tab: false,
        }
    }

    pub fn in_new_tab(self) -> Self {
        match self {
            Self::Anchor { href, label, .. } => Self::Anchor {
                href,
                label,
                new_tab: true,
            },
            other => other,
        }
    }

    /// `(target, rel)` attributes, only for links that open a new tab.
    pub fn link_target(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Anchor { new_tab: true, .. } => Some(("_blank", "noopener noreferrer")),
            _ => None,
        }
    }
}

/// Decides what a button renders as. `as_child` without an element is a
/// misuse of the component.
pub fn resolve_element(
    as_child: bool,
    element: Option<ButtonElement>,
) -> Result<ButtonElement, UiError> {
    if as_child {
        element.ok_or(UiError::MissingElement)
    } else {
        Ok(ButtonElement::Button)
    }
}

const BUTTON_BASE: &str = "btn inline-flex items-center justify-center rounded-md transition-colors";

pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    join([BUTTON_BASE, variant.classes(), size.classes(), extra])
}

pub fn card_class(extra: &str) -> String {
    join(["rounded-lg border shadow-sm", extra])
}

pub fn card_content_class(extra: &str) -> String {
    join(["p-6", extra])
}

fn join<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
