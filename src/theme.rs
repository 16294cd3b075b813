/// Two-state palette switch. Dark on first load; nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Selects the class list for the current palette. Exactly one side is
    /// ever returned.
    pub fn pick(self, dark: &'static str, light: &'static str) -> &'static str {
        match self {
            Self::Dark => dark,
            Self::Light => light,
        }
    }

    /// `fill` colour of the background pattern, URL-encoded for a data URI.
    pub fn pattern_fill(self) -> &'static str {
        self.pick("%239C92AC", "%23000000")
    }

    /// Tiled plus-sign pattern behind the page, as a CSS `url(...)`.
    pub fn pattern_url(self) -> String {
        format!(
            "url(\"data:image/svg+xml,%3Csvg width='60' height='60' viewBox='0 0 60 60' xmlns='http://www.w3.org/2000/svg'%3E%3Cg fill='none' fill-rule='evenodd'%3E%3Cg fill='{}' fill-opacity='0.08'%3E%3Cpath d='M36 34v-4h-2v4h-4v2h4v4h2v-4h4v-2h-4zm0-30V0h-2v4h-4v2h4v4h2V6h4V4h-4zM6 34v-4H4v4H0v2h4v4h2v-4h4v-2H6zM6 4V0H4v4H0v2h4v4h2V6h4V4H6z'/%3E%3C/g%3E%3C/g%3E%3C/svg%3E\")",
            self.pattern_fill()
        )
    }
}

impl From<bool> for Theme {
    fn from(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

/// Palette pairs shared across the page. `ALL` is generated from the same list.
pub mod palette {
    pub type Pair = (&'static str, &'static str);

    macro_rules! pairs {
        ($($name:ident = ($dark:expr, $light:expr);)*) => {
            $(pub const $name: Pair = ($dark, $light);)*

            pub const ALL: &[Pair] = &[$($name),*];
        };
    }

    pairs! {
        PAGE = ("bg-gray-900 text-gray-100", "bg-gray-100 text-gray-900");
        RAIL = ("bg-gray-800", "bg-white");
        RAIL_ICON = ("text-gray-400", "text-blue-500");
        AVATAR_BORDER = ("border-gray-700", "border-gray-300");
        AVATAR_FALLBACK = ("bg-gray-700 text-gray-400", "bg-gray-200 text-gray-500");
        HEADING = ("text-blue-400", "text-blue-600");
        TAGLINE = ("text-gray-300", "text-gray-900");
        CTA = (
            "bg-blue-600 text-white hover:bg-blue-500",
            "bg-blue-950 text-white hover:bg-blue-900"
        );
        CARD = ("bg-gray-800 border-gray-700", "bg-white border-gray-200");
        BODY = ("text-gray-300", "text-gray-600");
        MUTED = ("text-gray-400", "text-gray-500");
        TILE = ("bg-gray-700 text-gray-100", "bg-gray-200 text-gray-900");
        RULE = ("border-gray-700", "border-gray-300");
        PROJECT = ("bg-gray-800 text-gray-200 border-gray-700", "border-gray-200");
        FOOTER = ("bg-gray-800 bg-opacity-90", "bg-white bg-opacity-90");
        FOOTER_ICON = ("text-gray-400", "text-blue-400");
    }
}

impl Theme {
    pub fn of(self, pair: palette::Pair) -> &'static str {
        self.pick(pair.0, pair.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert!(Theme::default().is_dark());
        assert_eq!(Theme::from(true), Theme::Dark);
        assert_eq!(Theme::from(false), Theme::Light);
    }

    #[test]
    fn test_toggle_twice_restores() {
        for start in [Theme::Dark, Theme::Light] {
            assert_ne!(start.toggle(), start);
            assert_eq!(start.toggle().toggle(), start);
        }
    }

    #[test]
    fn test_variants_are_exclusive() {
        for &pair in palette::ALL {
            let dark = Theme::Dark.of(pair);
            let light = Theme::Light.of(pair);
            assert_eq!(dark, pair.0);
            assert_eq!(light, pair.1);
            assert_ne!(dark, light);
        }
        assert_ne!(Theme::Dark.pattern_fill(), Theme::Light.pattern_fill());
    }

    #[test]
    fn test_all_lists_every_pair() {
        assert_eq!(palette::ALL.len(), 16);
        assert_eq!(palette::ALL.first(), Some(&palette::PAGE));
        assert_eq!(palette::ALL.last(), Some(&palette::FOOTER_ICON));
        assert!(palette::ALL.contains(&palette::PROJECT));
    }

    #[test]
    fn test_pattern_url_uses_theme_fill() {
        let dark = Theme::Dark.pattern_url();
        assert!(dark.starts_with("url(\"data:image/svg+xml,"));
        assert!(dark.contains("fill='%239C92AC'"));
        assert!(!dark.contains("%23000000"));
        assert!(Theme::Light.pattern_url().contains("fill='%23000000'"));
    }
}
