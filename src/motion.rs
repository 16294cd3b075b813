//! Entrance presets and the scroll-linked background offset.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Fade,
    /// Rise from 20px below.
    Rise,
    /// Rise from 50px below.
    RiseFar,
    SlideLeft,
    /// Scale in from half size with a springy ease.
    Pop,
    /// Scale in from 80%.
    Grow,
}

impl Preset {
    pub fn hidden(&self) -> &'static str {
        match self {
            Self::Fade => "opacity-0",
            Self::Rise => "opacity-0 translate-y-5",
            Self::RiseFar => "opacity-0 translate-y-12",
            Self::SlideLeft => "opacity-0 -translate-x-12",
            Self::Pop => "opacity-0 scale-50",
            Self::Grow => "opacity-0 scale-75",
        }
    }

    pub fn shown(&self) -> &'static str {
        match self {
            Self::Fade => "opacity-100",
            Self::Rise | Self::RiseFar => "opacity-100 translate-y-0",
            Self::SlideLeft => "opacity-100 translate-x-0",
            Self::Pop | Self::Grow => "opacity-100 scale-100",
        }
    }

    fn easing(&self) -> &'static str {
        match self {
            Self::Pop | Self::Grow | Self::SlideLeft => "ease-spring",
            _ => "ease-out",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub preset: Preset,
    pub delay_ms: u32,
}

impl Reveal {
    pub const fn new(preset: Preset) -> Self {
        Self { preset, delay_ms: 0 }
    }

    pub const fn delay(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    /// Delay grows by `step_ms` per position in a list.
    pub fn stagger(self, index: usize, step_ms: u32) -> Self {
        let offset = u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(step_ms);
        self.delay(self.delay_ms.saturating_add(offset))
    }

    pub fn class(&self, visible: bool) -> String {
        let state = if visible {
            self.preset.shown()
        } else {
            self.preset.hidden()
        };
        format!(
            "transform transition-all duration-500 {} {}",
            self.preset.easing(),
            state
        )
    }

    pub fn style(&self) -> String {
        format!("transition-delay: {}ms", self.delay_ms)
    }
}

/// Background offset in percent for the parallax layer: 0 at the top of the
/// page and 100 at the bottom.
pub fn parallax_percent(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let range = scroll_height - viewport_height;
    if range <= 0.0 || !range.is_finite() {
        return 0.0;
    }
    (scroll_y / range * 100.0).clamp(0.0, 100.0)
}
