use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::color::Rgba;

/// The indigo every preset is built on.
const INDIGO: (u8, u8, u8) = (99, 102, 241);

/// Colors used for particles and connection lines.
///
/// Swapping the scheme only affects draws issued afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub particle: Rgba,
    pub line: Rgba,
}

impl ColorScheme {
    pub const fn new(particle: Rgba, line: Rgba) -> Self {
        Self { particle, line }
    }

    pub const fn dark() -> Self {
        Self {
            particle: Rgba::new(INDIGO.0, INDIGO.1, INDIGO.2, 0.8),
            line: Rgba::new(INDIGO.0, INDIGO.1, INDIGO.2, 0.15),
        }
    }

    pub const fn light() -> Self {
        Self {
            particle: Rgba::new(INDIGO.0, INDIGO.1, INDIGO.2, 0.6),
            line: Rgba::new(INDIGO.0, INDIGO.1, INDIGO.2, 0.1),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Page color theme, persisted by the host as `"dark"` or `"light"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn scheme(self) -> ColorScheme {
        match self {
            Theme::Dark => ColorScheme::dark(),
            Theme::Light => ColorScheme::light(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme {:?}", other)),
        }
    }
}
