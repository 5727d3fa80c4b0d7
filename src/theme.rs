use std::{fmt, str::FromStr};

use crate::error::PortfolioError;

/// First hour (inclusive) of the light theme.
pub const DAY_START_HOUR: u32 = 6;
/// First hour (inclusive) of the dark theme.
pub const DAY_END_HOUR: u32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Theme for a local wall-clock hour: light for [6, 18), dark otherwise.
    pub fn for_hour(hour: u32) -> Self {
        if (DAY_START_HOUR..DAY_END_HOUR).contains(&hour) {
            Self::Light
        } else {
            Self::Dark
        }
    }

    /// Class applied to the document root.
    pub fn class(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

impl FromStr for Theme {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(PortfolioError::UnknownTheme(other.to_string())),
        }
    }
}
