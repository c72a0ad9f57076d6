use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Cultures the service can switch to.
///
/// The first variant is the default culture.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Culture {
    EN,
    RU,
    TAT,
}

impl Culture {
    pub const ALL: [Culture; 3] = [Culture::EN, Culture::RU, Culture::TAT];
    pub const DEFAULT: Culture = Culture::ALL[0];

    pub fn name(self) -> &'static str {
        match self {
            Self::EN => "EN",
            Self::RU => "RU",
            Self::TAT => "TAT",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::EN => "English",
            Self::RU => "Russian",
            Self::TAT => "Tatar",
        }
    }

    /// Name of the translation table for this culture
    pub fn resource_id(self) -> &'static str {
        match self {
            Self::EN => "en",
            Self::RU => "ru",
            Self::TAT => "tat",
        }
    }

    /// Look up a culture by its position in declaration order
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        usize::try_from(ordinal).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    /// Case-insensitive name lookup
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

impl Default for Culture {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Culture {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| s.to_string())
    }
}

/// Culture resolved for the current request.
///
/// `culture` drives what `GET /culture` reports, `ui_culture` drives text lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveCulture {
    pub culture: Culture,
    pub ui_culture: Culture,
}

impl ActiveCulture {
    pub fn new(culture: Culture) -> Self {
        Self { culture, ui_culture: culture }
    }
}

/// A culture as it arrives in a request body: by name or by ordinal.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CultureValue {
    Name(String),
    Ordinal(i64),
}

impl CultureValue {
    pub fn resolve(&self) -> Option<Culture> {
        match self {
            Self::Name(name) => Culture::parse(name),
            Self::Ordinal(ordinal) => Culture::from_ordinal(*ordinal),
        }
    }
}

impl fmt::Display for CultureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Ordinal(ordinal) => write!(f, "{}", ordinal),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetCultureRequest {
    #[schema(value_type = Culture)]
    pub culture: CultureValue,
}
