//! Locale management and utilities

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// Supported locales
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Locale {
    English,
    Russian,
}

impl Default for Locale {
    fn default() -> Self {
        Self::English
    }
}

impl Locale {
    /// Get the language code for this locale
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en-US",
            Self::Russian => "ru-RU",
        }
    }

    /// Get the short language code for this locale
    pub fn short_code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Russian => "ru",
        }
    }

    /// Parse a locale from a language code
    ///
    /// Accepts both short codes and the region-qualified codes Discord
    /// reports on interactions ("en-US", "en-GB", "ru").
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" | "en-US" | "en-GB" => Some(Self::English),
            "ru" | "ru-RU" => Some(Self::Russian),
            _ => None,
        }
    }

    /// Convert to Fluent LanguageIdentifier
    pub fn to_language_identifier(&self) -> I18nResult<LanguageIdentifier> {
        self.code()
            .parse()
            .map_err(|_| I18nError::InvalidLanguageId(self.code().to_string()))
    }

    /// Get all supported locales
    pub fn all() -> Vec<Self> {
        vec![Self::English, Self::Russian]
    }

    /// Get the display name for this locale
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Russian => "Русский",
        }
    }

    /// Get the resource file name for this locale
    pub fn resource_file(&self) -> String {
        format!("{}/main.ftl", self.short_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_accepts_discord_locales() {
        assert_eq!(Locale::from_code("en-US"), Some(Locale::English));
        assert_eq!(Locale::from_code("en-GB"), Some(Locale::English));
        assert_eq!(Locale::from_code("en"), Some(Locale::English));
        assert_eq!(Locale::from_code("ru"), Some(Locale::Russian));
        assert_eq!(Locale::from_code("de"), None);
    }

    #[test]
    fn test_language_identifier_round_trip() {
        for locale in Locale::all() {
            assert!(locale.to_language_identifier().is_ok());
        }
    }

    #[test]
    fn test_resource_file_paths() {
        assert_eq!(Locale::English.resource_file(), "en/main.ftl");
        assert_eq!(Locale::Russian.resource_file(), "ru/main.ftl");
    }
}
