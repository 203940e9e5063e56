//! User-facing strings for the sign-in screen.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language of the user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ru" | "russian" => Ok(Locale::Ru),
            other => Err(format!("Unsupported locale '{}' (expected en or ru)", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Ru => write!(f, "ru"),
        }
    }
}

impl Locale {
    /// Submit attempted with an empty email or password
    pub fn empty_fields(self) -> &'static str {
        match self {
            Locale::En => "Please enter your email and password",
            Locale::Ru => "Введите email и пароль",
        }
    }

    /// The provider rejected the attempt, for whatever reason
    pub fn authentication_failed(self) -> &'static str {
        match self {
            Locale::En => "User not found or invalid email/password",
            Locale::Ru => "Пользователь не найден или неверный email/пароль",
        }
    }
}
