//! Light/dark theme.
//!
//! The choice belongs to the visitor, not the server. The browser keeps it in
//! `localStorage` and mirrors it into a `theme` cookie so server-rendered
//! pages start in the right state.

use serde::{Deserialize, Serialize};

pub const THEME_KEY: &str = "theme";

/// One year; the cookie outlives sessions like the localStorage entry does.
const COOKIE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Only an explicit `"light"` selects the light theme.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// Reads the `theme` pair out of a request's `Cookie` header.
    pub fn from_cookie_header(header: Option<&str>) -> Self {
        let value = header.and_then(|cookies| {
            cookies.split(';').find_map(|pair| {
                let (name, value) = pair.split_once('=')?;
                (name.trim() == THEME_KEY).then(|| value.trim())
            })
        });
        Self::from_stored(value)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// `Set-Cookie` value persisting this theme for the visitor.
    pub fn set_cookie(self) -> String {
        format!(
            "{THEME_KEY}={}; Path=/; Max-Age={COOKIE_MAX_AGE_SECS}; SameSite=Lax",
            self.as_str()
        )
    }

    /// Class set on the root `<html>` element, if any.
    pub fn root_class(self) -> Option<&'static str> {
        match self {
            Theme::Light => Some("light"),
            Theme::Dark => None,
        }
    }
}
