//! Navigation contract consumed by presentation code.
//!
//! Maps URL paths to views. The empty path redirects to the dashboard and
//! `detail/:id` carries a decimal hero id.

use crate::model::hero::HeroId;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Heroes,
    Detail(HeroId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    UnknownPath(String),
    InvalidId(String),
}

impl Display for RouteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPath(path) => write!(f, "no route matches `{path}`"),
            Self::InvalidId(raw) => write!(f, "route id `{raw}` is not a decimal integer"),
        }
    }
}

impl Error for RouteError {}

impl Route {
    /// Resolves a path such as `/detail/12` to a view.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let normalized = path.trim().trim_matches('/');
        match normalized {
            "" | "dashboard" => Ok(Self::Dashboard),
            "list" | "heroes" => Ok(Self::Heroes),
            _ => match normalized.strip_prefix("detail/") {
                Some(raw) if !raw.contains('/') => raw
                    .parse::<HeroId>()
                    .map(Self::Detail)
                    .map_err(|_| RouteError::InvalidId(raw.to_string())),
                _ => Err(RouteError::UnknownPath(normalized.to_string())),
            },
        }
    }

    /// Canonical path for this view.
    pub fn path(&self) -> String {
        match self {
            Self::Dashboard => "dashboard".to_string(),
            Self::Heroes => "list".to_string(),
            Self::Detail(id) => format!("detail/{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Route, RouteError};

    #[test]
    fn empty_path_redirects_to_dashboard() {
        assert_eq!(Route::parse("").unwrap(), Route::Dashboard);
        assert_eq!(Route::parse("/").unwrap(), Route::Dashboard);
    }

    #[test]
    fn list_accepts_legacy_heroes_alias() {
        assert_eq!(Route::parse("list").unwrap(), Route::Heroes);
        assert_eq!(Route::parse("/heroes").unwrap(), Route::Heroes);
    }

    #[test]
    fn detail_parses_decimal_id() {
        assert_eq!(Route::parse("detail/12").unwrap(), Route::Detail(12));
        assert_eq!(Route::parse("/detail/12/").unwrap(), Route::Detail(12));
        assert_eq!(Route::Detail(12).path(), "detail/12");
    }

    #[test]
    fn detail_rejects_non_numeric_id() {
        assert_eq!(
            Route::parse("detail/abc").unwrap_err(),
            RouteError::InvalidId("abc".to_string())
        );
        assert_eq!(
            Route::parse("detail/1.5").unwrap_err(),
            RouteError::InvalidId("1.5".to_string())
        );
    }

    #[test]
    fn unknown_paths_are_rejected() {
        assert_eq!(
            Route::parse("settings").unwrap_err(),
            RouteError::UnknownPath("settings".to_string())
        );
        assert!(matches!(
            Route::parse("detail/1/edit").unwrap_err(),
            RouteError::UnknownPath(_)
        ));
    }

    #[test]
    fn canonical_paths_round_trip() {
        for route in [Route::Dashboard, Route::Heroes, Route::Detail(3)] {
            assert_eq!(Route::parse(&route.path()).unwrap(), route);
        }
    }
}
