//! Transport seam between the data-access layer and the remote collection.
//!
//! # Responsibility
//! - Define one async call per wire operation.
//! - Classify every failure as network, status or decode error.
//!
//! # Invariants
//! - Each call issues exactly one request; no retries and no caching.
//! - Non-2xx responses are errors, never successful values.
//!
//! # See also
//! - `service::hero_service` for the recovery policy applied on top.

pub mod http;

use crate::model::hero::{Hero, HeroId, NewHero};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type TransportResult<T> = Result<T, TransportError>;

/// Transport-level failure for one hero request.
///
/// Display text is user-facing: it is quoted verbatim into notification lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request never produced a response (connect, TLS, I/O, timeout).
    Network { url: String, message: String },
    /// The server answered with a non-2xx status.
    Status {
        url: String,
        status: u16,
        reason: String,
    },
    /// The response body was not the expected JSON.
    Decode { url: String, message: String },
}

impl TransportError {
    pub fn status(url: impl Into<String>, status: u16, reason: impl Into<String>) -> Self {
        Self::Status {
            url: url.into(),
            status,
            reason: reason.into(),
        }
    }

    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn decode(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Network { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => url,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

impl Display for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network { url, message } => {
                write!(f, "Http failure during request for {url}: {message}")
            }
            Self::Status {
                url,
                status,
                reason,
            } => {
                if reason.is_empty() {
                    write!(f, "Http failure response for {url}: {status}")
                } else {
                    write!(f, "Http failure response for {url}: {status} {reason}")
                }
            }
            Self::Decode { url, message } => {
                write!(f, "Http failure during parsing for {url}: {message}")
            }
        }
    }
}

impl Error for TransportError {}

/// Async access to the remote hero collection.
///
/// Implementations issue one request per call and report failures unchanged;
/// recovery is the caller's concern.
#[allow(async_fn_in_trait)]
pub trait HeroTransport {
    /// `GET <base>`
    async fn list_heroes(&self) -> TransportResult<Vec<Hero>>;
    /// `GET <base>/<id>`
    async fn get_hero(&self, id: HeroId) -> TransportResult<Hero>;
    /// `POST <base>` with `{name}`; returns the record with its assigned id.
    async fn create_hero(&self, hero: &NewHero) -> TransportResult<Hero>;
    /// `PUT <base>` with the full record; the body's `id` names the target.
    async fn update_hero(&self, hero: &Hero) -> TransportResult<()>;
    /// `DELETE <base>/<id>`; the deleted record when the server echoes it.
    async fn delete_hero(&self, id: HeroId) -> TransportResult<Option<Hero>>;
    /// `GET <base>/?name=<term>`
    async fn search_heroes(&self, term: &str) -> TransportResult<Vec<Hero>>;
}
