//! Hero data-access service.
//!
//! # Responsibility
//! - Turn list/get/create/update/delete/search intents into transport calls.
//! - Report every outcome to the shared `MessageLog`.
//! - Contain transport failures behind per-operation fallback values.
//!
//! # Invariants
//! - Every call issues at most one transport request and always resolves.
//! - Each completed call appends exactly one notification line (a blank
//!   search term short-circuits and appends none).
//! - Failures never reach the caller: they are logged and replaced by the
//!   fallback configured for the operation.

use crate::messages::MessageLog;
use crate::model::hero::{Hero, HeroId, HeroRef, NewHero};
use crate::transport::{HeroTransport, TransportError};
use log::{error, info};

/// Prefix of every notification line written by this service.
pub const SERVICE_NAME: &str = "HeroService";

/// Failure-tolerant CRUD entry points over a hero transport.
pub struct HeroService<T: HeroTransport> {
    transport: T,
    messages: MessageLog,
}

impl<T: HeroTransport> HeroService<T> {
    /// Creates a service reporting into `messages`.
    pub fn new(transport: T, messages: MessageLog) -> Self {
        Self {
            transport,
            messages,
        }
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches the whole collection; empty on failure.
    pub async fn get_heroes(&self) -> Vec<Hero> {
        match self.transport.list_heroes().await {
            Ok(heroes) => {
                self.log("fetched heroes", "list", heroes.len());
                heroes
            }
            Err(err) => self.handle_error("getHeroes", &err, Vec::new()),
        }
    }

    /// Fetches one hero; `None` on failure, including 404.
    pub async fn get_hero(&self, id: HeroId) -> Option<Hero> {
        match self.transport.get_hero(id).await {
            Ok(hero) => {
                self.log(&format!("fetched hero id={id}"), "get", 1);
                Some(hero)
            }
            Err(err) => self.handle_error(&format!("getHero id={id}"), &err, None),
        }
    }

    /// Creates a hero; returns the record with its server-assigned id.
    pub async fn add_hero(&self, hero: &NewHero) -> Option<Hero> {
        match self.transport.create_hero(hero).await {
            Ok(created) => {
                self.log(&format!("added hero w/ id={}", created.id), "create", 1);
                Some(created)
            }
            Err(err) => self.handle_error("addHero", &err, None),
        }
    }

    /// Replaces a hero's stored fields; a failed update is a no-op.
    pub async fn update_hero(&self, hero: &Hero) {
        match self.transport.update_hero(hero).await {
            Ok(()) => self.log(&format!("updated hero id={}", hero.id), "update", 1),
            Err(err) => self.handle_error("updateHero", &err, ()),
        }
    }

    /// Deletes by id or by record; returns the echoed record if any.
    pub async fn delete_hero<'a>(&self, target: impl Into<HeroRef<'a>>) -> Option<Hero> {
        let id = target.into().id();
        match self.transport.delete_hero(id).await {
            Ok(deleted) => {
                self.log(&format!("deleted hero id={id}"), "delete", 1);
                deleted
            }
            Err(err) => self.handle_error("deleteHero", &err, None),
        }
    }

    /// Finds heroes whose name matches `term`.
    ///
    /// A blank term resolves to an empty list without a request.
    pub async fn search_heroes(&self, term: &str) -> Vec<Hero> {
        let term = term.trim();
        if term.is_empty() {
            return Vec::new();
        }

        match self.transport.search_heroes(term).await {
            Ok(heroes) => {
                let text = if heroes.is_empty() {
                    format!("no heroes matching \"{term}\"")
                } else {
                    format!("found heroes matching \"{term}\"")
                };
                self.log(&text, "search", heroes.len());
                heroes
            }
            Err(err) => self.handle_error("searchHeroes", &err, Vec::new()),
        }
    }

    fn log(&self, text: &str, operation: &str, count: usize) {
        info!("event=hero_request module=service op={operation} status=ok count={count}");
        self.messages.append(format!("{SERVICE_NAME}: {text}"));
    }

    /// Recovery policy shared by every operation; returns `fallback`.
    fn handle_error<R>(&self, operation: &str, err: &TransportError, fallback: R) -> R {
        error!(
            "event=hero_request module=service op=\"{operation}\" status=error url={} error={err:?}",
            err.url()
        );
        self.messages.append(format!("{SERVICE_NAME}: {operation} failed: {err}"));
        fallback
    }
}
