//! Hero record and its pre-creation shape.
//!
//! # Responsibility
//! - Carry hero data between the data-access layer and its callers.
//! - Let `delete` target a hero either by bare id or by record.
//!
//! # Invariants
//! - `Hero` always carries a server-assigned id.
//! - `NewHero` never carries an id; the server assigns one on create.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Server-assigned hero identifier.
pub type HeroId = i64;

/// A hero as stored by the remote collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
}

impl Hero {
    pub fn new(id: HeroId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns a copy carrying `name`, keeping the same id.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            id: self.id,
            name: name.into(),
        }
    }
}

impl Display for Hero {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.id, self.name)
    }
}

/// Create payload: a hero before the server has assigned its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHero {
    pub name: String,
}

impl NewHero {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Delete target: either a bare id or an existing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroRef<'a> {
    Id(HeroId),
    Hero(&'a Hero),
}

impl HeroRef<'_> {
    /// Returns the id the request should address.
    pub fn id(&self) -> HeroId {
        match self {
            Self::Id(id) => *id,
            Self::Hero(hero) => hero.id,
        }
    }
}

impl From<HeroId> for HeroRef<'_> {
    fn from(value: HeroId) -> Self {
        Self::Id(value)
    }
}

impl<'a> From<&'a Hero> for HeroRef<'a> {
    fn from(value: &'a Hero) -> Self {
        Self::Hero(value)
    }
}
