#![allow(dead_code)]

use heroes_core::{Hero, HeroId, HeroTransport, NewHero, TransportError, TransportResult};
use parking_lot::Mutex;

pub const BASE: &str = "api/heroes";

/// In-memory collection that records every request and can be told to fail.
#[derive(Default)]
pub struct FakeTransport {
    heroes: Mutex<Vec<Hero>>,
    failure: Mutex<Option<TransportError>>,
    requests: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn with_heroes(heroes: Vec<Hero>) -> Self {
        Self {
            heroes: Mutex::new(heroes),
            ..Self::default()
        }
    }

    /// Every following request fails with `err`.
    pub fn fail_with(&self, err: TransportError) {
        *self.failure.lock() = Some(err);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    pub fn stored(&self) -> Vec<Hero> {
        self.heroes.lock().clone()
    }

    fn record(&self, line: String) -> TransportResult<()> {
        self.requests.lock().push(line);
        match self.failure.lock().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

pub fn not_found(url: String) -> TransportError {
    TransportError::status(url, 404, "Not Found")
}

impl HeroTransport for FakeTransport {
    async fn list_heroes(&self) -> TransportResult<Vec<Hero>> {
        self.record(format!("GET {BASE}"))?;
        Ok(self.stored())
    }

    async fn get_hero(&self, id: HeroId) -> TransportResult<Hero> {
        self.record(format!("GET {BASE}/{id}"))?;
        self.heroes
            .lock()
            .iter()
            .find(|hero| hero.id == id)
            .cloned()
            .ok_or_else(|| not_found(format!("{BASE}/{id}")))
    }

    async fn create_hero(&self, hero: &NewHero) -> TransportResult<Hero> {
        self.record(format!("POST {BASE}"))?;
        let mut heroes = self.heroes.lock();
        let id = heroes.iter().map(|hero| hero.id).max().map_or(11, |max| max + 1);
        let created = Hero::new(id, hero.name.clone());
        heroes.push(created.clone());
        Ok(created)
    }

    async fn update_hero(&self, hero: &Hero) -> TransportResult<()> {
        self.record(format!("PUT {BASE}"))?;
        let mut heroes = self.heroes.lock();
        match heroes.iter_mut().find(|stored| stored.id == hero.id) {
            Some(stored) => {
                *stored = hero.clone();
                Ok(())
            }
            None => Err(not_found(BASE.to_string())),
        }
    }

    async fn delete_hero(&self, id: HeroId) -> TransportResult<Option<Hero>> {
        self.record(format!("DELETE {BASE}/{id}"))?;
        let mut heroes = self.heroes.lock();
        match heroes.iter().position(|hero| hero.id == id) {
            Some(index) => Ok(Some(heroes.remove(index))),
            None => Err(not_found(format!("{BASE}/{id}"))),
        }
    }

    async fn search_heroes(&self, term: &str) -> TransportResult<Vec<Hero>> {
        self.record(format!("GET {BASE}/?name={term}"))?;
        let needle = term.to_lowercase();
        Ok(self
            .stored()
            .into_iter()
            .filter(|hero| hero.name.to_lowercase().contains(&needle))
            .collect())
    }
}
