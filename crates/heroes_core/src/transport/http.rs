//! `reqwest`-backed hero transport.

use crate::config::HeroClientConfig;
use crate::model::hero::{Hero, HeroId, NewHero};
use crate::transport::{HeroTransport, TransportError, TransportResult};
use log::debug;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// HTTP transport speaking JSON to the configured collection URL.
#[derive(Debug, Clone)]
pub struct HttpHeroTransport {
    client: Client,
    config: HeroClientConfig,
}

impl HttpHeroTransport {
    pub fn new(config: HeroClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Uses a caller-built client, e.g. one with custom timeouts or proxies.
    pub fn with_client(client: Client, config: HeroClientConfig) -> Self {
        Self { client, config }
    }

    async fn send(&self, request: RequestBuilder, url: &str) -> TransportResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|err| TransportError::network(url, err.to_string()))?;

        let status = response.status();
        debug!(
            "event=hero_http_response module=transport status={} url={}",
            status.as_u16(),
            url
        );
        if !status.is_success() {
            return Err(TransportError::status(
                url,
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
            ));
        }
        Ok(response)
    }

    async fn read_body(response: Response, url: &str) -> TransportResult<Vec<u8>> {
        response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|err| TransportError::network(url, err.to_string()))
    }

    async fn read_json<T: DeserializeOwned>(response: Response, url: &str) -> TransportResult<T> {
        let body = Self::read_body(response, url).await?;
        serde_json::from_slice(&body).map_err(|err| TransportError::decode(url, err.to_string()))
    }
}

impl HeroTransport for HttpHeroTransport {
    async fn list_heroes(&self) -> TransportResult<Vec<Hero>> {
        let url = self.config.collection_url();
        let response = self.send(self.client.get(url), url).await?;
        Self::read_json(response, url).await
    }

    async fn get_hero(&self, id: HeroId) -> TransportResult<Hero> {
        let url = self.config.item_url(id);
        let response = self.send(self.client.get(&url), &url).await?;
        Self::read_json(response, &url).await
    }

    async fn create_hero(&self, hero: &NewHero) -> TransportResult<Hero> {
        let url = self.config.collection_url();
        let response = self.send(self.client.post(url).json(hero), url).await?;
        Self::read_json(response, url).await
    }

    async fn update_hero(&self, hero: &Hero) -> TransportResult<()> {
        let url = self.config.collection_url();
        let response = self.send(self.client.put(url).json(hero), url).await?;
        // Body is arbitrary or empty; drain it so the connection can be reused.
        Self::read_body(response, url).await?;
        Ok(())
    }

    async fn delete_hero(&self, id: HeroId) -> TransportResult<Option<Hero>> {
        let url = self.config.item_url(id);
        let response = self.send(self.client.delete(&url), &url).await?;
        let body = Self::read_body(response, &url).await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        match serde_json::from_slice::<Option<Hero>>(&body) {
            Ok(deleted) => Ok(deleted),
            // Any other JSON (e.g. `{}`) acknowledges the delete without echoing a record.
            Err(err) => match serde_json::from_slice::<serde_json::Value>(&body) {
                Ok(_) => Ok(None),
                Err(_) => Err(TransportError::decode(&url, err.to_string())),
            },
        }
    }

    async fn search_heroes(&self, term: &str) -> TransportResult<Vec<Hero>> {
        let url = self.config.search_url();
        let request = self.client.get(&url).query(&[("name", term)]);
        let response = self.send(request, &url).await?;
        Self::read_json(response, &url).await
    }
}
