//! Data-access core for the hero catalog.
//! Presentation code talks to the remote collection only through this crate.

pub mod config;
pub mod logging;
pub mod messages;
pub mod model;
pub mod route;
pub mod service;
pub mod transport;

pub use config::{ConfigError, HeroClientConfig};
pub use logging::{default_log_level, init_logging, init_stderr_logging, logging_status, LogSink};
pub use messages::MessageLog;
pub use model::hero::{Hero, HeroId, HeroRef, NewHero};
pub use route::{Route, RouteError};
pub use service::hero_service::{HeroService, SERVICE_NAME};
pub use transport::http::HttpHeroTransport;
pub use transport::{HeroTransport, TransportError, TransportResult};
