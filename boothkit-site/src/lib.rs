//! # Boothkit Site Services
//!
//! Client-side services for the photo booth site:
//! - Content API client and fetch-or-fallback resolution
//! - Stateful content consumer with load phases
//! - Availability schedule and appointment booking
//! - Contact form delivery
//! - Configuration resolution (override, env, TOML, default)
//!
//! The data model and merge semantics live in `boothkit-common`; this
//! crate supplies everything that talks to the outside world.

pub mod availability;
pub mod client;
pub mod config;
pub mod consumer;
pub mod email;
pub mod resolver;

pub use client::{ContentClient, FetchError};
pub use config::ApiBaseResolver;
pub use consumer::{ContentConsumer, LoadPhase, Snapshot};
pub use email::{ContactMessage, EmailClient, EmailError};
pub use resolver::ContentResolver;
