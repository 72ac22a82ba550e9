//! Shared services for the Kibble pet-care suite.
//!
//! Carries the configuration layer (including the scheduling defaults
//! every other crate reads), shared constants, and the core error
//! type. Deliberately dependency-light so that domain crates such as
//! `kibble-time` can build on it without dragging in anything heavy.

pub mod config;
pub mod constants;
pub mod error;

pub use config::{Settings, load_config};
pub use error::{CoreError, CoreResult};
