//! Capture colors, name them and keep them across sessions.
//!
//! This crate ties the lower-level pieces of the workspace together:
//! - [`color`] ([`swatch_color`]) parses and normalizes color text and maps
//!   colors to palette names;
//! - [`store`] ([`swatch_store`]) is the asynchronous blob storage
//!   collaborator;
//! - [`collection`] keeps the ordered list of saved colors and persists it
//!   as one JSON blob;
//! - [`session`] turns user input events into cached colors, palette
//!   suggestions and save/delete requests.
//!
//! A typical front-end loads a [`SwatchConfig`], calls
//! [`SwatchConfig::open_session`] and forwards every input event to the
//! returned [`SessionController`].

pub mod collection;
pub mod config;
mod error;
pub mod session;

pub use collection::{
    Collection, CollectionLoad, ColorCollection, ColorRecord, LoadStatus,
    RecordId,
};
pub use config::{ConfigError, ConfigLoad, ConfigLoadStatus, SwatchConfig};
pub use error::{Error, Result, ValidationError};
pub use session::{SessionController, SessionEffect, SessionEvent};

pub use swatch_color as color;
pub use swatch_store as store;
