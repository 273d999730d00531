//! API key resolution for bilingual_book_maker.
//!
//! Each credential is a [`config::Setting`] resolved from an explicit option,
//! then from its `BBM_*` environment variable, then from any legacy alias.
//! See [`config::resolve`] for the precedence rules and [`model::model_key`]
//! for the per-model requirements.

pub mod config;
pub mod error;
pub mod keys;
pub mod model;
pub mod styling;

pub use error::KeysError;
