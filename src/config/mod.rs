//! Configuration system for bbm-keys
//!
//! # Settings
//!
//! Each [`Setting`] (an API credential such as `openai_key`) has a fixed,
//! ordered list of candidate environment variables: one primary `BBM_*` name
//! and sometimes a legacy alias (`DEEPSEEK_API_KEY`, `OPENAI_API_KEY`).
//!
//! # Resolution
//!
//! An explicit value (CLI option or programmatic argument) wins. Otherwise
//! the first candidate variable with a non-empty value wins. Otherwise the
//! setting is [`Resolution::Unset`], which is a result, not an error.
//!
//! # User Config (~/.config/bbm/config.toml)
//!
//! Optional. Declares extra alias variables per setting, which are checked
//! after all built-in candidates.

mod env;
mod resolve;
mod settings;
mod user;

pub use env::{EnvLookup, ProcessEnv};
pub use resolve::{Resolution, Resolver, resolve};
pub use settings::Setting;
pub(crate) use settings::closest_match;
pub use user::{UserConfig, get_config_path, set_config_path};
