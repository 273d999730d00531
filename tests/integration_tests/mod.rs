pub mod config_aliases;
pub mod model;
pub mod resolve;
