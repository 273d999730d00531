//! Error types and formatting
//!
//! **`KeysError`** is a typed enum for domain errors that can be pattern-matched
//! and tested. Use `.into()` to convert to `anyhow::Error` while preserving the
//! type for `downcast_ref`. Display produces styled output for users: an error
//! line followed by a hint line.
//!
//! An unset setting is not an error for the resolver. `KeysError::Unset` exists
//! for callers (like the `resolve` command) that decide a missing value is fatal.

use std::path::PathBuf;

use color_print::cformat;

use crate::config::Setting;
use crate::styling::{error_message, hint_message};

/// Domain errors for setting and model lookups.
///
/// ```ignore
/// if let Some(KeysError::UnknownSetting { suggestion, .. }) = err.downcast_ref() {
///     println!("did you mean {suggestion:?}");
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeysError {
    UnknownSetting {
        name: String,
        suggestion: Option<&'static str>,
    },
    UnknownModel {
        name: String,
        suggestion: Option<&'static str>,
    },
    /// A model needs a key and no source supplied one
    MissingKey {
        model: String,
        setting: Setting,
        candidates: Vec<String>,
    },
    Unset {
        setting: Setting,
        candidates: Vec<String>,
    },
    /// The config file exists but could not be read
    ConfigRead {
        path: PathBuf,
        error: String,
    },
    ConfigParse {
        path: PathBuf,
        error: String,
    },
    InvalidAlias {
        setting: Setting,
        alias: String,
    },
}

impl std::error::Error for KeysError {}

/// `A`, `A or B`, `A, B or C`, each in secondary style.
fn format_variables(candidates: &[String]) -> String {
    let styled: Vec<String> = candidates
        .iter()
        .map(|c| cformat!("<bright-black>{c}</>"))
        .collect();
    match styled.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {last}", rest.join(", ")),
    }
}

impl std::fmt::Display for KeysError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeysError::UnknownSetting { name, suggestion } => {
                let hint = match suggestion {
                    Some(s) => cformat!("Did you mean <bright-black>{s}</>?"),
                    None => cformat!(
                        "To see known settings, run <bright-black>bbm-keys list</>"
                    ),
                };
                write!(
                    f,
                    "{}\n{}",
                    error_message(cformat!("Unknown setting <bold>{name}</>")),
                    hint_message(hint)
                )
            }

            KeysError::UnknownModel { name, suggestion } => {
                let message = error_message(cformat!("Unknown model <bold>{name}</>"));
                match suggestion {
                    Some(s) => write!(
                        f,
                        "{message}\n{}",
                        hint_message(cformat!("Did you mean <bright-black>{s}</>?"))
                    ),
                    None => write!(f, "{message}"),
                }
            }

            KeysError::MissingKey {
                model,
                setting,
                candidates,
            } => write!(
                f,
                "{}\n{}",
                error_message(cformat!(
                    "Model <bold>{model}</> needs an API key (<bold>{setting}</>)"
                )),
                hint_message(cformat!(
                    "Provide the key explicitly or set {}",
                    format_variables(candidates)
                ))
            ),

            KeysError::Unset {
                setting,
                candidates,
            } => write!(
                f,
                "{}\n{}",
                error_message(cformat!("No value for <bold>{setting}</>")),
                hint_message(cformat!(
                    "Provide a value explicitly or set {}",
                    format_variables(candidates)
                ))
            ),

            KeysError::ConfigRead { path, error } => write!(
                f,
                "{}\n{}",
                error_message(cformat!(
                    "Failed to read config <bold>{}</>",
                    path.display()
                )),
                hint_message(error.trim_end())
            ),

            KeysError::ConfigParse { path, error } => write!(
                f,
                "{}\n{}",
                error_message(cformat!(
                    "Failed to parse config <bold>{}</>",
                    path.display()
                )),
                hint_message(error.trim_end())
            ),

            KeysError::InvalidAlias { setting, alias } => {
                let quoted = format!("{alias:?}");
                write!(
                    f,
                    "{}\n{}",
                    error_message(cformat!(
                        "Invalid alias <bold>{quoted}</> for <bold>{setting}</>"
                    )),
                    hint_message("Alias names must be non-empty and contain no '=' or NUL")
                )
            }
        }
    }
}
