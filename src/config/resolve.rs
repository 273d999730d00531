//! Setting resolution: explicit value first, then candidate variables in order.
//!
//! Both an absent and an empty value count as "not provided" at every step.

use std::collections::BTreeMap;

use super::env::EnvLookup;
use super::settings::Setting;

/// Where a setting's effective value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The caller passed a non-empty value.
    Explicit(String),
    /// A candidate variable supplied the value.
    ///
    /// `rank` is the candidate's position: 0 for the primary name, higher for aliases.
    Environment {
        variable: String,
        value: String,
        rank: usize,
    },
    Unset,
}

impl Resolution {
    pub fn value(&self) -> Option<&str> {
        match self {
            Resolution::Explicit(value) | Resolution::Environment { value, .. } => Some(value),
            Resolution::Unset => None,
        }
    }

    pub fn into_value(self) -> Option<String> {
        match self {
            Resolution::Explicit(value) | Resolution::Environment { value, .. } => Some(value),
            Resolution::Unset => None,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Resolution::Unset)
    }

    /// True when a non-primary candidate supplied the value.
    pub fn is_alias(&self) -> bool {
        matches!(self, Resolution::Environment { rank, .. } if *rank > 0)
    }

    /// The variable that supplied the value, if any.
    pub fn variable(&self) -> Option<&str> {
        match self {
            Resolution::Environment { variable, .. } => Some(variable),
            _ => None,
        }
    }
}

fn provided(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Resolve `setting` against its built-in candidates.
///
/// ```
/// use std::collections::HashMap;
/// use bbm_keys::config::{Setting, resolve};
///
/// let env = HashMap::from([("DEEPSEEK_API_KEY".to_string(), "abc".to_string())]);
/// assert_eq!(resolve(Setting::DeepseekKey, None, &env).value(), Some("abc"));
/// assert_eq!(resolve(Setting::DeepseekKey, Some("mine"), &env).value(), Some("mine"));
/// ```
pub fn resolve(setting: Setting, explicit: Option<&str>, env: &impl EnvLookup) -> Resolution {
    resolve_from(setting, explicit, setting.candidates().iter().copied(), env)
}

fn resolve_from<'a>(
    setting: Setting,
    explicit: Option<&str>,
    candidates: impl IntoIterator<Item = &'a str>,
    env: &impl EnvLookup,
) -> Resolution {
    if let Some(value) = provided(explicit) {
        log::debug!("{setting}: using explicit value");
        return Resolution::Explicit(value.to_string());
    }

    for (rank, variable) in candidates.into_iter().enumerate() {
        let Some(value) = env.get(variable).filter(|v| !v.is_empty()) else {
            continue;
        };
        if rank == 0 {
            log::debug!("{setting}: using {variable}");
        } else {
            log::info!(
                "{setting}: using alias {variable}; {} is preferred",
                setting.primary_variable()
            );
        }
        return Resolution::Environment {
            variable: variable.to_string(),
            value,
            rank,
        };
    }

    log::debug!("{setting}: unset");
    Resolution::Unset
}

/// Resolves settings against an environment plus user-configured aliases.
///
/// Extra aliases are checked after the built-in candidates, so a built-in name
/// always wins over a configured one.
#[derive(Debug, Clone, Default)]
pub struct Resolver<E> {
    env: E,
    extra_aliases: BTreeMap<Setting, Vec<String>>,
}

impl<E: EnvLookup> Resolver<E> {
    pub fn new(env: E) -> Self {
        Self {
            env,
            extra_aliases: BTreeMap::new(),
        }
    }

    pub fn with_aliases(mut self, aliases: BTreeMap<Setting, Vec<String>>) -> Self {
        self.extra_aliases = aliases;
        self
    }

    /// All candidate variables for `setting`, built-ins first, without duplicates.
    pub fn candidates(&self, setting: Setting) -> Vec<&str> {
        let mut names: Vec<&str> = setting.candidates().to_vec();
        for alias in self.extra_aliases.get(&setting).into_iter().flatten() {
            if !names.contains(&alias.as_str()) {
                names.push(alias);
            }
        }
        names
    }

    pub fn resolve(&self, setting: Setting, explicit: Option<&str>) -> Resolution {
        resolve_from(setting, explicit, self.candidates(setting), &self.env)
    }

    /// Resolve every known setting from the environment alone.
    pub fn resolve_all(&self) -> Vec<(Setting, Resolution)> {
        Setting::all()
            .map(|setting| (setting, self.resolve(setting, None)))
            .collect()
    }
}
