//! Known settings and the environment variables that can supply them.
//!
//! Adding a setting means adding a `Setting` variant and a row to `SETTINGS`
//! at the same position. Adding an alias is a change to one row.

use std::str::FromStr;

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::error::KeysError;

/// A named configuration slot resolved from an explicit option or the environment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Setting {
    OpenaiKey,
    CaiyunKey,
    DeeplKey,
    ClaudeKey,
    CustomApi,
    GeminiKey,
    GroqKey,
    XaiKey,
    QwenKey,
    DeepseekKey,
}

/// One row of the settings table.
#[derive(Debug)]
struct SettingSpec {
    setting: Setting,
    /// Candidate variables, primary first. Never empty.
    candidates: &'static [&'static str],
}

/// Indexed by `Setting` discriminant.
const SETTINGS: &[SettingSpec] = &[
    SettingSpec {
        setting: Setting::OpenaiKey,
        candidates: &["BBM_OPENAI_API_KEY", "OPENAI_API_KEY"],
    },
    SettingSpec {
        setting: Setting::CaiyunKey,
        candidates: &["BBM_CAIYUN_API_KEY"],
    },
    SettingSpec {
        setting: Setting::DeeplKey,
        candidates: &["BBM_DEEPL_API_KEY"],
    },
    SettingSpec {
        setting: Setting::ClaudeKey,
        candidates: &["BBM_CLAUDE_API_KEY"],
    },
    SettingSpec {
        setting: Setting::CustomApi,
        candidates: &["BBM_CUSTOM_API"],
    },
    SettingSpec {
        setting: Setting::GeminiKey,
        candidates: &["BBM_GOOGLE_GEMINI_KEY"],
    },
    SettingSpec {
        setting: Setting::GroqKey,
        candidates: &["BBM_GROQ_API_KEY"],
    },
    SettingSpec {
        setting: Setting::XaiKey,
        candidates: &["BBM_XAI_API_KEY"],
    },
    SettingSpec {
        setting: Setting::QwenKey,
        candidates: &["BBM_QWEN_API_KEY"],
    },
    SettingSpec {
        setting: Setting::DeepseekKey,
        candidates: &["BBM_DEEPSEEK_API_KEY", "DEEPSEEK_API_KEY"],
    },
];

impl Setting {
    /// Canonical snake_case name, e.g. `deepseek_key`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Built-in candidate variables in priority order.
    pub fn candidates(self) -> &'static [&'static str] {
        let spec = &SETTINGS[self as usize];
        debug_assert_eq!(spec.setting, self, "SETTINGS out of variant order");
        spec.candidates
    }

    /// The primary (first) candidate variable.
    pub fn primary_variable(self) -> &'static str {
        self.candidates()[0]
    }

    pub fn all() -> impl Iterator<Item = Setting> {
        Setting::iter()
    }

    /// Parse a user-supplied setting name, failing fast on unknown names.
    ///
    /// Accepts `-` in place of `_` and any ASCII case, so `Deepseek-Key`
    /// parses as [`Setting::DeepseekKey`].
    pub fn parse(name: &str) -> Result<Self, KeysError> {
        let normalized = name.trim().replace('-', "_");
        Setting::from_str(&normalized).map_err(|_| KeysError::UnknownSetting {
            name: name.to_string(),
            suggestion: closest_match(&normalized, Setting::all().map(Setting::name)),
        })
    }
}

/// Pick the known name most similar to `input`, if any is similar enough to suggest.
pub(crate) fn closest_match(
    input: &str,
    known: impl Iterator<Item = &'static str>,
) -> Option<&'static str> {
    let input = input.to_ascii_lowercase();
    known
        .map(|candidate| (candidate, strsim::jaro_winkler(&input, candidate)))
        .filter(|(_, score)| *score >= 0.85)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(candidate, _)| candidate)
}
