//! Which key each translation model needs.
//!
//! Model names match the `--model` values bilingual_book_maker accepts. Some
//! models need no key at all (`google`, `deeplfree`). The Claude Code models
//! run without a key only in agentic mode; otherwise they fall back to the
//! regular Claude API and need `claude_key`.

use crate::config::{EnvLookup, Resolver, Setting, closest_match};
use crate::error::KeysError;

/// Key placeholder used when an OpenAI-family model is served by Ollama.
pub const OLLAMA_KEY: &str = "ollama";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRequirement {
    /// The model runs without any key.
    None,
    /// The model fails without a key.
    Required(Setting),
    /// A key is used when present, and required outside agentic mode.
    Optional(Setting),
}

impl KeyRequirement {
    pub fn setting(self) -> Option<Setting> {
        match self {
            KeyRequirement::None => None,
            KeyRequirement::Required(s) | KeyRequirement::Optional(s) => Some(s),
        }
    }
}

const OPENAI_MODELS: &[&str] = &[
    "openai",
    "chatgptapi",
    "gpt4",
    "gpt4omini",
    "gpt4o",
    "o1preview",
    "o1",
    "o1mini",
    "o3mini",
];

const MODELS: &[(&[&str], KeyRequirement)] = &[
    (OPENAI_MODELS, KeyRequirement::Required(Setting::OpenaiKey)),
    (&["caiyun"], KeyRequirement::Required(Setting::CaiyunKey)),
    (&["deepl"], KeyRequirement::Required(Setting::DeeplKey)),
    (&["deeplfree", "google", "tencentransmart"], KeyRequirement::None),
    (
        &[
            "claude",
            "claude-3-5-sonnet-latest",
            "claude-3-5-sonnet-20241022",
            "claude-3-5-sonnet-20240620",
            "claude-3-5-haiku-latest",
            "claude-3-5-haiku-20241022",
        ],
        KeyRequirement::Required(Setting::ClaudeKey),
    ),
    (
        &[
            "claude-code",
            "claude-code-sonnet",
            "claude-code-opus",
            "glm-4.5",
            "glm",
        ],
        KeyRequirement::Optional(Setting::ClaudeKey),
    ),
    (
        &["gemini", "geminipro"],
        KeyRequirement::Required(Setting::GeminiKey),
    ),
    (&["groq"], KeyRequirement::Required(Setting::GroqKey)),
    (&["xai"], KeyRequirement::Required(Setting::XaiKey)),
    (
        &["qwen", "qwen-mt-turbo", "qwen-mt-plus"],
        KeyRequirement::Required(Setting::QwenKey),
    ),
    (&["customapi"], KeyRequirement::Required(Setting::CustomApi)),
    (
        &["deepseek", "deepseek-chat", "deepseek-reasoner"],
        KeyRequirement::Required(Setting::DeepseekKey),
    ),
];

fn model_names() -> impl Iterator<Item = &'static str> {
    MODELS.iter().flat_map(|(names, _)| names.iter().copied())
}

/// Look up the key requirement for a model name.
pub fn key_requirement(model: &str) -> Result<KeyRequirement, KeysError> {
    MODELS
        .iter()
        .find(|(names, _)| names.contains(&model))
        .map(|(_, requirement)| *requirement)
        .ok_or_else(|| KeysError::UnknownModel {
            name: model.to_string(),
            suggestion: closest_match(model, model_names()),
        })
}

/// Resolve the key `model` should be called with.
///
/// `explicit` is the caller's key option. `ollama_model` stands in for a
/// missing OpenAI key, since a local Ollama server accepts any key.
/// `agentic` lets [`KeyRequirement::Optional`] models run without a key;
/// when false they need one like any other model.
///
/// Returns `Ok(None)` when the model needs no key or an optional key is unset.
pub fn model_key<E: EnvLookup>(
    model: &str,
    explicit: Option<&str>,
    ollama_model: Option<&str>,
    agentic: bool,
    resolver: &Resolver<E>,
) -> Result<Option<String>, KeysError> {
    let requirement = key_requirement(model)?;
    let Some(setting) = requirement.setting() else {
        log::debug!("{model} needs no key");
        return Ok(None);
    };

    if let Some(value) = resolver.resolve(setting, explicit).into_value() {
        return Ok(Some(value));
    }

    if setting == Setting::OpenaiKey && ollama_model.is_some_and(|m| !m.is_empty()) {
        log::debug!("{model}: no OpenAI key, using Ollama placeholder");
        return Ok(Some(OLLAMA_KEY.to_string()));
    }

    match requirement {
        KeyRequirement::Optional(_) if agentic => {
            log::debug!("{model}: agentic mode, running without a key");
            Ok(None)
        }
        KeyRequirement::Required(setting) | KeyRequirement::Optional(setting) => {
            Err(KeysError::MissingKey {
                model: model.to_string(),
                setting,
                candidates: resolver
                    .candidates(setting)
                    .into_iter()
                    .map(String::from)
                    .collect(),
            })
        }
        KeyRequirement::None => Ok(None),
    }
}
