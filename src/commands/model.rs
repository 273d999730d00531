use bbm_keys::config::{EnvLookup, Resolver};
use bbm_keys::model::model_key;
use bbm_keys::styling::{eprintln, info_message, println};
use color_print::cformat;

pub(crate) fn handle_model<E: EnvLookup>(
    resolver: &Resolver<E>,
    model: &str,
    key: Option<&str>,
    ollama_model: Option<&str>,
    agentic: bool,
) -> anyhow::Result<()> {
    match model_key(model, key, ollama_model, agentic, resolver)? {
        Some(key) => println!("{key}"),
        None => eprintln!(
            "{}",
            info_message(cformat!("<bold>{model}</> runs without an API key"))
        ),
    }
    Ok(())
}
