use anyhow::Context;
use bbm_keys::KeysError;
use bbm_keys::config::{EnvLookup, Resolver, Setting};
use bbm_keys::keys::KeyRing;
use bbm_keys::styling::println;

/// Print the effective value of `setting`, or fail with its candidate variables.
pub(crate) fn handle_resolve<E: EnvLookup>(
    resolver: &Resolver<E>,
    setting: &str,
    value: Option<&str>,
    split: bool,
) -> anyhow::Result<()> {
    let setting = Setting::parse(setting)?;
    let Some(resolved) = resolver.resolve(setting, value).into_value() else {
        return Err(KeysError::Unset {
            setting,
            candidates: resolver
                .candidates(setting)
                .into_iter()
                .map(String::from)
                .collect(),
        }
        .into());
    };

    if split {
        let ring = KeyRing::parse(&resolved)
            .with_context(|| format!("{setting} contains only separators"))?;
        for key in ring.keys() {
            println!("{key}");
        }
    } else {
        println!("{resolved}");
    }
    Ok(())
}
