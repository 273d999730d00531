mod list;
mod model;
mod resolve;

pub(crate) use list::handle_list;
pub(crate) use model::handle_model;
pub(crate) use resolve::handle_resolve;

use bbm_keys::config::{ProcessEnv, Resolver, UserConfig};

/// Resolver over the process environment plus user-configured aliases.
pub(crate) fn process_resolver() -> anyhow::Result<Resolver<ProcessEnv>> {
    let aliases = UserConfig::load()?.alias_table()?;
    Ok(Resolver::new(ProcessEnv).with_aliases(aliases))
}
