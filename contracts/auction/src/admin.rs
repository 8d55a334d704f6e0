use crate::errors::Error;
use crate::storage;
use crate::types::Config;
use soroban_sdk::{Address, Env};

pub fn load_config(env: &Env) -> Result<Config, Error> {
    storage::get_config(env).ok_or(Error::NotInitialized)
}

/// Authenticates `caller` and checks it is the registry owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<Config, Error> {
    caller.require_auth();
    let config = load_config(env)?;
    if config.owner != *caller {
        return Err(Error::Unauthorized);
    }
    Ok(config)
}
