//! `${VAR}` expansion for string values read from `auteur.toml`.

use crate::ConfigError;

/// Expand environment variable references in a config value.
///
/// `${VAR}` fails when VAR is unset, `${VAR:-default}` falls back to the
/// default. Bare `$VAR` is left alone so literal dollar signs survive.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let lookup = |name: &str| -> Result<Option<String>, UnsetVar> {
        std::env::var(name).map(Some).map_err(|_| UnsetVar(name.to_owned()))
    };

    shellexpand::env_with_context(value, lookup)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.cause.0),
        })
}

/// Name of a variable that had no value during expansion.
struct UnsetVar(String);
