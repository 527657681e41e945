//! Configuration value interpolation
//!
//! Two flavours of substitution are supported:
//! - Config values (`build_file`, `build_dir`, property values) expand `~`,
//!   `$VAR` and `${VAR}` from the process environment.
//! - Import paths inside build files expand Phing `${property.name}` tokens
//!   from a property map. Unknown properties are left untouched so the
//!   resulting path error names the token.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches Phing property references: "${toolkit.dir}"
static PROPERTY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([A-Za-z0-9_.\-]+)\}").unwrap());

/// Expand `~` and environment variables in a config value
///
/// If any referenced variable is unset only `~` is expanded.
///
/// # Examples
///
/// ```
/// use targetdoc::config::interpolate::interpolate_string;
///
/// std::env::set_var("TARGETDOC_DOC_EXAMPLE", "site");
/// assert_eq!(interpolate_string("/srv/$TARGETDOC_DOC_EXAMPLE/build"), "/srv/site/build");
/// std::env::remove_var("TARGETDOC_DOC_EXAMPLE");
/// ```
pub fn interpolate_string(s: &str) -> String {
    match shellexpand::full(s) {
        Ok(expanded) => expanded.into_owned(),
        Err(e) => {
            tracing::debug!("Leaving '{}' unexpanded: {}", s, e);
            shellexpand::tilde(s).into_owned()
        }
    }
}

/// Expand Phing `${property}` tokens from a property map
pub fn expand_properties(s: &str, properties: &HashMap<String, String>) -> String {
    PROPERTY_RE
        .replace_all(s, |caps: &regex::Captures| match properties.get(&caps[1]) {
            Some(value) => value.clone(),
            None => {
                tracing::debug!("Property '{}' not defined", &caps[1]);
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// Interpolate all path-like string values in a Config
pub fn interpolate_config(config: &mut super::model::Config) {
    config.docs.build_file = interpolate_string(&config.docs.build_file);
    config.docs.build_dir = interpolate_string(&config.docs.build_dir);

    for value in config.properties.values_mut() {
        *value = interpolate_string(value);
    }
}
