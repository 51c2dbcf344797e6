//! Plugin configuration documents: external JSON that extends a factory's
//! registry without modifying the engine.
//!
//! A document is a list of registrations; each entry carries the JSON value
//! its producer yields. The loader only touches the registry, so loaded
//! configuration gets registration capability and nothing else.
//!
//! ```json
//! {
//!   "resources": [
//!     { "name": "requiredArgument", "value": { "bar": "Hello" } },
//!     { "type": "buildConfig", "value": { "env": "staging" } }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::registry::ResourceRegistry;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PluginConfig {
    #[serde(default)]
    resources: Vec<ResourceConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceConfig {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "type")]
    resource_type: Option<String>,
    value: Value,
}

/// Apply a config document to the registry.
///
/// Returns false when the path does not resolve to a loadable document or an
/// entry is invalid. Registrations made before a bad entry persist, matching
/// the semantics of executing a script that fails partway.
pub(crate) fn apply_file(path: &Path, registry: &mut ResourceRegistry) -> bool {
    let Ok(content) = fs::read_to_string(path) else {
        return false;
    };

    let config: PluginConfig = match serde_json::from_str(&content) {
        Ok(config) => config,
        Err(_) => return false,
    };

    for entry in config.resources {
        let ResourceConfig {
            name,
            resource_type,
            value,
        } = entry;

        let registered = registry.register(
            move || value.clone(),
            name.as_deref(),
            resource_type.as_deref(),
        );
        if registered.is_err() {
            return false;
        }
    }

    crate::log_status!("plugin", "Loaded config from {}", path.display());
    true
}
