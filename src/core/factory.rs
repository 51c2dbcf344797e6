//! Plugin factory: constructs pipeline steps from statically declared
//! parameter tables, injecting resources resolved from the owned registry.

use std::any::Any;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::registry::{Resource, ResourceRegistry};

use super::plugin_config;

/// Conventional parameter name (and type) under which a per-call options map
/// is made available to plugins that declare it.
pub const OPTIONS_PARAMETER: &str = "options";

/// Ad hoc per-invocation configuration passed alongside registry-resolved
/// collaborators.
pub type PluginOptions = serde_json::Map<String, Value>;

/// One constructor parameter of a pluggable step.
pub struct ParameterDescriptor {
    pub name: &'static str,
    pub declared_type: Option<&'static str>,
    pub default: Option<Resource>,
}

impl ParameterDescriptor {
    pub fn required(name: &'static str) -> Self {
        Self {
            name,
            declared_type: None,
            default: None,
        }
    }

    pub fn with_type(mut self, declared_type: &'static str) -> Self {
        self.declared_type = Some(declared_type);
        self
    }

    pub fn with_default<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.default = Some(Arc::new(value) as Resource);
        self
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

/// A pluggable pipeline step.
///
/// The parameter table replaces runtime constructor introspection: each step
/// type declares its dependencies statically and `construct` receives them
/// fully resolved.
pub trait Plugin: Sized {
    fn parameters() -> Vec<ParameterDescriptor> {
        Vec::new()
    }

    fn construct(params: ResolvedParams) -> Result<Self>;
}

/// Resolved constructor parameters, keyed by descriptor name.
pub struct ResolvedParams {
    values: HashMap<&'static str, Resource>,
}

impl ResolvedParams {
    /// Typed access to a parameter the descriptor table guarantees present.
    pub fn require<T: Any + Send + Sync>(&self, name: &str) -> Result<Arc<T>> {
        let value = self
            .values
            .get(name)
            .ok_or_else(|| Error::UnsatisfiedDependency(name.to_string()))?;
        value.clone().downcast::<T>().map_err(|_| Error::ResourceType {
            parameter: name.to_string(),
            expected: std::any::type_name::<T>(),
        })
    }
}

/// Builds plugins by resolving their declared parameters against an owned
/// resource registry.
#[derive(Default)]
pub struct PluginFactory {
    registry: ResourceRegistry,
}

impl PluginFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource producer on the owned registry.
    pub fn register_resource<F, R>(
        &mut self,
        producer: F,
        name: Option<&str>,
        resource_type: Option<&str>,
    ) -> Result<()>
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: Any + Send + Sync,
    {
        self.registry.register(producer, name, resource_type)
    }

    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    pub fn build_plugin<P: Plugin>(&self) -> Result<P> {
        self.build(None)
    }

    pub fn build_plugin_with_options<P: Plugin>(&self, options: PluginOptions) -> Result<P> {
        self.build(Some(options))
    }

    /// Load additional registrations from an external JSON config document.
    ///
    /// Soft-fail for optional-extension discovery: a missing, unreadable, or
    /// malformed file returns false instead of erroring. Loading the same
    /// document twice is safe; re-registration shadows.
    pub fn add_config_from_file(&mut self, path: &Path) -> bool {
        plugin_config::apply_file(path, &mut self.registry)
    }

    fn build<P: Plugin>(&self, options: Option<PluginOptions>) -> Result<P> {
        let mut values = HashMap::new();

        for param in P::parameters() {
            match self.resolve_parameter(&param, options.as_ref()) {
                Some(value) => {
                    values.insert(param.name, value);
                }
                None => return Err(Error::UnsatisfiedDependency(param.name.to_string())),
            }
        }

        P::construct(ResolvedParams { values })
    }

    /// Resolution order: explicit per-call options (for the conventional
    /// options parameter only), registry by name, registry by declared type,
    /// then the declared default.
    fn resolve_parameter(
        &self,
        param: &ParameterDescriptor,
        options: Option<&PluginOptions>,
    ) -> Option<Resource> {
        if let Some(options) = options {
            let takes_options = param.name == OPTIONS_PARAMETER
                || param.declared_type == Some(OPTIONS_PARAMETER);
            if takes_options {
                return Some(Arc::new(options.clone()) as Resource);
            }
        }

        if let Some(value) = self.registry.resolve(Some(param.name), param.declared_type) {
            return Some(value);
        }

        param.default.clone()
    }
}
