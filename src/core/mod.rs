// Public modules
pub mod error;
pub mod executor;
pub mod factory;
pub mod locator;
pub mod logging;
pub mod registry;

// Internal modules - not part of public API
pub(crate) mod plugin_config;

// Re-export common types for convenience
pub use error::{Error, Result};
pub use executor::CommandExecutor;
pub use factory::{
    ParameterDescriptor, Plugin, PluginFactory, PluginOptions, ResolvedParams, OPTIONS_PARAMETER,
};
pub use locator::BinaryLocator;
pub use logging::{BuildLogger, NullLogger, StatusLogger};
pub use registry::{Resource, ResourceProducer, ResourceRegistry};
