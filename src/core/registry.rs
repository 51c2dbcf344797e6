//! Resource registry: (name, type)-keyed producers for plugin dependencies.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Error, Result};

/// A resolved resource value: any collaborator, configuration structure, or
/// scalar a plugin constructor may depend on.
pub type Resource = Arc<dyn Any + Send + Sync>;

/// Zero-argument producer invoked each time its entry is resolved.
pub type ResourceProducer = Arc<dyn Fn() -> Resource + Send + Sync>;

/// Table of resource producers keyed by name and/or type.
///
/// Each factory owns its own registry; there is no global table. Entries are
/// registered during bootstrap or config load and re-registration for the
/// same key shadows the earlier entry.
#[derive(Default)]
pub struct ResourceRegistry {
    by_name: HashMap<String, ResourceProducer>,
    by_type: HashMap<String, ResourceProducer>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a producer under a name, a type, or both.
    ///
    /// The producer is not invoked here; resolution invokes it just in time,
    /// once per resolution call.
    pub fn register<F, R>(
        &mut self,
        producer: F,
        name: Option<&str>,
        resource_type: Option<&str>,
    ) -> Result<()>
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: Any + Send + Sync,
    {
        if name.is_none() && resource_type.is_none() {
            return Err(Error::InvalidRegistration(
                "a name or a type must be specified".to_string(),
            ));
        }

        let producer: ResourceProducer = Arc::new(move || Arc::new(producer()) as Resource);

        if let Some(name) = name {
            self.by_name.insert(name.to_string(), producer.clone());
        }
        if let Some(resource_type) = resource_type {
            self.by_type.insert(resource_type.to_string(), producer);
        }

        Ok(())
    }

    /// Resolve an entry, trying an exact name match first and falling back
    /// to a type match. The producer is re-invoked on every call so mutable
    /// or per-build resources stay fresh.
    pub fn resolve(&self, name: Option<&str>, resource_type: Option<&str>) -> Option<Resource> {
        if let Some(producer) = name.and_then(|n| self.by_name.get(n)) {
            return Some(producer());
        }
        if let Some(producer) = resource_type.and_then(|t| self.by_type.get(t)) {
            return Some(producer());
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty() && self.by_type.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn register_requires_name_or_type() {
        let mut registry = ResourceRegistry::new();
        let err = registry.register(|| 1u32, None, None).unwrap_err();
        assert_eq!(err.code(), "INVALID_REGISTRATION");
    }

    #[test]
    fn resolves_by_name() {
        let mut registry = ResourceRegistry::new();
        registry
            .register(|| "value".to_string(), Some("greeting"), None)
            .unwrap();

        let resource = registry.resolve(Some("greeting"), None).unwrap();
        let value = resource.downcast::<String>().unwrap();
        assert_eq!(*value, "value");
    }

    #[test]
    fn falls_back_to_type_match() {
        let mut registry = ResourceRegistry::new();
        registry
            .register(|| 7u64, None, Some("retryCount"))
            .unwrap();

        let resource = registry
            .resolve(Some("unregisteredName"), Some("retryCount"))
            .unwrap();
        assert_eq!(*resource.downcast::<u64>().unwrap(), 7);
    }

    #[test]
    fn name_match_wins_over_type_match() {
        let mut registry = ResourceRegistry::new();
        registry
            .register(|| "by-type".to_string(), None, Some("label"))
            .unwrap();
        registry
            .register(|| "by-name".to_string(), Some("label"), None)
            .unwrap();

        let resource = registry.resolve(Some("label"), Some("label")).unwrap();
        assert_eq!(*resource.downcast::<String>().unwrap(), "by-name");
    }

    #[test]
    fn later_registration_shadows_earlier() {
        let mut registry = ResourceRegistry::new();
        registry.register(|| 1u32, Some("slot"), None).unwrap();
        registry.register(|| 2u32, Some("slot"), None).unwrap();

        let resource = registry.resolve(Some("slot"), None).unwrap();
        assert_eq!(*resource.downcast::<u32>().unwrap(), 2);
    }

    #[test]
    fn producer_is_reinvoked_per_resolution() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let mut registry = ResourceRegistry::new();
        registry
            .register(
                move || counter.fetch_add(1, Ordering::SeqCst),
                Some("fresh"),
                None,
            )
            .unwrap();

        registry.resolve(Some("fresh"), None).unwrap();
        registry.resolve(Some("fresh"), None).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn unmatched_resolution_is_none() {
        let registry = ResourceRegistry::new();
        assert!(registry.resolve(Some("missing"), Some("missing")).is_none());
    }
}
