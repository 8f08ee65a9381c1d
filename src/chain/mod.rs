//! Ordered composition of named resolvers.
//!
//! A notification channel usually knows several ways to build links. A
//! [`ResolverChain`] asks each registered resolver in registration order and
//! takes the first link produced.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::resolver::{LinkParams, LinkResolver, ResolverError};

/// Named resolvers, consulted in order.
#[derive(Clone, Default)]
pub struct ResolverChain {
    resolvers: Vec<(String, Arc<dyn LinkResolver>)>,
}

impl ResolverChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `resolver` under `name`. Names must be unique within a chain.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        resolver: impl LinkResolver + 'static,
    ) -> Result<(), ResolverError> {
        let name = name.into();
        if self.resolvers.iter().any(|(existing, _)| *existing == name) {
            return Err(ResolverError::DuplicateResolver(name));
        }
        debug!(resolver = %name, position = self.resolvers.len(), "Registered link resolver");
        let resolver: Arc<dyn LinkResolver> = Arc::new(resolver);
        self.resolvers.push((name, resolver));
        Ok(())
    }

    /// Builder-style [`ResolverChain::register`].
    pub fn with(
        mut self,
        name: impl Into<String>,
        resolver: impl LinkResolver + 'static,
    ) -> Result<Self, ResolverError> {
        self.register(name, resolver)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn LinkResolver>> {
        self.resolvers
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, resolver)| resolver)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resolvers.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

impl fmt::Debug for ResolverChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverChain")
            .field("resolvers", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

impl LinkResolver for ResolverChain {
    /// First resolver to produce a link wins. Errors stop the chain.
    fn resolve(
        &self,
        msg_type: &str,
        link_name: &str,
        params: &LinkParams,
    ) -> Result<Option<String>, ResolverError> {
        for (name, resolver) in &self.resolvers {
            if let Some(link) = resolver.resolve(msg_type, link_name, params)? {
                debug!(resolver = %name, msg_type, link_name, "Link resolved");
                return Ok(Some(link));
            }
        }
        Ok(None)
    }
}

/// Resolves every link a message asks for.
///
/// `requested` maps each link name to the params for that link. Links that
/// resolve to nothing are left out of the result; the first error aborts.
#[instrument(skip(resolver, requested), fields(links = requested.len()))]
pub fn resolve_links<R: LinkResolver + ?Sized>(
    resolver: &R,
    msg_type: &str,
    requested: &BTreeMap<String, LinkParams>,
) -> Result<BTreeMap<String, String>, ResolverError> {
    let mut resolved = BTreeMap::new();
    for (link_name, params) in requested {
        match resolver.resolve(msg_type, link_name, params)? {
            Some(link) => {
                resolved.insert(link_name.clone(), link);
            }
            None => debug!(link_name = %link_name, "Omitting unresolved link"),
        }
    }
    Ok(resolved)
}
