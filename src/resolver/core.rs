//! # Link Resolver Contract
//!
//! Defines the [`LinkResolver`] trait that every resolver implements.
//!
//! ## Key Types
//!
//! - [`LinkResolver`]: The capability to turn `(msg_type, link_name, params)` into a link.
//! - [`LinkParams`]: Per-call substitution values.
//! - [`CLICK_LINK`]: The link name used for a notification's primary click target.
//!
//! ## Outcomes
//!
//! `resolve` has three outcomes, and callers must treat them differently:
//!
//! | Result | Meaning | Caller should |
//! |---|---|---|
//! | `Ok(Some(link))` | Fully substituted link | Use it |
//! | `Ok(None)` | No link for this context | Omit the link |
//! | `Err(_)` | Defect in resolver code or configuration | Surface as a bug |
//!
//! A trait is not a value, so the contract itself can never be constructed:
//!
//! ```compile_fail
//! use notification_links::resolver::LinkResolver;
//!
//! let resolver = LinkResolver {};
//! ```

use std::collections::HashMap;

use super::ResolverError;

/// Substitution values supplied with a single `resolve` call.
pub type LinkParams = HashMap<String, String>;

/// Link name for the URL a user lands on when clicking a notification.
pub const CLICK_LINK: &str = "_click_url";

/// Capability that resolves a symbolic link name on a message type into a concrete link.
///
/// # Provided Method
/// [`LinkResolver::resolve`] has a provided body that always fails with
/// [`ResolverError::NotImplemented`]. An implementation that forgets to override it,
/// or that forwards to [`unimplemented_resolve`], surfaces as an error on the first call
/// instead of silently resolving nothing.
///
/// # Example
///
/// ```rust
/// use notification_links::resolver::{LinkParams, LinkResolver, ResolverError};
///
/// struct Static;
///
/// impl LinkResolver for Static {
///     fn resolve(
///         &self,
///         _msg_type: &str,
///         link_name: &str,
///         _params: &LinkParams,
///     ) -> Result<Option<String>, ResolverError> {
///         Ok((link_name == "_click_url").then(|| "/inbox".to_string()))
///     }
/// }
///
/// let link = Static.resolve("any.type", "_click_url", &LinkParams::new());
/// assert_eq!(link, Ok(Some("/inbox".to_string())));
/// ```
pub trait LinkResolver: Send + Sync {
    /// Resolve `link_name` for a message of type `msg_type`, substituting `params`.
    fn resolve(
        &self,
        msg_type: &str,
        link_name: &str,
        params: &LinkParams,
    ) -> Result<Option<String>, ResolverError> {
        unimplemented_resolve::<Self>(msg_type, link_name, params)
    }
}

/// The body of the provided [`LinkResolver::resolve`].
///
/// Exposed so an implementation can explicitly fall back to the contract's behavior.
pub fn unimplemented_resolve<R: LinkResolver + ?Sized>(
    msg_type: &str,
    link_name: &str,
    _params: &LinkParams,
) -> Result<Option<String>, ResolverError> {
    let resolver = std::any::type_name::<R>();
    tracing::error!(resolver, msg_type, link_name, "resolve called on a resolver without an implementation");
    Err(ResolverError::NotImplemented(resolver))
}

impl<R: LinkResolver + ?Sized> LinkResolver for Box<R> {
    fn resolve(
        &self,
        msg_type: &str,
        link_name: &str,
        params: &LinkParams,
    ) -> Result<Option<String>, ResolverError> {
        (**self).resolve(msg_type, link_name, params)
    }
}

impl<R: LinkResolver + ?Sized> LinkResolver for std::sync::Arc<R> {
    fn resolve(
        &self,
        msg_type: &str,
        link_name: &str,
        params: &LinkParams,
    ) -> Result<Option<String>, ResolverError> {
        (**self).resolve(msg_type, link_name, params)
    }
}
