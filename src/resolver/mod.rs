//! The link resolver contract and its supporting types.
//!
//! # Main Components
//!
//! - [`LinkResolver`] - Trait every resolver implements
//! - [`ResolverError`] - Defects surfaced by resolvers
//! - [`TemplateError`] - Template syntax errors
//!
//! # Testing
//!
//! See [`mock`] for a scripted resolver to test code that consumes links.

pub mod core;
pub mod error;
pub mod mock;

pub use self::core::*;
pub use error::*;
