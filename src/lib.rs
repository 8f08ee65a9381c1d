//! # Notification Links
//!
//! > **Turn a notification's symbolic link names into concrete URLs.**
//!
//! A notification knows its message type (e.g. `open-edx.xblock.group_project.file_uploaded`),
//! which link it wants (e.g. the [`CLICK_LINK`](resolver::CLICK_LINK)), and some values
//! (`course_id`, `activity_id`, ...). A [`LinkResolver`](resolver::LinkResolver) turns those
//! three things into a URL, or into nothing when no link applies.
//!
//! ## Core Concepts
//!
//! ### Absence is not an error
//! An unknown link name, an unknown message type or a missing parameter all resolve
//! to `Ok(None)`. Renderers omit the link and move on. `Err` is reserved for
//! defects: a resolver that never implemented `resolve`, or a malformed template.
//!
//! ### All or nothing
//! Templates use `{name}` placeholders. If any placeholder has no value the whole
//! link is dropped; a half-substituted URL is never produced.
//!
//! ### Immutable, shareable resolvers
//! Resolvers hold read-only tables and no per-call state, so one instance (or an
//! `Arc` of it) serves every thread.
//!
//! ## Module Tour
//!
//! ### 1. The Contract ([`resolver`])
//! - **Key items**: [`LinkResolver`](resolver::LinkResolver), [`ResolverError`](resolver::ResolverError),
//!   [`MockLinkResolver`](resolver::mock::MockLinkResolver).
//!
//! ### 2. The Implementation ([`template_table`])
//! - **Key items**: [`TemplateTable`](template_table::TemplateTable),
//!   [`TemplateTableLinkResolver`](template_table::TemplateTableLinkResolver).
//!
//! ### 3. Composition ([`chain`])
//! - **Key items**: [`ResolverChain`](chain::ResolverChain), [`resolve_links`](chain::resolve_links).
//!
//! ### 4. Wiring ([`config`], [`runtime`])
//! - **Key items**: [`ResolverSettings`](config::ResolverSettings), [`setup_tracing`](runtime::setup_tracing).
//!
//! ## Quick Start
//!
//! ```rust
//! use notification_links::resolver::{LinkParams, LinkResolver, CLICK_LINK};
//! use notification_links::template_table::{TemplateTable, TemplateTableLinkResolver};
//!
//! let resolver = TemplateTableLinkResolver::new(
//!     TemplateTable::new().with(CLICK_LINK, "type.with-links", "/path/to/{param1}/url/{param2}"),
//! );
//!
//! let params: LinkParams = [("param1", "foo"), ("param2", "bar")]
//!     .into_iter()
//!     .map(|(k, v)| (k.to_string(), v.to_string()))
//!     .collect();
//!
//! let url = resolver.resolve("type.with-links", CLICK_LINK, &params).unwrap();
//! assert_eq!(url.as_deref(), Some("/path/to/foo/url/bar"));
//! ```

pub mod chain;
pub mod config;
pub mod resolver;
pub mod runtime;
pub mod template_table;
