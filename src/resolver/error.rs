//! Error types for link resolution.
//!
//! Only defects live here. A link that simply cannot be resolved for a given
//! message is not an error: resolvers report it as `Ok(None)`.

use thiserror::Error;

/// Errors raised by a [`LinkResolver`](crate::resolver::LinkResolver) or while
/// assembling resolvers.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResolverError {
    /// The resolver type never provided its own `resolve` logic.
    #[error("Link resolver `{0}` does not implement resolve")]
    NotImplemented(&'static str),

    /// The template configured for this link/type pair cannot be parsed.
    #[error("Malformed template for link `{link_name}` on type `{msg_type}`: {source}")]
    MalformedTemplate {
        msg_type: String,
        link_name: String,
        #[source]
        source: TemplateError,
    },

    /// Two resolvers were registered under the same name.
    #[error("Link resolver already registered: {0}")]
    DuplicateResolver(String),
}

/// Syntax errors found while scanning a template string.
///
/// Offsets are byte offsets into the template.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unterminated placeholder starting at offset {offset}")]
    Unterminated { offset: usize },

    #[error("unmatched `}}` at offset {offset}")]
    UnmatchedClose { offset: usize },

    #[error("invalid placeholder `{{{field}}}` at offset {offset}")]
    InvalidField { offset: usize, field: String },
}
