//! Table-driven link resolution.
//!
//! A [`TemplateTable`] maps a link name to per-message-type templates:
//!
//! ```text
//! { "_click_url": { "open-edx.xblock.group_project.file_uploaded": "/courses/{course_id}/group_work/{activity_id}" } }
//! ```
//!
//! [`TemplateTableLinkResolver`] looks both keys up by exact string match and
//! substitutes the call's params into the template with [`template::render`].

pub mod template;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::resolver::{LinkParams, LinkResolver, ResolverError};

/// Link name -> message type -> template string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateTable(HashMap<String, HashMap<String, String>>);

impl TemplateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the template for `link_name` on `msg_type`.
    pub fn insert(
        &mut self,
        link_name: impl Into<String>,
        msg_type: impl Into<String>,
        template: impl Into<String>,
    ) -> &mut Self {
        self.0
            .entry(link_name.into())
            .or_default()
            .insert(msg_type.into(), template.into());
        self
    }

    /// Builder-style [`TemplateTable::insert`].
    pub fn with(
        mut self,
        link_name: impl Into<String>,
        msg_type: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.insert(link_name, msg_type, template);
        self
    }

    pub fn template(&self, link_name: &str, msg_type: &str) -> Option<&str> {
        self.0.get(link_name)?.get(msg_type).map(String::as_str)
    }

    pub fn link_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, HashMap<String, String>>> for TemplateTable {
    fn from(table: HashMap<String, HashMap<String, String>>) -> Self {
        Self(table)
    }
}

/// Resolves links from a fixed [`TemplateTable`].
///
/// The table is stored as given and never mutated, so one instance can be
/// shared by any number of threads. Nothing is cached: each call re-reads the
/// table and re-renders the template.
#[derive(Debug, Clone)]
pub struct TemplateTableLinkResolver {
    table: TemplateTable,
}

impl TemplateTableLinkResolver {
    pub fn new(table: impl Into<TemplateTable>) -> Self {
        Self { table: table.into() }
    }

    pub fn table(&self) -> &TemplateTable {
        &self.table
    }
}

impl LinkResolver for TemplateTableLinkResolver {
    fn resolve(
        &self,
        msg_type: &str,
        link_name: &str,
        params: &LinkParams,
    ) -> Result<Option<String>, ResolverError> {
        let Some(by_type) = self.table.0.get(link_name) else {
            debug!(msg_type, link_name, "Unknown link name");
            return Ok(None);
        };
        let Some(template) = by_type.get(msg_type) else {
            debug!(msg_type, link_name, "No template for message type");
            return Ok(None);
        };

        match template::render(template, params) {
            Ok(Some(link)) => {
                trace!(msg_type, link_name, %link, "Resolved link");
                Ok(Some(link))
            }
            Ok(None) => {
                debug!(msg_type, link_name, "Link parameters incomplete");
                Ok(None)
            }
            Err(source) => {
                warn!(msg_type, link_name, %source, "Malformed link template");
                Err(ResolverError::MalformedTemplate {
                    msg_type: msg_type.to_string(),
                    link_name: link_name.to_string(),
                    source,
                })
            }
        }
    }
}
