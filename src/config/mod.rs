//! Resolver settings.
//!
//! The settings document lists named link resolvers in the order they should be
//! consulted. Any serde format works; in JSON:
//!
//! ```json
//! {
//!   "link_resolvers": [
//!     {
//!       "name": "msg_type_to_url",
//!       "kind": "msg_type_to_url",
//!       "config": {
//!         "_click_url": {
//!           "open-edx.xblock.group_project.file_uploaded": "/courses/{course_id}/group_work/{activity_id}"
//!         }
//!       }
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::chain::ResolverChain;
use crate::resolver::ResolverError;
use crate::template_table::{TemplateTable, TemplateTableLinkResolver};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolverSettings {
    #[serde(default)]
    pub link_resolvers: Vec<ResolverEntry>,
}

/// One named resolver, tagged by the implementation it builds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolverEntry {
    /// A [`TemplateTableLinkResolver`] over `config`.
    MsgTypeToUrl { name: String, config: TemplateTable },
}

impl ResolverEntry {
    pub fn name(&self) -> &str {
        match self {
            ResolverEntry::MsgTypeToUrl { name, .. } => name,
        }
    }
}

impl ResolverSettings {
    /// Builds the resolvers, preserving their listed order.
    pub fn build(&self) -> Result<ResolverChain, ResolverError> {
        let mut chain = ResolverChain::new();
        for entry in &self.link_resolvers {
            match entry {
                ResolverEntry::MsgTypeToUrl { name, config } => {
                    chain.register(name.clone(), TemplateTableLinkResolver::new(config.clone()))?;
                }
            }
        }
        info!(resolvers = chain.len(), "Link resolvers configured");
        Ok(chain)
    }
}
