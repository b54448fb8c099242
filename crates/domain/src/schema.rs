//! Derived skill schema - the render-ready projection of a configuration.
//!
//! The schema is what the data-model and sheet layers consume. It is
//! decoupled from TOML and validation concerns: deriving it never fails
//! for a validated configuration, and it copies domains and skills
//! verbatim in document order.

use serde::{Deserialize, Serialize};

use crate::configuration::{SkillLevel, WorldConfiguration};

/// One skill domain, ready for sheet rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSchema {
    pub key: String,
    pub label: String,
    pub skills: Vec<String>,
}

/// The skill taxonomy derived from the active configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSchema {
    /// Domains in document order
    pub domains: Vec<DomainSchema>,
    /// Whether the occult domain is active, from `options.occulteActif`
    pub occult_enabled: bool,
    /// The 0-5 rating ladder
    pub levels: Vec<SkillLevel>,
}

/// Derive the skill schema from a configuration.
///
/// `occult_enabled` follows the validated `options.occulteActif` flag, not
/// the mere presence of an `occulte` domain key; a declared-but-disabled
/// occult domain still appears in `domains` and the sheet layer decides
/// whether to render it.
pub fn derive_skill_schema(config: &WorldConfiguration) -> SkillSchema {
    let domains = config
        .domains()
        .into_iter()
        .map(|domain| DomainSchema {
            key: domain.key,
            label: domain.name,
            skills: domain.skills,
        })
        .collect();

    SkillSchema {
        domains,
        occult_enabled: config.occult_option(),
        levels: config.skill_levels(),
    }
}
