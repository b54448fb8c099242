//! Structural validation of world-configuration documents.
//!
//! Validation is pure and total: malformed shapes accumulate error strings
//! instead of aborting, so the operator sees every problem at once. The
//! evaluation order is fixed, which keeps the error list stable across runs.

use toml::{Table, Value};

use crate::configuration::SKILL_LEVEL_COUNT;

/// Domain keys that must be present for a configuration to be valid.
pub const REQUIRED_DOMAINS: [&str; 3] = ["physique", "mental", "social"];

/// Outcome of validating a configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// True only when no rule was violated
    pub valid: bool,
    /// One standalone sentence per violation, in evaluation order
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// Joined error list, one violation per line.
    pub fn joined_errors(&self) -> String {
        self.errors.join("\n")
    }
}

/// Validate a parsed configuration against the rules the skill system requires.
///
/// Rules, in order:
/// 1. `system` section with `name` and `version`
/// 2. `competences.domaines` section present
/// 3. the domains `physique`, `mental`, and `social` exist
/// 4. every declared domain has a non-empty `nom` and a non-empty skill list
/// 5. `competences.niveaux` defines labels for levels 0 through 5
/// 6. `options.occulteActif` is a boolean
pub fn validate_configuration(config: &Table) -> ValidationReport {
    let mut errors = Vec::new();

    match table_at(config, "system") {
        None => errors.push("The 'system' section is missing".to_string()),
        Some(system) => {
            if !scalar_present(system, "name") {
                errors.push("The system name is missing (system.name)".to_string());
            }
            if !scalar_present(system, "version") {
                errors.push("The system version is missing (system.version)".to_string());
            }
        }
    }

    let competences = table_at(config, "competences");
    let domaines = competences.and_then(|c| table_at(c, "domaines"));

    match domaines {
        None => errors.push("The 'competences.domaines' section is missing".to_string()),
        Some(domaines) => {
            for required in REQUIRED_DOMAINS {
                if !domaines.contains_key(required) {
                    errors.push(format!("The domain '{required}' is required"));
                }
            }

            for (key, value) in domaines {
                let domain = value.as_table();
                let has_name = domain
                    .and_then(|d| d.get("nom"))
                    .and_then(Value::as_str)
                    .is_some_and(|nom| !nom.is_empty());
                if !has_name {
                    errors.push(format!("The domain '{key}' has no name defined"));
                }

                let has_skills = domain
                    .and_then(|d| d.get("competences"))
                    .and_then(Value::as_array)
                    .is_some_and(|skills| !skills.is_empty());
                if !has_skills {
                    errors.push(format!("The domain '{key}' must declare at least one skill"));
                }
            }
        }
    }

    match competences.and_then(|c| table_at(c, "niveaux")) {
        None => errors.push("The 'competences.niveaux' section is missing".to_string()),
        Some(niveaux) => {
            // Presence is what counts, not the label content
            for level in 0..SKILL_LEVEL_COUNT {
                if !niveaux.contains_key(&level.to_string()) {
                    errors.push(format!("Skill level {level} is not defined"));
                }
            }
        }
    }

    match table_at(config, "options") {
        None => errors.push("The 'options' section is missing".to_string()),
        Some(options) => {
            if !matches!(options.get("occulteActif"), Some(Value::Boolean(_))) {
                errors.push("The option 'occulteActif' must be a boolean".to_string());
            }
        }
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}

fn table_at<'a>(parent: &'a Table, key: &str) -> Option<&'a Table> {
    parent.get(key)?.as_table()
}

/// A scalar counts as present when it exists and is not an empty string.
fn scalar_present(table: &Table, key: &str) -> bool {
    match table.get(key) {
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Table(_)) | Some(Value::Array(_)) | None => false,
        Some(_) => true,
    }
}
