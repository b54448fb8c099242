//! World configuration - the parsed TOML document that shapes the skill system.
//!
//! A configuration re-shapes the game's skill taxonomy at runtime: which
//! skill domains exist, which skills belong to each, and how the six
//! skill levels are labeled. The document is kept as a raw TOML table so
//! that domains iterate in document order and the original text round-trips
//! through the settings store untouched.

use toml::{Table, Value};

use crate::error::DomainError;
use crate::validator::{validate_configuration, ValidationReport};

/// Number of skill levels (0 through 5 inclusive).
pub const SKILL_LEVEL_COUNT: usize = 6;

/// A skill domain as declared in the configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDomain {
    /// Machine key of the domain (e.g. "physique")
    pub key: String,
    /// Display name from `nom`, falling back to the key when absent
    pub name: String,
    /// Skill keys in document order, duplicates preserved
    pub skills: Vec<String>,
}

/// One rung of the 0-5 skill rating ladder.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SkillLevel {
    pub value: u8,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A parsed world-configuration document.
///
/// Wraps the raw TOML table rather than a typed struct: validation collects
/// every shape violation instead of failing on the first, and the skill
/// domains are free-form keys that must keep their document order.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldConfiguration {
    doc: Table,
}

impl WorldConfiguration {
    /// Parse a configuration from TOML text.
    ///
    /// This only checks syntax; run [`WorldConfiguration::validate`] before
    /// installing the result as the active configuration.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let doc = text.parse::<Table>()?;
        Ok(Self { doc })
    }

    /// Wrap an already-parsed table.
    pub fn from_table(doc: Table) -> Self {
        Self { doc }
    }

    /// The raw document.
    pub fn as_table(&self) -> &Table {
        &self.doc
    }

    /// Validate against the structural rules the skill system requires.
    pub fn validate(&self) -> ValidationReport {
        validate_configuration(&self.doc)
    }

    /// Name of the ruleset variant (`system.name`).
    pub fn system_name(&self) -> Option<&str> {
        self.section("system")?.get("name")?.as_str()
    }

    /// Version of the ruleset variant (`system.version`).
    pub fn system_version(&self) -> Option<&str> {
        self.section("system")?.get("version")?.as_str()
    }

    /// Skill domains in document order.
    ///
    /// Lenient over malformed entries: a missing `nom` falls back to the
    /// domain key and non-string skill entries are skipped, so this is
    /// total even for configurations that fail validation.
    pub fn domains(&self) -> Vec<SkillDomain> {
        let Some(domaines) = self.domaines_table() else {
            return Vec::new();
        };

        domaines
            .iter()
            .map(|(key, value)| {
                let table = value.as_table();
                let name = table
                    .and_then(|t| t.get("nom"))
                    .and_then(Value::as_str)
                    .unwrap_or(key)
                    .to_string();
                let skills = table
                    .and_then(|t| t.get("competences"))
                    .and_then(Value::as_array)
                    .map(|entries| {
                        entries
                            .iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default();
                SkillDomain {
                    key: key.clone(),
                    name,
                    skills,
                }
            })
            .collect()
    }

    /// The 0-5 rating ladder with labels and optional descriptions.
    pub fn skill_levels(&self) -> Vec<SkillLevel> {
        let niveaux = self.competences_entry("niveaux");
        let descriptions = self.competences_entry("descriptions");

        (0..SKILL_LEVEL_COUNT as u8)
            .filter_map(|value| {
                let key = value.to_string();
                let label = niveaux.and_then(|n| n.get(&key)).map(display_string)?;
                let description = descriptions
                    .and_then(|d| d.get(&key))
                    .map(display_string);
                Some(SkillLevel {
                    value,
                    label,
                    description,
                })
            })
            .collect()
    }

    /// Whether `options.occulteActif` is set to true.
    pub fn occult_option(&self) -> bool {
        self.section("options")
            .and_then(|options| options.get("occulteActif"))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Whether an `occulte` key exists among the skill domains.
    pub fn has_occult_domain(&self) -> bool {
        self.domaines_table()
            .is_some_and(|domaines| domaines.contains_key("occulte"))
    }

    /// The hardcoded built-in configuration used when every load path fails.
    ///
    /// Satisfies all validator rules so the system is never left without a
    /// usable configuration.
    pub fn minimal() -> Self {
        let mut doc = Table::new();

        let mut system = Table::new();
        system.insert("name".into(), Value::String("Engrenages".into()));
        system.insert("version".into(), Value::String("1.0.0".into()));
        system.insert(
            "description".into(),
            Value::String("Built-in minimal Engrenages configuration".into()),
        );
        doc.insert("system".into(), Value::Table(system));

        let mut domaines = Table::new();
        domaines.insert(
            "physique".into(),
            domain_entry("Physique", &["athletisme", "conduite", "escrime", "pugilat", "tir"]),
        );
        domaines.insert(
            "social".into(),
            domain_entry(
                "Social",
                &["argutie", "creativite", "faconde", "maraude", "representation"],
            ),
        );
        domaines.insert(
            "mental".into(),
            domain_entry(
                "Mental",
                &["citadin", "milieuRural", "sciences", "traumatologie"],
            ),
        );
        domaines.insert(
            "occulte".into(),
            domain_entry("Occulte", &["rituel", "mystere", "artefact"]),
        );

        let labels = [
            "Incompetent",
            "Novice",
            "Amateur",
            "Professional",
            "Specialist",
            "Authority",
        ];
        let descriptions = [
            "Lamentable",
            "Pietre",
            "Moyen",
            "Bon",
            "Remarquable",
            "Exceptionnel",
        ];

        let mut competences = Table::new();
        competences.insert("domaines".into(), Value::Table(domaines));
        competences.insert("niveaux".into(), level_entry(&labels));
        competences.insert("descriptions".into(), level_entry(&descriptions));
        doc.insert("competences".into(), Value::Table(competences));

        let mut options = Table::new();
        options.insert("occulteActif".into(), Value::Boolean(true));
        doc.insert("options".into(), Value::Table(options));

        Self { doc }
    }

    fn section(&self, key: &str) -> Option<&Table> {
        self.doc.get(key)?.as_table()
    }

    fn domaines_table(&self) -> Option<&Table> {
        self.competences_entry("domaines")
    }

    fn competences_entry(&self, key: &str) -> Option<&Table> {
        self.section("competences")?.get(key)?.as_table()
    }
}

/// Render a level label or description, tolerating non-string scalars.
fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn domain_entry(nom: &str, skills: &[&str]) -> Value {
    let mut table = Table::new();
    table.insert("nom".into(), Value::String(nom.into()));
    table.insert(
        "competences".into(),
        Value::Array(skills.iter().map(|s| Value::String((*s).into())).collect()),
    );
    Value::Table(table)
}

fn level_entry(labels: &[&str; SKILL_LEVEL_COUNT]) -> Value {
    let mut table = Table::new();
    for (level, label) in labels.iter().enumerate() {
        table.insert(level.to_string(), Value::String((*label).into()));
    }
    Value::Table(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        system = { name = "Test", version = "1.0" }

        [competences.domaines.physique]
        nom = "Physique"
        competences = ["athletisme", "tir"]

        [competences.domaines.mental]
        nom = "Mental"
        competences = ["sciences"]

        [competences.domaines.social]
        nom = "Social"
        competences = ["faconde"]

        [competences.niveaux]
        0 = "A"
        1 = "B"
        2 = "C"
        3 = "D"
        4 = "E"
        5 = "F"

        [options]
        occulteActif = false
    "#;

    #[test]
    fn parse_rejects_bad_syntax() {
        let err = WorldConfiguration::parse("system = = broken").unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn domains_keep_document_order() {
        let config = WorldConfiguration::parse(SAMPLE).unwrap();
        let domains = config.domains();
        let keys: Vec<&str> = domains.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, vec!["physique", "mental", "social"]);
        assert_eq!(config.domains()[0].skills, vec!["athletisme", "tir"]);
    }

    #[test]
    fn domain_name_falls_back_to_key() {
        let text = SAMPLE.replace("nom = \"Mental\"\n", "");
        let config = WorldConfiguration::parse(&text).unwrap();
        let mental = config
            .domains()
            .into_iter()
            .find(|d| d.key == "mental")
            .unwrap();
        assert_eq!(mental.name, "mental");
    }

    #[test]
    fn skill_levels_pick_up_labels() {
        let config = WorldConfiguration::parse(SAMPLE).unwrap();
        let levels = config.skill_levels();
        assert_eq!(levels.len(), SKILL_LEVEL_COUNT);
        assert_eq!(levels[0].label, "A");
        assert_eq!(levels[5].label, "F");
        assert!(levels[0].description.is_none());
    }

    #[test]
    fn occult_option_reads_options_section() {
        let config = WorldConfiguration::parse(SAMPLE).unwrap();
        assert!(!config.occult_option());
        assert!(!config.has_occult_domain());
    }

    #[test]
    fn minimal_configuration_is_valid() {
        let minimal = WorldConfiguration::minimal();
        let report = minimal.validate();
        assert!(report.valid, "unexpected errors: {:?}", report.errors);
        assert!(minimal.occult_option());
        assert!(minimal.has_occult_domain());
    }

    #[test]
    fn minimal_configuration_has_all_levels() {
        let minimal = WorldConfiguration::minimal();
        let levels = minimal.skill_levels();
        assert_eq!(levels.len(), SKILL_LEVEL_COUNT);
        assert_eq!(levels[3].label, "Professional");
        assert_eq!(levels[3].description.as_deref(), Some("Bon"));
    }
}
