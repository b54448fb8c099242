//! Engrenages domain layer.
//!
//! Holds the world-configuration model and the pure logic around it:
//! parsing a TOML configuration document, validating it against the rules
//! the skill system requires, and deriving the render-ready skill schema
//! that the sheet layer consumes. No I/O happens in this crate.

pub mod configuration;
pub mod error;
pub mod schema;
pub mod validator;

pub use configuration::{SkillDomain, SkillLevel, WorldConfiguration, SKILL_LEVEL_COUNT};
pub use error::DomainError;
pub use schema::{derive_skill_schema, DomainSchema, SkillSchema};
pub use validator::{validate_configuration, ValidationReport, REQUIRED_DOMAINS};
