//! Canonical package identity derived from descriptor metadata.

use std::fmt;

use serde::Serialize;

use crate::domain::descriptor::DescriptorMetadata;
use crate::domain::value_objects::SemanticVersion;

/// The package's canonical identity.
///
/// A pure function of [`DescriptorMetadata`]: no I/O, no failure modes.
/// Re-deriving from the same metadata always yields an identical identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectIdentity {
    pub namespace: String,
    pub base_name: String,
    /// Canonical package name: `lower(namespace)-lower(base_name)`.
    pub name: String,
    /// Canonical configuration-key prefix: `UPPER(namespace)_UPPER(base_name)`.
    pub config_prefix: String,
    pub version: SemanticVersion,
}

impl ProjectIdentity {
    pub fn from_metadata(metadata: &DescriptorMetadata) -> Self {
        let namespace = metadata.namespace.clone();
        let base_name = metadata.base_name.clone();
        Self {
            name: format!(
                "{}-{}",
                namespace.to_lowercase(),
                base_name.to_lowercase()
            ),
            config_prefix: format!(
                "{}_{}",
                namespace.to_uppercase(),
                base_name.to_uppercase()
            ),
            namespace,
            base_name,
            version: metadata.version,
        }
    }

    /// The external target name published to consumers: the hyphen in
    /// `name` replaced with the `::` namespace separator
    /// (`arba-vrsn` → `arba::vrsn`).
    pub fn target_name(&self) -> String {
        self.name.replacen('-', "::", 1)
    }

    /// Name of the boolean test-enable configuration variable.
    pub fn test_variable(&self) -> String {
        format!("BUILD_{}_TESTS", self.config_prefix)
    }
}

impl fmt::Display for ProjectIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(ns: &str, base: &str) -> DescriptorMetadata {
        DescriptorMetadata {
            namespace: ns.into(),
            base_name: base.into(),
            version: SemanticVersion::new(1, 2, 3),
        }
    }

    #[test]
    fn name_is_hyphenated_and_lowercase() {
        let id = ProjectIdentity::from_metadata(&metadata("arba", "vrsn"));
        assert_eq!(id.name, "arba-vrsn");
    }

    #[test]
    fn name_lowercases_regardless_of_descriptor_casing() {
        let id = ProjectIdentity::from_metadata(&metadata("Arba", "VRSN"));
        assert_eq!(id.name, "arba-vrsn");
        assert_eq!(id.config_prefix, "ARBA_VRSN");
    }

    #[test]
    fn config_prefix_is_underscored_and_uppercase() {
        let id = ProjectIdentity::from_metadata(&metadata("arba", "vrsn"));
        assert_eq!(id.config_prefix, "ARBA_VRSN");
        assert_eq!(id.test_variable(), "BUILD_ARBA_VRSN_TESTS");
    }

    #[test]
    fn target_name_uses_namespace_separator() {
        let id = ProjectIdentity::from_metadata(&metadata("arba", "vrsn"));
        assert_eq!(id.target_name(), "arba::vrsn");
    }

    #[test]
    fn underscore_in_base_name_survives() {
        let id = ProjectIdentity::from_metadata(&metadata("arba", "core_utils"));
        assert_eq!(id.name, "arba-core_utils");
        assert_eq!(id.target_name(), "arba::core_utils");
        assert_eq!(id.config_prefix, "ARBA_CORE_UTILS");
    }

    #[test]
    fn derivation_is_deterministic() {
        let m = metadata("arba", "vrsn");
        assert_eq!(
            ProjectIdentity::from_metadata(&m),
            ProjectIdentity::from_metadata(&m)
        );
    }

    #[test]
    fn display_shows_name_and_version() {
        let id = ProjectIdentity::from_metadata(&metadata("arba", "vrsn"));
        assert_eq!(id.to_string(), "arba-vrsn/1.2.3");
    }
}
