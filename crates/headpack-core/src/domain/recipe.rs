//! Recipe entities: the parameterized recipe spec, dependency requests,
//! the generated build configuration, and consumer-facing package info.
//!
//! [`RecipeSpec`] is one explicit configuration struct shared by every
//! recipe instance. Earlier recipe generations were maintained as
//! near-duplicate copies whose behavior drifted (library lists published
//! by some copies, pruning skipped by others); a single parameterized
//! record makes that drift impossible.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::error::DomainError;
use crate::domain::identity::ProjectIdentity;

// ── RecipeSpec ───────────────────────────────────────────────────────────────

/// Everything a recipe evaluation needs to know about the package being
/// built, beyond what the descriptor itself declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeSpec {
    /// Path to the build descriptor, relative to the source tree.
    pub descriptor_path: PathBuf,
    /// License artifact copied into the package's `licenses/` directory.
    pub license_file: PathBuf,
    /// External dependencies, including build/test-only requirements.
    pub dependencies: Vec<DependencyRequest>,
    /// Header-only packages ship no binary or library directories.
    pub header_only: bool,
    /// Minimum C++ standard the package requires, when it declares one.
    pub min_cpp_standard: Option<u32>,
    pub metadata: PackageMetadata,
}

impl RecipeSpec {
    /// A header-only recipe with the conventional defaults: license at
    /// `LICENSE.md`, a googletest build/test requirement, C++20.
    pub fn header_only(descriptor_path: impl Into<PathBuf>) -> Self {
        Self {
            descriptor_path: descriptor_path.into(),
            license_file: PathBuf::from("LICENSE.md"),
            dependencies: vec![DependencyRequest::test_requirement("gtest", "^1.14")],
            header_only: true,
            min_cpp_standard: Some(20),
            metadata: PackageMetadata::default(),
        }
    }

    pub fn with_license(mut self, license_file: impl Into<PathBuf>) -> Self {
        self.license_file = license_file.into();
        self
    }

    pub fn with_metadata(mut self, metadata: PackageMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Check the spec's own consistency before any phase runs.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.descriptor_path.as_os_str().is_empty() {
            return Err(DomainError::InvalidRecipe(
                "descriptor path is empty".into(),
            ));
        }
        if self.license_file.as_os_str().is_empty() {
            return Err(DomainError::InvalidRecipe("license file is empty".into()));
        }
        for dep in &self.dependencies {
            dep.validate()?;
        }
        Ok(())
    }
}

/// Publishable metadata carried alongside the artifact set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackageMetadata {
    pub description: String,
    pub homepage: String,
    pub license: String,
    pub topics: Vec<String>,
}

// ── DependencyRequest ────────────────────────────────────────────────────────

/// When a dependency is needed during the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementScope {
    /// Needed by consumers of the package.
    Host,
    /// Needed only to build and run the package's own tests.
    Test,
}

/// A dependency requested with a version constraint (`gtest` at `^1.14`).
///
/// The requirement stays symbolic here; the resolver port binds it to a
/// concrete version for the build context tuple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyRequest {
    pub name: String,
    pub requirement: String,
    pub scope: RequirementScope,
}

impl DependencyRequest {
    pub fn test_requirement(name: impl Into<String>, requirement: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirement: requirement.into(),
            scope: RequirementScope::Test,
        }
    }

    pub fn host_requirement(name: impl Into<String>, requirement: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirement: requirement.into(),
            scope: RequirementScope::Host,
        }
    }

    /// Requirement grammar: optional leading `^`, then one to three
    /// dot-separated numeric components.
    pub fn validate(&self) -> Result<(), DomainError> {
        let invalid = || DomainError::InvalidRequirement {
            name: self.name.clone(),
            requirement: self.requirement.clone(),
        };

        if self.name.is_empty() {
            return Err(invalid());
        }
        let req = self.requirement.strip_prefix('^').unwrap_or(&self.requirement);
        let components: Vec<&str> = req.split('.').collect();
        if components.is_empty() || components.len() > 3 {
            return Err(invalid());
        }
        for c in &components {
            if c.is_empty() || !c.chars().all(|ch| ch.is_ascii_digit()) {
                return Err(invalid());
            }
        }
        Ok(())
    }
}

// ── BuildConfiguration ───────────────────────────────────────────────────────

/// The generated toolchain description consumed by the build system:
/// an ordered mapping of configuration-variable names to values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildConfiguration {
    variables: BTreeMap<String, String>,
}

impl BuildConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Iterate variables in deterministic (sorted) order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Whether any `*_TESTS` test-enable variable is present.
    pub fn has_test_variable(&self) -> bool {
        self.variables.keys().any(|k| k.ends_with("_TESTS"))
    }
}

// ── PackageInfo ──────────────────────────────────────────────────────────────

/// Consumer-facing package metadata published after packaging.
///
/// Header-only invariant: `bindirs`, `libdirs` and `libs` are always
/// empty — the package ships no linkable artifact, so there is nothing a
/// library name could resolve against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageInfo {
    pub name: String,
    pub version: String,
    /// Canonical external target name, e.g. `arba::vrsn`.
    pub cmake_target_name: String,
    pub bindirs: Vec<PathBuf>,
    pub libdirs: Vec<PathBuf>,
    pub libs: Vec<String>,
    pub metadata: PackageMetadata,
}

impl PackageInfo {
    pub fn for_identity(identity: &ProjectIdentity, metadata: PackageMetadata) -> Self {
        Self {
            name: identity.name.clone(),
            version: identity.version.to_string(),
            cmake_target_name: identity.target_name(),
            bindirs: Vec::new(),
            libdirs: Vec::new(),
            libs: Vec::new(),
            metadata,
        }
    }
}

// ── tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::descriptor::DescriptorMetadata;
    use crate::domain::value_objects::SemanticVersion;

    #[test]
    fn header_only_defaults() {
        let spec = RecipeSpec::header_only("CMakeLists.txt");
        assert!(spec.header_only);
        assert_eq!(spec.license_file, PathBuf::from("LICENSE.md"));
        assert_eq!(spec.min_cpp_standard, Some(20));
        assert_eq!(spec.dependencies.len(), 1);
        assert_eq!(spec.dependencies[0].name, "gtest");
        assert_eq!(spec.dependencies[0].scope, RequirementScope::Test);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn empty_descriptor_path_is_invalid() {
        let spec = RecipeSpec::header_only("");
        assert!(matches!(
            spec.validate(),
            Err(DomainError::InvalidRecipe(_))
        ));
    }

    #[test]
    fn requirement_grammar() {
        assert!(DependencyRequest::test_requirement("gtest", "^1.14")
            .validate()
            .is_ok());
        assert!(DependencyRequest::test_requirement("gtest", "1.14.0")
            .validate()
            .is_ok());
        assert!(DependencyRequest::test_requirement("gtest", "^1")
            .validate()
            .is_ok());
        assert!(DependencyRequest::test_requirement("gtest", "latest")
            .validate()
            .is_err());
        assert!(DependencyRequest::test_requirement("gtest", "1..3")
            .validate()
            .is_err());
        assert!(DependencyRequest::test_requirement("", "^1.14")
            .validate()
            .is_err());
    }

    #[test]
    fn configuration_is_ordered_and_queryable() {
        let mut config = BuildConfiguration::new();
        config.set("CMAKE_CXX_STANDARD", "20");
        config.set("BUILD_ARBA_VRSN_TESTS", "TRUE");

        assert_eq!(config.len(), 2);
        assert!(config.contains("CMAKE_CXX_STANDARD"));
        assert_eq!(config.get("BUILD_ARBA_VRSN_TESTS"), Some("TRUE"));
        assert!(config.has_test_variable());

        let names: Vec<&str> = config.variables().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["BUILD_ARBA_VRSN_TESTS", "CMAKE_CXX_STANDARD"]);
    }

    #[test]
    fn configuration_without_test_key() {
        let mut config = BuildConfiguration::new();
        config.set("CMAKE_CXX_STANDARD", "20");
        assert!(!config.has_test_variable());
    }

    #[test]
    fn package_info_is_header_only() {
        let metadata = DescriptorMetadata {
            namespace: "arba".into(),
            base_name: "vrsn".into(),
            version: SemanticVersion::new(1, 2, 3),
        };
        let identity = ProjectIdentity::from_metadata(&metadata);
        let info = PackageInfo::for_identity(&identity, PackageMetadata::default());

        assert_eq!(info.name, "arba-vrsn");
        assert_eq!(info.version, "1.2.3");
        assert_eq!(info.cmake_target_name, "arba::vrsn");
        assert!(info.bindirs.is_empty());
        assert!(info.libdirs.is_empty());
        assert!(info.libs.is_empty());
    }

    #[test]
    fn package_info_serializes_for_machine_consumers() {
        let metadata = DescriptorMetadata {
            namespace: "arba".into(),
            base_name: "vrsn".into(),
            version: SemanticVersion::new(1, 2, 3),
        };
        let identity = ProjectIdentity::from_metadata(&metadata);
        let info = PackageInfo::for_identity(&identity, PackageMetadata::default());

        let json: serde_json::Value = serde_json::to_value(&info).unwrap();
        assert_eq!(json["name"], "arba-vrsn");
        assert_eq!(json["cmake_target_name"], "arba::vrsn");
        assert_eq!(json["libs"], serde_json::json!([]));
    }
}
