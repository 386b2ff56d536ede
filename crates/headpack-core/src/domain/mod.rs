//! Core domain layer for headpack.
//!
//! Pure business logic with no I/O: descriptor grammar, identity
//! derivation, recipe specification, and the generated build
//! configuration. All filesystem, process, and dependency-resolution
//! concerns are handled via ports (traits) defined in the application
//! layer.

pub mod descriptor;
pub mod error;
pub mod identity;
pub mod recipe;
pub mod value_objects;

// Re-exports for convenience
pub use descriptor::{DescriptorMetadata, FIELD_BASE_NAME, FIELD_NAMESPACE, FIELD_VERSION};
pub use error::{DomainError, ErrorCategory};
pub use identity::ProjectIdentity;
pub use recipe::{
    BuildConfiguration, DependencyRequest, PackageInfo, PackageMetadata, RecipeSpec,
    RequirementScope,
};
pub use value_objects::{BuildContext, BuildType, OptionSet, SemanticVersion};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Resolver → Identity round-trip
    // ========================================================================

    const DESCRIPTOR: &str = "set_project_name(NAMESPACE \"arba\" BASE_NAME \"vrsn\")\n\
                              set_project_semantic_version(\"1.2.3\")\n";

    #[test]
    fn identity_round_trip_is_idempotent() {
        // Parsing + identity derivation re-run on unchanged text must
        // yield the same identity every time.
        let first = ProjectIdentity::from_metadata(&descriptor::parse(DESCRIPTOR).unwrap());
        let second = ProjectIdentity::from_metadata(&descriptor::parse(DESCRIPTOR).unwrap());

        assert_eq!(first, second);
        assert_eq!(first.name, "arba-vrsn");
        assert_eq!(first.version.as_tuple(), (1, 2, 3));
    }

    #[test]
    fn identity_casing_invariants_hold_for_mixed_case_descriptors() {
        let text = "set_project_name(NAMESPACE ArBa BASE_NAME VrSn)\n\
                    set_project_semantic_version(2.0.0)\n";
        let identity = ProjectIdentity::from_metadata(&descriptor::parse(text).unwrap());

        assert_eq!(identity.name, identity.name.to_lowercase());
        assert_eq!(identity.config_prefix, identity.config_prefix.to_uppercase());
    }
}
