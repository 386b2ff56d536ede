//! Pinned dependency resolver.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use headpack_core::application::ApplicationError;
use headpack_core::application::ports::{DependencyBinding, DependencyResolver};
use headpack_core::domain::{BuildContext, DependencyRequest, SemanticVersion};
use headpack_core::error::HeadpackResult;

/// Resolves dependency requests against a fixed name-to-version table.
///
/// The table plays the role a remote package index would: each request is
/// bound to the pinned version if the pin satisfies the requirement, and
/// resolution fails otherwise. The default table covers the dependencies
/// the stock header-only recipe declares.
#[derive(Debug, Clone)]
pub struct PinnedResolver {
    pins: BTreeMap<String, SemanticVersion>,
}

#[derive(Deserialize)]
struct PinTable(BTreeMap<String, String>);

impl PinnedResolver {
    /// Resolver with the stock pin table (`gtest` at 1.14.0).
    pub fn new() -> Self {
        let mut pins = BTreeMap::new();
        pins.insert("gtest".to_string(), SemanticVersion::new(1, 14, 0));
        Self { pins }
    }

    /// Resolver with an empty pin table.
    pub fn empty() -> Self {
        Self {
            pins: BTreeMap::new(),
        }
    }

    /// Load a pin table from JSON, e.g. `{"gtest": "1.14.0"}`.
    pub fn from_json(text: &str) -> HeadpackResult<Self> {
        let table: PinTable =
            serde_json::from_str(text).map_err(|e| ApplicationError::ResolutionFailure {
                reason: format!("invalid pin table: {e}"),
            })?;
        let mut pins = BTreeMap::new();
        for (name, version) in table.0 {
            let version = SemanticVersion::from_str(&version).map_err(|_| {
                ApplicationError::ResolutionFailure {
                    reason: format!("invalid pinned version {version:?} for {name}"),
                }
            })?;
            pins.insert(name, version);
        }
        Ok(Self { pins })
    }

    /// Add or replace one pin.
    pub fn pin(mut self, name: impl Into<String>, version: SemanticVersion) -> Self {
        self.pins.insert(name.into(), version);
        self
    }
}

impl Default for PinnedResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyResolver for PinnedResolver {
    fn resolve(
        &self,
        requests: &[DependencyRequest],
        context: &BuildContext,
    ) -> HeadpackResult<Vec<DependencyBinding>> {
        let mut bindings = Vec::with_capacity(requests.len());
        for request in requests {
            let pinned =
                self.pins
                    .get(&request.name)
                    .ok_or_else(|| ApplicationError::ResolutionFailure {
                        reason: format!(
                            "no version of {} available for {}/{}",
                            request.name, context.os, context.arch
                        ),
                    })?;
            if !satisfies(&request.requirement, *pinned) {
                return Err(ApplicationError::ResolutionFailure {
                    reason: format!(
                        "{} {} does not satisfy requirement {}",
                        request.name, pinned, request.requirement
                    ),
                }
                .into());
            }
            debug!(name = %request.name, version = %pinned, "bound dependency");
            bindings.push(DependencyBinding {
                name: request.name.clone(),
                version: *pinned,
            });
        }
        Ok(bindings)
    }
}

/// Check a version against a requirement string: `^maj.min.pat` matches
/// the same major at or above the floor, a bare version matches exactly
/// on the components given.
fn satisfies(requirement: &str, version: SemanticVersion) -> bool {
    let (caret, body) = match requirement.strip_prefix('^') {
        Some(rest) => (true, rest),
        None => (false, requirement),
    };
    let mut components = Vec::new();
    for part in body.split('.') {
        match part.parse::<u64>() {
            Ok(n) => components.push(n),
            Err(_) => return false,
        }
    }
    if components.is_empty() || components.len() > 3 {
        return false;
    }
    if caret {
        let floor = (
            components[0],
            components.get(1).copied().unwrap_or(0),
            components.get(2).copied().unwrap_or(0),
        );
        version.major == components[0] && version.as_tuple() >= floor
    } else {
        let actual = [version.major, version.minor, version.patch];
        components
            .iter()
            .zip(actual.iter())
            .all(|(required, have)| required == have)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gtest_request() -> DependencyRequest {
        DependencyRequest::test_requirement("gtest", "^1.14")
    }

    #[test]
    fn binds_stock_requirement() {
        let resolver = PinnedResolver::new();
        let bindings = resolver
            .resolve(&[gtest_request()], &BuildContext::default())
            .unwrap();
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].name, "gtest");
        assert_eq!(bindings[0].version, SemanticVersion::new(1, 14, 0));
    }

    #[test]
    fn unknown_dependency_fails_resolution() {
        let resolver = PinnedResolver::empty();
        let err = resolver
            .resolve(&[gtest_request()], &BuildContext::default())
            .unwrap_err();
        assert!(err.to_string().contains("no version of gtest"));
    }

    #[test]
    fn pin_below_floor_fails_resolution() {
        let resolver = PinnedResolver::empty().pin("gtest", SemanticVersion::new(1, 13, 0));
        let err = resolver
            .resolve(&[gtest_request()], &BuildContext::default())
            .unwrap_err();
        assert!(err.to_string().contains("does not satisfy"));
    }

    #[test]
    fn caret_rejects_major_bump() {
        assert!(!satisfies("^1.14", SemanticVersion::new(2, 0, 0)));
        assert!(satisfies("^1.14", SemanticVersion::new(1, 15, 2)));
    }

    #[test]
    fn bare_requirement_matches_prefix_components() {
        assert!(satisfies("1.14", SemanticVersion::new(1, 14, 7)));
        assert!(!satisfies("1.14", SemanticVersion::new(1, 15, 0)));
        assert!(satisfies("1", SemanticVersion::new(1, 2, 3)));
    }

    #[test]
    fn loads_pin_table_from_json() {
        let resolver = PinnedResolver::from_json(r#"{"gtest": "1.15.2"}"#).unwrap();
        let bindings = resolver
            .resolve(&[gtest_request()], &BuildContext::default())
            .unwrap();
        assert_eq!(bindings[0].version, SemanticVersion::new(1, 15, 2));
    }

    #[test]
    fn rejects_malformed_pin_table() {
        assert!(PinnedResolver::from_json(r#"{"gtest": "one.two"}"#).is_err());
        assert!(PinnedResolver::from_json("not json").is_err());
    }
}
