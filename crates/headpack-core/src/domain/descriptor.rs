//! Descriptor grammar: extracting project metadata from raw descriptor text.
//!
//! All grammar assumptions live in this one module. The parser produces a
//! typed, validated [`DescriptorMetadata`] record up front, so missing-field
//! failures are enumerable and testable independently of downstream logic.
//!
//! # Recognized directives
//!
//! This is deliberately *not* a general parser for the descriptor language.
//! Only two directive shapes matter, matched anywhere in the text, one
//! directive per line:
//!
//! ```text
//! set_project_name(NAMESPACE "arba" BASE_NAME "vrsn")
//! set_project_semantic_version("1.2.3")
//! ```
//!
//! Quoting is optional; unquoted tokens are equally valid. Tokens are
//! `[A-Za-z0-9_]+`. Trailing pre-release/build suffixes on the version
//! (`1.2.3-rc1`) are ignored. The *first* occurrence of each field wins.

use serde::Serialize;

use crate::domain::error::DomainError;
use crate::domain::value_objects::SemanticVersion;

/// Directive prefix carrying the `NAMESPACE` / `BASE_NAME` fields.
const NAME_DIRECTIVE: &str = "set_project_name(";
/// Directive prefix carrying the semantic version.
const VERSION_DIRECTIVE: &str = "set_project_semantic_version(";

/// Field names as they appear in errors and in the descriptor itself.
pub const FIELD_NAMESPACE: &str = "NAMESPACE";
pub const FIELD_BASE_NAME: &str = "BASE_NAME";
pub const FIELD_VERSION: &str = "SEMANTIC_VERSION";

/// Validated metadata extracted from a build descriptor.
///
/// Tokens keep the descriptor's original casing; canonicalisation
/// (lowercased name, uppercased config prefix) happens in
/// [`crate::domain::identity::ProjectIdentity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptorMetadata {
    pub namespace: String,
    pub base_name: String,
    pub version: SemanticVersion,
}

/// Parse descriptor text into a [`DescriptorMetadata`] record.
///
/// Each missing field fails with [`DomainError::MetadataNotFound`] naming
/// that field. Parsing is pure: the same text always yields the same
/// result.
pub fn parse(text: &str) -> Result<DescriptorMetadata, DomainError> {
    let namespace = extract_name_field(text, FIELD_NAMESPACE)?;
    let base_name = extract_name_field(text, FIELD_BASE_NAME)?;
    let version = extract_version(text)?;

    Ok(DescriptorMetadata {
        namespace,
        base_name,
        version,
    })
}

// ── field extraction ─────────────────────────────────────────────────────────

/// Find the first `set_project_name(... FIELD <token> ...)` occurrence and
/// capture the token following `field`.
fn extract_name_field(text: &str, field: &'static str) -> Result<String, DomainError> {
    for line in text.lines() {
        for (start, _) in line.match_indices(NAME_DIRECTIVE) {
            let body = &line[start + NAME_DIRECTIVE.len()..];
            if let Some(token) = capture_field_token(body, field) {
                return Ok(token.to_string());
            }
        }
    }
    Err(DomainError::MetadataNotFound { field })
}

/// Within a directive body, locate `field` at a word boundary and capture
/// the token after it (optional whitespace, optional opening quote).
fn capture_field_token<'a>(body: &'a str, field: &str) -> Option<&'a str> {
    for (idx, _) in body.match_indices(field) {
        // Word boundary on the left: `BASE_NAME` must not match inside
        // e.g. `EXTRA_BASE_NAME`.
        if idx > 0 {
            let before = body[..idx].chars().next_back();
            if before.is_some_and(is_token_char) {
                continue;
            }
        }

        let rest = body[idx + field.len()..].trim_start();
        let rest = rest.strip_prefix('"').unwrap_or(rest);
        let token = leading_token(rest);
        if !token.is_empty() {
            return Some(token);
        }
    }
    None
}

/// Find the first `set_project_semantic_version("MAJOR.MINOR.PATCH...")`
/// occurrence and parse the numeric triple, ignoring any trailing suffix.
fn extract_version(text: &str) -> Result<SemanticVersion, DomainError> {
    for line in text.lines() {
        for (start, _) in line.match_indices(VERSION_DIRECTIVE) {
            let body = line[start + VERSION_DIRECTIVE.len()..].trim_start();
            let body = body.strip_prefix('"').unwrap_or(body);
            if let Some(version) = leading_triple(body) {
                return Ok(version);
            }
        }
    }
    Err(DomainError::MetadataNotFound {
        field: FIELD_VERSION,
    })
}

// ── token scanners ───────────────────────────────────────────────────────────

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// The longest `[A-Za-z0-9_]*` prefix of `s`.
fn leading_token(s: &str) -> &str {
    let end = s.find(|c| !is_token_char(c)).unwrap_or(s.len());
    &s[..end]
}

/// Parse a leading `digits.digits.digits` triple, stopping at the first
/// character after the patch component (so `1.2.3-rc1` yields `(1,2,3)`).
fn leading_triple(s: &str) -> Option<SemanticVersion> {
    let (major, s) = leading_number(s)?;
    let s = s.strip_prefix('.')?;
    let (minor, s) = leading_number(s)?;
    let s = s.strip_prefix('.')?;
    let (patch, _) = leading_number(s)?;
    Some(SemanticVersion::new(major, minor, patch))
}

fn leading_number(s: &str) -> Option<(u64, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    // Digits only, so this cannot fail except on overflow.
    let value = s[..end].parse::<u64>().ok()?;
    Some((value, &s[end..]))
}

// ── tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIPTOR: &str = r#"
cmake_minimum_required(VERSION 3.26)

set_project_name(NAMESPACE "arba" BASE_NAME "vrsn")
set_project_semantic_version("1.2.3" BUILD_METADATA "")
project(${PROJECT_NAME} VERSION ${PROJECT_VERSION})
"#;

    #[test]
    fn parses_reference_descriptor() {
        let meta = parse(DESCRIPTOR).unwrap();
        assert_eq!(meta.namespace, "arba");
        assert_eq!(meta.base_name, "vrsn");
        assert_eq!(meta.version.as_tuple(), (1, 2, 3));
    }

    #[test]
    fn unquoted_tokens_are_valid() {
        let text = "set_project_name(NAMESPACE arba BASE_NAME vrsn)\n\
                    set_project_semantic_version(0.4.0)\n";
        let meta = parse(text).unwrap();
        assert_eq!(meta.namespace, "arba");
        assert_eq!(meta.base_name, "vrsn");
        assert_eq!(meta.version.as_tuple(), (0, 4, 0));
    }

    #[test]
    fn casing_is_preserved_in_metadata() {
        // Canonicalisation is the identity builder's job, not the parser's.
        let text = "set_project_name(NAMESPACE Arba BASE_NAME VRSN)\n\
                    set_project_semantic_version(\"1.0.0\")\n";
        let meta = parse(text).unwrap();
        assert_eq!(meta.namespace, "Arba");
        assert_eq!(meta.base_name, "VRSN");
    }

    #[test]
    fn missing_base_name_names_the_field() {
        let text = "set_project_name(NAMESPACE \"arba\")\n\
                    set_project_semantic_version(\"1.2.3\")\n";
        let err = parse(text).unwrap_err();
        assert_eq!(
            err,
            DomainError::MetadataNotFound {
                field: FIELD_BASE_NAME
            }
        );
    }

    #[test]
    fn missing_namespace_names_the_field() {
        let err = parse("set_project_semantic_version(\"1.2.3\")").unwrap_err();
        assert_eq!(
            err,
            DomainError::MetadataNotFound {
                field: FIELD_NAMESPACE
            }
        );
    }

    #[test]
    fn missing_version_names_the_field() {
        let text = "set_project_name(NAMESPACE a BASE_NAME b)";
        let err = parse(text).unwrap_err();
        assert_eq!(
            err,
            DomainError::MetadataNotFound {
                field: FIELD_VERSION
            }
        );
    }

    #[test]
    fn empty_text_fails_on_namespace_first() {
        assert_eq!(
            parse("").unwrap_err(),
            DomainError::MetadataNotFound {
                field: FIELD_NAMESPACE
            }
        );
    }

    #[test]
    fn prerelease_suffix_is_ignored() {
        let text = "set_project_name(NAMESPACE a BASE_NAME b)\n\
                    set_project_semantic_version(\"2.10.7-rc1+build.5\")\n";
        let meta = parse(text).unwrap();
        assert_eq!(meta.version.as_tuple(), (2, 10, 7));
    }

    #[test]
    fn first_occurrence_wins() {
        let text = "set_project_name(NAMESPACE first BASE_NAME one)\n\
                    set_project_name(NAMESPACE second BASE_NAME two)\n\
                    set_project_semantic_version(\"1.0.0\")\n\
                    set_project_semantic_version(\"9.9.9\")\n";
        let meta = parse(text).unwrap();
        assert_eq!(meta.namespace, "first");
        assert_eq!(meta.base_name, "one");
        assert_eq!(meta.version.as_tuple(), (1, 0, 0));
    }

    #[test]
    fn fields_may_come_from_separate_directives() {
        let text = "set_project_name(NAMESPACE alpha)\n\
                    set_project_name(BASE_NAME beta)\n\
                    set_project_semantic_version(3.2.1)\n";
        let meta = parse(text).unwrap();
        assert_eq!(meta.namespace, "alpha");
        assert_eq!(meta.base_name, "beta");
    }

    #[test]
    fn base_name_does_not_match_inside_longer_field() {
        let text = "set_project_name(EXTRA_BASE_NAME nope NAMESPACE a BASE_NAME real)\n\
                    set_project_semantic_version(1.0.0)\n";
        let meta = parse(text).unwrap();
        assert_eq!(meta.base_name, "real");
    }

    #[test]
    fn malformed_version_occurrence_is_skipped() {
        let text = "set_project_semantic_version(oops)\n\
                    set_project_semantic_version(\"4.5.6\")\n\
                    set_project_name(NAMESPACE a BASE_NAME b)\n";
        let meta = parse(text).unwrap();
        assert_eq!(meta.version.as_tuple(), (4, 5, 6));
    }

    #[test]
    fn parsing_is_deterministic() {
        let a = parse(DESCRIPTOR).unwrap();
        let b = parse(DESCRIPTOR).unwrap();
        assert_eq!(a, b);
    }
}
