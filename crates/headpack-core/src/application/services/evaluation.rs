//! One recipe evaluation: descriptor loading, metadata resolution, and
//! identity derivation, with per-evaluation memoization.
//!
//! An evaluation is created fresh per invocation of the external package
//! manager and never shared across threads. The descriptor is read at
//! most once; metadata is parsed at most once. Both results — including
//! failures — are cached in explicit optional-value cells, so a second
//! call returns the stored result without re-reading the file even if
//! the underlying descriptor were to change mid-evaluation.

use std::cell::OnceCell;
use std::path::Path;

use tracing::{debug, instrument};
use uuid::Uuid;

use crate::application::ports::DescriptorSource;
use crate::domain::{
    DescriptorMetadata, OptionSet, ProjectIdentity, RecipeSpec, SemanticVersion, descriptor,
};
use crate::error::{HeadpackError, HeadpackResult};

/// A single recipe evaluation.
pub struct RecipeEvaluation {
    id: Uuid,
    spec: RecipeSpec,
    options: OptionSet,
    source: Box<dyn DescriptorSource>,
    // Explicit memoization cells: empty until first use, populated
    // exactly once, never mutated afterwards. Failures are cached too.
    descriptor: OnceCell<HeadpackResult<String>>,
    metadata: OnceCell<HeadpackResult<DescriptorMetadata>>,
}

impl RecipeEvaluation {
    /// Start a new evaluation. Validates the recipe spec up front, before
    /// any I/O happens.
    pub fn new(
        spec: RecipeSpec,
        options: OptionSet,
        source: Box<dyn DescriptorSource>,
    ) -> HeadpackResult<Self> {
        spec.validate()?;
        let id = Uuid::new_v4();
        debug!(evaluation = %id, descriptor = %spec.descriptor_path.display(), "evaluation started");
        Ok(Self {
            id,
            spec,
            options,
            source,
            descriptor: OnceCell::new(),
            metadata: OnceCell::new(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn spec(&self) -> &RecipeSpec {
        &self.spec
    }

    pub fn options(&self) -> OptionSet {
        self.options
    }

    /// The raw descriptor text, loaded on first call and shared by all
    /// consumers afterwards.
    pub fn descriptor(&self) -> HeadpackResult<&str> {
        let cached = self
            .descriptor
            .get_or_init(|| self.load_descriptor(&self.spec.descriptor_path));
        cached
            .as_ref()
            .map(String::as_str)
            .map_err(HeadpackError::clone)
    }

    /// Resolved descriptor metadata, parsed on first call.
    pub fn metadata(&self) -> HeadpackResult<&DescriptorMetadata> {
        let cached = self.metadata.get_or_init(|| {
            let text = self.descriptor()?;
            let metadata = descriptor::parse(text)?;
            debug!(
                evaluation = %self.id,
                namespace = %metadata.namespace,
                base_name = %metadata.base_name,
                version = %metadata.version,
                "metadata resolved"
            );
            Ok(metadata)
        });
        cached.as_ref().map_err(HeadpackError::clone)
    }

    /// The canonical package identity. Pure function of the resolved
    /// metadata; cheap to re-derive, so not separately cached.
    pub fn identity(&self) -> HeadpackResult<ProjectIdentity> {
        Ok(ProjectIdentity::from_metadata(self.metadata()?))
    }

    /// Lifecycle operation `resolve-name`.
    pub fn resolve_name(&self) -> HeadpackResult<String> {
        Ok(self.identity()?.name)
    }

    /// Lifecycle operation `resolve-version`.
    pub fn resolve_version(&self) -> HeadpackResult<SemanticVersion> {
        Ok(self.metadata()?.version)
    }

    #[instrument(skip_all, fields(evaluation = %self.id, path = %path.display()))]
    fn load_descriptor(&self, path: &Path) -> HeadpackResult<String> {
        let text = self.source.load(path)?;
        debug!(bytes = text.len(), "descriptor loaded");
        Ok(text)
    }
}

// ── tests ────────────────────────────────────────────────────────────────────
