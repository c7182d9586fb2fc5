// src/domain/catalog/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::catalog::kind::CatalogKind;
use crate::domain::catalog::repository::RecordReadRepository;
use crate::domain::catalog::value_objects::{RecordId, Slug};
use crate::domain::errors::{DomainError, DomainResult};

/// Domain service that turns display names into slugs nobody else in the
/// same collection holds yet.
///
/// The probe is a pre-check only: the unique constraint on `slug` stays the
/// final authority, and writers retry allocation when an insert still loses
/// the race.
pub struct SlugAllocator {
    read_repo: Arc<dyn RecordReadRepository>,
    generator: Arc<dyn SlugGenerator>,
    max_probes: u32,
}

impl SlugAllocator {
    pub const DEFAULT_MAX_PROBES: u32 = 50;

    pub fn new(
        read_repo: Arc<dyn RecordReadRepository>,
        generator: Arc<dyn SlugGenerator>,
        max_probes: u32,
    ) -> Self {
        Self {
            read_repo,
            generator,
            max_probes: max_probes.max(1),
        }
    }

    /// Deterministic slug for `name` without consulting the store. Long
    /// names yield a shortened slug rather than an error.
    pub fn base_slug(&self, name: &str) -> DomainResult<Slug> {
        let base = self.generator.slugify(name);
        if base.is_empty() {
            return Err(DomainError::Validation(format!(
                "`{}` does not contain any characters usable in a slug",
                name.trim()
            )));
        }
        Slug::from_generated(&base)
    }

    pub async fn is_available(
        &self,
        kind: CatalogKind,
        slug: &Slug,
        ignore_id: Option<RecordId>,
    ) -> DomainResult<bool> {
        Ok(!self.read_repo.slug_exists(kind, slug, ignore_id).await?)
    }

    /// Probe `base`, `base-2`, `base-3`, ... and return the first candidate
    /// the store does not know about.
    pub async fn allocate(
        &self,
        kind: CatalogKind,
        name: &str,
        ignore_id: Option<RecordId>,
    ) -> DomainResult<Slug> {
        let base = self.base_slug(name)?;
        let mut candidate = base.clone();

        for probe in 1..=self.max_probes {
            if !self
                .read_repo
                .slug_exists(kind, &candidate, ignore_id)
                .await?
            {
                tracing::debug!(%kind, slug = %candidate, probe, "allocated slug");
                return Ok(candidate);
            }
            if probe < self.max_probes {
                candidate = base.with_suffix(probe + 1)?;
            }
        }

        tracing::warn!(%kind, base = %base, probes = self.max_probes, "slug probes exhausted");
        Err(DomainError::SlugExhausted {
            base: base.into_inner(),
            attempts: self.max_probes,
        })
    }
}
