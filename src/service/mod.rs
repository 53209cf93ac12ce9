//! Calling layer: snapshot loading and caching over a [`FamilyStore`].
//!
//! The engine assumes the graph does not change mid-computation. The
//! service provides that guarantee by describing against point-in-time
//! snapshots, cached per family group in an LRU. Callers that write to the
//! store must [`KinshipService::invalidate`] the affected family.
//!
//! Data-quality problems the engine tolerates (parent cycles, marriages
//! that cross family groups) are reported here with `tracing::warn!`.

use lru::LruCache;
use parking_lot::Mutex;
use std::collections::BTreeSet;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::engine::{Description, KinshipEngine, KinshipError};
use crate::graph::{FamilySnapshot, SnapshotError};
use crate::policy::KinshipPolicy;
use crate::store::FamilyStore;
use crate::types::{FamilyId, PersonId};

/// Error type for service operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Store error.
    #[error("Store error: {0}")]
    Store(String),
    /// The family data violates a snapshot invariant.
    #[error("Invalid family data: {0}")]
    Snapshot(#[from] SnapshotError),
    /// Engine error.
    #[error(transparent)]
    Kinship(#[from] KinshipError),
}

impl ServiceError {
    /// Create a store error from any error type.
    pub fn from_store<E: std::error::Error>(e: E) -> Self {
        Self::Store(e.to_string())
    }
}

/// Snapshot cache statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Current number of cached snapshots.
    pub len: usize,
    /// Maximum capacity of the cache.
    pub cap: usize,
}

/// Describes kinship for persons held in a [`FamilyStore`].
pub struct KinshipService<S: FamilyStore> {
    store: Arc<S>,
    policy: KinshipPolicy,
    cache: Mutex<LruCache<FamilyId, Arc<FamilySnapshot>>>,
}

impl<S: FamilyStore> KinshipService<S> {
    /// Create a service; the cache holds `policy.snapshot_cache_capacity`
    /// snapshots.
    pub fn new(store: Arc<S>, policy: KinshipPolicy) -> Self {
        let cap = NonZeroUsize::new(policy.snapshot_cache_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            store,
            policy,
            cache: Mutex::new(LruCache::new(cap)),
        }
    }

    /// Describe what `target` is to `subject`.
    ///
    /// Persons of different family groups are unrelated (`term == None`).
    pub async fn describe(&self, subject: PersonId, target: PersonId) -> Result<Description, ServiceError> {
        let subject_person = self
            .store
            .get_person(subject)
            .await
            .map_err(ServiceError::from_store)?
            .ok_or(KinshipError::PersonNotFound(subject))?;
        let target_person = self
            .store
            .get_person(target)
            .await
            .map_err(ServiceError::from_store)?
            .ok_or(KinshipError::PersonNotFound(target))?;

        if subject_person.family_id != target_person.family_id {
            debug!(
                subject = %subject,
                target = %target,
                subject_family = %subject_person.family_id,
                target_family = %target_person.family_id,
                "Persons belong to different families"
            );
            return Ok(Description::unrelated(&subject_person, &target_person));
        }

        let snapshot = self.snapshot(subject_person.family_id).await?;
        let engine = KinshipEngine::new(snapshot, self.policy.clone());
        let description = engine.describe(subject, target)?;

        if description.cycle_detected {
            warn!(
                subject = %subject,
                target = %target,
                family = %subject_person.family_id,
                "Parent cycle in ancestry of described persons"
            );
        }

        Ok(description)
    }

    /// Point-in-time snapshot of a family, loaded on first use.
    pub async fn snapshot(&self, family: FamilyId) -> Result<Arc<FamilySnapshot>, ServiceError> {
        let cached = self.cache.lock().get(&family).cloned();
        if let Some(snapshot) = cached {
            return Ok(snapshot);
        }

        let snapshot = Arc::new(load_snapshot(self.store.as_ref(), family).await?);
        self.cache.lock().put(family, Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Drop the cached snapshot of a family. Returns whether one was cached.
    pub fn invalidate(&self, family: FamilyId) -> bool {
        self.cache.lock().pop(&family).is_some()
    }

    /// Drop every cached snapshot.
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }

    /// Get cache statistics.
    pub fn cache_stats(&self) -> CacheStats {
        let cache = self.cache.lock();
        CacheStats {
            len: cache.len(),
            cap: cache.cap().get(),
        }
    }

    /// Get the policy.
    pub fn policy(&self) -> &KinshipPolicy {
        &self.policy
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Build a snapshot of one family group from a store.
///
/// Parent links come from `get_parent_edges`. Marriages to persons outside
/// the family are skipped with a warning; parent cycles are logged.
pub async fn load_snapshot<S: FamilyStore + ?Sized>(
    store: &S,
    family: FamilyId,
) -> Result<FamilySnapshot, ServiceError> {
    let mut persons = store
        .get_all_persons_in_family(family)
        .await
        .map_err(ServiceError::from_store)?;
    let members: BTreeSet<PersonId> = persons.iter().map(|p| p.id).collect();

    let mut marriages = Vec::new();
    for person in persons.iter_mut() {
        let links = store
            .get_parent_edges(person.id)
            .await
            .map_err(ServiceError::from_store)?;
        person.father_id = links.father;
        person.mother_id = links.mother;

        let spouses = store
            .get_spouse_edges(person.id)
            .await
            .map_err(ServiceError::from_store)?;
        for spouse in spouses {
            if !members.contains(&spouse) {
                warn!(
                    family = %family,
                    person = %person.id,
                    spouse = %spouse,
                    "Marriage crosses family groups, skipped"
                );
                continue;
            }
            // either side may be the only one reporting the edge; build dedupes
            marriages.push((person.id, spouse));
        }
    }

    let snapshot = FamilySnapshot::from_persons(persons, marriages)?;

    let cycles = snapshot.parent_cycles();
    if !cycles.is_empty() {
        warn!(
            family = %family,
            persons = ?cycles,
            "Parent cycle in family data"
        );
    }

    info!(
        family = %family,
        persons = snapshot.person_count(),
        marriages = snapshot.marriage_count(),
        fingerprint = snapshot.fingerprint(),
        "Loaded family snapshot"
    );

    Ok(snapshot)
}
