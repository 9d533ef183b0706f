//! Discovered distributions and the user's selection of them.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::archive::Discovered;
use crate::error::{Error, Result};
use crate::model::{DistributionId, Histogram};

/// One discovered distribution.
///
/// The payload is shared and never mutated; composition works on clones.
#[derive(Clone, Debug, PartialEq)]
pub struct DistributionHandle {
    pub id: DistributionId,
    pub name: String,
    pub path: String,
    pub payload: Arc<Histogram>,
}

/// Every distribution found in the open archive, keyed by identity.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: BTreeMap<DistributionId, DistributionHandle>,
    next_id: u32,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts every triple produced by `source`, numbering them in the order
    /// they arrive. Returns how many were added.
    pub fn discover<I>(&mut self, source: I) -> usize
    where
        I: IntoIterator<Item = Discovered>,
    {
        let before = self.entries.len();
        for found in source {
            self.insert(found.name, found.path, found.histogram);
        }
        let added = self.entries.len() - before;
        tracing::info!(added, total = self.entries.len(), "discovered distributions");
        added
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        path: impl Into<String>,
        histogram: Histogram,
    ) -> DistributionId {
        let id = DistributionId(self.next_id);
        self.next_id += 1;
        self.entries.insert(
            id,
            DistributionHandle {
                id,
                name: name.into(),
                path: path.into(),
                payload: Arc::new(histogram),
            },
        );
        id
    }

    /// Drops every entry and restarts numbering at zero.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_id = 0;
    }

    pub fn lookup(&self, id: DistributionId) -> Result<&DistributionHandle> {
        self.entries.get(&id).ok_or(Error::UnknownIdentity(id))
    }

    pub fn contains(&self, id: DistributionId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending identity order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &DistributionHandle> + '_ {
        self.entries.values()
    }
}

/// User-curated subset of a [`Catalog`].
///
/// Holds copies of the catalog handles taken when they were added.
#[derive(Debug, Default)]
pub struct Selector {
    entries: BTreeMap<DistributionId, DistributionHandle>,
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` from `catalog`. Returns `false` if it was already selected.
    pub fn add(&mut self, catalog: &Catalog, id: DistributionId) -> Result<bool> {
        let handle = catalog.lookup(id)?;
        if self.entries.contains_key(&id) {
            return Ok(false);
        }
        self.entries.insert(id, handle.clone());
        tracing::debug!(%id, path = %handle.path, "selected");
        Ok(true)
    }

    /// Removes `id`. Returns `false` if it was not selected.
    pub fn remove(&mut self, id: DistributionId) -> bool {
        let removed = self.entries.remove(&id).is_some();
        if removed {
            tracing::debug!(%id, "deselected");
        }
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, id: DistributionId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Selected handles in ascending identity order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &DistributionHandle> + '_ {
        self.entries.values()
    }

    pub fn payloads(&self) -> Vec<&Histogram> {
        self.entries.values().map(|h| h.payload.as_ref()).collect()
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
