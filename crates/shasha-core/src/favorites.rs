use crate::error::ShashaError;
use crate::models::{CatalogItem, Source};
use crate::storage::Storage;

/// In-memory favorites set, hydrated from storage at construction and
/// persisted as a whole snapshot on every mutation (write-through, no
/// batching).
///
/// Membership is keyed by `(source, id)`: the two catalogs share a numeric
/// id space, so a bare-id check would conflate unrelated titles.
pub struct FavoritesStore {
    items: Vec<CatalogItem>,
}

impl FavoritesStore {
    pub fn load(storage: &Storage) -> Result<Self, ShashaError> {
        Ok(Self {
            items: storage.load_favorites()?,
        })
    }

    /// Add the item if absent, remove it if present. Persists the updated
    /// set before returning the new membership state.
    pub fn toggle(
        &mut self,
        storage: &Storage,
        item: &CatalogItem,
    ) -> Result<bool, ShashaError> {
        let key = item.key();
        let now_favorite = match self.items.iter().position(|f| f.key() == key) {
            Some(pos) => {
                self.items.remove(pos);
                false
            }
            None => {
                self.items.push(item.clone());
                true
            }
        };
        storage.save_favorites(&self.items)?;
        tracing::debug!(id = item.id, source = ?item.source, now_favorite, "favorite toggled");
        Ok(now_favorite)
    }

    pub fn is_favorite(&self, source: Source, id: u64) -> bool {
        self.items.iter().any(|f| f.key() == (source, id))
    }

    /// Current snapshot, in insertion order (no ordering guarantee to
    /// callers).
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
