//! Cache de colección en memoria
//!
//! Respaldo de las vistas de tabla: el ciclo de vida de reservas la
//! invalida tras cada escritura exitosa para que la siguiente lectura
//! refresque desde el backend sin recarga manual.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

struct CacheSlot<T> {
    items: Option<Vec<T>>,
    generation: u64,
}

/// Cache de una colección con contador de generación
pub struct CollectionCache<T> {
    inner: Arc<RwLock<CacheSlot<T>>>,
}

impl<T> Clone for CollectionCache<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for CollectionCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CollectionCache<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(CacheSlot {
                items: None,
                generation: 0,
            })),
        }
    }

    /// Invalidar la colección: la próxima lectura irá al backend
    pub async fn invalidate(&self) {
        let mut slot = self.inner.write().await;
        slot.items = None;
        slot.generation += 1;
        debug!(generation = slot.generation, "collection cache invalidated");
    }

    /// Generación actual; crece con cada invalidación
    pub async fn generation(&self) -> u64 {
        self.inner.read().await.generation
    }
}

impl<T: Clone> CollectionCache<T> {
    pub async fn get(&self) -> Option<Vec<T>> {
        self.inner.read().await.items.clone()
    }

    pub async fn put(&self, items: Vec<T>) {
        let mut slot = self.inner.write().await;
        slot.items = Some(items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get_invalidate() {
        let cache = CollectionCache::new();
        assert!(cache.get().await.is_none());

        cache.put(vec![1, 2, 3]).await;
        assert_eq!(cache.get().await, Some(vec![1, 2, 3]));
        assert_eq!(cache.generation().await, 0);

        cache.invalidate().await;
        assert!(cache.get().await.is_none());
        assert_eq!(cache.generation().await, 1);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let cache = CollectionCache::new();
        let view = cache.clone();
        cache.put(vec!["a"]).await;
        assert_eq!(view.get().await, Some(vec!["a"]));

        view.invalidate().await;
        assert!(cache.get().await.is_none());
    }
}
