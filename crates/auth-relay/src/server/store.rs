//! In-memory session slot shared across handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

/// Holds the single session identifier captured from the login callback.
///
/// At most one session exists process-wide; the empty string means no
/// session is active. There is no expiry. Reads proceed concurrently,
/// writes are exclusive.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<String>>,
}

impl SessionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the stored identifier. The value is taken as-is; no
    /// format validation is applied.
    pub async fn set(&self, id: impl Into<String>) {
        *self.inner.write().await = id.into();
    }

    /// The current identifier, empty when no session is active.
    pub async fn get(&self) -> String {
        self.inner.read().await.clone()
    }

    /// Reset the slot and return the identifier it held.
    pub async fn clear(&self) -> String {
        let mut slot = self.inner.write().await;
        std::mem::take(&mut *slot)
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_by_default() {
        let store = SessionStore::new();
        assert_eq!(store.get().await, "");
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = SessionStore::new();
        store.set("abc123").await;
        assert_eq!(store.get().await, "abc123");
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = SessionStore::new();
        store.set("first").await;
        store.set("second").await;
        assert_eq!(store.get().await, "second");
    }

    #[tokio::test]
    async fn test_clear_returns_previous() {
        let store = SessionStore::new();
        store.set("abc123").await;

        assert_eq!(store.clear().await, "abc123");
        assert_eq!(store.get().await, "");

        // Clearing an empty store is a no-op that reports the empty value.
        assert_eq!(store.clear().await, "");
    }

    #[tokio::test]
    async fn test_clones_share_the_slot() {
        let store = SessionStore::new();
        let other = store.clone();

        store.set("shared").await;
        assert_eq!(other.get().await, "shared");
    }

    #[tokio::test]
    async fn test_concurrent_reads_never_observe_torn_values() {
        let store = SessionStore::new();
        store.set("old-session").await;

        let writer = {
            let store = store.clone();
            tokio::spawn(async move {
                for _ in 0..100 {
                    store.set("new-session").await;
                    store.set("old-session").await;
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    for _ in 0..100 {
                        let value = store.get().await;
                        assert!(
                            value == "old-session" || value == "new-session",
                            "observed torn value: {value:?}"
                        );
                    }
                })
            })
            .collect();

        writer.await.expect("writer task panicked");
        for reader in readers {
            reader.await.expect("reader task panicked");
        }
    }
}
