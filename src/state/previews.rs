use std::collections::HashMap;

use iced::widget::image::Handle;

/// Identifies a registered preview handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewId(u64);

/// Owns the display handles of the loaded variants.
///
/// A handle keeps the file's bytes alive for rendering. Each accepted file
/// gets exactly one entry, and the entry must be released when its image is
/// replaced or the session is reset.
#[derive(Debug, Default)]
pub struct PreviewStore {
    next_id: u64,
    live: HashMap<PreviewId, Handle>,
}

impl PreviewStore {
    /// Take ownership of a handle and return its id
    pub fn register(&mut self, handle: Handle) -> PreviewId {
        let id = PreviewId(self.next_id);
        self.next_id += 1;
        self.live.insert(id, handle);
        id
    }

    pub fn handle(&self, id: PreviewId) -> Option<&Handle> {
        self.live.get(&id)
    }

    /// Drop the handle for `id`. Returns false if it was already released.
    pub fn release(&mut self, id: PreviewId) -> bool {
        self.live.remove(&id).is_some()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_handle() -> Handle {
        Handle::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn test_register_and_release() {
        let mut store = PreviewStore::default();
        let first = store.register(dummy_handle());
        let second = store.register(dummy_handle());

        assert_ne!(first, second);
        assert_eq!(store.live_count(), 2);
        assert!(store.handle(first).is_some());

        assert!(store.release(first));
        assert!(store.handle(first).is_none());
        assert_eq!(store.live_count(), 1);
    }

    #[test]
    fn test_double_release_is_reported() {
        let mut store = PreviewStore::default();
        let id = store.register(dummy_handle());

        assert!(store.release(id));
        assert!(!store.release(id));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut store = PreviewStore::default();
        let id = store.register(dummy_handle());
        store.release(id);
        let next = store.register(dummy_handle());
        assert_ne!(id, next);
    }
}
