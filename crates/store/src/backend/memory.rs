use std::sync::Arc;

use parking_lot::RwLock;

use crate::{Result, StoreRead, StoreWrite};

type KeyBytes = Box<[u8]>;
type ValueBytes = Arc<[u8]>;

type MapType = std::collections::BTreeMap<KeyBytes, ValueBytes>;

/// In-memory store. Clones share the same map, so a handle opened later
/// observes earlier writes, the same way a reopened on-disk store does.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    map: Arc<RwLock<MapType>>,
}

impl StoreRead for MemoryStore {
    type ValueBytes<'a> = ValueBytes
    where
        Self: 'a;

    fn get(&self, key: impl AsRef<[u8]>) -> Result<Option<Self::ValueBytes<'_>>> {
        Ok(self.map.read().get(key.as_ref()).cloned())
    }

    fn has(&self, key: impl AsRef<[u8]>) -> Result<bool> {
        Ok(self.map.read().get(key.as_ref()).is_some())
    }
}

impl StoreWrite for MemoryStore {
    fn set(&mut self, key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) -> Result<()> {
        self.map.write().insert(
            key.as_ref().to_vec().into_boxed_slice(),
            Arc::from(value.as_ref()),
        );
        Ok(())
    }

    fn delete(&mut self, key: impl AsRef<[u8]>) -> Result<()> {
        self.map.write().remove(key.as_ref());
        Ok(())
    }
}
