use crate::{Result, StoreRead, StoreWrite};

#[derive(Debug)]
pub struct RocksStore {
    db: rocksdb::DB,
}

impl RocksStore {
    pub fn open_or_create_database(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let mut opts = rocksdb::Options::default();
        opts.create_if_missing(true);

        let db = rocksdb::DB::open(&opts, path)?;
        Ok(Self { db })
    }
}

impl StoreRead for RocksStore {
    type ValueBytes<'a> = rocksdb::DBPinnableSlice<'a>
    where
        Self: 'a;

    fn get(&self, key: impl AsRef<[u8]>) -> Result<Option<Self::ValueBytes<'_>>> {
        Ok(self.db.get_pinned(key)?)
    }

    fn has(&self, key: impl AsRef<[u8]>) -> Result<bool> {
        Ok(self.db.get_pinned(key)?.is_some())
    }
}

impl StoreWrite for RocksStore {
    fn set(&mut self, key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) -> Result<()> {
        self.db.put(key, value)?;
        Ok(())
    }

    fn delete(&mut self, key: impl AsRef<[u8]>) -> Result<()> {
        self.db.delete(key)?;
        Ok(())
    }
}
