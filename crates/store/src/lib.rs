pub mod backend;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("rocksdb error")]
    RocksdbError(#[from] rocksdb::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub trait StoreRead {
    type ValueBytes<'a>: AsRef<[u8]>
    where
        Self: 'a;

    fn get(&self, key: impl AsRef<[u8]>) -> Result<Option<Self::ValueBytes<'_>>>;

    fn has(&self, key: impl AsRef<[u8]>) -> Result<bool>;
}

pub trait StoreWrite {
    fn set(&mut self, key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) -> Result<()>;

    fn delete(&mut self, key: impl AsRef<[u8]>) -> Result<()>;
}

/// Whole-value replacement store. Writers always overwrite the full value
/// under a key, last write wins.
pub trait Store: StoreRead + StoreWrite {}

impl<T: StoreRead + StoreWrite> Store for T {}

#[cfg(test)]
mod tests;
