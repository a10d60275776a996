use crate::{backend, Error, StoreRead, StoreWrite};

#[test]
fn test_memory_store() -> Result<(), Error> {
    let mut store = backend::memory::MemoryStore::default();

    store.set(*b"123", *b"321")?;

    assert!(store.has(*b"123")?);
    assert_eq!(store.get(*b"123")?.as_deref(), Some(b"321".as_slice()));

    store.set(*b"123", *b"456")?;
    assert_eq!(store.get(*b"123")?.as_deref(), Some(b"456".as_slice()));

    store.delete(*b"123")?;
    assert!(!store.has(*b"123")?);
    assert!(store.get(*b"123")?.is_none());

    Ok(())
}

#[test]
fn test_memory_store_shared_handle() -> Result<(), Error> {
    let mut store = backend::memory::MemoryStore::default();
    store.set(*b"key", *b"value")?;

    let reopened = store.clone();
    assert_eq!(reopened.get(*b"key")?.as_deref(), Some(b"value".as_slice()));

    Ok(())
}

#[test]
fn test_rocks_store() -> Result<(), Error> {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = backend::rocks::RocksStore::open_or_create_database(dir.path())?;
        store.set(*b"123", *b"321")?;
        assert!(store.has(*b"123")?);

        store.set(*b"temp", *b"x")?;
        store.delete(*b"temp")?;
        assert!(!store.has(*b"temp")?);
    }

    let store = backend::rocks::RocksStore::open_or_create_database(dir.path())?;
    assert_eq!(store.get(*b"123")?.as_deref(), Some(b"321".as_slice()));

    Ok(())
}
