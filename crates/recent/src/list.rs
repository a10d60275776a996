use store::Store;
use tracing::{debug, warn};
use utils::ChangeNotifier;

use crate::{FileUri, OpenDocument, RecentEntry, Result, SerializedEntry};

/// Capacity and storage key of one recent list instance.
#[derive(Debug, Clone, Copy)]
pub struct RecentListConfig {
    pub key: &'static str,
    pub max_size: usize,
}

impl RecentListConfig {
    /// The compact side panel list: 20 entries under `recentFiles`.
    pub fn recent_files() -> Self {
        Self {
            key: "recentFiles",
            max_size: 20,
        }
    }

    /// The larger list with manual deletion: 50 entries under
    /// `recentlyOpened`.
    pub fn recently_opened() -> Self {
        Self {
            key: "recentlyOpened",
            max_size: 50,
        }
    }
}

/// Ordered most-recently-used list of file entries, front = most recent.
///
/// The whole list is written back to the store after every mutation, and
/// change observers run before the mutating call returns. The manager is
/// the sole writer of its key within one process lifetime.
pub struct RecentList<S: Store> {
    store: S,
    config: RecentListConfig,
    model: Vec<RecentEntry>,
    on_change: ChangeNotifier,
}

impl<S: Store> RecentList<S> {
    /// Loads the stored list. A stored value that is not a sequence of
    /// entries is reset to an empty sequence before use.
    pub fn init(store: S, config: RecentListConfig) -> Result<Self> {
        let mut list = Self {
            store,
            config,
            model: Vec::new(),
            on_change: ChangeNotifier::default(),
        };

        let stored = match list.store.get(config.key)? {
            None => Some(Vec::new()),
            Some(raw) => match serde_json::from_slice::<Vec<SerializedEntry>>(raw.as_ref()) {
                Ok(stored) => Some(stored),
                Err(error) => {
                    warn!(
                        key = config.key,
                        %error,
                        "stored value is not an entry list, resetting"
                    );
                    None
                }
            },
        };

        match stored {
            Some(stored) => {
                list.model = stored.into_iter().map(RecentEntry::from_stored).collect();
            }
            None => list.persist()?,
        }

        Ok(list)
    }

    /// Seeds the list from the documents already open at startup, in the
    /// order the host reports them.
    pub fn seed_open_documents(
        &mut self,
        docs: impl IntoIterator<Item = OpenDocument>,
    ) -> Result<()> {
        for doc in docs {
            self.touch(&doc)?;
        }
        Ok(())
    }

    /// Promotes `doc` to the front of the list, creating the entry if it
    /// is not tracked yet. A re-touch never rebuilds the label.
    pub fn touch(&mut self, doc: &OpenDocument) -> Result<()> {
        match self.model.iter().position(|entry| entry.uri() == &doc.uri) {
            None => self.model.insert(0, RecentEntry::from_document(doc)),
            Some(index) => {
                let entry = self.model.remove(index);
                self.model.insert(0, entry);
            }
        }

        while self.model.len() > self.config.max_size {
            if let Some(evicted) = self.model.pop() {
                debug!(
                    key = self.config.key,
                    uri = evicted.uri().as_str(),
                    "evicted least recently used entry"
                );
            }
        }

        self.persist()?;
        self.on_change.notify();

        Ok(())
    }

    /// Removes the entry with this uri. An unknown uri is a no-op: no
    /// store write, no observer fire.
    pub fn remove(&mut self, uri: &FileUri) -> Result<()> {
        let index = match self.model.iter().position(|entry| entry.uri() == uri) {
            Some(index) => index,
            None => return Ok(()),
        };

        self.model.remove(index);
        self.persist()?;
        self.on_change.notify();

        Ok(())
    }

    /// Current entries, most recent first.
    pub fn entries(&self) -> &[RecentEntry] {
        &self.model
    }

    /// Registers a change observer. Observers run synchronously after
    /// every completed mutation, once the new state is in the store.
    pub fn subscribe(&self, handler: impl Fn() + Sync + Send + 'static) {
        self.on_change.subscribe(handler);
    }

    fn persist(&mut self) -> Result<()> {
        let stored: Vec<SerializedEntry> = self.model.iter().map(RecentEntry::to_stored).collect();
        let bytes = serde_json::to_vec(&stored)?;
        self.store.set(self.config.key, bytes)?;
        Ok(())
    }
}
