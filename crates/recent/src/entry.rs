use std::fmt::Display;

use serde::{Deserialize, Serialize};
use utils::PathTools;

use crate::{FileUri, OpenDocument};

/// One tracked file in a recent list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentEntry {
    uri: FileUri,
    label: String,
}

/// Stored form of [`RecentEntry`]. The field names are part of the
/// persisted layout and must not change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedEntry {
    #[serde(rename = "serializedUri")]
    pub serialized_uri: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
}

impl RecentEntry {
    /// Label layout is `<base name>\t(<path without scheme>)`.
    pub(crate) fn from_document(doc: &OpenDocument) -> Self {
        let name = PathTools::basename(&doc.file_name).trim();
        let label = format!("{}\t({})", name, doc.uri.path());
        Self {
            uri: doc.uri.clone(),
            label,
        }
    }

    pub fn uri(&self) -> &FileUri {
        &self.uri
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn to_stored(&self) -> SerializedEntry {
        SerializedEntry {
            serialized_uri: self.uri.as_str().to_string(),
            file_name: self.label.clone(),
        }
    }

    pub(crate) fn from_stored(stored: SerializedEntry) -> Self {
        Self {
            uri: FileUri::parse(&stored.serialized_uri),
            label: stored.file_name,
        }
    }
}

impl Display for RecentEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}
