use crate::FileUri;

/// Minimal surface of an editor document handle, as supplied by the
/// document-focus event source: the canonical uri plus the filesystem
/// path the editor reports for it.
#[derive(Debug, Clone)]
pub struct OpenDocument {
    pub uri: FileUri,
    pub file_name: String,
}

impl OpenDocument {
    pub fn new(uri: FileUri, file_name: impl Into<String>) -> Self {
        Self {
            uri,
            file_name: file_name.into(),
        }
    }

    /// For hosts that only report a uri. The label base name then falls
    /// back to the uri path.
    pub fn from_uri(uri: FileUri) -> Self {
        let file_name = uri.path().to_string();
        Self { uri, file_name }
    }
}
