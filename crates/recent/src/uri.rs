use std::fmt::Display;

use utils::PathTools;

/// Canonical resource identifier of a tracked file, e.g.
/// `file:///home/user/main.rs`. Equality on the full string is the
/// deduplication key within a list.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct FileUri {
    value: String,
}

impl FileUri {
    /// Accepts any string. A value without a scheme has nothing to strip
    /// when building labels.
    pub fn parse(uri: &str) -> FileUri {
        FileUri {
            value: uri.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Path portion, with any `<scheme>://` prefix stripped.
    pub fn path(&self) -> &str {
        PathTools::strip_scheme(&self.value)
    }
}

impl From<FileUri> for String {
    fn from(value: FileUri) -> Self {
        value.value
    }
}

impl Display for FileUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}
