pub struct PathTools;

impl PathTools {
    pub const DIRECTORY_SEPARATOR_CHAR: char = '/';
    pub const SCHEME_SEPARATOR: &'static str = "://";

    /// Last segment of the path, ignoring trailing separators.
    pub fn basename(path: &str) -> &str {
        let trimmed = path.trim_end_matches(Self::DIRECTORY_SEPARATOR_CHAR);
        match trimmed.rfind(Self::DIRECTORY_SEPARATOR_CHAR) {
            Some(i) => &trimmed[i + 1..],
            None => trimmed,
        }
    }

    /// Strips a leading `<scheme>://` prefix. A separator that appears
    /// after the first path segment is not a scheme and is left alone.
    pub fn strip_scheme(uri: &str) -> &str {
        match uri.find(Self::SCHEME_SEPARATOR) {
            Some(i) if !uri[..i].contains(Self::DIRECTORY_SEPARATOR_CHAR) => {
                &uri[i + Self::SCHEME_SEPARATOR.len()..]
            }
            _ => uri,
        }
    }
}
