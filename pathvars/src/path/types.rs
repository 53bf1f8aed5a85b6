//! Core path value type.
//!
//! Path variables exchange locations as an optional device token, an
//! absolute flag, and an ordered list of segments. [`VariablePath`] is that
//! value, with two textual encodings: the platform-native (OS) string and a
//! portable string that always uses `/`.

use std::fmt;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Separator used by the portable encoding.
pub const PORTABLE_SEPARATOR: char = '/';

/// Device separator (`C:`).
pub const DEVICE_SEPARATOR: char = ':';

/// A segmented path value.
///
/// Unlike [`std::path::PathBuf`], a `VariablePath` does not need to name a
/// real location: its first segment can be a variable reference such as
/// `${PROJECT_LOC}` or `PARENT-1-SRC`, which a resolver later expands.
///
/// `.` and empty segments are dropped on parse, but a trailing separator is
/// remembered. `..` segments are kept
/// verbatim so that values like `${ROOT}/../lib` survive until resolution;
/// call [`VariablePath::canonicalize`] to collapse them.
///
/// # Examples
///
/// ```
/// use pathvars::path::VariablePath;
///
/// let path = VariablePath::from_portable_string("/home/user/project");
/// assert!(path.is_absolute());
/// assert_eq!(path.segment_count(), 3);
/// assert_eq!(path.segment(2), Some("project"));
/// assert_eq!(path.to_portable_string(), "/home/user/project");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct VariablePath {
    device: Option<String>,
    absolute: bool,
    segments: Vec<String>,
    trailing_separator: bool,
}

impl VariablePath {
    /// Create a path from its parts.
    #[must_use]
    pub fn from_parts(device: Option<String>, absolute: bool, segments: Vec<String>) -> Self {
        Self {
            device,
            absolute,
            segments,
            trailing_separator: false,
        }
    }

    /// Create a relative, single-segment path naming a variable.
    ///
    /// The name is taken verbatim; it is not split on separators.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvars::path::VariablePath;
    ///
    /// let path = VariablePath::variable("PROJECT_LOC");
    /// assert!(!path.is_absolute());
    /// assert_eq!(path.segment(0), Some("PROJECT_LOC"));
    /// ```
    #[must_use]
    pub fn variable(name: &str) -> Self {
        Self {
            device: None,
            absolute: false,
            segments: vec![name.to_string()],
            trailing_separator: false,
        }
    }

    /// Parse the portable encoding.
    ///
    /// Only `/` separates segments. A leading `<token>:` before the first
    /// separator is read as the device.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvars::path::VariablePath;
    ///
    /// let path = VariablePath::from_portable_string("C:/work/src");
    /// assert_eq!(path.device(), Some("C:"));
    /// assert_eq!(path.segment_count(), 2);
    /// ```
    #[must_use]
    pub fn from_portable_string(s: &str) -> Self {
        parse(s, &[PORTABLE_SEPARATOR], true)
    }

    /// Parse the platform-native encoding.
    ///
    /// On Windows both `\` and `/` separate segments and drive letters are
    /// recognized; elsewhere only `/` is a separator and `:` is an ordinary
    /// character.
    #[must_use]
    pub fn from_os_string(s: &str) -> Self {
        if cfg!(windows) {
            parse(s, &['\\', PORTABLE_SEPARATOR], true)
        } else {
            parse(s, &[PORTABLE_SEPARATOR], false)
        }
    }

    /// Convert a standard library path.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        Self::from_os_string(&path.to_string_lossy())
    }

    /// The device token (e.g. `C:`), if any.
    #[must_use]
    pub fn device(&self) -> Option<&str> {
        self.device.as_deref()
    }

    /// Whether the path starts at a root.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Whether the path ends with a separator after its last segment.
    #[must_use]
    pub fn has_trailing_separator(&self) -> bool {
        self.trailing_separator
    }

    /// Whether the path is relative with no device and no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.device.is_none() && !self.absolute && self.segments.is_empty()
    }

    /// Number of segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// The segment at `index`, if present.
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(String::as_str)
    }

    /// All segments in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether this path is a prefix of `other`.
    ///
    /// Devices must match (ignoring ASCII case) and both paths must be
    /// absolute or both relative. A path with no segments is a prefix of every
    /// path of the same kind on the same device.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvars::path::VariablePath;
    ///
    /// let root = VariablePath::from_portable_string("/x");
    /// let child = VariablePath::from_portable_string("/x/y/z");
    /// assert!(root.is_prefix_of(&child));
    /// assert!(!child.is_prefix_of(&root));
    /// ```
    #[must_use]
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        let same_device = match (&self.device, &other.device) {
            (None, None) => true,
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            _ => false,
        };
        if !same_device || self.absolute != other.absolute {
            return false;
        }
        if self.segments.len() > other.segments.len() {
            return false;
        }
        self.segments
            .iter()
            .zip(&other.segments)
            .all(|(a, b)| a == b)
    }

    /// Number of leading segments shared with `other`. Devices are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvars::path::VariablePath;
    ///
    /// let a = VariablePath::from_portable_string("/a/b/c/file.txt");
    /// let b = VariablePath::from_portable_string("/a/b/d");
    /// assert_eq!(a.matching_first_segments(&b), 2);
    /// ```
    #[must_use]
    pub fn matching_first_segments(&self, other: &Self) -> usize {
        self.segments
            .iter()
            .zip(&other.segments)
            .take_while(|(a, b)| a == b)
            .count()
    }

    /// Drop `count` trailing segments. Saturates at zero segments.
    #[must_use]
    pub fn remove_last_segments(&self, count: usize) -> Self {
        let keep = self.segments.len().saturating_sub(count);
        Self {
            device: self.device.clone(),
            absolute: self.absolute,
            segments: self.segments[..keep].to_vec(),
            trailing_separator: self.trailing_separator && keep > 0,
        }
    }

    /// Drop `count` leading segments, yielding a relative path.
    #[must_use]
    pub fn remove_first_segments(&self, count: usize) -> Self {
        let skip = count.min(self.segments.len());
        let segments = self.segments[skip..].to_vec();
        Self {
            device: None,
            absolute: false,
            trailing_separator: self.trailing_separator && !segments.is_empty(),
            segments,
        }
    }

    /// Append the segments of `other`. Its device and absolute flag are
    /// ignored; its trailing separator is kept.
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        if other.segments.is_empty() {
            return self.clone();
        }
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        Self {
            device: self.device.clone(),
            absolute: self.absolute,
            segments,
            trailing_separator: other.trailing_separator,
        }
    }

    /// Append a single literal segment.
    #[must_use]
    pub fn append_segment(&self, segment: &str) -> Self {
        let mut path = self.clone();
        path.segments.push(segment.to_string());
        path.trailing_separator = false;
        path
    }

    /// Collapse `..` segments against their predecessors.
    ///
    /// Leading `..` segments are kept on relative paths and dropped on
    /// absolute ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvars::path::VariablePath;
    ///
    /// let path = VariablePath::from_portable_string("/a/b/../c");
    /// assert_eq!(path.canonicalize().to_portable_string(), "/a/c");
    /// ```
    #[must_use]
    pub fn canonicalize(&self) -> Self {
        let mut segments: Vec<String> = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            if segment == ".." {
                match segments.last() {
                    Some(last) if last != ".." => {
                        segments.pop();
                    }
                    _ if self.absolute => {}
                    _ => segments.push(segment.clone()),
                }
            } else {
                segments.push(segment.clone());
            }
        }
        Self {
            device: self.device.clone(),
            absolute: self.absolute,
            trailing_separator: self.trailing_separator && !segments.is_empty(),
            segments,
        }
    }

    /// Lower-case every segment and the device.
    #[must_use]
    pub fn to_lowercase(&self) -> Self {
        Self {
            device: self.device.as_ref().map(|d| d.to_lowercase()),
            absolute: self.absolute,
            segments: self.segments.iter().map(|s| s.to_lowercase()).collect(),
            trailing_separator: self.trailing_separator,
        }
    }

    /// Render with `/` separators.
    #[must_use]
    pub fn to_portable_string(&self) -> String {
        self.render(PORTABLE_SEPARATOR)
    }

    /// Render with the platform separator.
    #[must_use]
    pub fn to_os_string(&self) -> String {
        self.render(MAIN_SEPARATOR)
    }

    /// Convert to a standard library path.
    #[must_use]
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(self.to_os_string())
    }

    fn render(&self, separator: char) -> String {
        let mut out = String::new();
        if let Some(device) = &self.device {
            out.push_str(device);
        }
        if self.absolute {
            out.push(separator);
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push(separator);
            }
            out.push_str(segment);
        }
        if self.trailing_separator {
            out.push(separator);
        }
        out
    }
}

fn parse(s: &str, separators: &[char], detect_device: bool) -> VariablePath {
    let mut rest = s;
    let mut device = None;

    if detect_device {
        if let Some(idx) = rest.find(DEVICE_SEPARATOR) {
            if idx > 0 && !rest[..idx].contains(separators) {
                device = Some(rest[..=idx].to_string());
                rest = &rest[idx + 1..];
            }
        }
    }

    let absolute = rest.starts_with(separators);
    let segments: Vec<String> = rest
        .split(separators)
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .map(str::to_string)
        .collect();
    let trailing_separator = !segments.is_empty() && rest.ends_with(separators);

    VariablePath {
        device,
        absolute,
        segments,
        trailing_separator,
    }
}

impl fmt::Display for VariablePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_os_string())
    }
}

impl FromStr for VariablePath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_os_string(s))
    }
}

impl From<&Path> for VariablePath {
    fn from(path: &Path) -> Self {
        Self::from_path(path)
    }
}

impl From<&str> for VariablePath {
    fn from(s: &str) -> Self {
        Self::from_os_string(s)
    }
}

impl Serialize for VariablePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_portable_string())
    }
}

impl<'de> Deserialize<'de> for VariablePath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_portable_string(&s))
    }
}
