//! Structured path representation
//!
//! Paths are parsed once into an optional root, an up-level counter and a list
//! of plain segments. All arithmetic (joining, stripping a prefix, counting
//! depth) happens on that structure; strings only appear at the boundaries.

use super::Separator;

/// Root of an absolute path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathRoot {
    /// `/usr/lib` or `\usr\lib`
    Unix,
    /// `C:/Users` or `C:\Users`, drive letter stored uppercase
    Drive(char),
}

/// A path broken into segments, parsed without regard to the separator style
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentPath {
    root: Option<PathRoot>,
    ups: usize,
    segments: Vec<String>,
    trailing_separator: bool,
}

impl SegmentPath {
    /// Parse a path written with either `/` or `\` separators.
    ///
    /// `.` segments are dropped and `..` cancels the preceding plain segment.
    /// Leading `..` segments are counted as up-levels; on an absolute path
    /// they are clamped at the root.
    pub fn parse(input: &str) -> Self {
        let (root, rest) = split_root(input);
        let mut path = SegmentPath {
            root,
            ups: 0,
            segments: Vec::new(),
            trailing_separator: input.ends_with(Separator::is_separator),
        };

        for segment in rest.split(Separator::is_separator) {
            path.push(segment);
        }

        path
    }

    /// Parse `input` as relative even when it starts with a separator.
    ///
    /// Used for the text following a namespace token, where `/x` means
    /// "`x` inside the namespace" rather than a filesystem root.
    pub fn parse_relative(input: &str) -> Self {
        Self::parse(input.trim_start_matches(Separator::is_separator))
    }

    fn push(&mut self, segment: &str) {
        match segment {
            "" | "." => {}
            ".." => {
                if self.segments.pop().is_none() && self.root.is_none() {
                    self.ups += 1;
                }
            }
            other => self.segments.push(other.to_string()),
        }
    }

    pub fn is_absolute(&self) -> bool {
        self.root.is_some()
    }

    pub fn root(&self) -> Option<&PathRoot> {
        self.root.as_ref()
    }

    /// Number of leading `..` segments
    pub fn ups(&self) -> usize {
        self.ups
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether the original text ended with a separator
    pub fn has_trailing_separator(&self) -> bool {
        self.trailing_separator
    }

    /// Whether the last segment looks like a file name (`main.js`, `lib.rs`)
    pub fn ends_with_file(&self) -> bool {
        if self.trailing_separator {
            return false;
        }
        self.segments
            .last()
            .and_then(|last| std::path::Path::new(last).extension())
            .is_some()
    }

    /// Drop the last segment when it names a file, leaving its directory
    pub fn into_directory(mut self) -> Self {
        if self.ends_with_file() {
            self.segments.pop();
            self.trailing_separator = true;
        }
        self
    }

    /// Prepend `count` up-levels
    pub fn with_extra_ups(mut self, count: usize) -> Self {
        if self.root.is_none() {
            self.ups += count;
        }
        self
    }

    /// Append `other` as if resolving it relative to `self`.
    ///
    /// Up-levels in `other` first consume trailing segments of `self` and
    /// only then add to `self`'s own up-level count.
    pub fn join(mut self, other: &SegmentPath) -> Self {
        for _ in 0..other.ups {
            self.push("..");
        }
        self.segments.extend(other.segments.iter().cloned());
        self.trailing_separator = other.trailing_separator;
        self
    }

    /// Express an absolute path relative to the absolute `base`.
    ///
    /// Returns `None` when either path is relative, the roots differ, or
    /// `self` does not lie under `base`.
    pub fn strip_prefix(&self, base: &SegmentPath) -> Option<SegmentPath> {
        if self.root.is_none() || self.root != base.root {
            return None;
        }
        if self.segments.len() < base.segments.len() {
            return None;
        }

        let matches = self
            .segments
            .iter()
            .zip(&base.segments)
            .all(|(a, b)| segment_eq(&self.root, a, b));
        if !matches {
            return None;
        }

        Some(SegmentPath {
            root: None,
            ups: 0,
            segments: self.segments[base.segments.len()..].to_vec(),
            trailing_separator: self.trailing_separator,
        })
    }

    /// Render with a single separator character.
    ///
    /// An empty relative path renders as `.`.
    pub fn render(&self, separator: Separator) -> String {
        let sep = separator.as_str();
        let body = std::iter::repeat_n("..", self.ups)
            .chain(self.segments.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(sep);

        match &self.root {
            Some(PathRoot::Unix) => format!("{sep}{body}"),
            Some(PathRoot::Drive(letter)) => format!("{letter}:{sep}{body}"),
            None if body.is_empty() => ".".to_string(),
            None => body,
        }
    }
}

fn segment_eq(root: &Option<PathRoot>, a: &str, b: &str) -> bool {
    // Drive-letter paths come from case-insensitive filesystems
    if matches!(root, Some(PathRoot::Drive(_))) {
        a.eq_ignore_ascii_case(b)
    } else {
        a == b
    }
}

fn split_root(input: &str) -> (Option<PathRoot>, &str) {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), Some(':')) if letter.is_ascii_alphabetic() => (
            Some(PathRoot::Drive(letter.to_ascii_uppercase())),
            &input[2..],
        ),
        (Some(c), _) if Separator::is_separator(c) => (Some(PathRoot::Unix), &input[1..]),
        _ => (None, input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_relative_with_ups() {
        let path = SegmentPath::parse("../../bar/baz");
        assert_eq!(path.ups(), 2);
        assert_eq!(path.segments(), ["bar", "baz"]);
        assert!(!path.is_absolute());
    }

    #[test]
    fn test_parse_is_separator_agnostic() {
        let forward = SegmentPath::parse("./a/b/c");
        let backward = SegmentPath::parse(".\\a\\b\\c");
        let mixed = SegmentPath::parse("a\\b/./c");
        assert_eq!(forward.segments(), backward.segments());
        assert_eq!(forward.segments(), mixed.segments());
    }

    #[test]
    fn test_parent_segment_cancels_previous() {
        let path = SegmentPath::parse("a/b/../c/./d");
        assert_eq!(path.ups(), 0);
        assert_eq!(path.segments(), ["a", "c", "d"]);

        let path = SegmentPath::parse("a/../../b");
        assert_eq!(path.ups(), 1);
        assert_eq!(path.segments(), ["b"]);
    }

    #[test]
    fn test_parse_drive_roots() {
        let path = SegmentPath::parse("C://Users/projectPath");
        assert_eq!(path.root(), Some(&PathRoot::Drive('C')));
        assert_eq!(path.segments(), ["Users", "projectPath"]);

        let path = SegmentPath::parse("d:\\work");
        assert_eq!(path.root(), Some(&PathRoot::Drive('D')));
        assert_eq!(path.render(Separator::Backslash), "D:\\work");
    }

    #[test]
    fn test_absolute_path_clamps_ups_at_root() {
        let path = SegmentPath::parse("/../etc");
        assert_eq!(path.root(), Some(&PathRoot::Unix));
        assert_eq!(path.ups(), 0);
        assert_eq!(path.render(Separator::Slash), "/etc");
    }

    #[test]
    fn test_file_detection() {
        assert!(SegmentPath::parse("./src/main.js").ends_with_file());
        assert!(!SegmentPath::parse("./projectPath").ends_with_file());
        assert!(!SegmentPath::parse("./lib.d/").ends_with_file());
        assert!(!SegmentPath::parse("./.config").ends_with_file());

        let dir = SegmentPath::parse("./src/main.js").into_directory();
        assert_eq!(dir.segments(), ["src"]);
    }

    #[test]
    fn test_parse_relative_ignores_leading_separators() {
        let path = SegmentPath::parse_relative("\\..\\qux");
        assert!(!path.is_absolute());
        assert_eq!(path.ups(), 1);
        assert_eq!(path.segments(), ["qux"]);

        let path = SegmentPath::parse_relative("//a/../../b");
        assert_eq!(path.ups(), 1);
        assert_eq!(path.segments(), ["b"]);
    }

    #[test]
    fn test_join_consumes_tail_then_adds_ups() {
        let base = SegmentPath::parse("../bar");
        let joined = base.clone().join(&SegmentPath::parse("./somepath"));
        assert_eq!(joined.render(Separator::Slash), "../bar/somepath");

        let joined = base.join(&SegmentPath::parse("../../x"));
        assert_eq!(joined.render(Separator::Slash), "../../x");
    }

    #[test]
    fn test_strip_prefix() {
        let root = SegmentPath::parse("C:\\Users");
        let caller = SegmentPath::parse("c://users/projectPath/src");
        let relative = caller.strip_prefix(&root).unwrap();
        assert_eq!(relative.segments(), ["projectPath", "src"]);
        assert!(!relative.is_absolute());

        let elsewhere = SegmentPath::parse("D:/Users/projectPath");
        assert!(elsewhere.strip_prefix(&root).is_none());

        let unix_root = SegmentPath::parse("/home/dev");
        assert!(SegmentPath::parse("/home/Dev/x").strip_prefix(&unix_root).is_none());
    }

    #[test]
    fn test_render_empty_and_ups() {
        assert_eq!(SegmentPath::parse(".").render(Separator::Backslash), ".");
        let path = SegmentPath::parse("bar").with_extra_ups(3);
        assert_eq!(path.render(Separator::Backslash), "..\\..\\..\\bar");
    }
}
