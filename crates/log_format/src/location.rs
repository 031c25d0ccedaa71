use core::fmt;

pub const UNKNOWN_FILE: &str = "<unknown file>";

/// Strips everything up to and including the last `/` of a source path.
pub fn short_file(file: Option<&str>) -> &str {
    match file {
        Some(path) => match path.rfind('/') {
            Some(idx) => &path[idx + 1..],
            None => path,
        },
        None => UNKNOWN_FILE,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation<'a> {
    pub file: Option<&'a str>,
    pub line: u32,
}

impl<'a> SourceLocation<'a> {
    pub const fn new(file: Option<&'a str>, line: u32) -> Self {
        Self { file, line }
    }
}

impl fmt::Display for SourceLocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", short_file(self.file), self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn keeps_last_component() {
        assert_eq!(short_file(Some("a/b/c.cpp")), "c.cpp");
        assert_eq!(short_file(Some("/abs/path/main.rs")), "main.rs");
    }

    #[test]
    fn no_separator_is_unchanged() {
        assert_eq!(short_file(Some("nofile.cpp")), "nofile.cpp");
    }

    #[test]
    fn trailing_separator_leaves_empty_name() {
        assert_eq!(short_file(Some("dir/")), "");
    }

    #[test]
    fn missing_file() {
        assert_eq!(short_file(None), "<unknown file>");
    }

    #[test]
    fn display() {
        assert_eq!(SourceLocation::new(Some("src/net/wifi.rs"), 42).to_string(), "wifi.rs:42");
        assert_eq!(SourceLocation::new(None, 7).to_string(), "<unknown file>:7");
    }
}
