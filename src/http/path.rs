/// The non-empty `/`-delimited components of a request path, in order.
///
/// ```
/// # use httpcraft::http::path::PathSegments;
/// let segments = PathSegments::parse("//files/notes.txt/");
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments.first(), Some("files"));
/// assert!(PathSegments::parse("/").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSegments(Vec<String>);

impl PathSegments {
    pub fn parse(path: &str) -> Self {
        Self(
            path.split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn first(&self) -> Option<&str> {
        self.get(0)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Segment at `index`, or `""` when the path is too short.
    pub fn get_or_empty(&self, index: usize) -> &str {
        self.get(index).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

pub fn split_path(path: &str) -> PathSegments {
    PathSegments::parse(path)
}
