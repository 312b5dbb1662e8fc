use std::cmp::Ordering;
use std::fmt;

/// Oldest Python release the generated project supports.
pub const MIN_PYTHON_VERSION: &str = "3.7";

/// Dotted numeric interpreter version (e.g. "3.11.4").
#[derive(Debug, Clone)]
pub struct PythonVersion {
    parts: Vec<u32>,
}

impl PythonVersion {
    /// Parse a version string into a `PythonVersion`.
    ///
    /// Accepts a leading `Python ` label as printed by `python --version`.
    /// Returns `None` for empty input or non-numeric segments.
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        let trimmed = trimmed.strip_prefix("Python ").unwrap_or(trimmed).trim();
        if trimmed.is_empty() {
            return None;
        }

        let mut parts = Vec::new();
        for segment in trimmed.split('.') {
            parts.push(segment.parse::<u32>().ok()?);
        }
        Some(Self { parts })
    }

    /// The minimum version cordboot accepts.
    pub fn minimum() -> Self {
        Self { parts: vec![3, 7] }
    }

    pub fn is_supported(&self) -> bool {
        *self >= Self::minimum()
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.parts.iter().map(u32::to_string).collect();
        write!(f, "{}", rendered.join("."))
    }
}

impl PartialEq for PythonVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PythonVersion {}

impl PartialOrd for PythonVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PythonVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let max_len = self.parts.len().max(other.parts.len());
        for idx in 0..max_len {
            let left_value = *self.parts.get(idx).unwrap_or(&0);
            let right_value = *other.parts.get(idx).unwrap_or(&0);
            match left_value.cmp(&right_value) {
                Ordering::Less => return Ordering::Less,
                Ordering::Greater => return Ordering::Greater,
                Ordering::Equal => {}
            }
        }
        Ordering::Equal
    }
}
