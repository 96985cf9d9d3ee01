use crate::error::NavigationError;
use std::fmt;

/// A path with an optional fragment, e.g. `/comparison/springboot#di`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    path: String,
    fragment: Option<String>,
}

impl Location {
    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
            fragment: None,
        }
    }

    /// Strict parse used by regular navigation.
    pub fn parse(target: &str) -> Result<Self, NavigationError> {
        if target.is_empty() {
            return Err(NavigationError::EmptyTarget);
        }
        if !target.starts_with('/') {
            return Err(NavigationError::RelativeTarget(target.to_string()));
        }
        if target.chars().any(char::is_whitespace) {
            return Err(NavigationError::InvalidCharacter(target.to_string()));
        }
        Ok(Self::from_parts(target))
    }

    /// Lenient conversion used when regular navigation fails. Never fails.
    pub fn assign(target: &str) -> Self {
        let cleaned: String = target.chars().filter(|c| !c.is_whitespace()).collect();
        if cleaned.starts_with('/') {
            Self::from_parts(&cleaned)
        } else {
            Self::from_parts(&format!("/{cleaned}"))
        }
    }

    fn from_parts(target: &str) -> Self {
        let (path, fragment) = match target.split_once('#') {
            Some((path, fragment)) => (path, Some(fragment)),
            None => (target, None),
        };

        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() { "/" } else { trimmed };

        Self {
            path: path.to_string(),
            fragment: fragment.filter(|f| !f.is_empty()).map(str::to_string),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Non-empty path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|s| !s.is_empty())
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fragment {
            Some(fragment) => write!(f, "{}#{}", self.path, fragment),
            None => f.write_str(&self.path),
        }
    }
}
