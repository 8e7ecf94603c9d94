//! Positional selection: the nth match among like-named siblings (local)
//! and the nth match across the whole document (global).

use crate::{
    error::PathError,
    path::{Path, wrapped_description},
};

///
/// ChildIndex
///
/// Builder selecting the nth (1-based) match among siblings sharing the
/// same structural fragment. Finish with [`Self::of_type`].
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChildIndex {
    n: u32,
}

impl ChildIndex {
    /// Positional filter over `path`, e.g. the 3rd `div` among its sibling
    /// `div`s.
    pub fn of_type(self, path: &Path) -> Result<Path, PathError> {
        if self.n == 0 {
            return Err(PathError::NonPositiveIndex { index: self.n });
        }

        Ok(Path {
            xpath: format!("{}[{}]", path.query_string(), self.n),
            inside: None,
            alternate: Some(format!("{}[{}]", path.alternate_query_string(), self.n)),
            described: None,
            explanation: Some(format!(
                "child number {} of type {}",
                self.n,
                wrapped_description(path)
            )),
            properties: Vec::new(),
        })
    }
}

/// Start a sibling-local positional selection (1-based).
#[must_use]
pub const fn child_number(n: u32) -> ChildIndex {
    ChildIndex { n }
}

///
/// Occurrence
///
/// Builder selecting the nth (1-based) match across the entire matched
/// set; `n == 0` is the sentinel for the last match. Finish with
/// [`Self::of`].
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Occurrence {
    n: u32,
}

impl Occurrence {
    /// Global occurrence selection over `path`.
    pub fn of(self, path: &Path) -> Result<Path, PathError> {
        if path.query_string().is_empty() {
            return Err(PathError::MissingTargetFragment);
        }

        let prefix = match self.n {
            0 => "the last occurrence of ".to_string(),
            1 => "the first occurrence of ".to_string(),
            n => format!("occurrence number {n} of "),
        };
        let index = if self.n == 0 {
            "last()".to_string()
        } else {
            self.n.to_string()
        };
        let open = if path.query_string().starts_with('(') {
            "("
        } else {
            "(//"
        };

        Ok(Path {
            xpath: format!("{open}{})[{index}]", path.query_string()),
            inside: None,
            alternate: Some(format!("{open}{})[{index}]", path.alternate_query_string())),
            described: None,
            explanation: Some(format!("{prefix}{}", wrapped_description(path))),
            properties: Vec::new(),
        })
    }
}

/// Start a global occurrence selection; `0` selects the last match.
#[must_use]
pub const fn occurrence_number(n: u32) -> Occurrence {
    Occurrence { n }
}

/// The first match of `path` across the whole document.
pub fn first_occurrence_of(path: &Path) -> Result<Path, PathError> {
    occurrence_number(1).of(path)
}

/// The last match of `path` across the whole document.
pub fn last_occurrence_of(path: &Path) -> Result<Path, PathError> {
    occurrence_number(0).of(path)
}

impl Path {
    /// The nth (1-based) match among siblings sharing this fragment.
    pub fn at_index(&self, n: u32) -> Result<Self, PathError> {
        child_number(n).of_type(self)
    }

    /// The nth (0-based) match across the entire matched set.
    pub fn with_global_index(&self, n: u32) -> Result<Self, PathError> {
        occurrence_number(n + 1).of(self)
    }
}
