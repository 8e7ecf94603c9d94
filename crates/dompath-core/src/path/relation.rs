//! Relation combinators: merging two composed paths via a structural axis,
//! choosing between the direct and the re-anchored (alternate) encoding.

use crate::{
    axis::Axis,
    error::PathError,
    path::{Path, wrapped_description},
};
use std::ops::Not;

/// A fragment spanning more than one hierarchy level cannot take a second
/// structural axis directly.
pub(crate) fn has_hierarchy(xpath: &str) -> bool {
    xpath.contains('/')
}

/// The fragment to use when this path is nested under a further axis:
/// the primary form while it is single-level, the re-anchored alternate
/// once it spans hierarchy.
#[must_use]
pub(crate) fn transformed_xpath(path: &Path) -> String {
    if has_hierarchy(&path.query_string()) {
        path.alternate_query_string()
    } else {
        path.query_string()
    }
}

impl Path {
    /// Merge `self` and `other` through `axis`.
    ///
    /// The alternate form `self[opposite-axis::other]` stays valid however
    /// nested either operand already is, so it becomes the primary encoding
    /// whenever the direct form `other/axis::self` would stack a second
    /// axis onto an already-multi-level fragment.
    fn with_relation(
        &self,
        other: &Self,
        axis: Axis,
        phrase: &str,
    ) -> Result<Self, PathError> {
        self.verify_fragments(other)?;

        let processed = match &self.inside {
            Some(scope) => format!("{}[ancestor::{scope}]", self.xpath_without_inside()),
            None => self.query_string(),
        };

        let alternate = format!(
            "{}[{}::{}]",
            self.alternate_query_string(),
            axis.opposite(),
            other.alternate_query_string()
        );

        let xpath = if has_hierarchy(&processed) {
            alternate.clone()
        } else {
            format!("{}/{axis}::{processed}", other.query_string())
        };

        Ok(Self {
            xpath,
            inside: None,
            alternate: Some(alternate),
            described: None,
            explanation: Some(format!("{self}, {phrase} {}", wrapped_description(other))),
            properties: Vec::new(),
        })
    }

    /// This element, positioned after the sibling `other`.
    pub fn after_sibling(&self, other: &Self) -> Result<Self, PathError> {
        self.with_relation(other, Axis::FollowingSibling, "after the sibling")
    }

    /// This element, positioned before the sibling `other`.
    pub fn before_sibling(&self, other: &Self) -> Result<Self, PathError> {
        self.with_relation(other, Axis::PrecedingSibling, "before the sibling")
    }

    /// This element, following `other` in document order.
    pub fn after(&self, other: &Self) -> Result<Self, PathError> {
        self.with_relation(other, Axis::Following, "after")
    }

    /// This element, preceding `other` in document order.
    pub fn before(&self, other: &Self) -> Result<Self, PathError> {
        self.with_relation(other, Axis::Preceding, "before")
    }

    /// This element, a direct child of `other`.
    pub fn child_of(&self, other: &Self) -> Result<Self, PathError> {
        self.with_relation(other, Axis::Child, "child")
    }

    /// This element, an ancestor of `other`.
    pub fn ancestor_of(&self, other: &Self) -> Result<Self, PathError> {
        self.with_relation(other, Axis::Ancestor, "ancestor")
    }

    /// Alias for [`Self::ancestor_of`].
    pub fn containing(&self, other: &Self) -> Result<Self, PathError> {
        self.ancestor_of(other)
    }

    /// Alias for [`Self::ancestor_of`].
    pub fn contains(&self, other: &Self) -> Result<Self, PathError> {
        self.ancestor_of(other)
    }

    /// This element, a descendant of `other`.
    pub fn descendant_of(&self, other: &Self) -> Result<Self, PathError> {
        self.with_relation(other, Axis::Descendant, "descendant")
    }

    /// Alternation: an element matching either `self` or `other`.
    pub fn or(&self, other: &Self) -> Result<Self, PathError> {
        self.verify_fragments(other)?;

        Ok(Self {
            xpath: format!(
                "*[self::{} | self::{}]",
                transformed_xpath(self),
                transformed_xpath(other)
            ),
            inside: None,
            alternate: None,
            described: None,
            explanation: Some(format!(
                "{} or {}",
                wrapped_description(self),
                wrapped_description(other)
            )),
            properties: Vec::new(),
        })
    }
}

/// An element matching anything that does NOT satisfy `path`.
#[must_use]
pub fn anything_except(path: &Path) -> Path {
    Path {
        xpath: format!("*[not(self::{})]", transformed_xpath(path)),
        inside: None,
        alternate: Some(format!("*[not(self::{})]", path.alternate_query_string())),
        described: None,
        explanation: Some(format!("anything except ({path})")),
        properties: Vec::new(),
    }
}

impl Not for &Path {
    type Output = Path;

    fn not(self) -> Self::Output {
        anything_except(self)
    }
}
