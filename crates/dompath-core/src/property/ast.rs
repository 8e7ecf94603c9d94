use crate::{count::CountOp, fragment};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr, Not};

///
/// Property
///
/// A boolean condition attachable to a path: an XPath condition fragment
/// paired with the human-readable description of the same condition.
/// Immutable; logical combinators allocate a new property.
///

#[derive(Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[display("{text}")]
pub struct Property {
    xpath: String,
    text: String,
}

impl Property {
    pub(crate) fn new(xpath: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            xpath: xpath.into(),
            text: text.into(),
        }
    }

    /// Escape hatch: a property from a raw condition fragment and its
    /// description. The fragment is taken as-is.
    #[must_use]
    pub fn raw(xpath: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(xpath, description)
    }

    #[must_use]
    pub fn xpath(&self) -> &str {
        &self.xpath
    }

    /// Conjunction, `(a and b)` in both the fragment and the description.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::new(
            format!("({} and {})", self.xpath, other.xpath),
            format!("({} and {})", self.text, other.text),
        )
    }

    /// Disjunction, `(a or b)` in both the fragment and the description.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::new(
            format!("({} or {})", self.xpath, other.xpath),
            format!("({} or {})", self.text, other.text),
        )
    }

    /// Conjunction with the negation of `other`.
    #[must_use]
    pub fn and_not(self, other: Self) -> Self {
        self.and(not(other))
    }
}

/// Negate a property, `not(<fragment>)` / `not (<description>)`.
#[must_use]
pub fn not(property: Property) -> Property {
    Property::new(
        fragment::does_not_exist(&property.xpath),
        format!("not ({})", property.text),
    )
}

impl BitAnd for Property {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for Property {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl Not for Property {
    type Output = Self;

    fn not(self) -> Self::Output {
        not(self)
    }
}

///
/// CountedProperty
///
/// A child-count condition carrying its numeric bound, open to refinement
/// by a comparison qualifier before freezing into a plain `Property`.
/// Unrefined, it reads as the exact count.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CountedProperty {
    n: u32,
    xpath: String,
    text: String,
}

impl CountedProperty {
    pub(crate) fn new(n: u32, xpath: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            n,
            xpath: xpath.into(),
            text: text.into(),
        }
    }

    fn with_op(self, op: CountOp) -> Property {
        Property::new(
            fragment::counted("./*", self.n, op),
            format!("has{}{} children", op.phrase(), self.n),
        )
    }

    #[must_use]
    pub fn exactly(self) -> Property {
        self.with_op(CountOp::Exactly)
    }

    #[must_use]
    pub fn or_more(self) -> Property {
        self.with_op(CountOp::AtLeast)
    }

    #[must_use]
    pub fn or_less(self) -> Property {
        self.with_op(CountOp::AtMost)
    }
}

impl From<CountedProperty> for Property {
    fn from(counted: CountedProperty) -> Self {
        Self::new(counted.xpath, counted.text)
    }
}
