use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Axis
///
/// Closed enumeration of the XPath axes the combinators emit.
/// `opposite` is the inversion table used when an expression is re-anchored
/// at the other operand; it is involutive for every variant.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Axis {
    Parent,
    Child,
    Ancestor,
    Descendant,
    Following,
    Preceding,
    FollowingSibling,
    PrecedingSibling,
    SelfAxis,
    AncestorOrSelf,
    DescendantOrSelf,
}

impl Axis {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Child => "child",
            Self::Ancestor => "ancestor",
            Self::Descendant => "descendant",
            Self::Following => "following",
            Self::Preceding => "preceding",
            Self::FollowingSibling => "following-sibling",
            Self::PrecedingSibling => "preceding-sibling",
            Self::SelfAxis => "self",
            Self::AncestorOrSelf => "ancestor-or-self",
            Self::DescendantOrSelf => "descendant-or-self",
        }
    }

    /// The axis that expresses the same relation anchored at the other node.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Parent => Self::Child,
            Self::Child => Self::Parent,
            Self::Ancestor => Self::Descendant,
            Self::Descendant => Self::Ancestor,
            Self::Following => Self::Preceding,
            Self::Preceding => Self::Following,
            Self::FollowingSibling => Self::PrecedingSibling,
            Self::PrecedingSibling => Self::FollowingSibling,
            Self::SelfAxis => Self::SelfAxis,
            Self::AncestorOrSelf => Self::DescendantOrSelf,
            Self::DescendantOrSelf => Self::AncestorOrSelf,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
