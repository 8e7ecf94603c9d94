use crate::path::Path;
use serde::{Deserialize, Serialize};

///
/// CountOp
///
/// Comparison qualifier for counted conditions. Each variant carries the
/// XPath comparison symbol and the English phrase fragment used by the
/// paired description.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum CountOp {
    Exactly,
    AtLeast,
    AtMost,
}

impl CountOp {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Exactly => "=",
            Self::AtLeast => ">=",
            Self::AtMost => "<=",
        }
    }

    /// Phrase fragment, padded so it can be spliced between words.
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::Exactly => " ",
            Self::AtLeast => " at least ",
            Self::AtMost => " at most ",
        }
    }
}

///
/// Occurrences
///
/// A sub-expression paired with a cardinality bound and qualifier:
/// "at least 2 occurrences of X". Used as a counted relation target.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Occurrences {
    path: Path,
    n: u32,
    op: CountOp,
}

impl Occurrences {
    #[must_use]
    pub const fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn n(&self) -> u32 {
        self.n
    }

    #[must_use]
    pub const fn op(&self) -> CountOp {
        self.op
    }
}

///
/// OccurrenceBound
///
/// Intermediate builder holding a bound and qualifier before the target
/// expression is supplied. A bound is a distinct type from `Occurrences`,
/// so an unfinished builder cannot appear where a counted target is
/// required.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OccurrenceBound {
    n: u32,
    op: CountOp,
}

impl OccurrenceBound {
    /// Finish the builder by naming the counted sub-expression.
    #[must_use]
    pub fn occurrences_of(self, path: &Path) -> Occurrences {
        debug_assert!(self.n >= 1, "occurrence bound must be positive");

        Occurrences {
            path: path.clone(),
            n: self.n,
            op: self.op,
        }
    }
}

/// Start a counted condition matching `n` or more occurrences.
#[must_use]
pub const fn at_least(n: u32) -> OccurrenceBound {
    OccurrenceBound {
        n,
        op: CountOp::AtLeast,
    }
}

/// Start a counted condition matching `n` or fewer occurrences.
#[must_use]
pub const fn at_most(n: u32) -> OccurrenceBound {
    OccurrenceBound {
        n,
        op: CountOp::AtMost,
    }
}

/// Start a counted condition matching exactly `n` occurrences.
#[must_use]
pub const fn exactly(n: u32) -> OccurrenceBound {
    OccurrenceBound {
        n,
        op: CountOp::Exactly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::custom_element;

    #[test]
    fn qualifier_symbols_and_phrases() {
        assert_eq!(CountOp::Exactly.symbol(), "=");
        assert_eq!(CountOp::AtLeast.symbol(), ">=");
        assert_eq!(CountOp::AtMost.symbol(), "<=");
        assert_eq!(CountOp::Exactly.phrase(), " ");
        assert_eq!(CountOp::AtLeast.phrase(), " at least ");
        assert_eq!(CountOp::AtMost.phrase(), " at most ");
    }

    #[test]
    fn bound_finishes_into_occurrences() {
        let div = custom_element("div");
        let counted = at_least(2).occurrences_of(&div);

        assert_eq!(counted.n(), 2);
        assert_eq!(counted.op(), CountOp::AtLeast);
        assert_eq!(counted.path(), &div);
    }
}
