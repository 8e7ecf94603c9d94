//! Relation-valued properties: conditions expressed against other paths
//! (ancestry, containment, sibling order), optionally with a cardinality
//! bound on the number of related nodes.

use crate::{
    axis::Axis,
    count::Occurrences,
    fragment,
    path::{Path, transformed_xpath, wrapped_description},
    property::ast::Property,
};

///
/// RelationTarget
///
/// The operand of a relation-valued property: one path, several paths
/// (joined conjunctively), or a counted occurrence bound. Each relation
/// factory consumes every variant exhaustively.
///

#[derive(Clone, Debug)]
pub enum RelationTarget {
    One(Path),
    Many(Vec<Path>),
    Counted(Occurrences),
}

impl From<&Path> for RelationTarget {
    fn from(path: &Path) -> Self {
        Self::One(path.clone())
    }
}

impl From<Path> for RelationTarget {
    fn from(path: Path) -> Self {
        Self::One(path)
    }
}

impl From<Vec<Path>> for RelationTarget {
    fn from(paths: Vec<Path>) -> Self {
        Self::Many(paths)
    }
}

impl From<&[&Path]> for RelationTarget {
    fn from(paths: &[&Path]) -> Self {
        Self::Many(paths.iter().map(|path| (*path).clone()).collect())
    }
}

impl<const N: usize> From<[&Path; N]> for RelationTarget {
    fn from(paths: [&Path; N]) -> Self {
        Self::Many(paths.iter().map(|path| (*path).clone()).collect())
    }
}

impl From<Occurrences> for RelationTarget {
    fn from(counted: Occurrences) -> Self {
        Self::Counted(counted)
    }
}

///
/// ElementRelation
///
/// Internal builder joining a relation axis, its descriptive wording, and a
/// target into a single property. `noun` carries the singular/plural pair
/// for relations that name the related node ("descendant"/"descendants");
/// relations without one ("is before") fall back to "occurrences" in the
/// counted form.
///

struct ElementRelation {
    verb: &'static str,
    noun: Option<(&'static str, &'static str)>,
    target: RelationTarget,
}

impl ElementRelation {
    fn into_property(self, single: impl Fn(&Path) -> String) -> Property {
        let xpath = match &self.target {
            RelationTarget::One(path) => single(path),
            RelationTarget::Many(paths) => {
                debug_assert!(!paths.is_empty(), "relation requires at least one target");

                let joined = paths.iter().map(&single).collect::<Vec<_>>().join(") and (");
                if paths.len() > 1 {
                    format!("({joined})")
                } else {
                    joined
                }
            }
            RelationTarget::Counted(counted) => {
                fragment::counted(&single(counted.path()), counted.n(), counted.op())
            }
        };

        Property::new(xpath, self.describe())
    }

    fn describe(&self) -> String {
        match &self.target {
            RelationTarget::One(path) => format!(
                "{}: {}",
                self.label(false),
                wrapped_description(path)
            ),
            RelationTarget::Many(paths) if paths.len() == 1 => format!(
                "{}: {}",
                self.label(false),
                wrapped_description(&paths[0])
            ),
            RelationTarget::Many(paths) => {
                let listed = paths
                    .iter()
                    .map(wrapped_description)
                    .collect::<Vec<_>>()
                    .join(", ");

                format!("{}: [{listed}]", self.label(true))
            }
            RelationTarget::Counted(counted) => format!(
                "{}{}{} {} of type {}",
                self.verb,
                counted.op().phrase(),
                counted.n(),
                self.noun.map_or("occurrences", |(_, plural)| plural),
                wrapped_description(counted.path())
            ),
        }
    }

    fn label(&self, plural: bool) -> String {
        match self.noun {
            Some((singular, plural_form)) => {
                format!("{} {}", self.verb, if plural { plural_form } else { singular })
            }
            None => self.verb.to_string(),
        }
    }
}

fn axis_relation(
    axis: Axis,
    verb: &'static str,
    noun: Option<(&'static str, &'static str)>,
    target: impl Into<RelationTarget>,
) -> Property {
    ElementRelation {
        verb,
        noun,
        target: target.into(),
    }
    .into_property(move |path| format!("{axis}::{}", transformed_xpath(path)))
}

/// The element is a direct child of `path`.
#[must_use]
pub fn is_child_of(path: &Path) -> Property {
    Property::new(
        format!("parent::{}", transformed_xpath(path)),
        format!("is child of {}", wrapped_description(path)),
    )
}

pub use is_child_of as has_parent;

/// The element has `path` among its ancestors.
#[must_use]
pub fn has_ancestor(path: &Path) -> Property {
    Property::new(
        format!("ancestor::{}", transformed_xpath(path)),
        format!("has ancestor: {}", wrapped_description(path)),
    )
}

pub use has_ancestor as is_contained_in;
pub use has_ancestor as is_descendant_of;
pub use has_ancestor as is_inside;

/// The element is a direct parent of the target(s).
#[must_use]
pub fn is_parent_of(target: impl Into<RelationTarget>) -> Property {
    axis_relation(Axis::Child, "has", Some(("child", "children")), target)
}

pub use is_parent_of as has_child;

/// The element has the target(s) among its descendants.
#[must_use]
pub fn contains(target: impl Into<RelationTarget>) -> Property {
    axis_relation(
        Axis::Descendant,
        "has",
        Some(("descendant", "descendants")),
        target,
    )
}

pub use contains as has_descendant;
pub use contains as is_ancestor_of;

/// The element precedes the target(s) among its siblings.
#[must_use]
pub fn is_before_sibling(target: impl Into<RelationTarget>) -> Property {
    axis_relation(
        Axis::FollowingSibling,
        "is before",
        Some(("sibling", "siblings")),
        target,
    )
}

/// The element follows the target(s) among its siblings.
#[must_use]
pub fn is_after_sibling(target: impl Into<RelationTarget>) -> Property {
    axis_relation(
        Axis::PrecedingSibling,
        "is after",
        Some(("sibling", "siblings")),
        target,
    )
}

/// The element shares a parent with the target(s), in either order.
#[must_use]
pub fn is_sibling_of(target: impl Into<RelationTarget>) -> Property {
    let target = target.into();

    // Counting needs a node-set union; the boolean either-order form is
    // only valid as a standalone condition.
    if let RelationTarget::Counted(counted) = &target {
        let transformed = transformed_xpath(counted.path());

        return Property::new(
            fragment::counted(
                &format!("preceding-sibling::{transformed} | following-sibling::{transformed}"),
                counted.n(),
                counted.op(),
            ),
            format!(
                "has{}{} siblings of type {}",
                counted.op().phrase(),
                counted.n(),
                wrapped_description(counted.path())
            ),
        );
    }

    ElementRelation {
        verb: "has",
        noun: Some(("sibling", "siblings")),
        target,
    }
    .into_property(|path| {
        let transformed = transformed_xpath(path);
        format!("(preceding-sibling::{transformed}) or (following-sibling::{transformed})")
    })
}

/// The element precedes the target(s) in document order.
#[must_use]
pub fn is_before(target: impl Into<RelationTarget>) -> Property {
    axis_relation(Axis::Following, "is before", None, target)
}

/// The element follows the target(s) in document order.
#[must_use]
pub fn is_after(target: impl Into<RelationTarget>) -> Property {
    axis_relation(Axis::Preceding, "is after", None, target)
}
