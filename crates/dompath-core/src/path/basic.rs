use crate::{error::PathError, fragment, path::wrapped_description, property::Property};
use serde::{Deserialize, Serialize};

///
/// Path
///
/// The central immutable value type: an element matching a structural
/// fragment plus an ordered sequence of boolean conditions. Every
/// combinator returns a new `Path`; the type exposes no mutators, so values
/// can be shared and recombined freely (including across threads).
///
/// Two paths are equal iff all fields match structurally.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Path {
    /// Primary structural fragment. Empty only at the root sentinel.
    pub(crate) xpath: String,
    /// Ancestor-scoping fragment ("somewhere inside this container").
    pub(crate) inside: Option<String>,
    /// Semantically equivalent fragment anchored at self, safe to nest
    /// under a further relation axis.
    pub(crate) alternate: Option<String>,
    /// Caller-supplied description override.
    pub(crate) described: Option<String>,
    /// Description accumulated through combinator calls.
    pub(crate) explanation: Option<String>,
    /// Conjunctive conditions, order preserved for description rendering.
    pub(crate) properties: Vec<Property>,
}

impl Path {
    pub(crate) fn from_xpath(xpath: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            xpath: xpath.into(),
            inside: None,
            alternate: None,
            described: None,
            explanation: Some(explanation.into()),
            properties: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Rendering (pure projections, never fail)
    // ------------------------------------------------------------------

    fn properties_clause(&self) -> String {
        self.properties
            .iter()
            .map(|property| format!("[{}]", property.xpath()))
            .collect()
    }

    /// The full XPath text: containment prefix, structural fragment, and
    /// bracketed condition clauses in insertion order.
    #[must_use]
    pub fn query_string(&self) -> String {
        let scope = self
            .inside
            .as_ref()
            .map(|container| format!("{container}//"))
            .unwrap_or_default();

        format!("{scope}{}{}", self.xpath, self.properties_clause())
    }

    /// The nesting-safe equivalent, anchored at this element. Falls back to
    /// the primary fragment (or a wildcard at the root sentinel).
    #[must_use]
    pub fn alternate_query_string(&self) -> String {
        let base = self.alternate.as_deref().unwrap_or_else(|| {
            if self.xpath.is_empty() {
                "*"
            } else {
                &self.xpath
            }
        });

        format!("{base}{}", self.properties_clause())
    }

    pub(crate) fn xpath_without_inside(&self) -> String {
        let base = if self.xpath.is_empty() { "*" } else { &self.xpath };

        format!("{base}{}", self.properties_clause())
    }

    /// The synchronized natural-language description.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }

    pub(crate) fn verify_fragments(&self, other: &Self) -> Result<(), PathError> {
        if self.query_string().is_empty() {
            return Err(PathError::MissingSourceFragment);
        }
        if other.query_string().is_empty() {
            return Err(PathError::MissingTargetFragment);
        }

        Ok(())
    }

    // ------------------------------------------------------------------
    // Condition attachment
    // ------------------------------------------------------------------

    /// Attach one condition.
    #[must_use]
    pub fn that(&self, property: impl Into<Property>) -> Self {
        self.that_all([property.into()])
    }

    /// Attach several conditions, order preserved.
    ///
    /// When a description override is present, the existing conditions are
    /// folded into the structural fragment and a fresh description chain is
    /// seeded from the override.
    #[must_use]
    pub fn that_all<I>(&self, properties: I) -> Self
    where
        I: IntoIterator<Item = Property>,
    {
        if let Some(described) = &self.described {
            Self {
                xpath: self.xpath_without_inside(),
                inside: self.inside.clone(),
                alternate: self.alternate.clone(),
                described: None,
                explanation: Some(described.clone()),
                properties: properties.into_iter().collect(),
            }
        } else {
            let mut combined = self.properties.clone();
            combined.extend(properties);

            Self {
                properties: combined,
                ..self.clone()
            }
        }
    }

    /// Alias for [`Self::that`], reading better mid-chain.
    #[must_use]
    pub fn and(&self, property: impl Into<Property>) -> Self {
        self.that(property)
    }

    /// Replace the human description of this path; later combinators keep
    /// the override verbatim unless more structure is layered on.
    #[must_use]
    pub fn described_by(&self, description: impl Into<String>) -> Self {
        Self {
            described: Some(description.into()),
            ..self.clone()
        }
    }

    // ------------------------------------------------------------------
    // Containment scope
    // ------------------------------------------------------------------

    /// Scope this path to elements somewhere underneath `container`.
    pub fn inside(&self, container: &Self) -> Result<Self, PathError> {
        if container.query_string().is_empty() {
            return Err(PathError::MissingTargetFragment);
        }

        Ok(Self {
            xpath: self.xpath_without_inside(),
            inside: Some(container.query_string()),
            alternate: self.alternate.clone(),
            described: None,
            explanation: Some(format!("{self}, inside {}", wrapped_description(container))),
            properties: Vec::new(),
        })
    }

    /// Anchor this path at the top of the document (`//`-prefixed form).
    #[must_use]
    pub fn inside_top_level(&self) -> Self {
        Self {
            xpath: fragment::inside_top_level(&self.query_string()),
            inside: None,
            alternate: None,
            described: Some(self.to_string()),
            explanation: None,
            properties: Vec::new(),
        }
    }
}

/// A root path for an arbitrary element tag (or any other raw structural
/// fragment); the fragment doubles as the initial description.
#[must_use]
pub fn custom_element(xpath: &str) -> Path {
    Path::from_xpath(xpath, xpath)
}
