//! Description rendering: the natural-language projection of a path, kept
//! in lockstep with the structural composition that produced it.

use crate::path::Path;
use std::fmt;

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(described) = &self.described {
            if self.explanation.as_ref() != Some(described) {
                return write!(f, "{described}");
            }
        }

        let base = self
            .explanation
            .clone()
            .unwrap_or_else(|| format!("xpath: \"{}\"", self.xpath));

        let single_base = !base.contains(", ") || self.described.as_deref() == Some(base.as_str());

        let rendered = match self.properties.as_slice() {
            [] => base,
            [property] if single_base => {
                let text = property.to_string();
                let connective = if text.starts_with("has") || text.starts_with("is") {
                    "that "
                } else {
                    ""
                };

                format!("{base} {connective}{text}")
            }
            [first, second] if !base.contains(' ') => {
                format!("{base}, that {first}, and {second}")
            }
            properties => {
                let listed = properties
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");

                if base.contains("with properties") {
                    format!("{base}, and [{listed}]")
                } else {
                    format!("{base}, that [{listed}]")
                }
            }
        };

        write!(f, "{rendered}")
    }
}

/// Parenthesize a path description when it spans several words, so it stays
/// readable inside a larger phrase.
#[must_use]
pub(crate) fn wrapped_description(path: &Path) -> String {
    let description = path.to_string();

    if description.trim().contains(' ') {
        format!("({description})")
    } else {
        description
    }
}
