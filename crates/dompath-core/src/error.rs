use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// PathError
///
/// Construction-time error taxonomy for path composition.
/// Raised at the call that violates the contract; rendering an
/// already-constructed path (`query_string`, `describe`) never fails.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
pub enum PathError {
    #[error("cannot compose: the receiving expression has no usable xpath fragment")]
    MissingSourceFragment,

    #[error("cannot compose: the target expression has no usable xpath fragment")]
    MissingTargetFragment,

    #[error("position index must be a positive (1-based) value, got {index}")]
    NonPositiveIndex { index: u32 },
}
