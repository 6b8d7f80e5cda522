use std::fmt;

use crate::element::ElementId;

/// Errors that can occur when starting or ending a gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// Attempted to transition between incompatible states
    InvalidStateTransition {
        from: &'static str,
        to: &'static str,
    },
    /// The gesture targets an element that is not on the page
    ElementNotFound(ElementId),
    /// Every element id has been handed out
    IdsExhausted,
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStateTransition { from, to } =>
                write!(f, "Cannot transition from {} to {}", from, to),
            Self::ElementNotFound(id) =>
                write!(f, "Element {} not found", id),
            Self::IdsExhausted =>
                write!(f, "No element ids left in this document"),
        }
    }
}

impl std::error::Error for TransitionError {}
