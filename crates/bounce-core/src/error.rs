//! Errors raised when component data violates its invariants.

use thiserror::Error;

use crate::enums::ComponentKind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComponentError {
    #[error("{kind:?} has non-finite value(s): ({x}, {y})")]
    NonFinite { kind: ComponentKind, x: f64, y: f64 },

    #[error("friction must be within [0, 1], got {0}")]
    FrictionOutOfRange(f64),

    #[error("gravity magnitude must be finite and >= 0, got {0}")]
    InvalidGravity(f64),

    #[error("circle radius must be finite and > 0, got {0}")]
    InvalidRadius(f64),

    #[error("easing must be within (0, 1], got {0}")]
    EasingOutOfRange(f64),

    #[error("canvas extent must be finite and > 0, got {width}x{height}")]
    InvalidExtent { width: f64, height: f64 },
}
