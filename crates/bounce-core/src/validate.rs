//! Invariant checks for component data.
//!
//! Simulation steps are total and never re-check their inputs, so every
//! component is validated once, when it is attached to an entity.

use crate::components::{Canvas, Circle, Follow, Gravity, Position, Velocity};
use crate::enums::ComponentKind;
use crate::error::ComponentError;

fn finite_pair(kind: ComponentKind, x: f64, y: f64) -> Result<(), ComponentError> {
    if x.is_finite() && y.is_finite() {
        Ok(())
    } else {
        Err(ComponentError::NonFinite { kind, x, y })
    }
}

pub fn position(p: &Position) -> Result<(), ComponentError> {
    finite_pair(ComponentKind::Position, p.x, p.y)
}

pub fn velocity(v: &Velocity) -> Result<(), ComponentError> {
    finite_pair(ComponentKind::Velocity, v.vx, v.vy)?;
    if !(0.0..=1.0).contains(&v.friction) {
        return Err(ComponentError::FrictionOutOfRange(v.friction));
    }
    Ok(())
}

pub fn gravity(g: &Gravity) -> Result<(), ComponentError> {
    if !g.magnitude.is_finite() || g.magnitude < 0.0 {
        return Err(ComponentError::InvalidGravity(g.magnitude));
    }
    finite_pair(ComponentKind::Gravity, g.magnitude, g.direction)
}

pub fn circle(c: &Circle) -> Result<(), ComponentError> {
    if c.radius.is_finite() && c.radius > 0.0 {
        Ok(())
    } else {
        Err(ComponentError::InvalidRadius(c.radius))
    }
}

pub fn follow(f: &Follow) -> Result<(), ComponentError> {
    finite_pair(ComponentKind::Follow, f.target_x, f.target_y)?;
    if f.easing > 0.0 && f.easing <= 1.0 {
        Ok(())
    } else {
        Err(ComponentError::EasingOutOfRange(f.easing))
    }
}

pub fn canvas(c: &Canvas) -> Result<(), ComponentError> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !valid(c.width) || !valid(c.height) {
        return Err(ComponentError::InvalidExtent {
            width: c.width,
            height: c.height,
        });
    }
    finite_pair(ComponentKind::Canvas, c.mouse.x, c.mouse.y)
}
