// File: crates/plots-core/src/axis.rs
// Summary: Axis model with optional label and optional fixed limits.

use crate::error::{PlotError, Result};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Axis {
    pub label: Option<String>,
    pub limits: Option<(f64, f64)>,
}

impl Axis {
    pub fn new() -> Self { Self::default() }

    /// Empty labels are not drawn.
    pub fn set_label(&mut self, label: impl Into<String>) {
        let label = label.into();
        self.label = if label.is_empty() { None } else { Some(label) };
    }

    /// Fix the visible range. `axis` names the axis in the error ("x" / "y").
    pub fn set_limits(&mut self, axis: &'static str, min: f64, max: f64) -> Result<()> {
        check_limits(axis, min, max)?;
        self.limits = Some((min, max));
        Ok(())
    }
}

/// Limits must be finite and distinct; either order is allowed.
pub fn check_limits(axis: &'static str, min: f64, max: f64) -> Result<()> {
    if !min.is_finite() || !max.is_finite() || min == max {
        return Err(PlotError::InvalidLimits { axis, min, max });
    }
    Ok(())
}
