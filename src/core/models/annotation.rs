//! Annotation model
//!
//! One labeled bounding box inside a task's response.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Occlusion value assumed when an annotation does not carry one
pub const DEFAULT_OCCLUSION: &str = "0%";

/// A labeled bounding box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Left edge in pixels
    pub left: f64,
    /// Top edge in pixels
    pub top: f64,
    /// Box width; may be negative, only its magnitude counts towards area
    pub width: f64,
    /// Box height; may be negative, only its magnitude counts towards area
    pub height: f64,
    /// Object class
    pub label: String,
    /// Free-form attributes, including occlusion
    pub attributes: Attributes,
    /// Set by the area-deviation detector when the box is an outlier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_issue: Option<AreaIssue>,
}

/// Annotation attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    /// Occlusion category: "0%", "25%", "50%", "75%" or "100%"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occlusion: Option<String>,
    /// Any other attributes, kept verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Marker attached to an annotation whose area deviates from the task mean
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaIssue {
    /// Relative deviation from the mean area, as a percentage
    pub deviation_percent: f64,
}

impl Annotation {
    /// Create an annotation with no attributes
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64, label: impl Into<String>) -> Self {
        Self {
            left,
            top,
            width,
            height,
            label: label.into(),
            attributes: Attributes::default(),
            area_issue: None,
        }
    }

    /// Builder: set the occlusion attribute
    #[must_use]
    pub fn with_occlusion(mut self, occlusion: impl Into<String>) -> Self {
        self.attributes.occlusion = Some(occlusion.into());
        self
    }

    /// Area of the box, using absolute width and height
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.width.abs() * self.height.abs()
    }

    /// Occlusion category, defaulting to `"0%"` when absent
    #[must_use]
    pub fn occlusion(&self) -> &str {
        self.attributes.occlusion.as_deref().unwrap_or(DEFAULT_OCCLUSION)
    }

    /// Whether the area-deviation detector flagged this box
    #[must_use]
    pub const fn is_flagged(&self) -> bool {
        self.area_issue.is_some()
    }

    /// Corners of the box as `(x0, y0, x1, y1)` with `x0 <= x1` and `y0 <= y1`
    #[must_use]
    pub const fn corners(&self) -> (f64, f64, f64, f64) {
        let right = self.left + self.width;
        let bottom = self.top + self.height;
        (
            self.left.min(right),
            self.top.min(bottom),
            self.left.max(right),
            self.top.max(bottom),
        )
    }
}
