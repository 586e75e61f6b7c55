// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use conposel_export::CsvFormat;
use conposel_interaction::InteractionSettings;
use conposel_render::RenderStyle;
use conposel_view::MagnifierMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a [`SessionConfig`] cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON text could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A field holds a value the session cannot work with.
    #[error("invalid `{field}`: {reason}")]
    Invalid {
        /// Offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}

/// Tunables of a [`crate::Session`].
///
/// Missing JSON fields take their default value.
///
/// ```rust
/// use conposel::SessionConfig;
/// use conposel_view::MagnifierMode;
///
/// let config = SessionConfig::from_json(r#"{ "magnifier": "pan_rectangle" }"#).unwrap();
/// assert_eq!(config.magnifier, MagnifierMode::PanRectangle);
/// assert_eq!(config.hit_radius, 10.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Side of the square detail canvas, in pixels.
    pub detail_view_size: f64,
    /// Point hit radius, in intrinsic pixels.
    pub hit_radius: f64,
    /// Marker radius on the full view, in intrinsic pixels.
    pub point_radius: f64,
    /// Zoom factor of a freshly created session.
    pub default_zoom: f64,
    /// Lower zoom limit.
    pub min_zoom: f64,
    /// Upper zoom limit.
    pub max_zoom: f64,
    /// How the detail view picks its region.
    pub magnifier: MagnifierMode,
    /// Layout of exported CSV files.
    pub csv_format: CsvFormat,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            detail_view_size: 150.0,
            hit_radius: 10.0,
            point_radius: 5.0,
            default_zoom: 4.0,
            min_zoom: 1.0,
            max_zoom: 10.0,
            magnifier: MagnifierMode::FollowPointer,
            csv_format: CsvFormat::Indexed,
        }
    }
}

impl SessionConfig {
    /// Parses and validates a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON and
    /// [`ConfigError::Invalid`] when [`SessionConfig::validate`] fails.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Encodes the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if encoding fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that sizes are positive and the zoom range is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("detail_view_size", self.detail_view_size)?;
        positive("hit_radius", self.hit_radius)?;
        positive("point_radius", self.point_radius)?;
        if self.min_zoom.is_nan() || self.min_zoom < 1.0 {
            return Err(invalid("min_zoom", "must be at least 1"));
        }
        if !self.max_zoom.is_finite() || self.max_zoom < self.min_zoom {
            return Err(invalid("max_zoom", "must be finite and not below `min_zoom`"));
        }
        if !(self.min_zoom..=self.max_zoom).contains(&self.default_zoom) {
            return Err(invalid("default_zoom", "must lie within the zoom limits"));
        }
        Ok(())
    }

    pub(crate) fn interaction_settings(&self) -> InteractionSettings {
        InteractionSettings {
            hit_radius: self.hit_radius,
            detail_view_size: self.detail_view_size,
        }
    }

    pub(crate) fn render_style(&self) -> RenderStyle {
        RenderStyle {
            point_radius: self.point_radius,
            detail_view_size: self.detail_view_size,
        }
    }
}

fn positive(field: &'static str, v: f64) -> Result<(), ConfigError> {
    if v > 0.0 && v.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, "must be a positive finite number"))
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
