use serde::Deserialize;

use crate::error::ConfigError;
use crate::theme::{ColorScheme, Rgba};

/// How particles inside the pointer radius are displaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerResponse {
    /// Pulled toward the pointer, harder the closer they are.
    #[default]
    Attract,
    /// Pushed away from the pointer.
    Repel,
}

/// Configuration for a particle field.
///
/// Deserializes from camelCase JSON; every key is optional. Run
/// [`FieldConfig::sanitized`] before use; [`Field`](crate::Field) does this itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
    /// Number of particles (default: 80). Negative values clamp to zero.
    pub particle_count: i32,
    /// Pairs closer than this are linked (default: 150).
    pub connection_distance: f32,
    /// Pointer interaction radius (default: 150).
    pub pointer_radius: f32,
    /// Fill color for particle discs.
    pub particle_color: Rgba,
    /// Stroke hue for connections. Its alpha is replaced per connection.
    pub line_color: Rgba,
    /// Per-axis speed limit; velocity is sampled in `[-max_speed, max_speed)` (default: 0.25).
    pub max_speed: f32,
    /// Smallest sampled base radius (default: 1).
    pub min_radius: f32,
    /// Largest sampled base radius (default: 3).
    pub max_radius: f32,
    /// Fraction of the pointer offset applied per frame at full force (default: 0.03).
    pub pointer_strength: f32,
    /// Connection opacity at zero distance (default: 0.2).
    pub connection_opacity: f32,
    /// Connection stroke width (default: 1).
    pub line_width: f32,
    pub pointer_response: PointerResponse,
    /// RNG seed. When absent the host picks one.
    pub seed: Option<u64>,
}

impl FieldConfig {
    pub const DEFAULT_PARTICLE_COUNT: i32 = 80;
    pub const DEFAULT_CONNECTION_DISTANCE: f32 = 150.0;
    pub const DEFAULT_POINTER_RADIUS: f32 = 150.0;
    pub const DEFAULT_MAX_SPEED: f32 = 0.25;
    pub const DEFAULT_MIN_RADIUS: f32 = 1.0;
    pub const DEFAULT_MAX_RADIUS: f32 = 3.0;
    pub const DEFAULT_POINTER_STRENGTH: f32 = 0.03;
    pub const DEFAULT_CONNECTION_OPACITY: f32 = 0.2;
    pub const DEFAULT_LINE_WIDTH: f32 = 1.0;

    /// Parse a config from a JSON string. Values are not yet sanitized.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The particle/line color pair this config starts with.
    pub fn color_scheme(&self) -> ColorScheme {
        ColorScheme::new(self.particle_color, self.line_color)
    }

    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.particle_color = scheme.particle;
        self.line_color = scheme.line;
        self
    }

    /// Number of particles to generate, never negative.
    pub fn count(&self) -> usize {
        self.particle_count.max(0) as usize
    }

    /// Repair values that would break the simulation.
    ///
    /// Zero or non-finite distances fall back to their defaults (they are
    /// divisors); counts, radii and speeds clamp to non-negative.
    pub fn sanitized(mut self) -> Self {
        if self.particle_count < 0 {
            log::warn!("particleCount {} clamped to 0", self.particle_count);
            self.particle_count = 0;
        }
        self.connection_distance = positive_or(
            "connectionDistance",
            self.connection_distance,
            Self::DEFAULT_CONNECTION_DISTANCE,
        );
        self.pointer_radius =
            positive_or("pointerRadius", self.pointer_radius, Self::DEFAULT_POINTER_RADIUS);

        self.max_speed = non_negative("maxSpeed", self.max_speed, Self::DEFAULT_MAX_SPEED);
        self.min_radius = non_negative("minRadius", self.min_radius, Self::DEFAULT_MIN_RADIUS);
        self.max_radius = non_negative("maxRadius", self.max_radius, Self::DEFAULT_MAX_RADIUS);
        if self.min_radius > self.max_radius {
            log::warn!("minRadius {} > maxRadius {}, swapped", self.min_radius, self.max_radius);
            std::mem::swap(&mut self.min_radius, &mut self.max_radius);
        }

        self.pointer_strength =
            non_negative("pointerStrength", self.pointer_strength, Self::DEFAULT_POINTER_STRENGTH);
        self.connection_opacity = non_negative(
            "connectionOpacity",
            self.connection_opacity,
            Self::DEFAULT_CONNECTION_OPACITY,
        )
        .min(1.0);
        self.line_width = non_negative("lineWidth", self.line_width, Self::DEFAULT_LINE_WIDTH);
        self
    }
}

fn positive_or(name: &str, value: f32, default: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        log::warn!("{} {} is not a positive number, using {}", name, value, default);
        default
    }
}

fn non_negative(name: &str, value: f32, default: f32) -> f32 {
    if !value.is_finite() {
        log::warn!("{} {} is not finite, using {}", name, value, default);
        default
    } else if value < 0.0 {
        log::warn!("{} {} clamped to {}", name, value, -value);
        -value
    } else {
        value
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        let scheme = ColorScheme::dark();
        Self {
            particle_count: Self::DEFAULT_PARTICLE_COUNT,
            connection_distance: Self::DEFAULT_CONNECTION_DISTANCE,
            pointer_radius: Self::DEFAULT_POINTER_RADIUS,
            particle_color: scheme.particle,
            line_color: scheme.line,
            max_speed: Self::DEFAULT_MAX_SPEED,
            min_radius: Self::DEFAULT_MIN_RADIUS,
            max_radius: Self::DEFAULT_MAX_RADIUS,
            pointer_strength: Self::DEFAULT_POINTER_STRENGTH,
            connection_opacity: Self::DEFAULT_CONNECTION_OPACITY,
            line_width: Self::DEFAULT_LINE_WIDTH,
            pointer_response: PointerResponse::Attract,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let c = FieldConfig::default();
        assert_eq!(c.count(), 80);
        assert_eq!(c.connection_distance, 150.0);
        assert_eq!(c.pointer_radius, 150.0);
        assert_eq!(c.max_speed, 0.25);
        assert_eq!((c.min_radius, c.max_radius), (1.0, 3.0));
        assert_eq!(c.pointer_response, PointerResponse::Attract);
        assert_eq!(c.color_scheme(), ColorScheme::dark());
    }

    #[test]
    fn empty_json_gives_defaults() {
        let c = FieldConfig::from_json("{}").unwrap();
        assert_eq!(c, FieldConfig::default());
    }

    #[test]
    fn parses_camel_case_keys() {
        let json = r##"{
            "particleCount": 12,
            "connectionDistance": 90.5,
            "pointerRadius": 40,
            "particleColor": "rgba(255, 0, 0, 0.5)",
            "lineColor": "#00ff00",
            "pointerResponse": "repel",
            "seed": 7
        }"##;
        let c = FieldConfig::from_json(json).unwrap();
        assert_eq!(c.count(), 12);
        assert_eq!(c.connection_distance, 90.5);
        assert_eq!(c.pointer_radius, 40.0);
        assert_eq!(c.particle_color, Rgba::new(255, 0, 0, 0.5));
        assert_eq!(c.line_color, Rgba::new(0, 255, 0, 1.0));
        assert_eq!(c.pointer_response, PointerResponse::Repel);
        assert_eq!(c.seed, Some(7));
    }

    #[test]
    fn bad_color_is_a_config_error() {
        let err = FieldConfig::from_json(r#"{ "lineColor": "blue-ish" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().contains("Invalid field config"));
    }

    #[test]
    fn sanitize_rejects_zero_divisors() {
        let c = FieldConfig {
            connection_distance: 0.0,
            pointer_radius: f32::NAN,
            ..FieldConfig::default()
        }
        .sanitized();
        assert_eq!(c.connection_distance, FieldConfig::DEFAULT_CONNECTION_DISTANCE);
        assert_eq!(c.pointer_radius, FieldConfig::DEFAULT_POINTER_RADIUS);

        let c = FieldConfig { connection_distance: -5.0, ..FieldConfig::default() }.sanitized();
        assert_eq!(c.connection_distance, FieldConfig::DEFAULT_CONNECTION_DISTANCE);
    }

    #[test]
    fn sanitize_clamps_counts_and_radii() {
        let c = FieldConfig {
            particle_count: -4,
            min_radius: -2.0,
            max_radius: 1.0,
            max_speed: -0.5,
            ..FieldConfig::default()
        }
        .sanitized();
        assert_eq!(c.count(), 0);
        assert_eq!((c.min_radius, c.max_radius), (1.0, 2.0));
        assert_eq!(c.max_speed, 0.5);
    }

    #[test]
    fn count_never_negative_even_unsanitized() {
        let c = FieldConfig { particle_count: -10, ..FieldConfig::default() };
        assert_eq!(c.count(), 0);
    }
}
