// Math utilities and helper functions

use glam::Vec2;

/// Input magnitude at or below which a direction counts as "no input"
pub const DEAD_ZONE: f32 = 0.1;

/// Mixer attenuation used for a fully muted channel (dB)
pub const SILENCE_DB: f32 = -80.0;

/// Check whether a direction is strong enough to count as real input
pub fn exceeds_dead_zone(direction: Vec2) -> bool {
    direction.length() > DEAD_ZONE
}

/// Shrink a vector to unit length if it is longer than 1, leave it alone otherwise
pub fn clamp_to_unit(v: Vec2) -> Vec2 {
    if v.length() > 1.0 {
        v.normalize()
    } else {
        v
    }
}

/// Convert a linear volume (0..=1) to decibels
pub fn linear_to_decibels(linear: f32) -> f32 {
    if linear > 0.0 {
        20.0 * linear.log10()
    } else {
        SILENCE_DB
    }
}

/// Convert decibels back to a linear volume
pub fn decibels_to_linear(db: f32) -> f32 {
    10f32.powf(db / 20.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dead_zone() {
        assert!(!exceeds_dead_zone(Vec2::ZERO));
        assert!(!exceeds_dead_zone(Vec2::new(0.1, 0.0)));
        assert!(exceeds_dead_zone(Vec2::new(0.0, -0.5)));
    }

    #[test]
    fn test_clamp_to_unit() {
        let diagonal = clamp_to_unit(Vec2::new(1.0, 1.0));
        assert_relative_eq!(diagonal.length(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(diagonal.x, diagonal.y);

        // Short vectors pass through untouched
        assert_eq!(clamp_to_unit(Vec2::new(0.5, 0.0)), Vec2::new(0.5, 0.0));
    }

    #[test]
    fn test_volume_conversion() {
        assert_relative_eq!(linear_to_decibels(1.0), 0.0);
        assert_relative_eq!(linear_to_decibels(0.1), -20.0, epsilon = 1e-4);
        assert_eq!(linear_to_decibels(0.0), SILENCE_DB);
        assert_relative_eq!(decibels_to_linear(linear_to_decibels(0.75)), 0.75, epsilon = 1e-5);
    }
}
