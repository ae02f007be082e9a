//! Sunset blending: which body drives the main light, and how bright it is.
//!
//! Once per frame the resolver looks at the sun's angle to the zenith and
//! blends the main light's intensity across the sunset band. When the sun
//! has dropped far enough, the first moon takes over as the light's
//! orientation, provided its own zenith angle exceeds 90 degrees so it sits
//! on the night side of the sky. The whole computation is pure: same
//! inputs, same sample.

use cirrus_celestial::{Orientation, angle_to_zenith_deg};

/// Intensity floor used while the sun is fully below the sunset band.
const MIN_INTENSITY: f32 = 0.01;

/// Below this intensity the main light may switch to the first moon.
const MOON_TAKEOVER_INTENSITY: f32 = 0.2;

/// Cloud cover at 1.0 removes 30% of the main light.
const FULL_CLOUD_ATTENUATION: f32 = 0.7;

/// Sunset transition angles, in degrees.
///
/// The threshold is where the sun counts as reaching the horizon; the
/// leeway is the width of the band over which intensity blends from the
/// floor up to full. Setting both to 90 disables the transition entirely
/// (the blend factor saturates past 1 for any daytime sun).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SunsetConfig {
    /// Angle at which the sun is considered at the horizon.
    pub threshold_deg: f32,
    /// Width of the blending band. Must be nonzero.
    pub leeway_deg: f32,
}

impl Default for SunsetConfig {
    fn default() -> Self {
        Self {
            threshold_deg: 70.0,
            leeway_deg: 30.0,
        }
    }
}

/// Invalid sunset configuration, caught at setup time rather than
/// surfacing as NaN intensities at frame time.
#[derive(Debug, thiserror::Error)]
pub enum SunsetConfigError {
    /// A zero leeway angle would divide by zero in the blend factor.
    #[error("sunset leeway angle must be nonzero")]
    ZeroLeeway,

    /// Threshold or leeway is NaN or infinite.
    #[error("sunset angles must be finite: threshold {threshold_deg}, leeway {leeway_deg}")]
    NonFiniteAngle { threshold_deg: f32, leeway_deg: f32 },
}

impl SunsetConfig {
    /// Check the configuration is usable by [`match_lighting`].
    pub fn validate(&self) -> Result<(), SunsetConfigError> {
        if !self.threshold_deg.is_finite() || !self.leeway_deg.is_finite() {
            return Err(SunsetConfigError::NonFiniteAngle {
                threshold_deg: self.threshold_deg,
                leeway_deg: self.leeway_deg,
            });
        }
        if self.leeway_deg == 0.0 {
            return Err(SunsetConfigError::ZeroLeeway);
        }
        Ok(())
    }
}

/// Resolved main-light state for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MainLightSample {
    /// Blended intensity. Unclamped: it exceeds 1.0 well into the day and
    /// goes negative when the sunset transition is disabled.
    pub intensity: f32,
    /// Orientation of whichever body currently drives the light.
    pub orientation: Orientation,
}

/// Linear interpolation without clamping `t` to [0, 1].
///
/// The sunset blend relies on the unclamped behavior; do not swap in a
/// clamped lerp here.
pub fn lerp_unclamped(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Resolve the main light from the current body orientations.
///
/// The blend factor is `(sun_zenith_angle - threshold) / leeway`. Intensity
/// is an unclamped lerp from [`MIN_INTENSITY`] to 1.0 over that factor.
/// When intensity falls under [`MOON_TAKEOVER_INTENSITY`] and the first
/// moon sits past 90 degrees from the zenith, the sample takes that moon's
/// orientation; otherwise it keeps the sun's. Only the first moon is ever
/// consulted for the takeover, whatever the length of `moons`.
///
/// `cloudiness` comes from the settings store when one is attached; `None`
/// skips cloud attenuation. `cfg` must have passed
/// [`SunsetConfig::validate`].
pub fn match_lighting(
    sun: &Orientation,
    moons: &[Orientation],
    cfg: &SunsetConfig,
    cloudiness: Option<f32>,
) -> MainLightSample {
    let sun_angle = angle_to_zenith_deg(sun);
    let t = (sun_angle - cfg.threshold_deg) / cfg.leeway_deg;

    let mut intensity = lerp_unclamped(MIN_INTENSITY, 1.0, t);

    // Switch to the moon as the main light once the sun is down. When both
    // are down the sun still drives the light; a known quirk of the rule.
    let orientation = match moons.first() {
        Some(moon)
            if intensity < MOON_TAKEOVER_INTENSITY && angle_to_zenith_deg(moon) > 90.0 =>
        {
            *moon
        }
        _ => *sun,
    };

    if let Some(cloudiness) = cloudiness {
        intensity *= lerp_unclamped(1.0, FULL_CLOUD_ATTENUATION, cloudiness);
    }

    MainLightSample {
        intensity,
        orientation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    /// Orientation whose forward sits `deg` degrees from the zenith.
    fn at_zenith_angle(deg: f32) -> Orientation {
        let tilt = (90.0 - deg).to_radians();
        Orientation::from_quat(Quat::from_rotation_x(-tilt))
    }

    #[test]
    fn test_intensity_floor_at_threshold() {
        let cfg = SunsetConfig::default();
        let sample = match_lighting(&at_zenith_angle(70.0), &[], &cfg, None);
        assert!(
            (sample.intensity - 0.01).abs() < 1e-4,
            "at the threshold t == 0, intensity must be the 0.01 floor, got {}",
            sample.intensity
        );
    }

    #[test]
    fn test_full_intensity_at_threshold_plus_leeway() {
        let cfg = SunsetConfig::default();
        let sample = match_lighting(&at_zenith_angle(100.0), &[], &cfg, None);
        assert!(
            (sample.intensity - 1.0).abs() < 1e-4,
            "at threshold + leeway t == 1, intensity must be 1.0, got {}",
            sample.intensity
        );
    }

    #[test]
    fn test_full_cloud_cover_scales_intensity_by_point_seven() {
        let cfg = SunsetConfig::default();
        let sun = at_zenith_angle(100.0);
        let clear = match_lighting(&sun, &[], &cfg, Some(0.0));
        let overcast = match_lighting(&sun, &[], &cfg, Some(1.0));
        assert!(
            (overcast.intensity - 0.7 * clear.intensity).abs() < 1e-5,
            "cloudiness 1.0 must attenuate by exactly 0.7: {} vs {}",
            overcast.intensity,
            clear.intensity
        );
    }

    #[test]
    fn test_missing_settings_store_skips_cloud_attenuation() {
        let cfg = SunsetConfig::default();
        let sun = at_zenith_angle(100.0);
        let without = match_lighting(&sun, &[], &cfg, None);
        let clear = match_lighting(&sun, &[], &cfg, Some(0.0));
        assert!((without.intensity - clear.intensity).abs() < 1e-6);
    }

    #[test]
    fn test_sun_keeps_light_while_intensity_stays_above_takeover() {
        // Sun at 85 degrees: t = 0.5, intensity ~0.505, not under 0.2, so
        // the sun keeps the light even though the moon is on the night side.
        let cfg = SunsetConfig::default();
        let sun = at_zenith_angle(85.0);
        let moon = at_zenith_angle(95.0);
        let sample = match_lighting(&sun, &[moon], &cfg, None);
        assert!(sample.intensity >= 0.2);
        assert_eq!(
            sample.orientation, sun,
            "sun must keep the main light above the takeover intensity"
        );
    }

    #[test]
    fn test_moon_takes_over_when_sun_is_low_and_moon_is_up() {
        // Sun at 75 degrees: t = 1/6, intensity ~0.175 < 0.2; the first
        // moon is past 90 degrees, so it takes the light's orientation.
        let cfg = SunsetConfig::default();
        let sun = at_zenith_angle(75.0);
        let moon = at_zenith_angle(120.0);
        let sample = match_lighting(&sun, &[moon], &cfg, None);
        assert!(sample.intensity < 0.2, "got {}", sample.intensity);
        assert_eq!(
            sample.orientation, moon,
            "first moon must take over the main light"
        );
    }

    #[test]
    fn test_only_first_moon_is_consulted_for_takeover() {
        // First moon is above the horizon (no takeover) even though the
        // second would qualify; the rule only looks at the first.
        let cfg = SunsetConfig::default();
        let sun = at_zenith_angle(75.0);
        let day_moon = at_zenith_angle(40.0);
        let night_moon = at_zenith_angle(130.0);
        let sample = match_lighting(&sun, &[day_moon, night_moon], &cfg, None);
        assert_eq!(
            sample.orientation, sun,
            "second moon must not be consulted for takeover"
        );
    }

    #[test]
    fn test_disabled_transition_goes_negative_not_clamped() {
        // Threshold and leeway both 90 disable the transition. With the
        // sun overhead: t = (0 - 90) / 90 = -1, so the unclamped lerp
        // yields 0.01 + (-1) * 0.99 = -0.98 exactly.
        let cfg = SunsetConfig {
            threshold_deg: 90.0,
            leeway_deg: 90.0,
        };
        let sample = match_lighting(&at_zenith_angle(0.0), &[], &cfg, None);
        assert!(
            (sample.intensity - (-0.98)).abs() < 1e-4,
            "intensity must reproduce the unclamped -0.98, got {}",
            sample.intensity
        );
    }

    #[test]
    fn test_intensity_exceeds_one_far_into_the_day() {
        // Well past threshold + leeway the unclamped lerp keeps climbing.
        let cfg = SunsetConfig::default();
        let sample = match_lighting(&at_zenith_angle(160.0), &[], &cfg, None);
        assert!(
            sample.intensity > 1.0,
            "unclamped intensity should exceed 1.0, got {}",
            sample.intensity
        );
    }

    #[test]
    fn test_no_moons_always_keeps_sun() {
        let cfg = SunsetConfig::default();
        let sun = at_zenith_angle(75.0);
        let sample = match_lighting(&sun, &[], &cfg, None);
        assert_eq!(sample.orientation, sun);
    }

    #[test]
    fn test_zero_leeway_is_a_config_error() {
        let cfg = SunsetConfig {
            threshold_deg: 70.0,
            leeway_deg: 0.0,
        };
        assert!(matches!(
            cfg.validate(),
            Err(SunsetConfigError::ZeroLeeway)
        ));
    }

    #[test]
    fn test_non_finite_angles_are_a_config_error() {
        let cfg = SunsetConfig {
            threshold_deg: f32::NAN,
            leeway_deg: 30.0,
        };
        assert!(matches!(
            cfg.validate(),
            Err(SunsetConfigError::NonFiniteAngle { .. })
        ));
    }

    #[test]
    fn test_default_config_validates() {
        assert!(SunsetConfig::default().validate().is_ok());
    }

    #[test]
    fn test_lerp_unclamped_formula() {
        assert_eq!(lerp_unclamped(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp_unclamped(0.0, 10.0, 2.0), 20.0);
        assert_eq!(lerp_unclamped(0.0, 10.0, -1.0), -10.0);
    }
}
