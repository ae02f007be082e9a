//! The sky controller: the host's once-per-frame entry point.
//!
//! Runs after the host has settled all body orientations for the frame
//! (a late-update hook). Each update writes the body uniforms into the
//! injected sink and re-matches the directional light to whichever body
//! currently dominates. Multiple controllers in one scene are independent;
//! nothing here is shared.

use cirrus_celestial::{CelestialBody, Orientation, angle_to_zenith_deg};
use cirrus_lighting::{
    DirectionalLight, MainLightSample, SunsetConfig, SunsetConfigError, match_lighting,
};
use cirrus_settings::SkySettings;
use cirrus_uniforms::{UniformSink, write_body_uniforms};

/// Per-scene sky state: one sun, any number of moons, and optionally the
/// directional light the resolver drives.
#[derive(Debug)]
pub struct SkyController {
    sun: CelestialBody,
    moons: Vec<CelestialBody>,
    light: Option<DirectionalLight>,
    sunset: SunsetConfig,
}

impl SkyController {
    /// Build a controller, validating the sunset configuration up front.
    ///
    /// A zero or non-finite leeway angle is refused here so it can never
    /// reach the per-frame resolver.
    pub fn new(
        sun: CelestialBody,
        moons: Vec<CelestialBody>,
        light: Option<DirectionalLight>,
        sunset: SunsetConfig,
    ) -> Result<Self, SunsetConfigError> {
        sunset.validate()?;
        if light.is_none() {
            log::warn!("sky controller has no directional light; lighting will not be matched");
        }
        Ok(Self {
            sun,
            moons,
            light,
            sunset,
        })
    }

    pub fn sun(&self) -> &CelestialBody {
        &self.sun
    }

    pub fn moons(&self) -> &[CelestialBody] {
        &self.moons
    }

    /// The directional light, if one is attached.
    pub fn light(&self) -> Option<&DirectionalLight> {
        self.light.as_ref()
    }

    /// Replace the sun's orientation for this frame.
    pub fn set_sun_orientation(&mut self, orientation: Orientation) {
        self.sun.set_orientation(orientation);
    }

    /// Replace moon `index`'s orientation for this frame.
    ///
    /// Out-of-range indices are ignored with a warning; a missing body is
    /// never fatal.
    pub fn set_moon_orientation(&mut self, index: usize, orientation: Orientation) {
        match self.moons.get_mut(index) {
            Some(moon) => moon.set_orientation(orientation),
            None => log::warn!("ignoring orientation for missing moon {index}"),
        }
    }

    /// Swap in a new sunset configuration, e.g. after a settings reload.
    pub fn set_sunset(&mut self, sunset: SunsetConfig) -> Result<(), SunsetConfigError> {
        sunset.validate()?;
        self.sunset = sunset;
        Ok(())
    }

    /// Once-per-frame update, called after all orientations have settled.
    ///
    /// Writes the per-body uniforms, then matches the directional light to
    /// the dominant body. Without an attached light the lighting step is a
    /// no-op; without settings the cloud attenuation is skipped. Returns
    /// the resolved sample when lighting ran.
    pub fn late_update(
        &mut self,
        sink: &mut dyn UniformSink,
        settings: Option<&SkySettings>,
    ) -> Option<MainLightSample> {
        let moon_orientations: Vec<Orientation> =
            self.moons.iter().map(|m| *m.orientation()).collect();
        write_body_uniforms(sink, self.sun.orientation(), &moon_orientations);

        let light = self.light.as_mut()?;
        let cloudiness = settings.map(|s| s.clouds.cloudiness);
        let sample = match_lighting(
            self.sun.orientation(),
            &moon_orientations,
            &self.sunset,
            cloudiness,
        );
        light.apply_sample(&sample);

        log::trace!(
            "matched main light: intensity {:.3}, sun at {:.1} degrees from zenith",
            sample.intensity,
            angle_to_zenith_deg(self.sun.orientation()),
        );
        Some(sample)
    }
}
