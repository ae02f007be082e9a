//! Sky settings with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use cirrus_lighting::SunsetConfig;
use cirrus_uniforms::UniformSink;

use crate::{SettingsError, SkyGradients};

const SETTINGS_FILE: &str = "sky.ron";

/// Top-level sky settings.
///
/// Everything a designer tunes: body appearance parameters, cloud cover,
/// the sunset transition angles, and the palette gradients. Cubemap assets
/// themselves are referenced by the host material and are not part of the
/// settings store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SkySettings {
    /// Sun disc settings.
    pub sun: SunSettings,
    /// Moon disc settings.
    pub moon: MoonSettings,
    /// Star layer settings.
    pub stars: StarSettings,
    /// Cloud layer settings.
    pub clouds: CloudSettings,
    /// Main-light sunset transition settings.
    pub lighting: LightingSettings,
    /// Debug/development settings.
    pub debug: DebugSettings,
    /// Palette gradients sampled by the sky shader.
    pub gradients: SkyGradients,
}

/// Sun disc settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SunSettings {
    /// Disc radius in sky-UV units \[0, 1\].
    pub radius: f32,
    /// Disc brightness multiplier \[1, 4\].
    pub intensity: f32,
    /// Use the custom sun color gradient instead of the shader default.
    pub customize_colors: bool,
    /// Sample the sun cubemap over the disc.
    pub textured: bool,
    /// Cubemap blend strength \[0, 1\].
    pub texture_strength: f32,
    /// Draw the synthwave sun variant.
    pub synthwave: bool,
    /// Bottom cutoff of the synthwave sun \[0, 1\].
    pub synth_bottom: f32,
    /// Scanline count of the synthwave sun.
    pub synth_lines: f32,
}

/// Moon disc settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MoonSettings {
    /// Draw the moons at all.
    pub enabled: bool,
    /// Disc radius in sky-UV units \[0, 1\].
    pub radius: f32,
    /// Edge falloff strength \[0.01, 1\].
    pub edge_strength: f32,
    /// Exposure in stops \[-16, 0\].
    pub exposure: f32,
    /// Dark-side floor brightness \[0, 0.9\].
    pub darkside: f32,
}

/// Star layer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarSettings {
    /// Rotation speed of the star field \[0, 0.1\].
    pub speed: f32,
    /// Exposure in stops \[-16, 16\].
    pub exposure: i32,
    /// Star falloff power \[1, 5\].
    pub power: f32,
    /// Rotation axis latitude in degrees \[-90, 90\].
    pub latitude: i32,
}

/// Cloud layer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CloudSettings {
    /// Draw the cloud layers at all.
    pub enabled: bool,
    /// Scroll speed of the cloud layers \[0, 0.1\].
    pub speed: f32,
    /// Cloud cover \[0, 1\]; attenuates the main light by up to 30%.
    pub cloudiness: f32,
}

/// Main-light sunset transition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightingSettings {
    /// Angle at which the sun is considered at the horizon.
    pub sunset_threshold_deg: f32,
    /// Width of the sun/moon blending band. Must be nonzero.
    pub sunset_leeway_deg: f32,
}

impl LightingSettings {
    /// The resolver-facing sunset configuration.
    pub fn sunset(&self) -> SunsetConfig {
        SunsetConfig {
            threshold_deg: self.sunset_threshold_deg,
            leeway_deg: self.sunset_leeway_deg,
        }
    }
}

/// Debug/development settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugSettings {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for SunSettings {
    fn default() -> Self {
        Self {
            radius: 0.05,
            intensity: 1.0,
            customize_colors: false,
            textured: false,
            texture_strength: 1.0,
            synthwave: false,
            synth_bottom: 0.6,
            synth_lines: 48.0,
        }
    }
}

impl Default for MoonSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            radius: 0.05,
            edge_strength: 0.05,
            exposure: 0.0,
            darkside: 0.01,
        }
    }
}

impl Default for StarSettings {
    fn default() -> Self {
        Self {
            speed: 0.01,
            exposure: 3,
            power: 2.0,
            latitude: -30,
        }
    }
}

impl Default for CloudSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            speed: 0.01,
            cloudiness: 0.0,
        }
    }
}

impl Default for LightingSettings {
    fn default() -> Self {
        Self {
            sunset_threshold_deg: 70.0,
            sunset_leeway_deg: 30.0,
        }
    }
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Validation ---

fn check_range(
    field: &'static str,
    value: f32,
    min: f32,
    max: f32,
) -> Result<(), SettingsError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(SettingsError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

impl SkySettings {
    /// Check every scalar against its documented range and the sunset
    /// angles against the resolver's requirements.
    ///
    /// Runs on every load and reload so bad values surface at setup time,
    /// never as NaN intensities mid-frame.
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_range("sun.radius", self.sun.radius, 0.0, 1.0)?;
        check_range("sun.intensity", self.sun.intensity, 1.0, 4.0)?;
        check_range("sun.texture_strength", self.sun.texture_strength, 0.0, 1.0)?;
        check_range("sun.synth_bottom", self.sun.synth_bottom, 0.0, 1.0)?;
        check_range("moon.radius", self.moon.radius, 0.0, 1.0)?;
        check_range("moon.edge_strength", self.moon.edge_strength, 0.01, 1.0)?;
        check_range("moon.exposure", self.moon.exposure, -16.0, 0.0)?;
        check_range("moon.darkside", self.moon.darkside, 0.0, 0.9)?;
        check_range("stars.speed", self.stars.speed, 0.0, 0.1)?;
        check_range("stars.exposure", self.stars.exposure as f32, -16.0, 16.0)?;
        check_range("stars.power", self.stars.power, 1.0, 5.0)?;
        check_range("stars.latitude", self.stars.latitude as f32, -90.0, 90.0)?;
        check_range("clouds.speed", self.clouds.speed, 0.0, 0.1)?;
        check_range("clouds.cloudiness", self.clouds.cloudiness, 0.0, 1.0)?;
        self.lighting.sunset().validate()?;
        Ok(())
    }

    /// Push every scalar and flag into the sky material's parameter table.
    ///
    /// Flags are written as 0/1 floats. Speeds are pre-scaled by 0.1 the
    /// way the shader expects them.
    pub fn apply_to_sink(&self, sink: &mut dyn UniformSink) {
        sink.set_float("_SunRadius", self.sun.radius);
        sink.set_float("_SunIntensity", self.sun.intensity);
        sink.set_float("_SunColorCustomize", flag(self.sun.customize_colors));
        sink.set_float("_SunTextureOn", flag(self.sun.textured));
        sink.set_float("_SunTextureStrength", self.sun.texture_strength);
        sink.set_float("_SynthSun", flag(self.sun.synthwave));
        sink.set_float("_SynthSunBottom", self.sun.synth_bottom);
        sink.set_float("_SynthSunLines", self.sun.synth_lines);

        sink.set_float("_MoonOn", flag(self.moon.enabled));
        sink.set_float("_MoonRadius", self.moon.radius);
        sink.set_float("_MoonEdgeStrength", self.moon.edge_strength);
        sink.set_float("_MoonExposure", self.moon.exposure);
        sink.set_float("_MoonDarkside", self.moon.darkside);

        sink.set_float("_StarSpeed", self.stars.speed * 0.1);
        sink.set_float("_StarExposure", self.stars.exposure as f32);
        sink.set_float("_StarPower", self.stars.power);
        sink.set_float("_StarLatitude", self.stars.latitude as f32);

        sink.set_float("_CloudOn", flag(self.clouds.enabled));
        sink.set_float("_CloudSpeed", self.clouds.speed * 0.1);
        sink.set_float("_Cloudiness", self.clouds.cloudiness);
    }
}

fn flag(on: bool) -> f32 {
    if on { 1.0 } else { 0.0 }
}

// --- Load / Save / Reload ---

impl SkySettings {
    /// Load settings from the given directory, or create a default file.
    pub fn load_or_create(settings_dir: &Path) -> Result<Self, SettingsError> {
        let path = settings_dir.join(SETTINGS_FILE);

        if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(SettingsError::ReadError)?;
            let settings: SkySettings =
                ron::from_str(&contents).map_err(SettingsError::ParseError)?;
            settings.validate()?;
            log::info!("Loaded sky settings from {}", path.display());
            Ok(settings)
        } else {
            let settings = SkySettings::default();
            settings.save(settings_dir)?;
            log::info!("Created default sky settings at {}", path.display());
            Ok(settings)
        }
    }

    /// Save settings to the given directory as `sky.ron`.
    pub fn save(&self, settings_dir: &Path) -> Result<(), SettingsError> {
        std::fs::create_dir_all(settings_dir).map_err(SettingsError::WriteError)?;

        let path = settings_dir.join(SETTINGS_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(SettingsError::SerializeError)?;

        std::fs::write(&path, serialized).map_err(SettingsError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_settings)` if the file changed,
    /// `None` otherwise. The new settings are validated before they are
    /// handed back.
    pub fn reload(&self, settings_dir: &Path) -> Result<Option<Self>, SettingsError> {
        let path = settings_dir.join(SETTINGS_FILE);
        let contents = std::fs::read_to_string(&path).map_err(SettingsError::ReadError)?;
        let new_settings: SkySettings =
            ron::from_str(&contents).map_err(SettingsError::ParseError)?;
        new_settings.validate()?;

        if &new_settings != self {
            log::info!("Sky settings reloaded with changes");
            Ok(Some(new_settings))
        } else {
            Ok(None)
        }
    }
}
