//! User-configured sky settings: gradients, body parameters, cloudiness,
//! sunset angles. Persisted as RON with validation and hot-reload.

mod cli;
mod error;
mod gradient;
mod settings;

pub use cli::CliArgs;
pub use error::SettingsError;
pub use gradient::{Gradient, GradientKey, LOOKUP_RESOLUTION, SkyGradients};
pub use settings::{
    CloudSettings, DebugSettings, LightingSettings, MoonSettings, SkySettings, StarSettings,
    SunSettings,
};
