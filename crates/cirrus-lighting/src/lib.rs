//! Main-light resolution for the dynamic sky: day/night blending between
//! the sun and the dominant moon, and the directional light it drives.

mod directional;
mod sunset;

pub use directional::{DirectionalLight, DirectionalLightUniform};
pub use sunset::{
    MainLightSample, SunsetConfig, SunsetConfigError, lerp_unclamped, match_lighting,
};
