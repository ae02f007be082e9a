//! Demo binary that runs the sky through a full simulated day/night cycle.
//!
//! Settings are loaded from `sky.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p cirrus-demo` for one day at the default frame
//! count, or `cargo run -p cirrus-demo -- --cloudiness 0.8 --frames 480`
//! to watch an overcast day in more steps.

use std::f32::consts::{FRAC_PI_2, TAU};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use glam::Quat;
use tracing::{debug, error, info};

use cirrus_celestial::{CelestialBody, Orientation, angle_to_zenith_deg};
use cirrus_lighting::DirectionalLight;
use cirrus_log::init_logging;
use cirrus_settings::{CliArgs, SettingsError, SkySettings};
use cirrus_sky::SkyController;
use cirrus_uniforms::ShaderPropertyTable;

/// Frames between hot-reload checks of the settings file.
const RELOAD_INTERVAL: u64 = 60;

const DEFAULT_FRAMES: u64 = 240;
const DEFAULT_DAY_SECONDS: f32 = 24.0;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let settings_dir = settings_dir(&args);
    let settings = match load_settings(&settings_dir, &args) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("cirrus-demo: {err}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(Some(&settings_dir), cfg!(debug_assertions), Some(&settings));

    match run(settings, &settings_dir, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("demo failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn settings_dir(args: &CliArgs) -> PathBuf {
    args.settings.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cirrus")
    })
}

fn load_settings(settings_dir: &Path, args: &CliArgs) -> Result<SkySettings, SettingsError> {
    let mut settings = SkySettings::load_or_create(settings_dir)?;
    settings.apply_cli_overrides(args);
    settings.validate()?;
    Ok(settings)
}

fn run(mut settings: SkySettings, settings_dir: &Path, args: &CliArgs) -> Result<(), SettingsError> {
    let frames = args.frames.unwrap_or(DEFAULT_FRAMES).max(1);
    let day_seconds = args.day_seconds.unwrap_or(DEFAULT_DAY_SECONDS);

    info!(
        "simulating one day over {frames} frames ({day_seconds} s/day), cloudiness {:.2}",
        settings.clouds.cloudiness
    );

    let mut controller = SkyController::new(
        CelestialBody::new("sun", sun_orientation(0.0)),
        (0..3)
            .map(|i| CelestialBody::new(format!("moon{i}"), moon_orientation(i, 0.0)))
            .collect(),
        Some(DirectionalLight::default()),
        settings.lighting.sunset(),
    )
    .map_err(SettingsError::InvalidSunset)?;

    let mut table = ShaderPropertyTable::new();
    settings.apply_to_sink(&mut table);

    let log_stride = (frames / 24).max(1);

    for frame in 0..=frames {
        let day_frac = frame as f32 / frames as f32;

        controller.set_sun_orientation(sun_orientation(day_frac));
        for i in 0..3 {
            controller.set_moon_orientation(i, moon_orientation(i, day_frac));
        }

        let sample = controller.late_update(&mut table, Some(&settings));

        if frame % log_stride == 0
            && let Some(sample) = sample
        {
            let sun_angle = angle_to_zenith_deg(controller.sun().orientation());
            let dominant = if sample.orientation == *controller.sun().orientation() {
                "sun"
            } else {
                "moon"
            };
            info!(
                "t={:5.2}s zenith {:6.1} deg, main light {dominant}, intensity {:+.3}",
                day_frac * day_seconds,
                sun_angle,
                sample.intensity,
            );
        }

        if frame % RELOAD_INTERVAL == 0 && frame > 0 {
            match settings.reload(settings_dir) {
                Ok(Some(mut new_settings)) => {
                    // CLI flags keep precedence over the reloaded file.
                    new_settings.apply_cli_overrides(args);
                    if new_settings != settings && new_settings.validate().is_ok() {
                        controller
                            .set_sunset(new_settings.lighting.sunset())
                            .map_err(SettingsError::InvalidSunset)?;
                        new_settings.apply_to_sink(&mut table);
                        settings = new_settings;
                    }
                }
                Ok(None) => {}
                Err(err) => debug!("settings reload skipped: {err}"),
            }
        }
    }

    info!(
        "day complete: {} shader parameters live in the property table",
        table.len()
    );
    Ok(())
}

/// Sun orientation for a fraction of the day, midnight at 0.
///
/// The sun rides a great circle about the east-west axis: below the scene
/// at midnight, on the horizon at 0.25, overhead at 0.5.
fn sun_orientation(day_frac: f32) -> Orientation {
    Orientation::from_quat(Quat::from_rotation_x(day_frac * TAU + FRAC_PI_2))
}

/// Moon orientation: opposite the sun, with a per-moon phase offset and a
/// slight tilt so the three moons spread across the sky.
fn moon_orientation(index: usize, day_frac: f32) -> Orientation {
    let phase = (day_frac + 0.5) * TAU + FRAC_PI_2 + index as f32 * 0.35;
    let tilt = Quat::from_rotation_z(index as f32 * 0.2);
    Orientation::from_quat(tilt * Quat::from_rotation_x(phase))
}
