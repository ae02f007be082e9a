//! Command-line argument parsing for the cirrus sky.

use std::path::PathBuf;

use clap::Parser;

use crate::SkySettings;

/// Cirrus sky command-line arguments.
///
/// CLI values override settings loaded from `sky.ron`.
#[derive(Parser, Debug)]
#[command(name = "cirrus", about = "Cirrus dynamic sky")]
pub struct CliArgs {
    /// Cloud cover, 0.0 (clear) to 1.0 (overcast).
    #[arg(long)]
    pub cloudiness: Option<f32>,

    /// Sunset threshold angle in degrees.
    #[arg(long)]
    pub sunset_threshold: Option<f32>,

    /// Sunset leeway angle in degrees.
    #[arg(long)]
    pub sunset_leeway: Option<f32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to settings directory (overrides default location).
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Number of simulated frames to run in the demo.
    #[arg(long)]
    pub frames: Option<u64>,

    /// Length of a simulated day in seconds.
    #[arg(long)]
    pub day_seconds: Option<f32>,
}

impl SkySettings {
    /// Apply CLI overrides to loaded settings.
    ///
    /// Callers should re-run [`SkySettings::validate`] afterwards; the CLI
    /// can introduce out-of-range values just like a hand-edited file.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(c) = args.cloudiness {
            self.clouds.cloudiness = c;
        }
        if let Some(threshold) = args.sunset_threshold {
            self.lighting.sunset_threshold_deg = threshold;
        }
        if let Some(leeway) = args.sunset_leeway {
            self.lighting.sunset_leeway_deg = leeway;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_args() -> CliArgs {
        CliArgs {
            cloudiness: None,
            sunset_threshold: None,
            sunset_leeway: None,
            log_level: None,
            settings: None,
            frames: None,
            day_seconds: None,
        }
    }

    #[test]
    fn test_cli_override() {
        let mut settings = SkySettings::default();
        let args = CliArgs {
            cloudiness: Some(0.8),
            log_level: Some("debug".to_string()),
            ..no_args()
        };
        settings.apply_cli_overrides(&args);
        assert_eq!(settings.clouds.cloudiness, 0.8);
        assert_eq!(settings.debug.log_level, "debug");
        // Non-overridden fields retain defaults
        assert_eq!(settings.lighting.sunset_threshold_deg, 70.0);
    }

    #[test]
    fn test_cli_no_override() {
        let original = SkySettings::default();
        let mut settings = SkySettings::default();
        settings.apply_cli_overrides(&no_args());
        assert_eq!(settings, original);
    }

    #[test]
    fn test_cli_can_introduce_invalid_values_caught_by_validate() {
        let mut settings = SkySettings::default();
        let args = CliArgs {
            sunset_leeway: Some(0.0),
            ..no_args()
        };
        settings.apply_cli_overrides(&args);
        assert!(settings.validate().is_err());
    }
}
