use std::path::PathBuf;

use crate::error::LootError;

pub const USAGE: &str = "\
usage: loot [--level PATH] [--tiles PATH] [--hero PATH] [--fps N] [--debug]

  --level PATH   level file to load and save (default: level.json)
  --tiles PATH   tile sheet for new levels (default: art/tiles.png)
  --hero PATH    hero sprite sheet (default: art/hero.png)
  --fps N        frame-rate limit (default: 30)
  --debug        verbose logging";

/// Editor run configuration.
///
/// - `level_path`: JSON file the map is loaded from and saved to
/// - `tiles_image`: tile sheet used when no level file exists yet
/// - `map_width` / `map_height`: dimensions recorded in new levels
/// - `fps_limit` / `updates_per_second`: frame pacing
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub level_path: PathBuf,
    pub tiles_image: String,
    pub hero_image: PathBuf,
    pub map_width: u32,
    pub map_height: u32,
    pub fps_limit: u32,
    pub updates_per_second: u32,
    pub debug: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            title: String::from("loot"),
            window_width: 800,
            window_height: 600,
            level_path: PathBuf::from("level.json"),
            tiles_image: String::from("art/tiles.png"),
            hero_image: PathBuf::from("art/hero.png"),
            map_width: 16,
            map_height: 16,
            fps_limit: 30,
            updates_per_second: 60,
            debug: false,
        }
    }
}

impl EditorConfig {
    /// Parse command-line arguments (without the program name).
    pub fn from_args<I>(args: I) -> Result<Self, LootError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--debug" => config.debug = true,
                "--level" => config.level_path = PathBuf::from(value(&arg, args.next())?),
                "--tiles" => config.tiles_image = value(&arg, args.next())?,
                "--hero" => config.hero_image = PathBuf::from(value(&arg, args.next())?),
                "--fps" => {
                    let raw = value(&arg, args.next())?;
                    config.fps_limit = match raw.parse::<u32>() {
                        Ok(n) if n > 0 => n,
                        _ => return Err(LootError::Usage(format!("--fps expects a positive integer, got '{raw}'"))),
                    };
                }
                "-h" | "--help" => return Err(LootError::Usage(USAGE.to_string())),
                other => return Err(LootError::Usage(format!("unknown argument '{other}'\n{USAGE}"))),
            }
        }

        Ok(config)
    }

    /// `env_logger` filter used unless `RUST_LOG` is set.
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "loot=debug,wgpu_core=warn,wgpu_hal=warn,naga=warn,winit=warn"
        } else {
            "loot=info,wgpu_core=warn,wgpu_hal=warn,naga=warn,winit=warn"
        }
    }
}

fn value(flag: &str, next: Option<String>) -> Result<String, LootError> {
    next.ok_or_else(|| LootError::Usage(format!("{flag} expects a value")))
}
