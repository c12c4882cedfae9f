//! Round configuration resource.
//!
//! Manages window and gameplay settings loaded from an INI configuration
//! file. Defaults reproduce the classic round, so a missing file is not an
//! error for the game.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//!
//! [round]
//! duration = 60
//! light_interval = 3
//! player_speed = 0.3
//! chase_speed = 2.0
//! pickup_distance = 2.0
//! finish_line = 60
//! offfield_x = 20
//!
//! [assets]
//! dir = .
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_ROUND_DURATION: f32 = 60.0;
const DEFAULT_LIGHT_INTERVAL: f32 = 3.0;
const DEFAULT_PLAYER_SPEED: f32 = 0.3;
const DEFAULT_CHASE_SPEED: f32 = 2.0;
const DEFAULT_PICKUP_DISTANCE: f32 = 2.0;
const DEFAULT_FINISH_LINE: f32 = 60.0;
const DEFAULT_OFFFIELD_X: f32 = 20.0;
const DEFAULT_ASSETS_DIR: &str = ".";
pub const DEFAULT_CONFIG_PATH: &str = "./redlight.ini";

/// Round configuration resource.
///
/// Stores window settings, the tuning constants of the round logic and the
/// directory that model/audio paths are resolved against.
#[derive(Resource, Debug, Clone)]
pub struct RoundConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Length of the round in seconds.
    pub round_duration: f32,
    /// Seconds between red/green toggles.
    pub light_interval: f32,
    /// Distance a player moves per key press.
    pub player_speed: f32,
    /// Guard speed in units per second.
    pub chase_speed: f32,
    /// Guard picks up a player closer than this.
    pub pickup_distance: f32,
    /// Forward coordinate a player must reach to win.
    pub finish_line: f32,
    /// Lateral distance retrieved players are moved to.
    pub offfield_x: f32,
    /// Directory containing models and sounds.
    pub assets_dir: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundConfig {
    /// Create a new configuration with the classic round values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            round_duration: DEFAULT_ROUND_DURATION,
            light_interval: DEFAULT_LIGHT_INTERVAL,
            player_speed: DEFAULT_PLAYER_SPEED,
            chase_speed: DEFAULT_CHASE_SPEED,
            pickup_distance: DEFAULT_PICKUP_DISTANCE,
            finish_line: DEFAULT_FINISH_LINE,
            offfield_x: DEFAULT_OFFFIELD_X,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, round={}s, light every {}s, finish at {}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.round_duration,
            self.light_interval,
            self.finish_line
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [round] section
        let float = |key: &str| {
            config
                .getfloat("round", key)
                .ok()
                .flatten()
                .map(|v| v as f32)
        };
        if let Some(v) = float("duration") {
            self.round_duration = v;
        }
        if let Some(v) = float("light_interval") {
            self.light_interval = v;
        }
        if let Some(v) = float("player_speed") {
            self.player_speed = v;
        }
        if let Some(v) = float("chase_speed") {
            self.chase_speed = v;
        }
        if let Some(v) = float("pickup_distance") {
            self.pickup_distance = v;
        }
        if let Some(v) = float("finish_line") {
            self.finish_line = v;
        }
        if let Some(v) = float("offfield_x") {
            self.offfield_x = v;
        }

        // [assets] section
        if let Some(dir) = config.get("assets", "dir") {
            self.assets_dir = PathBuf::from(dir);
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [round] section
        config.set("round", "duration", Some(self.round_duration.to_string()));
        config.set(
            "round",
            "light_interval",
            Some(self.light_interval.to_string()),
        );
        config.set("round", "player_speed", Some(self.player_speed.to_string()));
        config.set("round", "chase_speed", Some(self.chase_speed.to_string()));
        config.set(
            "round",
            "pickup_distance",
            Some(self.pickup_distance.to_string()),
        );
        config.set("round", "finish_line", Some(self.finish_line.to_string()));
        config.set("round", "offfield_x", Some(self.offfield_x.to_string()));

        // [assets] section
        config.set(
            "assets",
            "dir",
            Some(self.assets_dir.to_string_lossy().into_owned()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Resolve an asset file name against the configured assets directory.
    pub fn asset_path(&self, file: &str) -> PathBuf {
        self.assets_dir.join(file)
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
