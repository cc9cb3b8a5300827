//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`ORB_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use orbitsim_physics::{FrameClock, DEFAULT_INITIAL_DT, DEFAULT_TIME_SCALE};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Simulation configuration
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Snapshot output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`ORB_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // ORB_SIMULATION__FRAMES=600 -> simulation.frames = 600
        figment = figment.merge(Env::prefixed("ORB_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::invalid("window size must be non-zero"));
        }
        if !(self.simulation.fps.is_finite() && self.simulation.fps > 0.0) {
            return Err(ConfigError::invalid("simulation.fps must be positive"));
        }
        if !(self.simulation.time_scale.is_finite() && self.simulation.time_scale >= 0.0) {
            return Err(ConfigError::invalid("simulation.time_scale must be non-negative"));
        }
        if !(self.simulation.initial_dt.is_finite() && self.simulation.initial_dt >= 0.0) {
            return Err(ConfigError::invalid("simulation.initial_dt must be non-negative"));
        }
        if !(self.simulation.max_frame_gap.is_finite() && self.simulation.max_frame_gap >= 0.0) {
            return Err(ConfigError::invalid("simulation.max_frame_gap must be non-negative"));
        }
        if !(self.simulation.softening.is_finite() && self.simulation.softening >= 0.0) {
            return Err(ConfigError::invalid("simulation.softening must be non-negative"));
        }
        Ok(())
    }
}

/// Canvas configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title used in log output
    pub title: String,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Orbitsim".to_string(),
            width: 800,
            height: 800,
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Built-in scene name (`earth-moon`, `sun-earth`) or path to a RON scene
    pub scene: String,
    /// Simulated seconds per wall-clock second (scenes may override)
    pub time_scale: f64,
    /// Simulated seconds advanced on the first frame
    pub initial_dt: f64,
    /// Largest wall-clock gap honoured between frames, in seconds
    pub max_frame_gap: f64,
    /// Frames to render before exiting
    pub frames: u64,
    /// Frame rate of the animation timeline
    pub fps: f64,
    /// Pace frames against the wall clock instead of a synthetic timeline
    pub realtime: bool,
    /// Gravitational softening length in metres
    pub softening: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            scene: "earth-moon".to_string(),
            time_scale: DEFAULT_TIME_SCALE,
            initial_dt: DEFAULT_INITIAL_DT,
            max_frame_gap: 0.25,
            frames: 1200,
            fps: 60.0,
            realtime: false,
            softening: 0.0,
        }
    }
}

impl SimulationConfig {
    /// Build a frame clock, letting a scene override the time scale
    pub fn frame_clock(&self, scene_time_scale: Option<f64>) -> FrameClock {
        FrameClock::new(scene_time_scale.unwrap_or(self.time_scale))
            .with_initial_dt(self.initial_dt)
            .with_max_frame_gap(self.max_frame_gap)
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Per-frame background wash [r, g, b, a]; alpha < 1 leaves trails
    pub background_color: [f32; 4],
    /// Smallest drawn body radius in pixels
    pub min_radius: f64,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [20.0 / 255.0, 20.0 / 255.0, 20.0 / 255.0, 0.5],
            min_radius: 0.0,
        }
    }
}

/// Snapshot output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory PNG snapshots are written to
    pub dir: String,
    /// Write a snapshot every N frames (0 = only the final frame)
    pub snapshot_interval: u64,
    /// Write the final frame
    pub final_snapshot: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: "output".to_string(),
            snapshot_interval: 0,
            final_snapshot: true,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Log the debug table every N frames (0 = never)
    pub log_interval: u64,
    /// Body whose speed is reported (None = the scene's choice)
    pub tracked_body: Option<String>,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_interval: 60,
            tracked_body: None,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
