//! Simulation system
//!
//! Owns the world built from a scene and the renderer that draws and steps it,
//! and reports the debug table at a fixed frame interval.

use std::path::Path;

use orbitsim_core::{Scene, SceneError, World};
use orbitsim_render::{Canvas, DebugTable, FrameReport, RenderError, Renderer, Rgba};

use crate::config::AppConfig;

/// Resolve a scene by preset name, falling back to a RON file path
pub fn resolve_scene(name: &str) -> Result<Scene, SceneError> {
    if let Some(scene) = Scene::preset(name) {
        return Ok(scene);
    }
    if Path::new(name).is_file() {
        return Ok(Scene::load(name)?);
    }
    Err(SceneError::NotFound(name.to_string()))
}

/// Drives one world through its animation frames
pub struct SimulationSystem {
    scene: Scene,
    world: World,
    renderer: Renderer,
    tracked_body: Option<String>,
    log_interval: u64,
    last_report: Option<FrameReport>,
}

impl SimulationSystem {
    /// Build the system for the scene named in the config
    pub fn from_config(config: &AppConfig) -> Result<Self, SceneError> {
        let scene = resolve_scene(&config.simulation.scene)?;
        Self::new(scene, config)
    }

    /// Build the system for an already loaded scene
    pub fn new(scene: Scene, config: &AppConfig) -> Result<Self, SceneError> {
        let world = scene.instantiate(config.simulation.softening)?;

        let clock = config.simulation.frame_clock(scene.time_scale);
        let renderer = Renderer::new(config.window.width, config.window.height, clock)
            .with_background(Rgba::from_f32(config.rendering.background_color))
            .with_min_radius(config.rendering.min_radius);

        let tracked_body = config
            .debug
            .tracked_body
            .clone()
            .or_else(|| scene.tracked_body.clone());
        if let Some(name) = &tracked_body {
            if world.get_by_name(name).is_none() {
                log::warn!("Tracked body '{}' is not in scene '{}'", name, scene.name);
            }
        }

        Ok(Self {
            scene,
            world,
            renderer,
            tracked_body,
            log_interval: config.debug.log_interval,
            last_report: None,
        })
    }

    /// The scene the world was built from
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The simulated world
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The renderer and its frame clock
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// The canvas as drawn by the last frame
    pub fn canvas(&self) -> &Canvas {
        self.renderer.canvas()
    }

    /// Name of the body whose speed is reported
    pub fn tracked_body(&self) -> Option<&str> {
        self.tracked_body.as_deref()
    }

    /// Render one frame at timestamp `now` (seconds)
    pub fn frame(&mut self, now: f64) -> Result<FrameReport, RenderError> {
        let report = self.renderer.frame(&mut self.world, now)?;
        self.last_report = Some(report);

        if self.log_interval > 0 && report.frame % self.log_interval == 0 {
            log::info!(
                "Frame {} ({:.2} days): {}",
                report.frame,
                self.renderer.clock().simulated_seconds() / 86_400.0,
                self.debug_table()
            );
        }
        Ok(report)
    }

    /// Debug labels for the most recent frame
    pub fn debug_table(&self) -> DebugTable {
        let stats = self.last_report.map(|r| r.stats).unwrap_or_default();
        let tracked = self
            .tracked_body
            .as_deref()
            .and_then(|name| self.world.body_by_name(name));
        DebugTable::new(&stats, tracked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_presets() {
        assert_eq!(resolve_scene("earth-moon").unwrap().name, "Earth-Moon");
        assert_eq!(resolve_scene("sun_earth").unwrap().name, "Sun-Earth");
    }

    #[test]
    fn test_resolve_unknown_scene() {
        match resolve_scene("no-such-scene") {
            Err(SceneError::NotFound(name)) => assert_eq!(name, "no-such-scene"),
            other => panic!("expected NotFound, got {:?}", other.map(|s| s.name)),
        }
    }

    #[test]
    fn test_resolve_scene_file() {
        let dir = std::env::temp_dir().join("orbitsim_resolve_scene_file");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("pair.ron");
        Scene::earth_moon().save(&path).unwrap();

        let scene = resolve_scene(path.to_str().unwrap()).unwrap();
        assert_eq!(scene, Scene::earth_moon());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_scene_time_scale_overrides_config() {
        let config = AppConfig::default();
        let sim = SimulationSystem::new(Scene::sun_earth(), &config).unwrap();
        assert_eq!(sim.renderer().clock().time_scale, 2_000_000.0);

        let sim = SimulationSystem::new(Scene::earth_moon(), &config).unwrap();
        assert_eq!(sim.renderer().clock().time_scale, config.simulation.time_scale);
    }

    #[test]
    fn test_tracked_body_from_config_wins() {
        let mut config = AppConfig::default();
        let sim = SimulationSystem::new(Scene::earth_moon(), &config).unwrap();
        assert_eq!(sim.tracked_body(), Some("moon"));

        config.debug.tracked_body = Some("earth".to_string());
        let sim = SimulationSystem::new(Scene::earth_moon(), &config).unwrap();
        assert_eq!(sim.tracked_body(), Some("earth"));
    }

    #[test]
    fn test_debug_table_after_frame() {
        let config = AppConfig::default();
        let mut sim = SimulationSystem::from_config(&config).unwrap();

        let before = sim.debug_table();
        assert!(before.radius.is_none());
        assert!(before.force.is_none());
        assert!(before.speed.is_some());

        sim.frame(0.0).unwrap();
        let table = sim.debug_table();
        assert_eq!(table.radius.as_deref(), Some("384400000.00 m"));
        assert!(table.force.as_deref().unwrap().ends_with(" N"));
        assert!(table.speed.as_deref().unwrap().starts_with("1023.0"));
    }

    #[test]
    fn test_frame_uses_configured_canvas() {
        let mut config = AppConfig::default();
        config.window.width = 120;
        config.window.height = 90;
        let mut sim = SimulationSystem::from_config(&config).unwrap();
        sim.frame(0.0).unwrap();

        assert_eq!(sim.canvas().width(), 120);
        assert_eq!(sim.canvas().height(), 90);
        assert_eq!(sim.renderer().frame_count(), 1);
    }
}
