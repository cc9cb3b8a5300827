//! Scene serialization
//!
//! Provides Scene struct for loading/saving scenes from RON files.
//! Scenes contain body templates plus the scale and timing that suit them.

use serde::{Serialize, Deserialize};
use std::path::Path;
use std::fs;
use std::io;

use crate::{Material, World};
use orbitsim_math::Vec2;
use orbitsim_physics::{Body, GravityConfig, PhysicsError};

const EARTH_MASS: f64 = 5.972e24;
const EARTH_RADIUS: f64 = 6_371_000.0;
const MOON_MASS: f64 = 7.347673e22;
const MOON_RADIUS: f64 = 1_737_000.0;
const EARTH_MOON_DISTANCE: f64 = 384_400_000.0;
const SUN_MASS: f64 = 1.989e30;
const SUN_RADIUS: f64 = 696_340_000.0;
const ASTRONOMICAL_UNIT: f64 = 149.6e9;
const EARTH_ORBITAL_SPEED: f64 = 29_780.0;

/// A serializable body description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyTemplate {
    /// Entity name
    pub name: String,
    /// Mass in kilograms
    pub mass: f64,
    /// Position in canvas units [x, y]
    pub position: [f64; 2],
    /// Velocity in metres per second [x, y]
    #[serde(default)]
    pub velocity: [f64; 2],
    /// Real radius in metres (drawn at `radius_m / scale`)
    pub radius_m: f64,
    /// CSS hex color
    #[serde(default = "default_color")]
    pub color: String,
    /// Pin the body in place
    #[serde(default)]
    pub fixed: bool,
}

fn default_color() -> String {
    "#000".to_string()
}

impl BodyTemplate {
    /// Create a template with the default color
    pub fn new(name: impl Into<String>, mass: f64, position: [f64; 2], radius_m: f64) -> Self {
        Self {
            name: name.into(),
            mass,
            position,
            velocity: [0.0, 0.0],
            radius_m,
            color: default_color(),
            fixed: false,
        }
    }

    /// Set the initial velocity in m/s
    pub fn with_velocity(mut self, vx: f64, vy: f64) -> Self {
        self.velocity = [vx, vy];
        self
    }

    /// Set the CSS hex color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Pin the body in place
    pub fn with_fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    /// Build the physics body for a given scale
    pub fn to_body(&self, scale: f64) -> Body {
        Body::from_real(
            self.mass,
            Vec2::from(self.position),
            Vec2::from(self.velocity),
            self.radius_m,
            scale,
        )
        .with_fixed(self.fixed)
    }
}

/// A serializable scene containing body templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Scene name (for display/debugging)
    pub name: String,
    /// Metres per canvas unit
    pub scale: f64,
    /// Simulated seconds per wall-clock second (None = use the configured value)
    #[serde(default)]
    pub time_scale: Option<f64>,
    /// Gravitational constant override
    #[serde(default)]
    pub gravitational_constant: Option<f64>,
    /// Body whose speed the debug table reports
    #[serde(default)]
    pub tracked_body: Option<String>,
    /// Body templates in this scene
    pub bodies: Vec<BodyTemplate>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new(name: impl Into<String>, scale: f64) -> Self {
        Self {
            name: name.into(),
            scale,
            time_scale: None,
            gravitational_constant: None,
            tracked_body: None,
            bodies: Vec::new(),
        }
    }

    /// Load a scene from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneLoadError> {
        let contents = fs::read_to_string(path)?;
        let scene = ron::from_str(&contents)?;
        Ok(scene)
    }

    /// Save a scene to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SceneSaveError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Add a body template to this scene
    pub fn add_body(&mut self, body: BodyTemplate) {
        self.bodies.push(body);
    }

    /// Set the time scale for this scene
    pub fn with_time_scale(mut self, time_scale: f64) -> Self {
        self.time_scale = Some(time_scale);
        self
    }

    /// Set the body tracked by the debug table
    pub fn with_tracked_body(mut self, name: impl Into<String>) -> Self {
        self.tracked_body = Some(name.into());
        self
    }

    /// Gravity configuration for this scene
    pub fn gravity_config(&self, softening: f64) -> GravityConfig {
        let mut config = GravityConfig::new(self.scale).with_softening(softening);
        if let Some(g) = self.gravitational_constant {
            config = config.with_gravitational_constant(g);
        }
        config
    }

    /// Build a world from this scene
    pub fn instantiate(&self, softening: f64) -> Result<World, SceneError> {
        if let Some(time_scale) = self.time_scale {
            if !time_scale.is_finite() || time_scale < 0.0 {
                return Err(SceneError::InvalidTimeScale(time_scale));
            }
        }
        let mut world = World::with_config(self.gravity_config(softening))?;

        for template in &self.bodies {
            let material = Material::from_hex(&template.color)
                .ok_or_else(|| SceneError::InvalidColor(template.color.clone()))?;
            world.spawn(template.name.clone(), template.to_body(self.scale), material)?;
        }

        log::info!(
            "Instantiated scene '{}' with {} bodies at {:.3e} m/unit",
            self.name,
            world.entity_count(),
            self.scale
        );
        Ok(world)
    }

    /// Look up a built-in scene by name (`earth-moon` or `sun-earth`)
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "earth-moon" | "earth_moon" => Some(Self::earth_moon()),
            "sun-earth" | "sun_earth" => Some(Self::sun_earth()),
            _ => None,
        }
    }

    /// Earth and Moon on an 800×800 canvas
    ///
    /// The Moon starts due west of Earth at the mean orbital distance moving
    /// "down" the canvas at its orbital speed; Earth drifts slightly to keep
    /// the pair roughly centred.
    pub fn earth_moon() -> Self {
        let scale = 1_100_000.0;
        let mut scene = Self::new("Earth-Moon", scale).with_tracked_body("moon");

        scene.add_body(
            BodyTemplate::new("earth", EARTH_MASS, [400.0, 400.0], EARTH_RADIUS)
                .with_velocity(0.1, -12.0)
                .with_color("#39f"),
        );
        scene.add_body(
            BodyTemplate::new(
                "moon",
                MOON_MASS,
                [400.0 - EARTH_MOON_DISTANCE / scale, 400.0],
                MOON_RADIUS,
            )
            .with_velocity(0.0, 1023.006)
            .with_color("#f82"),
        );
        scene
    }

    /// Sun and Earth on an 800×800 canvas, one AU = 350 units
    pub fn sun_earth() -> Self {
        let scale = ASTRONOMICAL_UNIT / 350.0;
        let mut scene = Self::new("Sun-Earth", scale)
            .with_time_scale(2_000_000.0)
            .with_tracked_body("earth");

        // Sun recoils so total momentum is zero
        let sun_speed = -EARTH_MASS * EARTH_ORBITAL_SPEED / SUN_MASS;
        scene.add_body(
            BodyTemplate::new("sun", SUN_MASS, [400.0, 400.0], SUN_RADIUS)
                .with_velocity(0.0, sun_speed)
                .with_color("#fd3"),
        );
        scene.add_body(
            BodyTemplate::new("earth", EARTH_MASS, [50.0, 400.0], EARTH_RADIUS)
                .with_velocity(0.0, EARTH_ORBITAL_SPEED)
                .with_color("#39f"),
        );
        scene
    }
}

/// Error loading a scene
#[derive(Debug)]
pub enum SceneLoadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
}

impl From<io::Error> for SceneLoadError {
    fn from(e: io::Error) -> Self {
        SceneLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for SceneLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneLoadError::Parse(e)
    }
}

impl std::fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneLoadError::Io(e) => write!(f, "IO error: {}", e),
            SceneLoadError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SceneLoadError {}

/// Error saving a scene
#[derive(Debug)]
pub enum SceneSaveError {
    /// IO error (permission denied, disk full, etc.)
    Io(io::Error),
    /// Serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for SceneSaveError {
    fn from(e: io::Error) -> Self {
        SceneSaveError::Io(e)
    }
}

impl From<ron::Error> for SceneSaveError {
    fn from(e: ron::Error) -> Self {
        SceneSaveError::Serialize(e)
    }
}

impl std::fmt::Display for SceneSaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneSaveError::Io(e) => write!(f, "IO error: {}", e),
            SceneSaveError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for SceneSaveError {}

/// Unified error type for scene operations
#[derive(Debug)]
pub enum SceneError {
    /// Scene file could not be read or parsed
    Load(SceneLoadError),
    /// Scene scale or a body was rejected by the gravity system
    Physics(PhysicsError),
    /// Body color is not a valid hex color
    InvalidColor(String),
    /// No built-in scene or file with this name
    NotFound(String),
    /// Scene time scale must be finite and non-negative
    InvalidTimeScale(f64),
}

impl From<SceneLoadError> for SceneError {
    fn from(e: SceneLoadError) -> Self {
        SceneError::Load(e)
    }
}

impl From<PhysicsError> for SceneError {
    fn from(e: PhysicsError) -> Self {
        SceneError::Physics(e)
    }
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::Load(e) => write!(f, "Scene load failed: {}", e),
            SceneError::Physics(e) => write!(f, "Scene rejected: {}", e),
            SceneError::InvalidColor(c) => write!(f, "Invalid color: {}", c),
            SceneError::NotFound(name) => write!(f, "Scene not found: {}", name),
            SceneError::InvalidTimeScale(t) => write!(f, "Invalid scene time scale: {}", t),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Load(e) => Some(e),
            SceneError::Physics(e) => Some(e),
            SceneError::InvalidColor(_)
            | SceneError::NotFound(_)
            | SceneError::InvalidTimeScale(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_new() {
        let scene = Scene::new("Test", 10.0);
        assert_eq!(scene.name, "Test");
        assert_eq!(scene.scale, 10.0);
        assert!(scene.bodies.is_empty());
        assert!(scene.time_scale.is_none());
    }

    #[test]
    fn test_earth_moon_preset() {
        let scene = Scene::earth_moon();
        assert_eq!(scene.bodies.len(), 2);
        assert_eq!(scene.tracked_body.as_deref(), Some("moon"));

        let moon = &scene.bodies[1];
        assert!((moon.position[0] - 50.545_454).abs() < 1e-5);
        assert_eq!(moon.velocity, [0.0, 1023.006]);
        assert_eq!(moon.color, "#f82");
    }

    #[test]
    fn test_sun_earth_preset_has_zero_momentum() {
        let scene = Scene::sun_earth();
        let p: f64 = scene.bodies.iter().map(|b| b.mass * b.velocity[1]).sum();
        assert!(p.abs() / (EARTH_MASS * EARTH_ORBITAL_SPEED) < 1e-12);
        // One AU spans 350 canvas units
        let dx = scene.bodies[0].position[0] - scene.bodies[1].position[0];
        assert!((dx * scene.scale - ASTRONOMICAL_UNIT).abs() < 1.0);
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(Scene::preset("earth-moon"), Some(Scene::earth_moon()));
        assert_eq!(Scene::preset("sun_earth"), Some(Scene::sun_earth()));
        assert!(Scene::preset("mars").is_none());
    }

    #[test]
    fn test_instantiate_earth_moon() {
        let world = Scene::earth_moon().instantiate(0.0).unwrap();
        assert_eq!(world.entity_count(), 2);

        let earth = world.body_by_name("earth").unwrap();
        assert!((earth.radius - 6_371_000.0 / 1_100_000.0).abs() < 1e-12);
        assert_eq!(world.get_by_name("earth").unwrap().1.material, Material::EARTH);
    }

    #[test]
    fn test_instantiate_rejects_bad_time_scale() {
        for bad in [-1000.0, f64::NAN, f64::INFINITY] {
            let scene = Scene::earth_moon().with_time_scale(bad);
            match scene.instantiate(0.0) {
                Err(SceneError::InvalidTimeScale(_)) => {}
                other => panic!("Expected InvalidTimeScale, got {:?}", other.err()),
            }
        }
        assert!(Scene::earth_moon().with_time_scale(0.0).instantiate(0.0).is_ok());
    }

    #[test]
    fn test_instantiate_rejects_bad_gravitational_constant() {
        let mut scene = Scene::earth_moon();
        scene.gravitational_constant = Some(-6.674e-11);
        match scene.instantiate(0.0) {
            Err(SceneError::Physics(PhysicsError::InvalidGravitationalConstant(g))) => {
                assert_eq!(g, -6.674e-11)
            }
            other => panic!("Expected InvalidGravitationalConstant, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_instantiate_rejects_bad_color() {
        let mut scene = Scene::new("Bad", 1.0);
        scene.add_body(BodyTemplate::new("x", 1.0, [0.0, 0.0], 1.0).with_color("blue"));
        match scene.instantiate(0.0) {
            Err(SceneError::InvalidColor(c)) => assert_eq!(c, "blue"),
            other => panic!("Expected InvalidColor, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_instantiate_rejects_bad_scale_and_mass() {
        let scene = Scene::new("Flat", 0.0);
        assert!(matches!(
            scene.instantiate(0.0),
            Err(SceneError::Physics(PhysicsError::InvalidScale(_)))
        ));

        let mut scene = Scene::new("Massless", 1.0);
        scene.add_body(BodyTemplate::new("ghost", 0.0, [0.0, 0.0], 1.0));
        assert!(matches!(
            scene.instantiate(0.0),
            Err(SceneError::Physics(PhysicsError::InvalidMass(_)))
        ));
    }

    #[test]
    fn test_gravity_config_override() {
        let mut scene = Scene::new("Strong", 2.0);
        scene.gravitational_constant = Some(1.0);
        let config = scene.gravity_config(5.0);
        assert_eq!(config.gravitational_constant, 1.0);
        assert_eq!(config.scale, 2.0);
        assert_eq!(config.softening, 5.0);
    }

    #[test]
    fn test_ron_defaults() {
        let ron = r#"(
            name: "Minimal",
            scale: 1000.0,
            bodies: [
                (name: "a", mass: 1.0, position: (0.0, 0.0), radius_m: 10.0),
            ],
        )"#;
        let scene: Scene = ron::from_str(ron).unwrap();
        assert!(scene.time_scale.is_none());
        let body = &scene.bodies[0];
        assert_eq!(body.velocity, [0.0, 0.0]);
        assert_eq!(body.color, "#000");
        assert!(!body.fixed);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Scene::load("/nonexistent/path/scene.ron");
        assert!(matches!(result, Err(SceneLoadError::Io(_))));
    }

    #[test]
    fn test_error_display() {
        let err = SceneError::NotFound("mars".to_string());
        assert_eq!(format!("{}", err), "Scene not found: mars");
        let err = SceneError::from(PhysicsError::InvalidScale(0.0));
        assert_eq!(format!("{}", err), "Scene rejected: Invalid scale: 0");
    }
}
