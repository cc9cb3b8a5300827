//! Frame loop: paint the canvas, then advance physics once

use orbitsim_core::World;
use orbitsim_physics::{FrameClock, StepStats};

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::error::RenderError;

/// What happened during one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    /// Frame number, starting at 1
    pub frame: u64,
    /// Simulated seconds the physics advanced this frame
    pub dt: f64,
    /// Physics step summary
    pub stats: StepStats,
}

/// Draws the world onto a canvas and drives the physics clock
///
/// Each frame washes the canvas with a translucent background (so bodies
/// leave fading trails), draws every body as a filled circle at its current
/// position, and then steps physics by the clock's dt.
pub struct Renderer {
    canvas: Canvas,
    clock: FrameClock,
    background: Rgba,
    min_radius: f64,
    frame: u64,
}

impl Renderer {
    /// Create a renderer for a `width × height` canvas
    pub fn new(width: u32, height: u32, clock: FrameClock) -> Self {
        Self {
            canvas: Canvas::new(width, height),
            clock,
            background: Rgba::new(20, 20, 20, 128),
            min_radius: 0.0,
            frame: 0,
        }
    }

    /// Set the per-frame background wash
    pub fn with_background(mut self, background: Rgba) -> Self {
        self.background = background;
        self
    }

    /// Draw bodies at least this large (canvas units)
    pub fn with_min_radius(mut self, min_radius: f64) -> Self {
        self.min_radius = min_radius.max(0.0);
        self
    }

    /// The canvas as of the last frame
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The frame clock
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Number of frames rendered
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Paint the background and every body without stepping physics
    pub fn draw(&mut self, world: &World) {
        self.canvas.fill(self.background);
        for (entity, body) in world.iter_bodies() {
            let radius = body.radius.max(self.min_radius);
            self.canvas
                .fill_circle(body.position, radius, Rgba::from(entity.material));
        }
    }

    /// Render one animation frame at timestamp `now` (seconds)
    pub fn frame(&mut self, world: &mut World, now: f64) -> Result<FrameReport, RenderError> {
        self.draw(world);

        let dt = self.clock.tick(now);
        let stats = world.update(dt)?;
        self.frame += 1;

        log::debug!(
            "Frame {}: dt {:.1}s, {} pairs",
            self.frame,
            dt,
            stats.pairs
        );

        Ok(FrameReport {
            frame: self.frame,
            dt,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbitsim_core::{Material, Scene};
    use orbitsim_math::Vec2;
    use orbitsim_physics::Body;

    #[test]
    fn test_draw_paints_bodies_with_their_colors() {
        let world = Scene::earth_moon().instantiate(0.0).unwrap();
        let mut renderer = Renderer::new(800, 800, FrameClock::default());
        renderer.draw(&world);

        assert_eq!(renderer.canvas().pixel(400, 400), Some(Rgba::from(Material::EARTH)));
        assert_eq!(renderer.canvas().pixel(50, 400), Some(Rgba::from(Material::MOON)));
        // Empty space takes the background wash
        assert_eq!(renderer.canvas().pixel(700, 100), Some(Rgba::new(20, 20, 20, 128)));
    }

    #[test]
    fn test_frame_draws_before_stepping() {
        let mut world = World::new();
        world
            .spawn(
                "probe",
                Body::new(1.0, Vec2::new(5.5, 5.5), Vec2::new(1_100_000.0, 0.0), 0.4),
                Material::WHITE,
            )
            .unwrap();

        let clock = FrameClock::new(60.0).with_initial_dt(1.0);
        let mut renderer = Renderer::new(20, 20, clock);

        let report = renderer.frame(&mut world, 0.0).unwrap();
        assert_eq!(report.frame, 1);
        assert_eq!(report.dt, 1.0);

        // Drawn at the old position, body has since moved one unit right
        assert_eq!(renderer.canvas().pixel(5, 5), Some(Rgba::from(Material::WHITE)));
        let body = world.body_by_name("probe").unwrap();
        assert!((body.position.x - 6.5).abs() < 1e-9);
    }

    #[test]
    fn test_frames_use_clock_dt() {
        let mut world = Scene::earth_moon().instantiate(0.0).unwrap();
        let mut renderer = Renderer::new(800, 800, FrameClock::new(128_000.0));

        let first = renderer.frame(&mut world, 10.0).unwrap();
        let second = renderer.frame(&mut world, 10.5).unwrap();

        assert_eq!(first.dt, 1.0 / 60.0);
        assert!((second.dt - 32_000.0).abs() < 1e-6);
        assert_eq!(second.stats.pairs, 1);
        assert_eq!(renderer.frame_count(), 2);
    }

    #[test]
    fn test_min_radius_enlarges_tiny_bodies() {
        let world = Scene::sun_earth().instantiate(0.0).unwrap();
        let mut plain = Renderer::new(800, 800, FrameClock::default());
        let mut enlarged = Renderer::new(800, 800, FrameClock::default()).with_min_radius(3.0);
        plain.draw(&world);
        enlarged.draw(&world);

        let earth = Rgba::from(Material::EARTH);
        let lit = |r: &Renderer| r.canvas().pixels().iter().filter(|p| **p == earth).count();
        assert_eq!(lit(&plain), 1);
        assert!(lit(&enlarged) > 20);
    }
}
