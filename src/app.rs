//! Headless frame loop
//!
//! Feeds the simulation timestamps from either a synthetic timeline at the
//! configured frame rate or the wall clock, and hands frames to the output
//! system.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::systems::{OutputSystem, SimulationSystem};

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Frames rendered
    pub frames: u64,
    /// Simulated seconds covered
    pub simulated_seconds: f64,
    /// Snapshot files written, in order
    pub snapshots: Vec<PathBuf>,
}

/// Main application state
pub struct App {
    config: AppConfig,
    simulation: SimulationSystem,
    output: OutputSystem,
}

impl App {
    /// Build the application from a loaded configuration
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        config.validate()?;
        let simulation = SimulationSystem::from_config(&config)?;
        let output = OutputSystem::from_config(&config.output);

        log::info!(
            "{}: scene '{}' with {} bodies on a {}x{} canvas",
            config.window.title,
            simulation.scene().name,
            simulation.world().entity_count(),
            config.window.width,
            config.window.height
        );

        Ok(Self {
            config,
            simulation,
            output,
        })
    }

    /// The simulation system
    pub fn simulation(&self) -> &SimulationSystem {
        &self.simulation
    }

    /// Render every configured frame
    pub fn run(&mut self) -> Result<RunSummary, AppError> {
        let frames = self.config.simulation.frames;
        let period = 1.0 / self.config.simulation.fps;
        let realtime = self.config.simulation.realtime;
        let start = Instant::now();

        for index in 0..frames {
            let target = index as f64 * period;
            let now = if realtime {
                let elapsed = start.elapsed().as_secs_f64();
                if target > elapsed {
                    std::thread::sleep(Duration::from_secs_f64(target - elapsed));
                }
                start.elapsed().as_secs_f64()
            } else {
                target
            };

            let report = self.simulation.frame(now)?;
            if self.output.wants(report.frame, index + 1 == frames) {
                self.output.write(self.simulation.canvas(), report.frame)?;
            }
        }

        let summary = RunSummary {
            frames: self.simulation.renderer().frame_count(),
            simulated_seconds: self.simulation.renderer().clock().simulated_seconds(),
            snapshots: self.output.written().to_vec(),
        };
        log::info!(
            "Rendered {} frames covering {:.2} simulated days, {} snapshots",
            summary.frames,
            summary.simulated_seconds / 86_400.0,
            summary.snapshots.len()
        );
        Ok(summary)
    }
}
