//! Snapshot output system
//!
//! Writes the canvas to numbered PNG files.

use std::fs;
use std::path::PathBuf;

use orbitsim_render::{Canvas, RenderError};

use crate::config::OutputConfig;

/// Decides which frames are saved and writes them
pub struct OutputSystem {
    dir: PathBuf,
    interval: u64,
    final_snapshot: bool,
    written: Vec<PathBuf>,
}

impl OutputSystem {
    /// Create an output system writing into `dir`
    ///
    /// `interval` of 0 disables periodic snapshots.
    pub fn new(dir: impl Into<PathBuf>, interval: u64, final_snapshot: bool) -> Self {
        Self {
            dir: dir.into(),
            interval,
            final_snapshot,
            written: Vec::new(),
        }
    }

    /// Create an output system from config
    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(&config.dir, config.snapshot_interval, config.final_snapshot)
    }

    /// Whether `frame` should be written
    pub fn wants(&self, frame: u64, is_last: bool) -> bool {
        let periodic = self.interval > 0 && frame % self.interval == 0;
        periodic || (is_last && self.final_snapshot)
    }

    /// File a given frame is written to
    pub fn path_for(&self, frame: u64) -> PathBuf {
        self.dir.join(format!("frame_{:06}.png", frame))
    }

    /// Write the canvas as the snapshot for `frame`
    pub fn write(&mut self, canvas: &Canvas, frame: u64) -> Result<PathBuf, RenderError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(frame);
        canvas.save_png(&path)?;
        log::debug!("Wrote snapshot {}", path.display());
        self.written.push(path.clone());
        Ok(path)
    }

    /// Snapshots written so far
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wants() {
        let output = OutputSystem::new("out", 10, true);
        assert!(!output.wants(5, false));
        assert!(output.wants(10, false));
        assert!(output.wants(7, true));

        let output = OutputSystem::new("out", 0, false);
        assert!(!output.wants(10, false));
        assert!(!output.wants(10, true));
    }

    #[test]
    fn test_path_for() {
        let output = OutputSystem::new("out", 1, false);
        assert_eq!(output.path_for(42), PathBuf::from("out").join("frame_000042.png"));
    }

    #[test]
    fn test_write_creates_dir() {
        let dir = std::env::temp_dir().join("orbitsim_output_write").join("nested");
        std::fs::remove_dir_all(&dir).ok();

        let mut output = OutputSystem::new(&dir, 1, false);
        let path = output.write(&Canvas::new(4, 4), 3).unwrap();

        assert!(path.is_file());
        assert_eq!(output.written(), &[path.clone()]);
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");

        std::fs::remove_dir_all(&dir).ok();
    }
}
