// File: crates/plots-core/src/diagram.rs
// Summary: Named diagram capability plus collision-free figure / raw-data writers.
// Notes:
// - Names are `<stem>_<n><suffix>` with the smallest unused n. The scan and the
//   write are not atomic; concurrent writers sharing a stem can collide.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Serialize;

use crate::error::{PlotError, Result};
use crate::figure::{Figure, FigureFormat};
use crate::types::{FIGURES_DIR, RAW_DIR, RAW_SUFFIX};

/// Something with a name that can be persisted and reset.
pub trait Diagram {
    fn name(&self) -> &str;

    /// Reset accumulated state. The default does nothing.
    fn clear(&mut self) {}
}

/// First unused `<stem>_<n><suffix>` inside `dir`.
pub fn next_free_path(dir: &Path, stem: &str, suffix: &str) -> PathBuf {
    let mut modifier: u64 = 0;
    loop {
        let candidate = dir.join(format!("{stem}_{modifier}{suffix}"));
        if !candidate.exists() {
            return candidate;
        }
        modifier += 1;
    }
}

/// Output locations for rendered figures and raw snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputDirs {
    pub figures: PathBuf,
    pub raw: PathBuf,
}

static SHARED: OnceLock<OutputDirs> = OnceLock::new();

impl OutputDirs {
    /// `root/plots` and `root/raw`, created if absent.
    pub fn create(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let dirs = Self { figures: root.join(FIGURES_DIR), raw: root.join(RAW_DIR) };
        for dir in [&dirs.figures, &dirs.raw] {
            std::fs::create_dir_all(dir).map_err(|e| PlotError::io(dir, e))?;
        }
        Ok(dirs)
    }

    /// Process-wide default beside this crate's sources. Directories are created on first use.
    pub fn shared() -> Result<&'static OutputDirs> {
        if let Some(dirs) = SHARED.get() {
            return Ok(dirs);
        }
        let dirs = Self::create(env!("CARGO_MANIFEST_DIR"))?;
        tracing::debug!(figures = %dirs.figures.display(), raw = %dirs.raw.display(), "output directories ready");
        Ok(SHARED.get_or_init(|| dirs))
    }

    /// Write `figure` to `figures/<stem>_<n><suffix>`, cropped to its content.
    pub fn safe_figure_write(&self, stem: &str, suffix: &str, figure: &Figure) -> Result<PathBuf> {
        tracing::info!("writing figure {stem} ...");
        let format = FigureFormat::from_suffix(suffix)?;
        let path = next_free_path(&self.figures, stem, suffix);
        figure.save(&path, format, true)?;
        tracing::debug!(path = %path.display(), "figure written");
        Ok(path)
    }

    /// Serialize `data` as JSON into `raw/<stem>_<n>.json`.
    pub fn safe_datapoint_write<T: Serialize + ?Sized>(&self, stem: &str, data: &T) -> Result<PathBuf> {
        tracing::info!("writing json {stem} ...");
        let path = next_free_path(&self.raw, stem, RAW_SUFFIX);
        let text = serde_json::to_string(data)?;
        std::fs::write(&path, text).map_err(|e| PlotError::io(&path, e))?;
        tracing::debug!(path = %path.display(), "raw data written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct Named(String);

    impl Diagram for Named {
        fn name(&self) -> &str { &self.0 }
    }

    #[test]
    fn default_clear_is_a_no_op() {
        let mut d = Named("keep".into());
        d.clear();
        assert_eq!(d.name(), "keep");
    }

    #[test]
    fn free_path_skips_existing_modifiers() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(next_free_path(tmp.path(), "foo", ".pdf"), tmp.path().join("foo_0.pdf"));
        std::fs::write(tmp.path().join("foo_0.pdf"), b"x").unwrap();
        std::fs::write(tmp.path().join("foo_1.pdf"), b"x").unwrap();
        assert_eq!(next_free_path(tmp.path(), "foo", ".pdf"), tmp.path().join("foo_2.pdf"));
        // other suffixes do not count
        assert_eq!(next_free_path(tmp.path(), "foo", ".json"), tmp.path().join("foo_0.json"));
    }

    #[test]
    fn create_makes_both_directories() {
        let tmp = TempDir::new().unwrap();
        let dirs = OutputDirs::create(tmp.path().join("out")).unwrap();
        assert!(dirs.figures.is_dir());
        assert!(dirs.raw.is_dir());
        assert!(dirs.figures.ends_with("plots"));
        // idempotent
        OutputDirs::create(tmp.path().join("out")).unwrap();
    }

    #[test]
    fn datapoint_writes_never_overwrite() {
        let tmp = TempDir::new().unwrap();
        let dirs = OutputDirs::create(tmp.path()).unwrap();
        let a = dirs.safe_datapoint_write("run", &vec![1, 2]).unwrap();
        let b = dirs.safe_datapoint_write("run", &vec![3]).unwrap();
        assert!(a.ends_with("run_0.json"));
        assert!(b.ends_with("run_1.json"));
        assert_eq!(std::fs::read_to_string(a).unwrap(), "[1,2]");
    }
}
