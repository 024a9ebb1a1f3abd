//! PNG export: filename derivation, encoding and asynchronous saving.
//!
//! # Pipeline
//!
//! ```text
//! Canvas ──clone──> snapshot ──thread──> encode PNG ──> SaveTarget::save ──> path
//! ```
//!
//! [`ExportService::export`] clones the canvas pixels before returning, so the
//! caller can keep rendering while the worker thread encodes. Failures on the
//! worker are logged and surface only as `None` from [`ExportHandle::wait`].
//! Two exports to the same name race; the later write wins.

use std::fs;
use std::io::{self, Cursor};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use image::{ImageBuffer, ImageFormat, Rgb};
use tracing::{debug, error, info};
use vintage_common::Level;

use crate::canvas::Canvas;
use crate::error::{Error, Result};

// =============================================================================
// File Names
// =============================================================================

/// Lowercase `title` and replace each run of whitespace with a single `-`.
///
/// Path separators become `-` too, so a slug is always one file name.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_space = false;
    for c in title.to_lowercase().chars() {
        if c == '/' || c == '\\' {
            slug.push('-');
            in_space = false;
        } else if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.push(c);
            in_space = false;
        }
    }
    slug
}

/// `"{slug}-level-{level}.png"`
pub fn dial_filename(
    title: &str,
    level: Level,
) -> String {
    format!("{}-level-{}.png", slugify(title), level)
}

/// `"{slug}-{count}.png"`
pub fn grid_filename(
    title: &str,
    count: u32,
) -> String {
    format!("{}-{}.png", slugify(title), count)
}

// =============================================================================
// Encoding
// =============================================================================

/// Encode the canvas as an 8-bit RGB PNG.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let buffer: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_raw(canvas.width(), canvas.height(), canvas.to_rgb_bytes())
        .ok_or_else(|| Error::export("pixel buffer does not match canvas size"))?;
    let mut bytes = Cursor::new(Vec::new());
    buffer.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

// =============================================================================
// Save Targets
// =============================================================================

/// Destination for encoded images.
pub trait SaveTarget: Send + Sync {
    /// Store `bytes` under `file_name` and return where they went.
    fn save(
        &self,
        file_name: &str,
        bytes: &[u8],
    ) -> io::Result<PathBuf>;
}

/// Writes files into a directory, creating it on first save.
///
/// Names must be a single file name; anything that would resolve elsewhere is
/// refused with [`io::ErrorKind::InvalidInput`].
#[derive(Clone, Debug)]
pub struct DirectoryTarget {
    dir: PathBuf,
}

impl DirectoryTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self { Self { dir: dir.into() } }

    #[inline]
    pub fn dir(&self) -> &Path { &self.dir }
}

impl SaveTarget for DirectoryTarget {
    fn save(
        &self,
        file_name: &str,
        bytes: &[u8],
    ) -> io::Result<PathBuf> {
        if !is_plain_file_name(file_name) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("not a plain file name: {file_name:?}"),
            ));
        }
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        fs::write(&path, bytes)?;
        Ok(path)
    }
}

/// Exactly one normal path component, e.g. no `..`, `/` or drive prefix.
fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(first)), None) if first == name
    )
}

// =============================================================================
// Export Service
// =============================================================================

/// Encode `canvas` and hand the bytes to `target`.
fn write_png(
    canvas: &Canvas,
    file_name: &str,
    target: &dyn SaveTarget,
) -> Result<PathBuf> {
    let bytes = encode_png(canvas)?;
    debug!(file_name = %file_name, bytes = bytes.len(), "png encoded");
    Ok(target.save(file_name, &bytes)?)
}

/// Completion handle of one background export.
#[derive(Debug)]
#[must_use = "dropping the handle detaches the export"]
pub struct ExportHandle {
    worker: Option<JoinHandle<Option<PathBuf>>>,
}

impl ExportHandle {
    /// Block until the export finishes. `None` if it failed.
    pub fn wait(self) -> Option<PathBuf> {
        let worker = self.worker?;
        match worker.join() {
            Ok(path) => path,
            Err(_) => {
                error!("export thread panicked");
                None
            }
        }
    }

    /// Whether the worker has finished (or never started).
    pub fn is_finished(&self) -> bool { self.worker.as_ref().is_none_or(JoinHandle::is_finished) }
}

/// Saves canvases as PNG files through a [`SaveTarget`].
#[derive(Clone)]
pub struct ExportService {
    target: Arc<dyn SaveTarget>,
}

impl ExportService {
    pub fn new(target: impl SaveTarget + 'static) -> Self { Self { target: Arc::new(target) } }

    /// Service writing into `dir`.
    pub fn to_directory(dir: impl Into<PathBuf>) -> Self { Self::new(DirectoryTarget::new(dir)) }

    /// Start exporting a snapshot of `canvas` as `file_name` on a worker thread.
    ///
    /// Never fails from the caller's point of view; errors are logged.
    pub fn export(
        &self,
        canvas: &Canvas,
        file_name: String,
    ) -> ExportHandle {
        let snapshot = canvas.clone();
        let target = Arc::clone(&self.target);
        let spawned = thread::Builder::new()
            .name("png-export".into())
            .spawn(move || match write_png(&snapshot, &file_name, target.as_ref()) {
                Ok(path) => {
                    info!(path = %path.display(), "image saved");
                    Some(path)
                }
                Err(e) => {
                    error!(file_name = %file_name, "export failed: {e}");
                    None
                }
            });

        match spawned {
            Ok(worker) => ExportHandle { worker: Some(worker) },
            Err(e) => {
                error!("failed to start export thread: {e}");
                ExportHandle { worker: None }
            }
        }
    }

    /// Export on the calling thread and return the error instead of logging it.
    pub fn export_blocking(
        &self,
        canvas: &Canvas,
        file_name: &str,
    ) -> Result<PathBuf> {
        let path = write_png(canvas, file_name, self.target.as_ref())?;
        info!(path = %path.display(), "image saved");
        Ok(path)
    }
}

impl std::fmt::Debug for ExportService {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("ExportService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
    use embedded_graphics::prelude::*;

    use super::*;

    // -------------------------------------------------------------------------
    // File Name Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_dial_filename() {
        assert_eq!(dial_filename("My Title", Level::clamped(3)), "my-title-level-3.png");
    }

    #[test]
    fn test_grid_filename() {
        assert_eq!(grid_filename("Resource Counter", 7), "resource-counter-7.png");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(slugify("A  B\t\nC"), "a-b-c");
        assert_eq!(slugify(" lead"), "-lead");
        assert_eq!(slugify("trail "), "trail-");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_slug_keeps_punctuation() {
        assert_eq!(slugify("Danger! Zone"), "danger!-zone");
    }

    #[test]
    fn test_slug_flattens_path_separators() {
        assert_eq!(dial_filename("Up/Down", Level::clamped(2)), "up-down-level-2.png");
        assert_eq!(dial_filename("../escaped", Level::clamped(2)), "..-escaped-level-2.png");
        assert_eq!(grid_filename("a\\b", 1), "a-b-1.png");
    }

    #[test]
    fn test_plain_file_names() {
        assert!(is_plain_file_name("dial.png"));
        assert!(is_plain_file_name("..-escaped-level-2.png"));
        assert!(!is_plain_file_name("../x.png"));
        assert!(!is_plain_file_name("a/b.png"));
        assert!(!is_plain_file_name(".."));
        assert!(!is_plain_file_name(""));
        assert!(!is_plain_file_name("/abs.png"));
    }

    // -------------------------------------------------------------------------
    // Encoding Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_encode_png_decodes_back() {
        let mut canvas = Canvas::new(Size::new(6, 4));
        canvas.set_pixel(Point::new(5, 3), Rgb888::new(10, 200, 30));
        let bytes = encode_png(&canvas).unwrap();

        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (6, 4));
        assert_eq!(decoded.get_pixel(5, 3).0, [10, 200, 30]);
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0]);
    }

    // -------------------------------------------------------------------------
    // Service Tests
    // -------------------------------------------------------------------------

    /// Keeps saved files in memory.
    #[derive(Default)]
    struct MemoryTarget {
        files: Mutex<Vec<(String, usize)>>,
    }

    impl SaveTarget for Arc<MemoryTarget> {
        fn save(
            &self,
            file_name: &str,
            bytes: &[u8],
        ) -> io::Result<PathBuf> {
            self.files.lock().unwrap().push((file_name.to_owned(), bytes.len()));
            Ok(PathBuf::from(file_name))
        }
    }

    /// Always refuses to save.
    struct FailingTarget;

    impl SaveTarget for FailingTarget {
        fn save(
            &self,
            _file_name: &str,
            _bytes: &[u8],
        ) -> io::Result<PathBuf> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }
    }

    #[test]
    fn test_export_writes_png_file() {
        let dir = tempfile::tempdir().unwrap();
        let service = ExportService::to_directory(dir.path());
        let canvas = Canvas::new(Size::new(400, 350));

        let path = service.export(&canvas, "dial.png".into()).wait().unwrap();
        assert_eq!(path, dir.path().join("dial.png"));
        let image = image::open(&path).unwrap();
        assert_eq!((image.width(), image.height()), (400, 350));
    }

    #[test]
    fn test_export_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("pngs");
        let service = ExportService::to_directory(&nested);
        let canvas = Canvas::new(Size::new(2, 2));
        assert!(service.export(&canvas, "x.png".into()).wait().is_some());
        assert!(nested.join("x.png").exists());
    }

    #[test]
    fn test_export_uses_snapshot() {
        let memory = Arc::new(MemoryTarget::default());
        let service = ExportService::new(Arc::clone(&memory));
        let mut canvas = Canvas::new(Size::new(3, 3));

        let handle = service.export(&canvas, "snap.png".into());
        canvas.clear(Rgb888::WHITE).ok();
        assert!(handle.wait().is_some());
        assert_eq!(memory.files.lock().unwrap()[0].0, "snap.png");
    }

    #[test]
    fn test_export_failure_is_logged_not_raised() {
        let service = ExportService::new(FailingTarget);
        let canvas = Canvas::new(Size::new(2, 2));
        let handle = service.export(&canvas, "fail.png".into());
        assert!(handle.wait().is_none());
    }

    #[test]
    fn test_export_blocking_returns_error() {
        let service = ExportService::new(FailingTarget);
        let canvas = Canvas::new(Size::new(2, 2));
        let err = service.export_blocking(&canvas, "fail.png").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_titles_with_separators_stay_in_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let service = ExportService::to_directory(&out);
        let canvas = Canvas::new(Size::new(2, 2));

        for title in ["Up/Down", "../escaped"] {
            let name = dial_filename(title, Level::clamped(2));
            let path = service.export(&canvas, name).wait().unwrap();
            assert_eq!(path.parent(), Some(out.as_path()), "{title:?} must land in the output dir");
        }
        assert!(!dir.path().join("escaped-level-2.png").exists());
    }

    #[test]
    fn test_directory_target_refuses_nested_names() {
        let dir = tempfile::tempdir().unwrap();
        let target = DirectoryTarget::new(dir.path().join("out"));
        let err = target.save("../x.png", b"png").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(!dir.path().join("x.png").exists());
    }

    #[test]
    fn test_directory_target_on_file_path_fails() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let service = ExportService::to_directory(file.path());
        let canvas = Canvas::new(Size::new(2, 2));
        assert!(service.export(&canvas, "x.png".into()).wait().is_none());
    }
}
