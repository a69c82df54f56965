//! Image adapter
//!
//! Implements the `ImageAnnotator` port: fetches the task image once per
//! task id into a local cache, draws the bounding boxes and saves the result
//! as a PNG.
//!
//! - [`draw`] - Outline drawing
//!
//! Attachments starting with `http://` or `https://` are downloaded with a
//! bounded timeout; anything else is read as a local path (an optional
//! `file://` prefix is stripped).

pub mod draw;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use thiserror::Error;

use crate::config::ImageConfig;
use crate::core::ports::ImageAnnotator;
use crate::core::services::EnrichedTask;

pub use draw::{FLAGGED, UNFLAGGED, draw_annotations};

/// Errors raised while producing an annotated image
#[derive(Debug, Error)]
pub enum AnnotateError {
    /// The image could not be downloaded
    #[error("download of {url} failed: {source}")]
    Download {
        /// Image URL
        url: String,
        /// Underlying HTTP error
        source: reqwest::Error,
    },

    /// A local file could not be read or written
    #[error("{path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The image could not be decoded or encoded
    #[error("image {path}: {source}")]
    Codec {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: image::ImageError,
    },

    /// The HTTP client could not be built
    #[error("cannot build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> AnnotateError + '_ {
    move |source| AnnotateError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Make a task id safe to use as a file name
///
/// ASCII letters, digits and `-` are kept; every other byte, `_` included,
/// becomes `_XX` in hex. Distinct ids therefore never share a file.
#[must_use]
pub fn file_stem(task_id: &str) -> String {
    let mut stem = String::with_capacity(task_id.len());
    for byte in task_id.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            stem.push(char::from(byte));
        } else {
            stem.push_str(&format!("_{byte:02X}"));
        }
    }
    stem
}

/// Annotator that downloads task images and draws boxes on them
#[derive(Debug)]
pub struct CachingImageAnnotator {
    client: reqwest::blocking::Client,
    cache_dir: PathBuf,
    output_dir: PathBuf,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl CachingImageAnnotator {
    /// Create an annotator, creating its directories if needed
    pub fn new(config: &ImageConfig) -> Result<Self, AnnotateError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(AnnotateError::Client)?;

        fs::create_dir_all(&config.cache_dir).map_err(io_error(&config.cache_dir))?;
        fs::create_dir_all(&config.output_dir).map_err(io_error(&config.output_dir))?;

        Ok(Self {
            client,
            cache_dir: config.cache_dir.clone(),
            output_dir: config.output_dir.clone(),
            locks: Mutex::new(HashMap::new()),
        })
    }

    /// Where the original image of a task is cached
    #[must_use]
    pub fn source_path(&self, task_id: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.source", file_stem(task_id)))
    }

    /// Where the annotated image of a task is written
    #[must_use]
    pub fn output_path(&self, task_id: &str) -> PathBuf {
        self.output_dir.join(format!("annotated_{}.png", file_stem(task_id)))
    }

    /// Lock guarding the cache and output files of one task
    fn lock_for(&self, task_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry(file_stem(task_id)).or_default())
    }

    fn fetch_bytes(&self, attachment: &str) -> Result<Vec<u8>, AnnotateError> {
        if attachment.starts_with("http://") || attachment.starts_with("https://") {
            let download = |source| AnnotateError::Download {
                url: attachment.to_string(),
                source,
            };
            let response = self
                .client
                .get(attachment)
                .send()
                .and_then(reqwest::blocking::Response::error_for_status)
                .map_err(download)?;
            Ok(response.bytes().map_err(download)?.to_vec())
        } else {
            let path = Path::new(attachment.strip_prefix("file://").unwrap_or(attachment));
            fs::read(path).map_err(io_error(path))
        }
    }

    /// Make sure the task image is in the cache and return its path
    ///
    /// Downloads at most once per task id. Callers must hold the task's lock.
    fn ensure_cached(&self, task_id: &str, attachment: &str) -> Result<PathBuf, AnnotateError> {
        let path = self.source_path(task_id);
        if path.exists() {
            log::debug!("task {task_id}: using cached image {}", path.display());
            return Ok(path);
        }

        log::debug!("task {task_id}: fetching {attachment}");
        let bytes = self.fetch_bytes(attachment)?;

        let partial = path.with_extension("part");
        fs::write(&partial, bytes).map_err(io_error(&partial))?;
        fs::rename(&partial, &path).map_err(io_error(&path))?;
        Ok(path)
    }
}

impl ImageAnnotator for CachingImageAnnotator {
    fn annotate(&self, task: &EnrichedTask) -> anyhow::Result<Option<PathBuf>> {
        let task_id = &task.task().task_id;
        let lock = self.lock_for(task_id);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let source = self.ensure_cached(task_id, task.task().attachment())?;
        let mut image = image::ImageReader::open(&source)
            .map_err(io_error(&source))?
            .with_guessed_format()
            .map_err(io_error(&source))?
            .decode()
            .map_err(|e| AnnotateError::Codec {
                path: source.clone(),
                source: e,
            })?
            .to_rgba8();

        draw_annotations(&mut image, task.annotations());

        let output = self.output_path(task_id);
        image.save(&output).map_err(|e| AnnotateError::Codec {
            path: output.clone(),
            source: e,
        })?;
        Ok(Some(output))
    }
}

/// Annotator that produces no image, for `--skip-images` runs
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipImages;

impl ImageAnnotator for SkipImages {
    fn annotate(&self, _task: &EnrichedTask) -> anyhow::Result<Option<PathBuf>> {
        Ok(None)
    }
}
