use std::fmt;
use std::path::{Path, PathBuf};

/// Errors raised while loading assets or reading and writing level files.
#[derive(Debug)]
pub enum LootError {
    /// Reading or writing a file failed.
    Io { path: PathBuf, source: std::io::Error },
    /// A level file is not valid level JSON.
    Json { path: PathBuf, source: serde_json::Error },
    /// An image could not be decoded.
    Image { path: PathBuf, source: image::ImageError },
    /// An image cannot be sliced into the requested grid.
    InvalidGrid { image_w: u32, image_h: u32, rows: u32, cols: u32 },
    /// No usable GPU surface, adapter or device.
    Gpu(String),
    /// Bad command-line arguments.
    Usage(String),
}

impl LootError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }

    pub(crate) fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json { path: path.to_path_buf(), source }
    }

    /// True when the error means the file simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

impl fmt::Display for LootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Json { path, source } => write!(f, "{}: invalid level data: {source}", path.display()),
            Self::Image { path, source } => write!(f, "{}: cannot decode image: {source}", path.display()),
            Self::InvalidGrid { image_w, image_h, rows, cols } => write!(
                f,
                "cannot slice a {image_w}x{image_h} image into {rows} rows x {cols} cols"
            ),
            Self::Gpu(message) => write!(f, "graphics initialisation failed: {message}"),
            Self::Usage(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for LootError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Image { source, .. } => Some(source),
            Self::InvalidGrid { .. } | Self::Gpu(_) | Self::Usage(_) => None,
        }
    }
}
