use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FitsPhotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot load {}: {reason}", .path.display())]
    Load { path: PathBuf, reason: String },

    #[error("No primary data array in {}", .path.display())]
    NoPrimaryData { path: PathBuf },

    #[error("Cannot threshold an empty image")]
    EmptyImage,

    #[error("Threshold undefined: image has uniform intensity {0}")]
    UniformImage(f64),

    #[error("Cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid TLE for {name}: {reason}")]
    Tle { name: String, reason: String },

    #[error("Plot rendering failed: {0}")]
    Plot(String),
}

/// Broad failure class used when reporting a failed file or run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Load,
    Detection,
    Write,
    Io,
    Config,
    Orbit,
}

impl FitsPhotError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Load { .. } | Self::NoPrimaryData { .. } => ErrorKind::Load,
            Self::EmptyImage | Self::UniformImage(_) => ErrorKind::Detection,
            Self::Write { .. } | Self::ImageError(_) | Self::Plot(_) => ErrorKind::Write,
            Self::Io(_) => ErrorKind::Io,
            Self::Config(_) => ErrorKind::Config,
            Self::Tle { .. } => ErrorKind::Orbit,
        }
    }

    pub(crate) fn load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Load {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FitsPhotError>;
