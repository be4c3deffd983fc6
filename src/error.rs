//! Crate-level error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while setting up or running the viewer.
///
/// The camera code itself never fails: out-of-range values are clamped.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config file {path}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid setting `{field}`: {reason}")]
    InvalidSetting { field: &'static str, reason: String },

    #[error("failed to serialize config")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("event loop error")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create rendering surface")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to open GPU device")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("failed to acquire the next frame")]
    Frame(#[from] wgpu::SurfaceError),

    #[error("surface reports no supported texture formats")]
    NoSurfaceFormat,

    #[error("scene has no cameras")]
    NoCameras,
}

pub type Result<T, E = ViewerError> = std::result::Result<T, E>;
