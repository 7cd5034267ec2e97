use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    #[error("Config error: {0}")]
    InvalidConfig(String),

    #[error("Shader program '{program}' failed to compile: {reason}")]
    ShaderCompile { program: String, reason: String },

    #[error("Failed to load asset '{path}': {reason}")]
    AssetLoad { path: String, reason: String },

    #[error("Projection is degenerate (determinant {0})")]
    DegenerateProjection(f64),

    #[error("GPU context unavailable: {0}")]
    GpuUnavailable(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
