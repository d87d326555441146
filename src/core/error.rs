use thiserror::Error;

use crate::core::types::Color;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Obstacle set {set} holds an obstacle with color {color:?}")]
    InvalidObstacleColor { set: usize, color: Color },

    #[error("Unknown obstacle set index: {0}")]
    UnknownObstacleSet(usize),

    #[error("No mandatory obstacle set for color {0:?}")]
    NoMandatorySet(Color),

    #[error("Invalid obstacle catalog: {0}")]
    InvalidCatalog(String),

    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Unknown direction: {0}")]
    UnknownDirection(String),

    #[error("Unknown start zone: {0}")]
    UnknownStartZone(String),

    #[error("Unknown intersection: {0}")]
    UnknownIntersection(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
