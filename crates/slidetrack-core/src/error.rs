use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Pager has no panels")]
    NoPanels,

    #[error("Carousel needs at least {required} items, found {found}")]
    TooFewItems { found: usize, required: usize },

    #[error("Required element missing: {0}")]
    MissingElement(String),

    #[error("Viewport width {width} is at or below the {breakpoint} breakpoint")]
    NarrowViewport { width: f64, breakpoint: f64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
