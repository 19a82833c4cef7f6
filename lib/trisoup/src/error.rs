use std::{fmt, io, path::PathBuf};

/// The per-corner attributes a model source has to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeUsage {
    Position,
    Texcoord,
    Normal,
}

impl fmt::Display for AttributeUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeUsage::Position => f.write_str("position"),
            AttributeUsage::Texcoord => f.write_str("texture coordinate"),
            AttributeUsage::Normal => f.write_str("normal"),
        }
    }
}

/// Errors related to loading model files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("expected file, found directory: {0:?}")]
    IsADirectory(PathBuf),
    #[error(transparent)]
    Parse(#[from] tobj::LoadError),
    #[error("model {model:?} has faces without {attribute}s")]
    MissingAttribute {
        model: String,
        attribute: AttributeUsage,
    },
    #[error("model {model:?} references {attribute} {index}, but only {len} are defined")]
    AttributeOutOfRange {
        model: String,
        attribute: AttributeUsage,
        index: u32,
        len: usize,
    },
}
