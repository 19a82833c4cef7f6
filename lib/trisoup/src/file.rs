use std::{
    fs::File,
    ops::Deref,
    path::{Path, PathBuf},
};

use memmap2::Mmap;

use crate::Error;

#[derive(Debug)]
enum ModelData {
    Mapped(Mmap),
    // zero-length files can't be mapped on every platform
    Empty,
}

/// The raw bytes of a model file, memory-mapped read-only.
#[derive(Debug)]
pub struct ModelFile {
    path: PathBuf,
    data: ModelData,
}

impl ModelFile {
    #[allow(unsafe_code)]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(Error::IsADirectory(path.to_owned()));
        }
        tracing::trace!(path = path.as_os_str().to_str(), "memory-mapping model file");
        let file = File::options().read(true).write(false).open(path)?;
        let data = if file.metadata()?.len() == 0 {
            ModelData::Empty
        } else {
            // read-only map; the file must not be truncated while this is alive
            ModelData::Mapped(unsafe { Mmap::map(&file) }?)
        };
        Ok(Self {
            path: path.to_owned(),
            data,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Deref for ModelFile {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        match &self.data {
            ModelData::Mapped(map) => map,
            ModelData::Empty => &[],
        }
    }
}
