use std::io::Read;
use std::path::{Path, PathBuf};

use armature_core::Result;
use rustc_hash::FxHashMap;

use crate::descriptor::ModelDescriptor;

/// Source of raw descriptor bytes.
pub trait AssetReader {
    fn read_bytes(&self, uri: &str) -> Result<Vec<u8>>;

    /// Reads `uri` and parses it as a JSON [`ModelDescriptor`].
    fn load_model(&self, uri: &str) -> Result<ModelDescriptor> {
        let bytes = self.read_bytes(uri)?;
        let model = ModelDescriptor::from_json_slice(&bytes)?;
        log::debug!(
            "Loaded model '{}' from '{uri}': {} root nodes, {} animations",
            model.name,
            model.nodes.len(),
            model.animations.len()
        );
        Ok(model)
    }
}

/// Local file reader. URIs are resolved against a root directory.
pub struct FileAssetReader {
    root_path: PathBuf,
}

impl FileAssetReader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let root_path = if path.is_file() {
            path.parent().unwrap_or(Path::new(".")).to_path_buf()
        } else {
            path.to_path_buf()
        };
        Self { root_path }
    }

    #[inline]
    #[must_use]
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }
}

impl AssetReader for FileAssetReader {
    fn read_bytes(&self, uri: &str) -> Result<Vec<u8>> {
        let path = self.root_path.join(uri);
        let mut file = std::fs::File::open(&path)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        Ok(data)
    }
}

/// In-memory reader, keyed by URI.
#[derive(Default)]
pub struct MemoryAssetReader {
    entries: FxHashMap<String, Vec<u8>>,
}

impl MemoryAssetReader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, uri: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.entries.insert(uri.into(), bytes.into());
    }
}

impl AssetReader for MemoryAssetReader {
    fn read_bytes(&self, uri: &str) -> Result<Vec<u8>> {
        self.entries.get(uri).cloned().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, format!("no asset at '{uri}'")).into()
        })
    }
}

impl ModelDescriptor {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
