use crate::asset::AssetKind;

/// A named output group, typically one per entry point.
///
/// `files` lists the asset names this chunk produced, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub name: String,
    pub files: Vec<String>,
}

impl Chunk {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.files.push(file.into());
        self
    }

    /// Stylesheets produced by this chunk.
    pub fn css_files(&self) -> impl Iterator<Item = &str> {
        self.files_of(AssetKind::Style)
    }

    /// Scripts produced by this chunk.
    pub fn js_files(&self) -> impl Iterator<Item = &str> {
        self.files_of(AssetKind::Script)
    }

    fn files_of(&self, kind: AssetKind) -> impl Iterator<Item = &str> {
        self.files
            .iter()
            .map(String::as_str)
            .filter(move |file| AssetKind::from_name(file) == kind)
    }
}
