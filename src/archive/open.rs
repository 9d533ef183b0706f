use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

use super::document::{ARCHIVE_VERSION, ArchiveDocument, Group};
use super::walk::walk;

/// An archive root ready for discovery.
#[derive(Clone, Debug)]
pub struct OpenedArchive {
    /// `<file>:/<group path>`, shown above the listings.
    pub label: String,
    pub root: Group,
}

/// Opens the root group of an archive.
pub trait ArchiveOpener {
    fn open_root(&self, path: &Path) -> Result<OpenedArchive>;
}

/// Reads JSON archive documents from disk.
#[derive(Clone, Debug, Default)]
pub struct JsonArchiveOpener {
    base_group: Option<String>,
}

impl JsonArchiveOpener {
    pub fn new(base_group: Option<String>) -> Self {
        Self { base_group }
    }

    pub fn parse(&self, path: &Path, bytes: &[u8]) -> Result<OpenedArchive> {
        let doc: ArchiveDocument = serde_json::from_slice(bytes)
            .map_err(|err| Error::archive_open(path, format!("parse archive: {}", err)))?;
        if doc.version != ARCHIVE_VERSION {
            return Err(Error::archive_open(
                path,
                format!("unsupported archive version {}", doc.version),
            ));
        }

        let mut root = doc.root;
        let mut label = format!("{}:/{}", path.display(), root.name);
        if let Some(base) = self.base_group.as_deref() {
            let Some(group) = root.descend(base) else {
                return Err(Error::archive_open(
                    path,
                    format!("group {} not found", base),
                ));
            };
            label = format!("{}/{}", label, base.trim_matches('/'));
            let mut group = group.clone();
            // Keep full paths rooted at the document root.
            group.name = format!("{}/{}", root.name, base.trim_matches('/'))
                .trim_start_matches('/')
                .to_string();
            root = group;
        }

        for found in walk(&root) {
            found
                .histogram
                .validate()
                .map_err(|err| Error::archive_open(path, format!("{}: {}", found.path, err)))?;
        }

        Ok(OpenedArchive { label, root })
    }
}

impl ArchiveOpener for JsonArchiveOpener {
    fn open_root(&self, path: &Path) -> Result<OpenedArchive> {
        let bytes = fs::read(path).map_err(|err| Error::archive_open(path, err.to_string()))?;
        let opened = self.parse(path, &bytes)?;
        tracing::info!(path = %path.display(), label = %opened.label, "opened archive");
        Ok(opened)
    }
}

#[cfg(test)]
#[path = "../tests/archive/open_tests.rs"]
mod tests;
