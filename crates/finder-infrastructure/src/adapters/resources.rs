//! Directory-backed resources

use std::fs::File;
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};

use finder_domain::ResourceSource;
use tracing::trace;

/// Resources served from an ordered list of directory roots
///
/// The first root containing the resource as a regular file wins. Paths
/// must be relative and free of `..`; anything else is reported absent.
#[derive(Debug, Clone, Default)]
pub struct DirectoryResources {
    roots: Vec<PathBuf>,
}

impl DirectoryResources {
    /// Serve resources from `roots`, searched in order
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Serve resources from `roots` after expanding `~` and environment variables
    pub fn expanded<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self::new(roots.into_iter().map(|root| expand_root(root.as_ref())))
    }

    /// Configured roots
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Locate `path` in the first root that has it
    pub fn locate(&self, path: &str) -> Option<PathBuf> {
        if !is_contained(Path::new(path)) {
            return None;
        }
        self.roots
            .iter()
            .map(|root| root.join(path))
            .find(|candidate| candidate.is_file())
    }
}

impl ResourceSource for DirectoryResources {
    fn open_resource(&self, path: &str) -> io::Result<Option<Box<dyn Read + Send + '_>>> {
        let Some(location) = self.locate(path) else {
            return Ok(None);
        };
        trace!(resource = path, location = %location.display(), "Opening resource");
        let file = File::open(location)?;
        Ok(Some(Box::new(file)))
    }
}

fn is_contained(path: &Path) -> bool {
    path.components().next().is_some()
        && path
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}

fn expand_root(root: &Path) -> PathBuf {
    let raw = root.to_string_lossy();
    match shellexpand::full(&raw) {
        Ok(expanded) => PathBuf::from(expanded.into_owned()),
        Err(_) => PathBuf::from(shellexpand::tilde(&raw).into_owned()),
    }
}
