use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use derive_setters::Setters;
use fileops_fs::Error;
use ignore::WalkBuilder;

#[derive(Debug, Clone, Setters)]
pub struct Walker {
    /// Directory to start walking from; the current directory when unset
    #[setters(strip_option, into)]
    root: Option<PathBuf>,

    /// Whether symbolic links are resolved; unresolved links are skipped
    follow_links: bool,
}

impl Default for Walker {
    fn default() -> Self {
        Self::new()
    }
}

impl Walker {
    /// Creates a walker over the current working directory that follows
    /// symbolic links.
    pub fn new() -> Self {
        Self { root: None, follow_links: true }
    }

    /// Collects the path of every regular file below the root.
    pub fn get(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        self.enumerate(|path| files.push(path.to_path_buf()))?;
        Ok(files)
    }

    /// Calls `visitor` once for every regular file below the root, in
    /// whatever order the directory listings produce.
    pub fn enumerate<F: FnMut(&Path)>(&self, mut visitor: F) -> Result<()> {
        self.try_enumerate(|path| {
            visitor(path);
            Ok(())
        })
    }

    /// Like [`enumerate`](Self::enumerate), but the walk stops as soon as
    /// `visitor` fails and the failure is returned.
    pub fn try_enumerate<F: FnMut(&Path) -> Result<()>>(&self, mut visitor: F) -> Result<()> {
        let root = self.resolve_root()?;
        tracing::debug!(root = %root.display(), "Walking directory");

        let walk = WalkBuilder::new(&root)
            .standard_filters(false)
            .follow_links(self.follow_links)
            .build();

        for entry in walk {
            let entry = entry.map_err(|error| Self::walk_error(&root, error))?;
            if entry.file_type().is_some_and(|kind| kind.is_file()) {
                tracing::trace!(path = %entry.path().display(), "Visiting file");
                visitor(entry.path())?;
            }
        }

        Ok(())
    }

    fn resolve_root(&self) -> Result<PathBuf> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("Failed to read current directory")?,
        };

        let metadata = std::fs::metadata(&root).map_err(|error| Error::io(&root, error))?;
        if !metadata.is_dir() {
            return Err(Error::NotADirectory(root).into());
        }

        Ok(root)
    }

    fn walk_error(root: &Path, error: ignore::Error) -> anyhow::Error {
        let path = match &error {
            ignore::Error::WithPath { path, .. } => path.clone(),
            ignore::Error::WithDepth { err, .. } => match err.as_ref() {
                ignore::Error::WithPath { path, .. } => path.clone(),
                _ => root.to_path_buf(),
            },
            _ => root.to_path_buf(),
        };

        if !error.is_io() {
            return anyhow::Error::new(error)
                .context(format!("Failed to walk directory {}", root.display()));
        }

        match error.into_io_error() {
            Some(io) => Error::io(path, io).into(),
            None => anyhow::anyhow!("Failed to walk directory {}", root.display()),
        }
    }
}

/// Visits every regular file below `root`, or below the current directory
/// when `root` is `None`.
pub fn enumerate<F: FnMut(&Path)>(visitor: F, root: Option<&Path>) -> Result<()> {
    let walker = match root {
        Some(root) => Walker::new().root(root),
        None => Walker::new(),
    };
    walker.enumerate(visitor)
}
