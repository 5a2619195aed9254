use std::path::Path;

use anyhow::Result;

impl crate::FileOps {
    /// Returns `true` if `path` resolves to a file or directory. Any failure
    /// to resolve it counts as "does not exist".
    pub fn exists<T: AsRef<Path>>(path: T) -> bool {
        path.as_ref().exists()
    }

    /// Like [`exists`](Self::exists), but errors other than "not found"
    /// (a permission problem on a parent, say) are reported.
    pub fn try_exists<T: AsRef<Path>>(path: T) -> Result<bool> {
        path.as_ref()
            .try_exists()
            .map_err(|error| crate::Error::io(path, error).into())
    }

    pub fn is_file<T: AsRef<Path>>(path: T) -> bool {
        path.as_ref().is_file()
    }
}
