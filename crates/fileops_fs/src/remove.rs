use std::path::Path;

use anyhow::Result;

impl crate::FileOps {
    pub fn remove_file<T: AsRef<Path>>(path: T) -> Result<()> {
        tracing::debug!(path = %path.as_ref().display(), "Removing file");
        std::fs::remove_file(path.as_ref()).map_err(|error| crate::Error::io(path, error).into())
    }

    /// Removes each file in order. The first failure stops the call and the
    /// remaining paths are left untouched.
    pub fn delete<I, T>(paths: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<Path>,
    {
        for path in paths {
            Self::remove_file(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use anyhow::Result;
    use tempfile::TempDir;

    use crate::{Error, FileOps};

    #[test]
    fn test_delete_many() -> Result<()> {
        let dir = TempDir::new()?;
        let paths: Vec<_> = ["a.txt", "b.txt", "c.txt"]
            .iter()
            .map(|name| dir.path().join(name))
            .collect();
        for path in &paths {
            std::fs::write(path, "x")?;
        }

        FileOps::delete(&paths)?;

        assert!(paths.iter().all(|path| !path.exists()));
        Ok(())
    }

    #[test]
    fn test_delete_stops_at_first_failure() -> Result<()> {
        let dir = TempDir::new()?;
        let first = dir.path().join("first.txt");
        let missing = dir.path().join("missing.txt");
        let last = dir.path().join("last.txt");
        std::fs::write(&first, "x")?;
        std::fs::write(&last, "x")?;

        let error = FileOps::delete([&first, &missing, &last]).unwrap_err();

        assert!(matches!(
            error.downcast_ref::<Error>(),
            Some(Error::NotFound(p)) if p == &missing
        ));
        assert!(!first.exists());
        assert!(last.exists());
        Ok(())
    }

    #[test]
    fn test_remove_directory_is_an_error() -> Result<()> {
        let dir = TempDir::new()?;
        assert!(FileOps::remove_file(dir.path()).is_err());
        Ok(())
    }
}
