//! Filesystem-backed [`LocalCopies`] probe.

use biblint_domain::{CheckError, LocalCopies};
use camino::{Utf8Path, Utf8PathBuf};

const EXTENSIONS: &[&str] = &["pdf", "txt"];

/// Looks for `<key>.pdf` or `<key>.txt` in one directory.
///
/// Characters that cannot appear in file names (`:` and `/`) are replaced by `_`.
#[derive(Clone, Debug)]
pub struct LocalDirProbe {
    dir: Utf8PathBuf,
}

impl LocalDirProbe {
    pub fn new(dir: impl Into<Utf8PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    fn candidates(&self, key: &str) -> impl Iterator<Item = Utf8PathBuf> + '_ {
        let stem = key.replace([':', '/'], "_");
        EXTENSIONS
            .iter()
            .map(move |ext| self.dir.join(format!("{stem}.{ext}")))
    }
}

impl LocalCopies for LocalDirProbe {
    fn has_local_copy(&self, key: &str) -> Result<bool, CheckError> {
        for path in self.candidates(key) {
            let exists = path.try_exists().map_err(|err| CheckError::LocalCopy {
                key: key.to_string(),
                reason: format!("{path}: {err}"),
            })?;
            if exists {
                tracing::trace!(key, path = %path, "local copy found");
                return Ok(true);
            }
        }
        Ok(false)
    }
}
