use std::fs;
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// An empty directory under the system temp dir, removed again on drop.
pub struct ScratchDir(PathBuf);

impl Deref for ScratchDir {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.0
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

/// A fresh directory unique to this test process and `name`.
pub fn scratch_dir(name: &str) -> ScratchDir {
    let dir = std::env::temp_dir().join(format!("qrfile-{}-{}", std::process::id(), name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    ScratchDir(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scratch_dir_is_removed_on_drop() {
        let dir = scratch_dir("test-util-drop");
        let path = dir.to_path_buf();
        fs::write(dir.join("file.txt"), "contents").unwrap();
        assert!(path.is_dir());

        drop(dir);
        assert!(!path.exists());
    }
}
