use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::viewport::{RowSource, Viewport};

/// One row of the directory listing.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Directory navigator: a viewport over a filtered directory listing.
///
/// `current` is a subpath relative to the fixed `base` root and is built
/// only from names returned by the directory enumeration, so traversal can
/// never escape `base`. Descending pushes the viewport position onto a
/// history stack; ascending pops it back. The popped position is restored
/// as-is for the parent listing, which is exact as long as the parent did
/// not change shape in the meantime.
pub struct Browser {
    base: PathBuf,
    current: PathBuf,
    entries: Vec<FileEntry>,
    pub view: Viewport,
    history: Vec<(usize, usize)>,
    extensions: Vec<String>,
}

impl Browser {
    pub fn new(
        base: PathBuf,
        extensions: Vec<String>,
        height: usize,
        width: usize,
    ) -> io::Result<Self> {
        let extensions = extensions.iter().map(|e| e.to_lowercase()).collect();
        let mut browser = Browser {
            base,
            current: PathBuf::new(),
            entries: Vec::new(),
            view: Viewport::new(height, width),
            history: Vec::new(),
            extensions,
        };
        browser.refetch()?;
        Ok(browser)
    }

    /// Re-read and re-filter the current listing, then re-clamp the viewport
    /// against the new length.
    pub fn refetch(&mut self) -> io::Result<()> {
        self.entries = self.read_filtered()?;
        let len = self.entries.len();
        self.view.clamp(len);
        Ok(())
    }

    fn read_filtered(&self) -> io::Result<Vec<FileEntry>> {
        let dir = self.base.join(&self.current);
        let mut entries = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let is_dir = entry.file_type()?.is_dir();
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_dir || self.matches_extension(&name) {
                entries.push(FileEntry { name, is_dir });
            }
        }
        // Directories first, then case-insensitive name order.
        entries.sort_by_key(|e| (!e.is_dir, e.name.to_lowercase()));
        Ok(entries)
    }

    fn matches_extension(&self, name: &str) -> bool {
        Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_lowercase();
                self.extensions.iter().any(|want| *want == ext)
            })
            .unwrap_or(false)
    }

    /// Enter the selected directory. Selecting a file (or nothing) is a
    /// no-op, not an error.
    pub fn descend(&mut self) -> io::Result<()> {
        let Some(entry) = self.selected() else {
            return Ok(());
        };
        if !entry.is_dir {
            return Ok(());
        }
        let name = entry.name.clone();
        self.history.push((self.view.select(), self.view.scroll()));
        self.current.push(&name);
        debug!("descend into {}", self.current.display());
        self.refetch()?;
        self.view.jump_top();
        Ok(())
    }

    /// Go back to the parent listing, restoring the viewport position saved
    /// by the matching descend. With no history the position is left alone;
    /// at the root this is a no-op.
    pub fn ascend(&mut self) -> io::Result<()> {
        if let Some((select, scroll)) = self.history.pop() {
            self.view.set_position(select, scroll);
        }
        self.current = self
            .current
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        self.refetch()
    }

    pub fn selected(&self) -> Option<&FileEntry> {
        self.entries.get(self.view.select())
    }

    /// Absolute path of the selected entry.
    pub fn selected_path(&self) -> Option<PathBuf> {
        self.selected()
            .map(|entry| self.base.join(&self.current).join(&entry.name))
    }

    /// Current subpath relative to the base root.
    pub fn current(&self) -> &Path {
        &self.current
    }

    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RowSource for Browser {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn render(&self, index: usize) -> Option<String> {
        self.entries.get(index).map(|entry| {
            if entry.is_dir {
                format!("{}/", entry.name)
            } else {
                entry.name.clone()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    fn media_tree() -> assert_fs::TempDir {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("clips/intro.MKV").write_str("x").unwrap();
        temp.child("clips/deep/last.avi").write_str("x").unwrap();
        temp.child("movie.mp4").write_str("x").unwrap();
        temp.child("notes.txt").write_str("x").unwrap();
        temp.child("archive.mkv").write_str("x").unwrap();
        temp
    }

    fn browser_for(temp: &assert_fs::TempDir) -> Browser {
        Browser::new(
            temp.path().to_path_buf(),
            vec!["avi".into(), "mkv".into(), "mp4".into()],
            5,
            80,
        )
        .unwrap()
    }

    fn names(b: &Browser) -> Vec<String> {
        (0..RowSource::len(b)).map(|i| b.render(i).unwrap()).collect()
    }

    #[test]
    fn listing_is_filtered_and_ordered() {
        let temp = media_tree();
        let b = browser_for(&temp);
        // notes.txt is filtered out; the .MKV deeper down shows the match is
        // case-insensitive.
        assert_eq!(names(&b), ["clips/", "archive.mkv", "movie.mp4"]);
    }

    #[test]
    fn descend_into_directory_resets_to_top() {
        let temp = media_tree();
        let mut b = browser_for(&temp);
        b.descend().unwrap();
        assert_eq!(b.current(), Path::new("clips"));
        assert_eq!(b.history_depth(), 1);
        assert_eq!((b.view.select(), b.view.scroll()), (0, 0));
        assert_eq!(names(&b), ["deep/", "intro.MKV"]);
    }

    #[test]
    fn descend_into_file_is_a_noop() {
        let temp = media_tree();
        let mut b = browser_for(&temp);
        b.view.jump_bottom(b.len()); // movie.mp4
        let before = b.current().to_path_buf();
        b.descend().unwrap();
        assert_eq!(b.current(), before.as_path());
        assert_eq!(b.history_depth(), 0);
    }

    #[test]
    fn ascend_restores_position_and_history_depth() {
        let temp = media_tree();
        let mut b = browser_for(&temp);
        b.view.move_down(b.len());
        b.view.move_up(); // settle back on clips/
        b.descend().unwrap();
        b.descend().unwrap(); // into deep/
        assert_eq!(b.history_depth(), 2);
        b.ascend().unwrap();
        assert_eq!(b.current(), Path::new("clips"));
        assert_eq!(b.history_depth(), 1);
        b.ascend().unwrap();
        assert_eq!(b.current(), Path::new(""));
        assert_eq!(b.history_depth(), 0);
        assert_eq!((b.view.select(), b.view.scroll()), (0, 0));
    }

    #[test]
    fn ascend_at_root_stays_put() {
        let temp = media_tree();
        let mut b = browser_for(&temp);
        b.view.move_down(b.len());
        b.ascend().unwrap();
        assert_eq!(b.current(), Path::new(""));
        // No history to pop: the position is left where it was.
        assert_eq!(b.view.select(), 1);
    }

    #[test]
    fn selected_path_is_rooted_at_base() {
        let temp = media_tree();
        let mut b = browser_for(&temp);
        b.descend().unwrap();
        b.view.jump_bottom(b.len());
        let path = b.selected_path().unwrap();
        assert_eq!(path, temp.path().join("clips").join("intro.MKV"));
    }
}
