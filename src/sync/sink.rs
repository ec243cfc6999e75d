//! StylesheetSink: where regenerated stylesheets are persisted.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::debug;

/// Receives every regenerated stylesheet. A failed write leaves the
/// previously published stylesheet in effect.
pub trait StylesheetSink {
    fn write(&mut self, version: u64, css: &str) -> io::Result<()>;
}

/// Writes the stylesheet to `<dir>/<file_name>`, replacing the previous one.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl AsRef<Path>, file_name: &str) -> Self {
        Self {
            path: dir.as_ref().join(file_name),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StylesheetSink for FileSink {
    fn write(&mut self, version: u64, css: &str) -> io::Result<()> {
        fs::write(&self.path, css)?;
        debug!(path = %self.path.display(), version, bytes = css.len(), "stylesheet written");
        Ok(())
    }
}

/// Keeps every written stylesheet in memory. Clones share storage, so a test
/// can hand one clone to the framework and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    writes: Rc<RefCell<Vec<(u64, String)>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent `(version, css)` write.
    pub fn last(&self) -> Option<(u64, String)> {
        self.writes.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.writes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.borrow().is_empty()
    }
}

impl StylesheetSink for MemorySink {
    fn write(&mut self, version: u64, css: &str) -> io::Result<()> {
        self.writes.borrow_mut().push((version, css.to_owned()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_sink_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(dir.path(), "styles.css");
        sink.write(1, ".a { }").unwrap();
        sink.write(2, ".b { }").unwrap();
        assert_eq!(fs::read_to_string(sink.path()).unwrap(), ".b { }");
    }

    #[test]
    fn file_sink_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(dir.path().join("nope"), "styles.css");
        assert!(sink.write(1, "").is_err());
    }

    #[test]
    fn memory_sink_shares_storage() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();
        writer.write(3, ".x { }").unwrap();
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.last(), Some((3, ".x { }".to_owned())));
    }
}
