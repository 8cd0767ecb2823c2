use crate::{Error, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const VISITS_FILE: &str = "visits.json";
pub const HITS_FILE: &str = "hits.json";

/// Newline-delimited JSON writer for output rows
pub struct RowWriter<W: Write> {
    writer: W,
    label: String,
}

impl<W: Write> RowWriter<W> {
    pub fn new(writer: W, label: impl Into<String>) -> Self {
        Self {
            writer,
            label: label.into(),
        }
    }

    /// Write one row as compact JSON followed by `\n`
    pub fn write_row<T: Serialize>(&mut self, row: &T) -> Result<()> {
        serde_json::to_writer(&mut self.writer, row)?;
        self.writer
            .write_all(b"\n")
            .map_err(|e| Error::io(format!("write {}", self.label), e))
    }

    pub fn finish(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| Error::io(format!("flush {}", self.label), e))
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// The two output tables of a run
pub struct OutputFiles {
    pub visits: RowWriter<BufWriter<File>>,
    pub hits: RowWriter<BufWriter<File>>,
}

impl OutputFiles {
    /// Create (or truncate) `visits.json` and `hits.json` under `dir`
    pub fn create(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir).map_err(|e| Error::io_path("create directory", dir, e))?;

        Ok(Self {
            visits: create_writer(dir.join(VISITS_FILE))?,
            hits: create_writer(dir.join(HITS_FILE))?,
        })
    }

    pub fn finish(&mut self) -> Result<()> {
        self.visits.finish()?;
        self.hits.finish()
    }
}

fn create_writer(path: PathBuf) -> Result<RowWriter<BufWriter<File>>> {
    let file = File::create(&path).map_err(|e| Error::io_path("create", &path, e))?;
    Ok(RowWriter::new(
        BufWriter::new(file),
        path.display().to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_row_writer_compact_lines() {
        let mut writer = RowWriter::new(Vec::new(), "buffer");
        writer.write_row(&json!({"a": 1, "b": [1, 2]})).unwrap();
        writer.write_row(&json!({"c": null})).unwrap();
        writer.finish().unwrap();

        assert_eq!(
            String::from_utf8(writer.into_inner()).unwrap(),
            "{\"a\":1,\"b\":[1,2]}\n{\"c\":null}\n"
        );
    }

    #[test]
    fn test_output_files_truncate_existing() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(VISITS_FILE), "stale\n").unwrap();

        let mut outputs = OutputFiles::create(temp_dir.path()).unwrap();
        outputs.finish().unwrap();

        assert_eq!(
            std::fs::read_to_string(temp_dir.path().join(VISITS_FILE)).unwrap(),
            ""
        );
        assert!(temp_dir.path().join(HITS_FILE).exists());
    }
}
