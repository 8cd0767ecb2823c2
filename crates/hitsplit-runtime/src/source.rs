use crate::{Error, Result};
use flate2::read::MultiGzDecoder;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Input name that selects standard input
pub const STDIN_SENTINEL: &str = "-";

/// Suffix that selects transparent gzip decompression
pub const GZIP_SUFFIX: &str = ".gz";

/// Where session lines are read from, selected by naming convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Plain(PathBuf),
    Gzip(PathBuf),
}

impl InputSource {
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIN_SENTINEL {
            InputSource::Stdin
        } else if arg.ends_with(GZIP_SUFFIX) {
            InputSource::Gzip(PathBuf::from(arg))
        } else {
            InputSource::Plain(PathBuf::from(arg))
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            InputSource::Stdin => None,
            InputSource::Plain(path) | InputSource::Gzip(path) => Some(path),
        }
    }

    /// Open the source as a buffered byte stream
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::Plain(path) => {
                let file = File::open(path).map_err(|e| Error::io_path("open", path, e))?;
                Ok(Box::new(BufReader::new(file)))
            }
            InputSource::Gzip(path) => {
                let file = File::open(path).map_err(|e| Error::io_path("open", path, e))?;
                Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
            }
        }
    }

    /// Name of the persistent diagnostics file for this input.
    ///
    /// `stdin_error.log` for stdin, otherwise the file name with its last
    /// extension removed: `logs/data.json.gz` -> `data.json_error.log`.
    pub fn error_log_name(&self) -> String {
        let stem = self
            .path()
            .and_then(Path::file_stem)
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "stdin".to_string());
        format!("{}_error.log", stem)
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::Plain(path) => write!(f, "{}", path.display()),
            InputSource::Gzip(path) => write!(f, "{} (gzip)", path.display()),
        }
    }
}

/// Lazily yields `(line_number, raw_bytes)` from a buffered reader.
///
/// Line numbers are 1-based and count blank lines. Only the current line is held
/// in memory. Line terminators are stripped; other whitespace is left for the validator.
pub struct RawLines<R> {
    reader: R,
    line_no: usize,
}

impl<R: BufRead> RawLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, line_no: 0 }
    }
}

impl<R: BufRead> Iterator for RawLines<R> {
    type Item = io::Result<(usize, Vec<u8>)>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line_no += 1;
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                    if buf.last() == Some(&b'\r') {
                        buf.pop();
                    }
                }
                Some(Ok((self.line_no, buf)))
            }
            Err(err) => Some(Err(err)),
        }
    }
}
