//! Lazy, forward-only reading of flights from JSONL input

use crate::airline::{AirlineLookup, StaticAirlineLookup};
use crate::error::{AnalysisError, Result};
use crate::flight::{Flight, FlightDecoder};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Iterator of decoded flights, one per input line.
///
/// Lines are read and decoded on demand, so only one line is held in memory
/// at a time. Re-reading requires opening the source again.
pub struct FlightSource<R, L = StaticAirlineLookup> {
    lines: Lines<R>,
    decoder: FlightDecoder<L>,
    origin: PathBuf,
    line: usize,
}

impl FlightSource<BufReader<File>, StaticAirlineLookup> {
    /// Open a dataset file using the built-in airline table
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, FlightDecoder::new())
    }
}

impl<L: AirlineLookup> FlightSource<BufReader<File>, L> {
    /// Open a dataset file with a custom decoder
    pub fn open_with(path: impl AsRef<Path>, decoder: FlightDecoder<L>) -> Result<Self> {
        let path = path.as_ref();
        let metadata =
            std::fs::metadata(path).map_err(|e| AnalysisError::file_access(path, e))?;
        if !metadata.is_file() {
            return Err(AnalysisError::file_access(
                path,
                io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
            ));
        }
        let file = File::open(path).map_err(|e| AnalysisError::file_access(path, e))?;

        debug!(path = %path.display(), bytes = metadata.len(), "opened dataset");
        Ok(Self::from_reader(BufReader::new(file), decoder, path))
    }
}

impl<R: BufRead, L: AirlineLookup> FlightSource<R, L> {
    /// Read flights from any buffered reader; `origin` labels errors
    pub fn from_reader(reader: R, decoder: FlightDecoder<L>, origin: impl Into<PathBuf>) -> Self {
        Self {
            lines: reader.lines(),
            decoder,
            origin: origin.into(),
            line: 0,
        }
    }

    /// Number of lines consumed so far
    pub fn lines_read(&self) -> usize {
        self.line
    }
}

impl<R: BufRead, L: AirlineLookup> Iterator for FlightSource<R, L> {
    type Item = Result<Flight>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.lines.next()?;
        self.line += 1;
        let line = self.line;

        let item = match raw {
            Ok(text) => self.decoder.decode(&text).map_err(|source| {
                debug!(line, error = %source, "rejected flight record");
                AnalysisError::parse(line, source)
            }),
            Err(source) => Err(AnalysisError::Read {
                path: self.origin.clone(),
                line,
                source,
            }),
        };
        Some(item)
    }
}
