/*
SPDX-License-Identifier: MIT OR Apache-2.0
*/

//! Reading `CITATION.cff` documents from files, streams and memory.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::de::IgnoredAny;
use tracing::{debug, trace};

use crate::citation::Citation;
use crate::de::Mapping;
use crate::error::{Error, Result};
use crate::raw::RawCitation;

/// The only base name a CFF file may have.
pub const CFF_FILE_NAME: &str = "CITATION.cff";

/// Where a [`Reader`] is in its most recent read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReadState {
    #[default]
    Unopened,
    Parsing,
    Validated,
    Failed,
}

impl fmt::Display for ReadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReadState::Unopened => "unopened",
            ReadState::Parsing => "parsing",
            ReadState::Validated => "validated",
            ReadState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Reads CFF documents into validated [`Citation`]s.
///
/// A reader holds no data between reads; it only remembers how the last one
/// ended. Independent readers can be used from different threads.
#[derive(Debug, Default)]
pub struct Reader {
    state: ReadState,
}

impl Reader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ReadState {
        self.state
    }

    fn enter(&mut self, state: ReadState) {
        trace!(from = %self.state, to = %state, "read state");
        self.state = state;
    }

    fn finish(&mut self, result: Result<Citation>) -> Result<Citation> {
        match &result {
            Ok(citation) => {
                debug!(title = citation.title(), "CFF document validated");
                self.enter(ReadState::Validated);
            }
            Err(e) => {
                debug!(error = %e, "CFF document rejected");
                self.enter(ReadState::Failed);
            }
        }
        result
    }

    /// Read a file, which must be called `CITATION.cff`.
    ///
    /// The name is checked before the file is opened.
    pub fn read_file(&mut self, path: impl AsRef<Path>) -> Result<Citation> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if name != CFF_FILE_NAME {
            let err = Error::FileName(format!(
                "File name of CFF file must be '{CFF_FILE_NAME}' (is '{name}')!"
            ));
            return self.finish(Err(err));
        }

        debug!(path = %path.display(), "opening CFF file");
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                let err =
                    Error::read_failure(format!("cannot open '{}'", path.display()), e);
                return self.finish(Err(err));
            }
        };
        self.read(BufReader::new(file))
    }

    /// Read a whole stream. No file name rules apply.
    pub fn read(&mut self, mut input: impl Read) -> Result<Citation> {
        let mut bytes = Vec::new();
        if let Err(e) = input.read_to_end(&mut bytes) {
            self.enter(ReadState::Parsing);
            return self.finish(Err(Error::read_failure("cannot read CFF input", e)));
        }
        self.read_slice(&bytes)
    }

    pub fn read_slice(&mut self, bytes: &[u8]) -> Result<Citation> {
        self.enter(ReadState::Parsing);
        let result = parse(bytes);
        self.finish(result)
    }
}

fn parse(bytes: &[u8]) -> Result<Citation> {
    // Syntax first, so that a broken document is not reported as a shape
    // error. Skipping the events resolves no scalars.
    serde_yaml::from_slice::<IgnoredAny>(bytes)
        .map_err(|e| Error::read_failure("CFF input is not valid YAML", e))?;
    // Straight into the raw records, so text keys see each scalar as written.
    let Mapping(raw) = serde_yaml::from_slice::<Mapping<RawCitation>>(bytes).map_err(|e| {
        Error::read_failure("CFF input does not have the shape of a CFF document", e)
    })?;
    Citation::from_raw(raw)
}

/// Read a `CITATION.cff` file. See [`Reader::read_file`].
pub fn read_from_file(path: impl AsRef<Path>) -> Result<Citation> {
    Reader::new().read_file(path)
}

/// Read a CFF document from a stream.
pub fn read_from_reader(input: impl Read) -> Result<Citation> {
    Reader::new().read(input)
}

pub fn read_from_slice(bytes: &[u8]) -> Result<Citation> {
    Reader::new().read_slice(bytes)
}

pub fn read_from_str(input: &str) -> Result<Citation> {
    read_from_slice(input.as_bytes())
}
