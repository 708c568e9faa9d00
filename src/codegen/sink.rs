//! Destinations for generated code

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::TeenyResult;

/// Receives the complete generated program in one call
pub trait Sink {
    fn commit(&mut self, code: &str) -> TeenyResult<()>;
}

impl Sink for String {
    fn commit(&mut self, code: &str) -> TeenyResult<()> {
        self.push_str(code);
        Ok(())
    }
}

/// Writes the generated program to a file, replacing its contents
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn commit(&mut self, code: &str) -> TeenyResult<()> {
        fs::write(&self.path, code)?;
        Ok(())
    }
}

/// Writes the generated program to any [`Write`] implementation
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn commit(&mut self, code: &str) -> TeenyResult<()> {
        self.writer.write_all(code.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
