use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

/// An extension trait that is intended to add an open method to the
/// std::path::PathBuf struct.
pub trait PathBufExt {
    fn open(&self, allow_overwrite: bool) -> Result<BufWriter<File>>;
}

impl PathBufExt for PathBuf {
    fn open(&self, allow_overwrite: bool) -> Result<BufWriter<File>> {
        let mut file_options = File::options();

        if allow_overwrite {
            file_options.write(true).truncate(true).create(true);
        } else {
            file_options.write(true).create_new(true);
        };

        let file = file_options
            .open(self)
            .context(format!("failed to create file: {}", self.to_string_lossy()))?;

        Ok(BufWriter::new(file))
    }
}

/// The output target of a subcommand: a file opened through
/// [PathBufExt::open], or stdout when no path was given.
pub fn open_output(path: &Option<PathBuf>, allow_overwrite: bool) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(path.open(allow_overwrite)?)),
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}
