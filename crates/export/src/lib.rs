//! Output helpers for generated script text.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

/// Create a writer for the target path, handling stdout (`-`) by convention.
///
/// Parent directories are not created; a missing directory is an I/O error.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Write `text` as the full contents of `path`, replacing any existing file.
///
/// The handle is closed when this returns, whether or not the write succeeded.
pub fn write_text(path: &Path, text: &str) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    debug!(path = %path.display(), bytes = text.len(), "wrote text file");
    Ok(())
}
