use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Destination for rendered log lines.
///
/// `log` receives one line without its terminator and must write it,
/// followed by `\n`, as a single write so concurrent lines never interleave.
pub trait LogTarget: Send + Sync {
    fn log(&self, line: &str) -> io::Result<()>;
}

pub type SharedTarget = Arc<dyn LogTarget>;

fn terminated(line: &str) -> String {
    let mut buf = String::with_capacity(line.len() + 1);
    buf.push_str(line);
    buf.push('\n');
    buf
}

/// Process standard output; the default target.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLogTarget;

impl LogTarget for ConsoleLogTarget {
    fn log(&self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(terminated(line).as_bytes())?;
        stdout.flush()
    }
}

#[derive(Debug)]
pub struct FileLogTarget {
    file: File,
}

impl FileLogTarget {
    /// Opens `path` for appending, creating it when missing.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)?;
        Ok(FileLogTarget { file })
    }
}

impl LogTarget for FileLogTarget {
    fn log(&self, line: &str) -> io::Result<()> {
        (&self.file).write_all(terminated(line).as_bytes())
    }
}

/// Any caller supplied writer, serialized behind a mutex.
#[derive(Debug, Default)]
pub struct WriterLogTarget<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterLogTarget<W> {
    pub fn new(writer: W) -> Self {
        WriterLogTarget {
            writer: Mutex::new(writer),
        }
    }

    /// Locks the wrapped writer, e.g. to inspect an in-memory buffer.
    pub fn lock(&self) -> MutexGuard<'_, W> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> LogTarget for WriterLogTarget<W> {
    fn log(&self, line: &str) -> io::Result<()> {
        let mut writer = self.lock();
        writer.write_all(terminated(line).as_bytes())?;
        writer.flush()
    }
}
