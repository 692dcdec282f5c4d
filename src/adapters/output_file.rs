use crate::core::CommitMode;
use crate::utils::error::Result;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Destination of a run. Atomic outputs only appear at `destination` on
/// [`OutputFile::commit`]; dropping one uncommitted removes the temporary file.
#[derive(Debug)]
pub enum OutputFile {
    Atomic {
        temp: NamedTempFile,
        destination: PathBuf,
    },
    Streaming {
        file: File,
        destination: PathBuf,
    },
}

impl OutputFile {
    pub fn create(destination: &Path, mode: CommitMode) -> Result<Self> {
        match mode {
            CommitMode::Atomic => {
                // Rename must not cross filesystems.
                let dir = destination
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or_else(|| Path::new("."));
                let temp = tempfile::Builder::new()
                    .prefix(".scourgify-")
                    .suffix(".tmp")
                    .tempfile_in(dir)?;
                set_default_permissions(temp.as_file())?;
                tracing::debug!("Staging output in {}", temp.path().display());

                Ok(Self::Atomic {
                    temp,
                    destination: destination.to_path_buf(),
                })
            }
            CommitMode::Streaming => {
                let file = File::create(destination)?;
                Ok(Self::Streaming {
                    file,
                    destination: destination.to_path_buf(),
                })
            }
        }
    }

    pub fn destination(&self) -> &Path {
        match self {
            Self::Atomic { destination, .. } | Self::Streaming { destination, .. } => destination,
        }
    }

    pub fn commit(self) -> Result<PathBuf> {
        match self {
            Self::Atomic { temp, destination } => {
                temp.as_file().sync_all()?;
                temp.persist(&destination).map_err(|e| e.error)?;
                Ok(destination)
            }
            Self::Streaming { file, destination } => {
                file.sync_all()?;
                Ok(destination)
            }
        }
    }
}

impl Write for OutputFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Atomic { temp, .. } => temp.write(buf),
            Self::Streaming { file, .. } => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Atomic { temp, .. } => temp.flush(),
            Self::Streaming { file, .. } => file.flush(),
        }
    }
}

// Temp files are created 0600; a committed output should look like any other file.
#[cfg(unix)]
fn set_default_permissions(file: &File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_file: &File) -> io::Result<()> {
    Ok(())
}
