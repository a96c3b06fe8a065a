use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Where a command reads its markdown from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceInput {
    File(PathBuf),
    Text(String),
    Stdin,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}")]
    File { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
}

/// Raw document bytes plus the name diagnostics show for them.
#[derive(Debug)]
pub struct LoadedSource {
    pub name: String,
    pub bytes: Vec<u8>,
}

pub fn load_source(input: &SourceInput) -> Result<LoadedSource, LoadError> {
    match input {
        SourceInput::File(path) => load_file(path),
        SourceInput::Text(text) => Ok(LoadedSource {
            name: "<inline>".to_owned(),
            bytes: text.clone().into_bytes(),
        }),
        SourceInput::Stdin => load_stdin(),
    }
}

fn load_file(path: &Path) -> Result<LoadedSource, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::File {
        path: path.to_owned(),
        source,
    })?;
    Ok(LoadedSource {
        name: path.to_string_lossy().into_owned(),
        bytes,
    })
}

fn load_stdin() -> Result<LoadedSource, LoadError> {
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .map_err(LoadError::Stdin)?;
    Ok(LoadedSource {
        name: "<stdin>".to_owned(),
        bytes,
    })
}
