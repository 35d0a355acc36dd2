use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("word bank contains no usable words")]
    EmptyWordBank,
    #[error("failed to read word bank from '{path}'")]
    WordBankRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
