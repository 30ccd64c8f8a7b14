use thiserror::Error;

use crate::profile::MAX_CONCERNS;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("too many concerns selected: {0} (maximum is {MAX_CONCERNS})")]
    TooManyConcerns(usize),

    #[error("catalog load error: {0}")]
    CatalogLoad(String),

    #[error("required column not found: {0}")]
    MissingColumn(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
