use std::{
    io,
};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cursor coordinate does not fit on a terminal: {0}")]
    InvalidCursorSize(usize),

    #[error("requested size larger than the terminal: {0}")]
    InvalidRendererSize(usize),

    #[error(transparent)]
    Io(#[from] io::Error),
}
