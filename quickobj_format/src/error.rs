use thiserror::Error;

pub type Result<T> = ::std::result::Result<T, FormatError>;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Could not (de)serialize mesh: {0}")]
    Serialization(#[from] Box<bincode::ErrorKind>),
    #[error("Could not read mesh file: {0}")]
    Io(#[from] std::io::Error),
}
