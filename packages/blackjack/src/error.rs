use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("collection is empty")]
    EmptyCollection,
    #[error("index {index} out of range for collection of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("a game requires at least one non-dealer player")]
    NoPlayers,
}
