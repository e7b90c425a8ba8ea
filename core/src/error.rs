use thiserror::Error;

#[derive(Debug, Error)]
pub enum DialogError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum GreeterError {
    #[error(transparent)]
    Dialog(#[from] DialogError),

    #[error("greeting cycle already finished")]
    AlreadyDone,
}
