pub mod colors;
pub mod dialog;
pub mod logging;
pub mod print;
