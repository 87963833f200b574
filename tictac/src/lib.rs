#![warn(clippy::pedantic)]
#![allow(clippy::missing_panics_doc, clippy::module_name_repetitions)]
pub mod board;
pub mod error;
pub mod history;
pub mod status;
pub mod win;

pub use board::Board;
pub use error::{GameError, Rejection};
pub use history::{GameHistory, Snapshot};
pub use status::Status;
pub use win::{detect_win, WinLine, LINES};
