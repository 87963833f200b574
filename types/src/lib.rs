pub mod bitboard;
pub mod cell;
pub mod square;
pub mod symbol;

pub use bitboard::*;
pub use cell::*;
pub use square::*;
pub use symbol::*;
