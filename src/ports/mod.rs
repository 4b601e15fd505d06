//! Ports (trait boundaries) between the game loop and whatever picks moves.

pub mod player;

pub use player::MoveSource;
