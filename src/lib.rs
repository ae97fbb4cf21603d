pub mod game;

pub use chess_engine;
