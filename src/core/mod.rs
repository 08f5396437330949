pub mod assets;
pub mod engine;
pub mod game;
pub mod renderer;  // Injected output trait
pub mod terminal;  // Terminal context wrapper
