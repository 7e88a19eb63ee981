pub mod cli;
pub mod io;
pub mod model;
pub mod ops;
pub mod seed;
pub mod session;
pub mod tui;
