mod config;
mod sweep;
pub use config::*;
pub use sweep::*;
