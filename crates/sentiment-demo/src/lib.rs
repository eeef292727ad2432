pub mod analysis;
pub mod cli;
pub mod config;
pub mod server;
pub mod state;

pub use analysis::*;
pub use cli::*;
pub use config::*;
pub use server::*;
pub use state::*;
