mod agent;
mod coord;
mod state;
pub mod moves;

pub use agent::*;
pub use coord::*;
pub use state::*;
