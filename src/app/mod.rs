mod lookup;
mod navigation;
mod state;

pub use state::*;
