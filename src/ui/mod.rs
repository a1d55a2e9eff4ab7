mod handlers;
mod render;

pub use handlers::handle_key_event;
pub use render::{fit_to_width, run_app};
