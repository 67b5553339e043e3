pub mod api;
pub mod preview;
pub mod state;
