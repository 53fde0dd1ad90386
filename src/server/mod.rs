mod routes;
mod server;
mod state;
pub mod types;

pub use routes::{handle_analyze, handle_tokenize};
pub use server::{build_router, ApiServer};
pub use state::AppState;
