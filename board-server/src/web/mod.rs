//! Web layer for the departure board.
//!
//! Serves the board page, a JSON view of the same result, and static assets.

mod dto;
mod routes;
mod session;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, PageError, create_router};
pub use session::BoardSession;
pub use state::AppState;
pub use templates::*;
