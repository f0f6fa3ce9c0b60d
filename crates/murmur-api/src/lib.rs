pub mod accounts;
pub mod error;
pub mod extract;
pub mod messages;
pub mod routes;
pub mod state;
pub mod store;

pub use routes::router;
pub use state::{AppState, AppStateInner};
