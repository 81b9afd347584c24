use axum::Router;

use crate::state::AppState;

mod dto;
pub mod handlers;
pub mod jwt;
mod password;
pub mod repo;
pub mod role;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
