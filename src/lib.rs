pub mod card;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod roster;
pub mod routes;
pub mod state;
pub mod utils;
