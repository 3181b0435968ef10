pub mod content;
pub mod handlers;
pub mod routes;
pub mod services;
