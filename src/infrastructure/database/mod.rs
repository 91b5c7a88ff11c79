pub mod connection;
pub mod mappers;
pub mod models;
pub mod repositories;
pub mod schema;
