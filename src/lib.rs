pub mod books;
pub mod catalog;
pub mod core;
pub mod graphql;
pub mod routes;
pub mod utils;
