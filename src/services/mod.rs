pub mod geolocation;
pub mod history_store;
pub mod route_export;
pub mod route_generator;
