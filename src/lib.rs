#![doc = "The `taskdeck` library crate."]
#![doc = ""]
#![doc = "This crate contains the domain models, authentication mechanisms, data-store"]
#![doc = "seam, resource services, routing configuration, and error handling for the"]
#![doc = "taskdeck application. It is used by the main binary (`main.rs`) to construct"]
#![doc = "and run the HTTP server."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
