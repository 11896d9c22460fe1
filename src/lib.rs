// Library exports for the fitness planner service.
// Integration tests drive the router through these.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
