//! APEX portrait profile engine
//!
//! Validates portrait preferences, synthesizes a generation prompt from
//! them and stores the resulting profiles as JSON files, with a small HTTP
//! surface for form front-ends.

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod services;
