//! Cart Totals Library
//!
//! This crate provides a small cart-total calculation service: a validated
//! cart model, asynchronous cost and shipping lookup seams, and a service
//! that sequences the lookups and publishes the summed total to a sink.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod lookup;
pub mod math;
pub mod models;
pub mod services;

pub use crate::config::AppConfig;
pub use crate::errors::ServiceError;
pub use crate::models::cart::{Cart, CartItem};
pub use crate::services::cart_total::CartTotalService;
