//! Smart Deals API Library
//!
//! REST façade over the Smart Deals document store: products, bids and users
//! exposed through a single router, typed handlers and a thin repository layer.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
