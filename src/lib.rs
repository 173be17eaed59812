//! Marketplace backend: establishments, catalog, session carts, orders and a
//! mock payment step, all served over an in-memory store.

pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod payment;
pub mod routes;
pub mod state;
pub mod store;
