//! Middleware del sistema
//!
//! Este módulo contiene el middleware HTTP transversal (CORS).

pub mod cors;

pub use cors::*;
