//! ACME Learning Center Platform
//!
//! Backend for a learning platform: user profiles plus publishable learning
//! content (categories, tutorials and their assets), exposed over a JSON API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
