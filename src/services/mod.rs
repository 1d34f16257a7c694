//! Service layer wiring configuration into ready-to-use components

pub mod simple_container;

pub use simple_container::SimpleServices;
