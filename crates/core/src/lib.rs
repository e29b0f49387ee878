//! Core types for the catalogstore project.
//!
//! This crate defines the product catalog domain model and the storage
//! abstractions implemented by the backends in the `catalogstore` crate.
//! It has no AWS dependency: everything here is pure data and traits.

pub mod product;
pub mod storage;
