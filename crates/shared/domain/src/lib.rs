//! # Domain Models
//!
//! This crate contains pure domain types with a single dependency (`serde`).
//! Keep it lean: no I/O, no networking, just data and simple helpers.

pub mod config;
pub mod contact;
pub mod content;
pub mod registry;
pub mod roles;
