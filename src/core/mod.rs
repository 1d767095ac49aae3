//! Core domain logic for seatfinder
//!
//! This module contains pure page logic with no I/O dependencies.
//! Draft persistence is abstracted through a port trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (directory, outcomes, notices, feedback)
//! - `services/` - Resolver, trigger policy, presenter and page widgets
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
