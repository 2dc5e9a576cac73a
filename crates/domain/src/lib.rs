//! # rolodex-domain
//!
//! Pure domain model for the rolodex people directory.
//!
//! ## Responsibilities
//! - Foundational types: the typed [`PersonId`](id::PersonId) and error conventions
//! - Define the **Person** record (identifier, name, email) and the
//!   identifier-less [`NewPerson`](person::NewPerson) submitted on creation
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod person;
