//! Modelgram Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Modelgram
//! crates. It includes:
//!
//! - **Names**: `group.Entity` model labels ([`name::QualifiedName`])
//! - **Models**: Read-only model and field descriptors ([`model`] module)
//! - **Choices**: Ordered enumerated value sets ([`choices::Choices`])
//! - **Colors**: Deterministic group colors ([`color::Color`])

pub mod choices;
pub mod color;
pub mod model;
pub mod name;
