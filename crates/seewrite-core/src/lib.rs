//! SeeWrite Core Types and Definitions
//!
//! This crate provides the foundational types shared by the SeeWrite analysis
//! and rendering crates. It includes:
//!
//! - **Colors**: Color handling with CSS color support and the element palette ([`color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: SVG drawing primitives for diagram nodes, edges and labels ([`draw`] module)
//! - **Model**: Analysis results produced from description text ([`model`] module)
//! - **Definitions**: Tier-specific term definition tables ([`definitions`] module)

pub mod color;
pub mod definitions;
pub mod draw;
pub mod geometry;
pub mod model;
