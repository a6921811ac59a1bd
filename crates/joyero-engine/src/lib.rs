//! Joyero Engine
//!
//! Converts free-text jewelry descriptions into structured attribute maps.
//!
//! # Overview
//!
//! The engine is a cascade of independent, priority-ordered, rule-based
//! classifiers. Each classifier inspects the description (and the coarse
//! product-type tag) and contributes zero or more typed attributes; the
//! orchestrator applies them in a fixed order and layers structured
//! catalog-column overrides on top.
//!
//! # Architecture
//!
//! ```text
//! Description + ProductType + Overrides → AttributeEngine → AttributeMap
//! ```
//!
//! # Key Properties
//!
//! - **Deterministic**: identical input always yields identical output
//! - **Pure**: no I/O, no hidden state; safe to call from parallel workers
//! - **Total**: malformed fragments are skipped, never raised
//! - **Order is behavior**: dictionaries are scanned in declaration order
//!   and the orchestrator's merge sequence is the conflict resolution rule
//!
//! # Example Usage
//!
//! ```
//! use joyero_engine::{AttributeEngine, ExtractionInput};
//! use joyero_domain::{AttributeKey, StructuredOverrides};
//!
//! let engine = AttributeEngine::new();
//! let input = ExtractionInput {
//!     description: "Colgante estrella de david 10x15 mm".to_string(),
//!     product_type: "colgante".to_string(),
//!     title: None,
//!     overrides: StructuredOverrides::none(),
//! };
//!
//! let attributes = engine.extract(&input);
//! assert_eq!(
//!     attributes.get(AttributeKey::FormaColgante),
//!     Some("Estrella De David")
//! );
//! assert_eq!(attributes.get(AttributeKey::Alto), Some("10"));
//! ```

#![warn(missing_docs)]

pub mod diamond;
pub mod engine;
pub mod figures;
pub mod measures;
pub mod normalizer;
pub mod shapes;
pub mod stones;
pub mod subtypes;
pub mod zodiac;

#[cfg(test)]
mod tests;

pub use engine::{AttributeEngine, ExtractionInput};
pub use normalizer::normalize;
