//! # Enumera
//!
//! A runtime registry of named enum constants. A concrete enum is a
//! marker type listing its entries once; the registry gives it
//! case-insensitive lookup by name or value, equality comparison,
//! serialization to a plain mapping or JSON, and per-entry accessors.
//!
//! ## Architecture
//!
//! ```text
//! Entry                    ← (name, value, meta?) triples
//!     │
//! Definition               ← caller-supplied sequence or mapping source
//!     │
//! registry                 ← process-wide TypeId-keyed partitions, filled once
//!     │
//! Enumerated               ← query surface: make/all/keys/values/search/validity
//!     │
//! Member<T>                ← value object bound to one resolved entry
//!     │
//! dispatch / declare_enum! ← predicate and entry accessors on demand
//! ```
//!
//! ## Usage
//!
//! ```
//! use enumera::{Enumerated, declare_enum};
//!
//! declare_enum! {
//!     pub enum Status {
//!         ACTIVE => "active",
//!         INACTIVE => "inactive",
//!     }
//! }
//!
//! assert!(Status::is_valid("active"));
//! assert_eq!(Status::keys(), vec!["ACTIVE", "INACTIVE"]);
//!
//! let member = Status::make("inactive")?;
//! assert_eq!(member.name(), Some("INACTIVE"));
//! assert_eq!(member.to_string(), "inactive");
//! # Ok::<(), enumera::EnumError>(())
//! ```

pub mod definition;
pub mod dispatch;
pub mod entry;
pub mod enumerated;
pub mod error;
mod macros;
pub mod member;
pub mod registry;

pub use definition::{Definition, DefinitionValue};
pub use dispatch::{Access, resolve};
pub use entry::Entry;
pub use enumerated::Enumerated;
pub use error::EnumError;
pub use member::{AsEntryName, Member};
pub use registry::is_filled;

/// The value payload type, re-exported for definitions and macro
/// expansion.
pub use serde_json::Value;
