//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!     → resolver.rs (ArcSwap snapshot, per-request lookup)
//!
//! On reload signal:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → resolver swaps the snapshot atomically
//!     → in-flight lookups keep observing their version
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod resolver;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use resolver::ConfigResolver;
pub use schema::ProxyConfig;
pub use schema::ResourceConfig;
