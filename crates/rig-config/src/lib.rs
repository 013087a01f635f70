//! Build configuration assembly for rig.
//!
//! Given a [`BuildMode`], a set of [`Secrets`] and the project's
//! [`PackageMeta`], the [`ConfigAssembler`] produces one immutable
//! [`ResolvedConfig`] for the external bundler: entries, transform rules,
//! output naming, the ordered plugin list, dev-server options and the
//! source map strategy.

pub mod assembler;
pub mod bundle;
pub mod dev;
pub mod discovery;
pub mod error;
pub mod mode;
pub mod package;
pub mod secrets;
pub mod validation;

// Re-export main types
pub use assembler::*;
pub use bundle::*;
pub use dev::*;
pub use error::*;
pub use mode::*;
pub use package::*;
pub use secrets::*;

// Re-export discovery and validation
pub use discovery::{PORT, ProjectDiscovery, ProjectSettings};
pub use validation::{ConfigValidator, SchemaValidator, validate_schema};
