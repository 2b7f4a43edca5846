//! Shared registry infrastructure.
//!
//! This crate provides the mechanism half of a component registry:
//! - [`RegistrySource`]: Where a definition was declared
//! - [`RegistryMeta`]: Common metadata struct for definitions
//! - [`RegistryEntry`]: Trait for accessing definition metadata
//! - [`RegistryBuilder`]: Collects definitions and validates their keys
//! - [`Registry`]: Immutable key-to-definition index
//!
//! Registries are plain values. Bootstrap code builds one per definition
//! domain and passes it by reference to whoever resolves keys; nothing in
//! this crate is process-global, so tests can build as many sandboxed
//! registries as they need.

mod error;
mod index;

pub use error::{LookupError, RegistryError};
pub use index::{Collision, DuplicatePolicy, Registry, RegistryBuilder, RegistryReg, Resolution};

/// Represents where a registry definition was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegistrySource {
	/// Built directly into the host application.
	Builtin,
	/// Declared in a library crate.
	Crate(&'static str),
}

impl core::fmt::Display for RegistrySource {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Builtin => write!(f, "builtin"),
			Self::Crate(name) => write!(f, "crate:{name}"),
		}
	}
}

/// Common metadata for all registry definition types.
///
/// This struct consolidates the standard fields shared across definition
/// domains, reducing boilerplate and enabling generic registry operations.
///
/// # Fields
///
/// - `id`: The lookup key, unique within a registry
/// - `name`: Declaration name for logs and debugging
/// - `description`: Help text description
/// - `priority`: Sort precedence (higher sorts first)
/// - `source`: Origin (builtin or crate)
#[derive(Debug, Clone, Copy)]
pub struct RegistryMeta {
	/// Unique lookup key (e.g., "documents-breadcrumb").
	pub id: &'static str,
	/// Declaration name for logs and debugging; never indexed.
	pub name: &'static str,
	/// Description for help text.
	pub description: &'static str,
	/// Sort precedence (higher sorts first).
	pub priority: i16,
	/// Where this definition was declared.
	pub source: RegistrySource,
}

impl RegistryMeta {
	/// Creates a minimal RegistryMeta with defaults for optional fields.
	pub const fn minimal(id: &'static str, name: &'static str, description: &'static str) -> Self {
		Self {
			id,
			name,
			description,
			priority: 0,
			source: RegistrySource::Builtin,
		}
	}
}

/// Trait for accessing registry metadata from definition types.
///
/// Implement this trait to enable generic registry operations like key
/// validation, collision reporting, and introspection.
pub trait RegistryEntry {
	/// Returns the metadata struct for this definition.
	fn meta(&self) -> &RegistryMeta;

	/// Returns the unique lookup key.
	fn id(&self) -> &'static str {
		self.meta().id
	}

	/// Returns the declaration name.
	fn name(&self) -> &'static str {
		self.meta().name
	}

	/// Returns the description.
	fn description(&self) -> &'static str {
		self.meta().description
	}

	/// Returns the sort precedence.
	fn priority(&self) -> i16 {
		self.meta().priority
	}

	/// Returns where this definition was declared.
	fn source(&self) -> RegistrySource {
		self.meta().source
	}
}

/// Implements [`RegistryEntry`] for a type with a `meta: RegistryMeta` field.
#[macro_export]
macro_rules! impl_registry_entry {
	($type:ty) => {
		impl $crate::RegistryEntry for $type {
			fn meta(&self) -> &$crate::RegistryMeta {
				&self.meta
			}
		}
	};
}
