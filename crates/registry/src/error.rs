//! Registration and lookup failures.
//!
//! Nothing here is caught inside the crate. Build errors surface from
//! [`RegistryBuilder::build`](crate::RegistryBuilder::build) so bootstrap can
//! abort before any lookup runs; lookup errors surface from
//! [`Registry::resolve`](crate::Registry::resolve) with enough context to
//! diagnose a stale or misspelled key.

use thiserror::Error;

/// Errors raised while building a registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
	/// Two distinct definitions claimed the same key under the `Reject` policy.
	#[error("duplicate key {key:?} in {registry} registry: {existing} vs {incoming}")]
	DuplicateKey {
		/// Label of the registry being built.
		registry: &'static str,
		/// The contested key.
		key: &'static str,
		/// Name of the definition that held the key first.
		existing: &'static str,
		/// Name of the definition that tried to claim it.
		incoming: &'static str,
	},
	/// A definition declared an empty key.
	#[error("empty key in {registry} registry: definition {name}")]
	EmptyKey {
		/// Label of the registry being built.
		registry: &'static str,
		/// Name of the malformed definition.
		name: &'static str,
	},
}

/// Errors raised when resolving a key against a built registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
	/// No definition is registered under the requested key.
	#[error("unknown key {key:?} in {registry} registry{}", suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
	UnknownKey {
		/// Label of the registry consulted.
		registry: &'static str,
		/// The key that failed to resolve.
		key: String,
		/// The closest registered key, if one is close enough.
		suggestion: Option<&'static str>,
	},
}
