//! Component registry for the document workspace UI.
//!
//! Every view, cell, menu, drawer, filter, and upload widget the workspace
//! mounts is declared in [`catalog`] with [`component!`] and collected
//! through `inventory`. [`component_registry`] builds the catalog into a
//! [`Registry`] that the rendering layer resolves template tags against.
//!
//! # Adding a component
//!
//! 1. Declare it in the matching `catalog/` module with [`component!`]
//! 2. The declaration submits itself; there is no central list to edit
//! 3. `component_registry()` picks it up on the next build

pub mod catalog;

mod bootstrap;
mod def;
mod macros;

#[cfg(test)]
mod tests;

pub use bootstrap::{component_registry, component_registry_with, components_of_kind};
pub use def::{ComponentDef, ComponentKind, ComponentReg};
pub use vellum_registry::{
	Collision, DuplicatePolicy, LookupError, Registry, RegistryBuilder, RegistryEntry,
	RegistryError, RegistryMeta, RegistryReg, RegistrySource, Resolution, impl_registry_entry,
};
