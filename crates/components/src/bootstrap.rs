//! Catalog bootstrap.
//!
//! The rendering layer calls [`component_registry`] once at startup and
//! keeps the returned value; a failed build means the catalog itself is
//! broken and the host should abort rather than render with holes.

use vellum_registry::{DuplicatePolicy, Registry, RegistryBuilder, RegistryError};

use crate::def::{ComponentDef, ComponentKind, ComponentReg};

/// Builds the component registry from every collected declaration.
///
/// Keys are validated under [`DuplicatePolicy::Reject`]: a duplicate tag in
/// the catalog fails the bootstrap instead of shadowing a component at
/// render time.
pub fn component_registry() -> Result<Registry<ComponentDef>, RegistryError> {
	component_registry_with(DuplicatePolicy::Reject)
}

/// Builds the component registry under an explicit duplicate policy.
///
/// Hosts layering an extension catalog over the builtin one pick an
/// override policy here; settled conflicts are recorded on the returned
/// registry.
pub fn component_registry_with(
	policy: DuplicatePolicy,
) -> Result<Registry<ComponentDef>, RegistryError> {
	let registry = RegistryBuilder::new("components")
		.extend_inventory::<ComponentReg>()
		.sort_default()
		.duplicate_policy(policy)
		.build()?;
	tracing::debug!("Component registry initialized: {} definitions", registry.len());
	Ok(registry)
}

/// Returns all definitions of a given kind, in registry order.
pub fn components_of_kind(
	registry: &Registry<ComponentDef>,
	kind: ComponentKind,
) -> impl Iterator<Item = &'static ComponentDef> + '_ {
	registry.iter().filter(move |c| c.kind == kind)
}
