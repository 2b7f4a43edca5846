//! Component definition types.

use vellum_registry::{RegistryMeta, RegistryReg, impl_registry_entry};

/// Registry wrapper for component definitions.
pub struct ComponentReg(pub &'static ComponentDef);
inventory::collect!(ComponentReg);

impl RegistryReg<ComponentDef> for ComponentReg {
	fn def(&self) -> &'static ComponentDef {
		self.0
	}
}

/// Surface family a component renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
	/// Structural views (shell, list views, headers, empty states).
	View,
	/// Table cells rendered once per document row.
	Cell,
	/// Dropdown and context menus.
	Menu,
	/// Single entries inside a document menu.
	MenuAction,
	/// Slide-in side panels.
	Drawer,
	/// Filtering controls and quick filter chips.
	Filter,
	/// Upload and file-creation widgets.
	Upload,
}

/// Definition of a workspace component.
///
/// The definition is what the registry stores; the component body itself
/// (markup, styling, event logic) lives with the host rendering layer,
/// which finds it through `meta.id`, the tag templates mount.
pub struct ComponentDef {
	/// Common registry metadata; `meta.id` is the template tag.
	pub meta: RegistryMeta,
	/// Surface family, for kind-filtered queries.
	pub kind: ComponentKind,
}

impl_registry_entry!(ComponentDef);

impl core::fmt::Debug for ComponentDef {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("ComponentDef")
			.field("key", &self.meta.id)
			.field("name", &self.meta.name)
			.field("kind", &self.kind)
			.finish()
	}
}
