//! Catalog consistency tests.
//!
//! These cross-check the built registry against the raw inventory so a
//! declaration can never be silently dropped, duplicated, or renamed.

use std::collections::HashSet;

use pretty_assertions::assert_eq;

use crate::{
	ComponentKind, ComponentReg, DuplicatePolicy, RegistryEntry, component_registry,
	component_registry_with, components_of_kind,
};

/// Number of components the workspace manifest declares.
const CATALOG_LEN: usize = 68;

#[test]
fn catalog_registers_every_declaration() {
	let registry = component_registry().unwrap();

	let declared: HashSet<&str> = inventory::iter::<ComponentReg>
		.into_iter()
		.map(|r| r.0.meta.id)
		.collect();
	assert_eq!(declared.len(), CATALOG_LEN, "declarations share a key");
	assert_eq!(registry.len(), CATALOG_LEN);

	let mut declared: Vec<&str> = declared.into_iter().collect();
	declared.sort_unstable();
	assert_eq!(registry.keys(), declared);
}

#[test]
fn lookup_returns_the_declared_definition() {
	let registry = component_registry().unwrap();

	assert!(std::ptr::eq(
		registry.get("documents-main").unwrap(),
		&crate::catalog::shell::COMPONENT_MAIN
	));
	assert!(std::ptr::eq(
		registry.get("documents-file-name-cell").unwrap(),
		&crate::catalog::table::COMPONENT_FILE_NAME_CELL
	));
	assert!(std::ptr::eq(
		registry.get("upload-overlay").unwrap(),
		&crate::catalog::uploads::COMPONENT_UPLOAD_OVERLAY
	));
	assert!(registry.get("documents-unknown").is_none());
}

#[test]
fn rebuild_yields_an_equivalent_registry() {
	let first = component_registry().unwrap();
	let second = component_registry().unwrap();

	assert_eq!(first.len(), second.len());
	assert_eq!(first.keys(), second.keys());
	for key in first.keys() {
		assert!(std::ptr::eq(first.get(key).unwrap(), second.get(key).unwrap()));
	}
}

#[test]
fn kinds_cover_the_catalog() {
	let registry = component_registry().unwrap();
	let count = |kind| components_of_kind(&registry, kind).count();

	assert_eq!(count(ComponentKind::View), 11);
	assert_eq!(count(ComponentKind::Cell), 11);
	assert_eq!(count(ComponentKind::Menu), 7);
	assert_eq!(count(ComponentKind::MenuAction), 16);
	assert_eq!(count(ComponentKind::Drawer), 10);
	assert_eq!(count(ComponentKind::Filter), 8);
	assert_eq!(count(ComponentKind::Upload), 5);
}

#[test]
fn camel_case_key_is_preserved() {
	let registry = component_registry().unwrap();

	// Published before the key convention settled; templates use it as-is.
	assert!(registry.contains("versionHistory-menu-action"));
	assert!(!registry.contains("version-history-menu-action"));
}

#[test]
fn shell_root_sorts_first() {
	let registry = component_registry().unwrap();

	assert_eq!(registry.items()[0].meta.id, "documents-main");
}

#[test]
fn unknown_key_gets_a_suggestion() {
	let registry = component_registry().unwrap();

	let err = registry.resolve("documents-file-name-cel").unwrap_err();
	assert_eq!(
		format!("{err}"),
		"unknown key \"documents-file-name-cel\" in components registry \
		 (did you mean 'documents-file-name-cell'?)"
	);
}

#[test]
fn declarations_record_their_crate() {
	assert_eq!(
		crate::catalog::shell::COMPONENT_MAIN.source().to_string(),
		"crate:vellum-components"
	);
}

#[test]
fn every_component_documents_itself() {
	for reg in inventory::iter::<ComponentReg> {
		let def = reg.0;
		assert!(
			!def.description().is_empty(),
			"component '{}' has no description",
			def.id()
		);
	}
}

#[test]
fn override_policy_is_clean_on_the_builtin_catalog() {
	let registry = component_registry_with(DuplicatePolicy::LastWins).unwrap();

	assert_eq!(registry.len(), CATALOG_LEN);
	assert!(registry.collisions().is_empty());
}
