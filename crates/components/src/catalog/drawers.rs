//! Slide-in panels.

use crate::component;

component!(info_drawer, {
	key: "documents-info-drawer",
	kind: Drawer,
	description: "Document details and metadata panel",
});

component!(download_drawer, {
	key: "documents-download-drawer",
	kind: Drawer,
	description: "Folder download progress panel",
});

component!(tree_selector_drawer, {
	key: "document-tree-selector-drawer",
	kind: Drawer,
	description: "Destination folder picker",
});

component!(move_spaces, {
	key: "documents-move-spaces",
	kind: Drawer,
	description: "Space picker for cross-space moves",
});

component!(visibility_drawer, {
	key: "documents-visibility-drawer",
	kind: Drawer,
	description: "Access level editor panel",
});

component!(visibility_all_users_drawer, {
	key: "documents-visibility-all-users-drawer",
	kind: Drawer,
	description: "Visibility rules applying to all users",
});

component!(visibility_collaborators, {
	key: "documents-visibility-collaborators",
	kind: Drawer,
	description: "Collaborator list with per-user access",
});

component!(public_document_options_drawer, {
	key: "public-document-options-drawer",
	kind: Drawer,
	description: "Public link options panel",
});

component!(import_from_zip_drawer, {
	key: "document-import-from-zip-drawer",
	kind: Drawer,
	description: "Archive import wizard panel",
});
