//! Action and selection menus.

use crate::component;

component!(actions_menu, {
	key: "documents-actions-menu",
	kind: Menu,
	description: "Per-document action menu",
});

component!(actions_menu_mobile, {
	key: "documents-actions-menu-mobile",
	kind: Menu,
	description: "Action menu variant for narrow screens",
});

component!(action_context_menu, {
	key: "document-action-context-menu",
	kind: Menu,
	description: "Right-click menu for a document row",
});

component!(visibility_menu, {
	key: "documents-visibility-menu",
	kind: Menu,
	description: "Access level chooser",
});

component!(add_new_file_menu, {
	key: "documents-add-new-file-menu",
	kind: Menu,
	description: "New document type chooser",
});

component!(add_new_menu_mobile, {
	key: "documents-add-new-menu-mobile",
	kind: Menu,
	description: "New document chooser for narrow screens",
});

component!(multi_select_menu, {
	key: "documents-multi-select-menu",
	kind: Menu,
	description: "Bulk actions for the current selection",
});
