//! Per-document menu actions.

use crate::component;

component!(edit_menu_action, {
	key: "edit-menu-action",
	kind: MenuAction,
	description: "Open the document in the online editor",
});

component!(rename_menu_action, {
	key: "rename-menu-action",
	kind: MenuAction,
	description: "Start an inline rename",
});

component!(download_menu_action, {
	key: "download-menu-action",
	kind: MenuAction,
	description: "Download the document",
});

component!(open_location_menu_action, {
	key: "open-location-menu-action",
	kind: MenuAction,
	description: "Jump to the containing folder",
});

component!(open_read_only_menu_action, {
	key: "open-read-only-menu-action",
	kind: MenuAction,
	description: "Open a read-only preview",
});

component!(move_menu_action, {
	key: "move-menu-action",
	kind: MenuAction,
	description: "Move the document to another folder",
});

component!(duplicate_menu_action, {
	key: "duplicate-menu-action",
	kind: MenuAction,
	description: "Create a copy next to the original",
});

component!(visibility_menu_action, {
	key: "visibility-menu-action",
	kind: MenuAction,
	description: "Open the visibility drawer",
});

component!(copy_link_menu_action, {
	key: "copy-link-menu-action",
	kind: MenuAction,
	description: "Copy a shareable link",
});

component!(favorite_menu_action, {
	key: "favorite-menu-action",
	kind: MenuAction,
	description: "Toggle favorite status",
});

component!(delete_menu_action, {
	key: "delete-menu-action",
	kind: MenuAction,
	description: "Move the document to trash",
});

component!(shortcut_menu_action, {
	key: "shortcut-menu-action",
	kind: MenuAction,
	description: "Create a shortcut in another folder",
});

component!(details_menu_action, {
	key: "details-menu-action",
	kind: MenuAction,
	description: "Open the details drawer",
});

// Key published with a camel-case segment; templates depend on it as-is.
component!(version_history_menu_action, {
	key: "versionHistory-menu-action",
	kind: MenuAction,
	description: "Open the version history panel",
});

component!(upload_new_version_menu_action, {
	key: "upload-new-version-menu-action",
	kind: MenuAction,
	description: "Upload a new version of the document",
});
