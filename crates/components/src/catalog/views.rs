//! List views and navigation.

use crate::component;

component!(timeline_view, {
	key: "documents-timeline-view",
	kind: View,
	description: "Recency-grouped document list",
});

component!(folder_view, {
	key: "documents-folder-view",
	kind: View,
	description: "Hierarchical folder listing",
});

component!(timeline_group_header, {
	key: "documents-timeline-group-header",
	kind: View,
	description: "Section header separating timeline groups",
});

component!(breadcrumb, {
	key: "documents-breadcrumb",
	kind: View,
	description: "Current folder path with navigation",
});

component!(folder_treeview_drawer, {
	key: "folder-treeview-drawer",
	kind: Drawer,
	description: "Folder tree for quick navigation",
});
