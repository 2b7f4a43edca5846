//! Application shell and empty states.

use crate::component;

// The shell root must sort ahead of the rest of the catalog for bulk
// mounts that walk the registry in order.
component!(main, {
	key: "documents-main",
	kind: View,
	description: "Top-level application shell",
	priority: 100,
});

component!(header, {
	key: "documents-header",
	kind: View,
	description: "Toolbar above the document list",
});

component!(header_left, {
	key: "documents-header-left",
	kind: View,
	description: "Breadcrumb side of the toolbar",
});

component!(body, {
	key: "documents-body",
	kind: View,
	description: "Main content area below the toolbar",
});

component!(no_body, {
	key: "documents-no-body",
	kind: View,
	description: "Empty state for a space with no documents",
});

component!(no_body_folder, {
	key: "documents-no-body-folder",
	kind: View,
	description: "Empty state for an empty folder",
});

component!(no_result_body, {
	key: "documents-no-result-body",
	kind: View,
	description: "Empty state when a filter matches nothing",
});
