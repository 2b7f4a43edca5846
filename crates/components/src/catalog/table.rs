//! Table cells and row actions.

use crate::component;

component!(table_cell, {
	key: "documents-table-cell",
	kind: Cell,
	description: "Generic cell dispatching on column type",
});

component!(file_name_cell, {
	key: "documents-file-name-cell",
	kind: Cell,
	description: "File name with icon and open link",
});

component!(file_edit_name_cell, {
	key: "documents-file-edit-name-cell",
	kind: Cell,
	description: "Inline rename editor for the name column",
});

component!(last_updated_cell, {
	key: "documents-last-updated-cell",
	kind: Cell,
	description: "Last modification date column",
});

component!(last_activity_cell, {
	key: "documents-last-activity-cell",
	kind: Cell,
	description: "Recent activity column",
});

component!(file_size_cell, {
	key: "documents-file-size-cell",
	kind: Cell,
	description: "Human-readable file size column",
});

component!(size_cell, {
	key: "documents-size-cell",
	kind: Cell,
	description: "Aggregate size column for folders",
});

component!(visibility_cell, {
	key: "documents-visibility-cell",
	kind: Cell,
	description: "Access level indicator column",
});

component!(favorite_cell, {
	key: "documents-favorite-cell",
	kind: Cell,
	description: "Favorite star column",
});

component!(selection_cell, {
	key: "documents-selection-cell",
	kind: Cell,
	description: "Row selection checkbox column",
});

component!(info_details_cell, {
	key: "documents-info-details-cell",
	kind: Cell,
	description: "Details shortcut column",
});

component!(favorite_action, {
	key: "documents-favorite-action",
	kind: MenuAction,
	description: "Favorite toggle shown on row hover",
});
