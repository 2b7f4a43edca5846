//! Upload and file-creation widgets.

use crate::component;

component!(add_new_file, {
	key: "documents-add-new-file",
	kind: Upload,
	description: "New file creation control",
});

component!(upload_overlay, {
	key: "upload-overlay",
	kind: Upload,
	description: "Drag-and-drop upload target overlay",
});

component!(zip_upload_input, {
	key: "documents-zip-upload-input",
	kind: Upload,
	description: "Archive file picker",
});

component!(zip_uploaded, {
	key: "documents-zip-uploaded",
	kind: Upload,
	description: "Uploaded archive summary",
});

component!(zip_item, {
	key: "documents-zip-item",
	kind: Upload,
	description: "Single entry row of an uploaded archive",
});
