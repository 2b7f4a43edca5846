//! Filtering controls.

use crate::component;

component!(select_period, {
	key: "documents-select-period",
	kind: Filter,
	description: "Date range picker for the timeline",
});

component!(advanced_filter_drawer, {
	key: "documents-advanced-filter-drawer",
	kind: Filter,
	description: "Full filter editor panel",
});

component!(filter_menu_mobile, {
	key: "documents-filter-menu-mobile",
	kind: Filter,
	description: "Filter chooser for narrow screens",
});

component!(favorite_filter_action, {
	key: "favorite-filter-action",
	kind: Filter,
	description: "Quick filter for favorites",
});

component!(all_filter_action, {
	key: "all-filter-action",
	kind: Filter,
	description: "Quick filter clearing all restrictions",
});

component!(quick_filter_action, {
	key: "quick-filter-action",
	kind: Filter,
	description: "Single-criterion quick filter chip",
});

component!(mobile_advanced_filter_action, {
	key: "mobile-advanced-filter-action",
	kind: Filter,
	description: "Opens the filter editor on narrow screens",
});

component!(extend_filter_action, {
	key: "extend-filter-action",
	kind: Filter,
	description: "Adds a criterion to the active filter",
});
