//! Component registration macros.

/// Helper to select optional value or default.
#[doc(hidden)]
#[macro_export]
macro_rules! __component_opt {
	({$val:expr}, $default:expr) => {
		$val
	};
	(, $default:expr) => {
		$default
	};
}

/// Declares a workspace component and submits it for collection.
///
/// The key is the tag templates mount; it is published API and copied
/// verbatim, never derived from the declaration name.
///
/// # Examples
///
/// ```ignore
/// // Basic component
/// component!(breadcrumb, {
///     key: "documents-breadcrumb",
///     kind: View,
///     description: "Current folder path with navigation",
/// });
///
/// // With a raised sort precedence
/// component!(main, {
///     key: "documents-main",
///     kind: View,
///     description: "Top-level application shell",
///     priority: 100,
/// });
/// ```
#[macro_export]
macro_rules! component {
	($name:ident, {
		key: $key:expr,
		kind: $kind:ident,
		description: $desc:expr
		$(, priority: $priority:expr)?
		$(,)?
	}) => {
		paste::paste! {
			#[allow(non_upper_case_globals)]
			pub static [<COMPONENT_ $name:upper>]: $crate::ComponentDef =
				$crate::ComponentDef {
					meta: $crate::RegistryMeta {
						id: $key,
						name: stringify!($name),
						description: $desc,
						priority: $crate::__component_opt!($({$priority})?, 0),
						source: $crate::RegistrySource::Crate(env!("CARGO_PKG_NAME")),
					},
					kind: $crate::ComponentKind::$kind,
				};

			inventory::submit! { $crate::ComponentReg(&[<COMPONENT_ $name:upper>]) }
		}
	};
}
