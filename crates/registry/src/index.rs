//! Registry construction and lookup.
//!
//! Provides [`RegistryBuilder`] and [`Registry`] to eliminate boilerplate
//! across definition domains. Each domain uses the same pattern:
//!
//! ```rust,ignore
//! let components = RegistryBuilder::new("components")
//!     .extend_inventory::<ComponentReg>()
//!     .sort_default()
//!     .build()?;
//! ```

use std::cmp::Ordering;

use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};

use crate::RegistryEntry;
use crate::error::{LookupError, RegistryError};

/// Trait for inventory wrapper types to expose their definition.
///
/// Implement this for your registry's wrapper type (e.g., `ComponentReg`)
/// to allow [`RegistryBuilder::extend_inventory`] to extract definitions.
///
/// # Example
///
/// ```rust,ignore
/// pub struct ComponentReg(pub &'static ComponentDef);
/// inventory::collect!(ComponentReg);
///
/// impl RegistryReg<ComponentDef> for ComponentReg {
///     fn def(&self) -> &'static ComponentDef { self.0 }
/// }
/// ```
pub trait RegistryReg<T: RegistryEntry + 'static>: 'static {
	/// Returns the static definition reference from this wrapper.
	fn def(&self) -> &'static T;
}

/// Policy for handling duplicate keys during registry construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Fail the build with [`RegistryError::DuplicateKey`].
	///
	/// A bootstrap manifest is authored in one place, so a duplicate key is
	/// an authoring mistake rather than a case to resolve silently.
	#[default]
	Reject,
	/// Keep the first definition seen for a key.
	FirstWins,
	/// Overwrite with the last definition seen.
	LastWins,
}

/// How a key conflict was settled under an override policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
	/// Key existed; the existing definition kept it.
	KeptExisting,
	/// Key existed; the incoming definition took it.
	ReplacedExisting,
}

impl std::fmt::Display for Resolution {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Resolution::KeptExisting => write!(f, "kept existing"),
			Resolution::ReplacedExisting => write!(f, "replaced existing"),
		}
	}
}

/// Record of a key conflict settled during a build.
///
/// Only produced under [`DuplicatePolicy::FirstWins`] and
/// [`DuplicatePolicy::LastWins`]; the `Reject` policy fails the build on the
/// first conflict instead.
pub struct Collision<T: 'static> {
	/// Label of the registry being built.
	pub registry: &'static str,
	/// The contested key.
	pub key: &'static str,
	/// Definition that held the key first.
	pub existing: &'static T,
	/// Definition that arrived second.
	pub incoming: &'static T,
	/// Which side kept the key.
	pub resolution: Resolution,
}

impl<T: 'static> Copy for Collision<T> {}

impl<T: 'static> Clone for Collision<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T: RegistryEntry + 'static> std::fmt::Debug for Collision<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Collision")
			.field("registry", &self.registry)
			.field("key", &self.key)
			.field("existing", &self.existing.name())
			.field("incoming", &self.incoming.name())
			.field("resolution", &self.resolution)
			.finish()
	}
}

/// Immutable key-to-definition index with O(1) lookup.
///
/// Built via [`RegistryBuilder`], provides:
/// - O(1) lookup by key via [`get`](Self::get) and [`resolve`](Self::resolve)
/// - Iteration in builder order via [`items`](Self::items)
/// - Conflict records from the build via [`collisions`](Self::collisions)
///
/// A built registry is never mutated; every definition it holds lives for
/// the whole process.
pub struct Registry<T: RegistryEntry + 'static> {
	label: &'static str,
	items: Vec<&'static T>,
	by_key: HashMap<&'static str, &'static T>,
	collisions: Vec<Collision<T>>,
}

impl<T: RegistryEntry + 'static> std::fmt::Debug for Registry<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Registry")
			.field("label", &self.label)
			.field("len", &self.items.len())
			.field("collisions", &self.collisions.len())
			.finish()
	}
}

impl<T: RegistryEntry + 'static> Registry<T> {
	/// Returns the label this registry was built under.
	#[inline]
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Looks up a definition by key.
	#[inline]
	pub fn get(&self, key: &str) -> Option<&'static T> {
		self.by_key.get(key).copied()
	}

	/// Looks up a definition by key, reporting a diagnosable error on a miss.
	pub fn resolve(&self, key: &str) -> Result<&'static T, LookupError> {
		self.get(key).ok_or_else(|| LookupError::UnknownKey {
			registry: self.label,
			key: key.to_string(),
			suggestion: self.suggest(key),
		})
	}

	/// Returns the registered key closest to `key`, if one is close enough.
	pub fn suggest(&self, key: &str) -> Option<&'static str> {
		self.by_key
			.keys()
			.copied()
			.min_by_key(|k| strsim::levenshtein(key, k))
			.filter(|k| strsim::levenshtein(key, k) <= 3)
	}

	/// Returns true if a definition is registered under `key`.
	#[inline]
	pub fn contains(&self, key: &str) -> bool {
		self.by_key.contains_key(key)
	}

	/// Returns all registered keys in sorted order.
	pub fn keys(&self) -> Vec<&'static str> {
		let mut keys: Vec<_> = self.by_key.keys().copied().collect();
		keys.sort_unstable();
		keys
	}

	/// Returns the definitions holding keys, in builder order.
	#[inline]
	pub fn items(&self) -> &[&'static T] {
		&self.items
	}

	/// Returns an iterator over the definitions holding keys.
	#[inline]
	pub fn iter(&self) -> impl Iterator<Item = &'static T> + '_ {
		self.items.iter().copied()
	}

	/// Returns the number of registered definitions.
	#[inline]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if the registry contains no definitions.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Returns the key conflicts settled during the build.
	#[inline]
	pub fn collisions(&self) -> &[Collision<T>] {
		&self.collisions
	}
}

/// Builder for constructing a [`Registry`].
///
/// Collects definitions from inventory or explicit pushes, applies sorting,
/// validates keys, and produces the final registry.
///
/// # Example
///
/// ```rust,ignore
/// let registry = RegistryBuilder::new("components")
///     .extend_inventory::<ComponentReg>()
///     .sort_default()
///     .build()?;
/// ```
pub struct RegistryBuilder<T: RegistryEntry + 'static> {
	label: &'static str,
	defs: Vec<&'static T>,
	policy: DuplicatePolicy,
}

impl<T: RegistryEntry + 'static> RegistryBuilder<T> {
	/// Creates a new builder with the given label for error messages.
	///
	/// The policy defaults to [`DuplicatePolicy::Reject`].
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			defs: Vec::new(),
			policy: DuplicatePolicy::default(),
		}
	}

	/// Sets the duplicate key handling policy.
	pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Adds a single definition to the builder.
	pub fn push(mut self, def: &'static T) -> Self {
		self.defs.push(def);
		self
	}

	/// Adds multiple definitions to the builder.
	pub fn extend<I: IntoIterator<Item = &'static T>>(mut self, defs: I) -> Self {
		self.defs.extend(defs);
		self
	}

	/// Collects all definitions from inventory via the wrapper type.
	///
	/// The wrapper type `R` must implement [`RegistryReg<T>`] to expose
	/// the underlying definition. The wrapper must also be collected via
	/// `inventory::collect!(R)`.
	pub fn extend_inventory<R>(mut self) -> Self
	where
		R: RegistryReg<T>,
		inventory::iter<R>: IntoIterator<Item = &'static R>,
	{
		for reg in inventory::iter::<R> {
			self.defs.push(reg.def());
		}
		self
	}

	/// Sorts definitions using the provided comparison function.
	pub fn sort_by<F: FnMut(&&'static T, &&'static T) -> Ordering>(mut self, cmp: F) -> Self {
		self.defs.sort_by(cmp);
		self
	}

	/// Sorts definitions by priority (descending), then name, then key.
	///
	/// This is the default sort order for most registries.
	pub fn sort_default(mut self) -> Self {
		self.defs.sort_by(|a, b| {
			b.priority()
				.cmp(&a.priority())
				.then_with(|| a.name().cmp(b.name()))
				.then_with(|| a.id().cmp(b.id()))
		});
		self
	}

	/// Builds the registry, validating keys according to policy.
	///
	/// Re-pushes of the same definition are collapsed first, so re-running
	/// a registration pass over the same statics is a no-op. An empty key
	/// fails the build regardless of policy. Key conflicts between distinct
	/// definitions follow [`DuplicatePolicy`]; under an override policy the
	/// losing definition drops out of [`Registry::items`] and the conflict
	/// is recorded on the registry.
	pub fn build(mut self) -> Result<Registry<T>, RegistryError> {
		let mut seen = HashSet::with_capacity_and_hasher(self.defs.len(), Default::default());
		self.defs.retain(|d| seen.insert(*d as *const T as usize));

		for &def in &self.defs {
			if def.id().is_empty() {
				return Err(RegistryError::EmptyKey {
					registry: self.label,
					name: def.name(),
				});
			}
		}

		let mut by_key: HashMap<&'static str, &'static T> =
			HashMap::with_capacity_and_hasher(self.defs.len(), Default::default());
		let mut collisions = Vec::new();

		for &def in &self.defs {
			let key = def.id();
			let Some(&existing) = by_key.get(key) else {
				by_key.insert(key, def);
				continue;
			};

			let resolution = match self.policy {
				DuplicatePolicy::Reject => {
					return Err(RegistryError::DuplicateKey {
						registry: self.label,
						key,
						existing: existing.name(),
						incoming: def.name(),
					});
				}
				DuplicatePolicy::FirstWins => Resolution::KeptExisting,
				DuplicatePolicy::LastWins => {
					by_key.insert(key, def);
					Resolution::ReplacedExisting
				}
			};

			tracing::warn!(
				registry = self.label,
				key,
				existing = existing.name(),
				incoming = def.name(),
				%resolution,
				"duplicate registry key",
			);

			collisions.push(Collision {
				registry: self.label,
				key,
				existing,
				incoming: def,
				resolution,
			});
		}

		// Definitions that lost their key drop out of iteration order too.
		let winners: HashSet<usize> = by_key.values().map(|&d| d as *const T as usize).collect();
		self.defs.retain(|&d| winners.contains(&(d as *const T as usize)));

		Ok(Registry {
			label: self.label,
			items: self.defs,
			by_key,
			collisions,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{RegistryMeta, RegistrySource};

	/// Test definition type.
	#[derive(Debug)]
	struct TestDef {
		meta: RegistryMeta,
	}

	impl RegistryEntry for TestDef {
		fn meta(&self) -> &RegistryMeta {
			&self.meta
		}
	}

	static DEF_A: TestDef = TestDef {
		meta: RegistryMeta::minimal("a", "a", "Test A"),
	};

	static DEF_B: TestDef = TestDef {
		meta: RegistryMeta {
			id: "b",
			name: "b",
			description: "Test B",
			priority: 10,
			source: RegistrySource::Builtin,
		},
	};

	/// Second definition claiming key "a".
	static DEF_A2: TestDef = TestDef {
		meta: RegistryMeta::minimal("a", "a2", "Test A2"),
	};

	#[test]
	fn test_registry_lookup() {
		let registry = RegistryBuilder::new("test")
			.push(&DEF_A)
			.push(&DEF_B)
			.build()
			.unwrap();

		assert_eq!(registry.label(), "test");
		assert_eq!(registry.len(), 2);

		assert!(std::ptr::eq(registry.get("a").unwrap(), &DEF_A));
		assert!(std::ptr::eq(registry.get("b").unwrap(), &DEF_B));

		assert!(registry.contains("a"));
		assert!(!registry.contains("c"));
		assert!(registry.get("c").is_none());
	}

	#[test]
	fn test_extend() {
		let registry = RegistryBuilder::new("test")
			.extend([&DEF_A, &DEF_B])
			.build()
			.unwrap();

		assert_eq!(registry.len(), 2);
	}

	#[test]
	fn test_keys_sorted() {
		let registry = RegistryBuilder::new("test")
			.push(&DEF_B)
			.push(&DEF_A)
			.build()
			.unwrap();

		assert_eq!(registry.keys(), vec!["a", "b"]);
	}

	#[test]
	fn test_sort_default() {
		let registry = RegistryBuilder::new("test")
			.push(&DEF_A)
			.push(&DEF_B)
			.sort_default()
			.build()
			.unwrap();

		// DEF_B has higher priority (10), so it comes first.
		assert!(std::ptr::eq(registry.items()[0], &DEF_B));
		assert!(std::ptr::eq(registry.items()[1], &DEF_A));
	}

	#[test]
	fn test_sort_by() {
		let registry = RegistryBuilder::new("test")
			.push(&DEF_B)
			.push(&DEF_A)
			.sort_by(|a, b| a.name().cmp(b.name()))
			.build()
			.unwrap();

		assert!(std::ptr::eq(registry.items()[0], &DEF_A));
	}

	#[test]
	fn test_reject_on_duplicate() {
		let err = RegistryBuilder::new("test")
			.push(&DEF_A)
			.push(&DEF_A2)
			.build()
			.unwrap_err();

		assert_eq!(
			err,
			RegistryError::DuplicateKey {
				registry: "test",
				key: "a",
				existing: "a",
				incoming: "a2",
			}
		);
	}

	#[test]
	fn test_first_wins() {
		let registry = RegistryBuilder::new("test")
			.push(&DEF_A)
			.push(&DEF_A2)
			.duplicate_policy(DuplicatePolicy::FirstWins)
			.build()
			.unwrap();

		// First wins: DEF_A holds the key and DEF_A2 drops out of items.
		assert!(std::ptr::eq(registry.get("a").unwrap(), &DEF_A));
		assert_eq!(registry.len(), 1);

		let collision = &registry.collisions()[0];
		assert_eq!(collision.key, "a");
		assert_eq!(collision.resolution, Resolution::KeptExisting);
		assert!(std::ptr::eq(collision.existing, &DEF_A));
		assert!(std::ptr::eq(collision.incoming, &DEF_A2));
		assert!(format!("{collision:?}").contains("KeptExisting"));
	}

	#[test]
	fn test_last_wins() {
		let registry = RegistryBuilder::new("test")
			.push(&DEF_A)
			.push(&DEF_A2)
			.duplicate_policy(DuplicatePolicy::LastWins)
			.build()
			.unwrap();

		// Last wins: DEF_A2 holds the key and DEF_A drops out of items.
		assert!(std::ptr::eq(registry.get("a").unwrap(), &DEF_A2));
		assert_eq!(registry.len(), 1);
		assert_eq!(registry.collisions()[0].resolution, Resolution::ReplacedExisting);
	}

	#[test]
	fn test_registry_debug() {
		let registry = RegistryBuilder::new("test")
			.push(&DEF_A)
			.push(&DEF_A2)
			.duplicate_policy(DuplicatePolicy::FirstWins)
			.build()
			.unwrap();

		// Summary only; the definitions themselves are not printed.
		assert_eq!(
			format!("{registry:?}"),
			"Registry { label: \"test\", len: 1, collisions: 1 }"
		);
	}

	#[test]
	fn test_repeated_push_is_collapsed() {
		let registry = RegistryBuilder::new("test")
			.push(&DEF_A)
			.push(&DEF_A)
			.build()
			.unwrap();

		assert_eq!(registry.len(), 1);
		assert!(registry.collisions().is_empty());
	}

	#[test]
	fn test_empty_key_fails_build() {
		static DEF_EMPTY: TestDef = TestDef {
			meta: RegistryMeta::minimal("", "empty", "No key"),
		};

		let err = RegistryBuilder::new("test")
			.push(&DEF_EMPTY)
			.build()
			.unwrap_err();

		assert_eq!(
			err,
			RegistryError::EmptyKey {
				registry: "test",
				name: "empty",
			}
		);
	}

	#[test]
	fn test_empty_builder() {
		let registry = RegistryBuilder::<TestDef>::new("test").build().unwrap();

		assert!(registry.is_empty());
		assert!(registry.keys().is_empty());
		assert!(registry.get("a").is_none());
		assert!(registry.suggest("a").is_none());
	}

	#[test]
	fn test_resolve_suggestion() {
		static DEF_CELL: TestDef = TestDef {
			meta: RegistryMeta::minimal("file-name-cell", "file_name_cell", "Cell"),
		};

		let registry = RegistryBuilder::new("cells").push(&DEF_CELL).build().unwrap();

		let err = registry.resolve("file-name-cel").unwrap_err();
		assert_eq!(
			err,
			LookupError::UnknownKey {
				registry: "cells",
				key: "file-name-cel".to_string(),
				suggestion: Some("file-name-cell"),
			}
		);
		assert_eq!(
			format!("{err}"),
			"unknown key \"file-name-cel\" in cells registry (did you mean 'file-name-cell'?)"
		);

		// Nothing close enough to suggest.
		let err = registry.resolve("breadcrumb").unwrap_err();
		assert_eq!(
			err,
			LookupError::UnknownKey {
				registry: "cells",
				key: "breadcrumb".to_string(),
				suggestion: None,
			}
		);
	}
}
