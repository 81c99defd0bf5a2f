//! Entity pipeline: filter, sort, then page
//!
//! The updater and the renderer are independent consumers of the same
//! [`TableState`]; the updater only shapes the entity collection, it never
//! touches markup.

use tracing::debug;

use crate::entity::Entity;
use crate::state::TableState;

/// The visible entity slice plus the total matching count
///
/// `entity_count` is taken after filtering but before paging, so pagination
/// math stays correct regardless of the requested page.
#[derive(Debug, Clone, PartialEq)]
pub struct TableModel<T> {
	/// Entities visible on the current page, post filter, sort and page
	pub entities: Vec<T>,
	/// Number of entities surviving the filter stage
	pub entity_count: usize,
}

/// Applies a request's table state to an entity collection
#[derive(Debug, Clone)]
pub struct TableUpdater {
	state: TableState,
}

impl TableUpdater {
	/// Creates an updater for the given request state
	pub fn new(state: TableState) -> Self {
		Self { state }
	}

	/// Returns the request state driving this updater
	pub fn state(&self) -> &TableState {
		&self.state
	}

	/// Filters, sorts and pages the entities according to the request state
	///
	/// Filters combine with logical AND: an entity survives only if, for
	/// every `(property, value)` entry, the property's string form starts
	/// with the value case-insensitively. Sorting is stable in both
	/// directions. A page beyond the last yields an empty slice, not an
	/// error.
	pub fn update<T: Entity>(&self, entities: Vec<T>) -> TableModel<T> {
		let total = entities.len();
		let mut entities: Vec<T> = entities
			.into_iter()
			.filter(|entity| self.matches_filters(entity))
			.collect();

		if let Some(property) = &self.state.sort_property {
			entities.sort_by(|a, b| {
				let ordering = a.property(property).natural_cmp(&b.property(property));
				if self.state.ascending {
					ordering
				} else {
					ordering.reverse()
				}
			});
		}

		let entity_count = entities.len();
		if self.state.page_size > 0 {
			entities = entities
				.into_iter()
				.skip(self.state.page.saturating_sub(1) * self.state.page_size)
				.take(self.state.page_size)
				.collect();
		}

		debug!(
			total,
			filtered = entity_count,
			visible = entities.len(),
			page = self.state.page,
			"updated table model"
		);

		TableModel {
			entities,
			entity_count,
		}
	}

	fn matches_filters<T: Entity>(&self, entity: &T) -> bool {
		self.state.filters.iter().all(|(property, value)| {
			entity
				.property(property)
				.to_string()
				.to_lowercase()
				.starts_with(&value.to_lowercase())
		})
	}
}
