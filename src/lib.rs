//! Server-driven Bootstrap table rendering
//!
//! This crate renders a data table as Bootstrap markup with sorting,
//! filtering and paging driven entirely by the server: every interaction is
//! a generated link whose query string reproduces the current table state
//! and advances one aspect of it, requested asynchronously and swapped into
//! the original container.
//!
//! # Architecture
//!
//! - [`TableState`] parses the transient UI state from query parameters
//! - [`TableUpdater`] applies filter, sort and page to an entity collection,
//!   producing a [`TableModel`]
//! - [`TableRenderer`] builds a [`TableNode`] tree from a [`TableConfig`]
//!   and the same state, then serializes it to markup
//!
//! The updater and the renderer are independent consumers of the state; a
//! request handler typically runs both:
//!
//! ```
//! use bootstrap_table::{
//!     ColumnConfig, Entity, PropertyValue, SortState, TableConfig, TableRenderer,
//!     TableState, TableUpdater, UpdateConfig,
//! };
//!
//! struct Employee {
//!     name: String,
//! }
//!
//! impl Entity for Employee {
//!     fn property(&self, name: &str) -> PropertyValue {
//!         match name {
//!             "Name" => self.name.as_str().into(),
//!             _ => PropertyValue::Null,
//!         }
//!     }
//! }
//!
//! # fn handle() -> bootstrap_table::Result<String> {
//! let state = TableState::from_query_string("sort=Name&asc=True");
//! let employees = vec![Employee { name: "Ada".to_string() }];
//!
//! let model = TableUpdater::new(state.clone()).update(employees);
//! let config = TableConfig::new()
//!     .update(UpdateConfig::new().url("/employees/table"))
//!     .column("Name", ColumnConfig::new().header("Name").sortable(SortState::None))
//!     .rows(model.entities);
//!
//! TableRenderer::new(state).render(&config, model.entity_count)
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod entity;
pub mod error;
pub mod node;
pub mod render;
pub mod state;
pub mod update;

mod script;

pub use config::{
	CellConfig, ColumnConfig, ContextualState, FilteringConfig, FooterConfig, PagingConfig,
	RowConfig, SortState, SortingConfig, TableConfig, UpdateConfig,
};
pub use entity::{Entity, PropertyValue};
pub use error::{Result, TableError};
pub use node::{TableNode, serialize};
pub use render::TableRenderer;
pub use state::TableState;
pub use update::{TableModel, TableUpdater};
