//! Table configuration
//!
//! Plain data structures with chainable setters, built once per table and
//! treated as read-only by the renderer. Setters that can receive invalid
//! values validate immediately and return a [`Result`] instead of clamping.

use indexmap::IndexMap;

use crate::error::{Result, TableError};

/// Bootstrap contextual state applied to rows, cells and the footer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContextualState {
	/// No contextual styling
	#[default]
	Default,
	/// `active`
	Active,
	/// `success`
	Success,
	/// `info`
	Info,
	/// `warning`
	Warning,
	/// `danger`
	Danger,
}

impl ContextualState {
	/// Returns the Bootstrap class for this state, or `None` for default
	pub fn css_class(self) -> Option<&'static str> {
		match self {
			Self::Default => None,
			Self::Active => Some("active"),
			Self::Success => Some("success"),
			Self::Info => Some("info"),
			Self::Warning => Some("warning"),
			Self::Danger => Some("danger"),
		}
	}
}

/// Initial sort state of a sortable column
///
/// A column with no sort state configured is not sortable at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortState {
	/// Sortable, not initially sorted
	None,
	/// Sortable and initially sorted ascending
	Ascending,
	/// Sortable and initially sorted descending
	Descending,
}

/// AJAX update settings
///
/// Empty strings mean "not configured"; the busy indicator and lifecycle
/// callbacks are optional, the URL is required as soon as paging, sorting or
/// filtering is enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateConfig {
	/// Server endpoint the generated links request
	pub url: String,
	/// Id of an element shown while an update is in flight
	pub busy_indicator_id: String,
	/// Client callback invoked before the request
	pub start: String,
	/// Client callback invoked on success
	pub success: String,
	/// Client callback invoked on failure
	pub error: String,
	/// Client callback invoked when the request completes
	pub complete: String,
	/// Extra query parameters appended to every generated link, in order
	pub custom_query_params: IndexMap<String, String>,
}

impl UpdateConfig {
	/// Creates an empty update configuration
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the update URL
	pub fn url(mut self, url: impl Into<String>) -> Self {
		self.url = url.into();
		self
	}

	/// Sets the busy indicator element id
	pub fn busy_indicator(mut self, id: impl Into<String>) -> Self {
		self.busy_indicator_id = id.into();
		self
	}

	/// Sets the callback invoked before an update request starts
	pub fn on_start(mut self, callback: impl Into<String>) -> Self {
		self.start = callback.into();
		self
	}

	/// Sets the callback invoked when an update request succeeds
	pub fn on_success(mut self, callback: impl Into<String>) -> Self {
		self.success = callback.into();
		self
	}

	/// Sets the callback invoked when an update request fails
	pub fn on_error(mut self, callback: impl Into<String>) -> Self {
		self.error = callback.into();
		self
	}

	/// Sets the callback invoked when an update request completes
	pub fn on_complete(mut self, callback: impl Into<String>) -> Self {
		self.complete = callback.into();
		self
	}

	/// Adds a custom query parameter carried by every generated link
	pub fn query_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.custom_query_params.insert(name.into(), value.into());
		self
	}
}

/// Styling of the sort direction icons in column headers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortingConfig {
	/// Base icon library class, e.g. `glyphicon`
	pub icon_lib: String,
	/// Icon class for the ascending trigger
	pub ascending_css_class: String,
	/// Icon class for the descending trigger
	pub descending_css_class: String,
}

impl SortingConfig {
	/// Creates an empty sorting configuration
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the icon library class
	pub fn icon_lib(mut self, class: impl Into<String>) -> Self {
		self.icon_lib = class.into();
		self
	}

	/// Sets the ascending icon class
	pub fn ascending_class(mut self, class: impl Into<String>) -> Self {
		self.ascending_css_class = class.into();
		self
	}

	/// Sets the descending icon class
	pub fn descending_class(mut self, class: impl Into<String>) -> Self {
		self.descending_css_class = class.into();
		self
	}
}

/// Paging behavior and footer navigation styling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagingConfig {
	/// Rows per page; 0 disables paging
	pub page_size: usize,
	/// Show the `current/last` page info in the footer
	pub page_info: bool,
	/// Show the direct page access selector in the footer
	pub direct_page_access: bool,
	/// Icon library class for the navigation buttons; empty for no icons
	pub icon_lib: String,
	/// Icon class of the first-page button
	pub first_css_class: String,
	/// Icon class of the previous-page button
	pub previous_css_class: String,
	/// Icon class of the next-page button
	pub next_css_class: String,
	/// Icon class of the last-page button
	pub last_css_class: String,
}

impl PagingConfig {
	/// Creates a configuration with paging disabled
	pub fn new() -> Self {
		Self::default()
	}

	/// Enables paging with the given page size
	///
	/// Returns [`TableError::InvalidPageSize`] for a zero page size; leaving
	/// paging unconfigured is expressed by not calling this setter.
	pub fn page_size(mut self, size: usize) -> Result<Self> {
		if size == 0 {
			return Err(TableError::InvalidPageSize(size));
		}
		self.page_size = size;
		Ok(self)
	}

	/// Toggles the page info display
	pub fn page_info(mut self, enabled: bool) -> Self {
		self.page_info = enabled;
		self
	}

	/// Toggles the direct page access selector
	pub fn direct_page_access(mut self, enabled: bool) -> Self {
		self.direct_page_access = enabled;
		self
	}

	/// Sets the icon library class for the navigation buttons
	pub fn icon_lib(mut self, class: impl Into<String>) -> Self {
		self.icon_lib = class.into();
		self
	}

	/// Sets the navigation button icon classes, first to last
	pub fn nav_icons(
		mut self,
		first: impl Into<String>,
		previous: impl Into<String>,
		next: impl Into<String>,
		last: impl Into<String>,
	) -> Self {
		self.first_css_class = first.into();
		self.previous_css_class = previous.into();
		self.next_css_class = next.into();
		self.last_css_class = last.into();
		self
	}
}

/// Footer text and styling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FooterConfig {
	/// Free text shown in the footer; empty for none
	pub text: String,
	/// Contextual state of the footer cell
	pub state: ContextualState,
	/// Extra classes on the footer cell
	pub css_classes: Vec<String>,
}

impl FooterConfig {
	/// Creates an empty footer configuration
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the footer text
	pub fn text(mut self, text: impl Into<String>) -> Self {
		self.text = text.into();
		self
	}

	/// Sets the footer contextual state
	pub fn state(mut self, state: ContextualState) -> Self {
		self.state = state;
		self
	}

	/// Adds a class to the footer cell
	pub fn css_class(mut self, class: impl Into<String>) -> Self {
		self.css_classes.push(class.into());
		self
	}
}

/// Filter input settings for one column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteringConfig {
	/// Minimum typed characters before the client triggers an update; 0 = off
	pub threshold: usize,
	/// Extra classes on the filter input
	pub css_classes: Vec<String>,
}

/// Settings for one configured column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnConfig {
	/// Header text; a header row renders only if some column sets one
	pub header: String,
	/// Sortability and initial sort direction; `None` means not sortable
	pub sort_state: Option<SortState>,
	/// Filtering settings; a zero threshold means no filter input
	pub filtering: FilteringConfig,
	/// Extra classes on the header cell
	pub css_classes: Vec<String>,
}

impl ColumnConfig {
	/// Creates a plain column with no header, sorting or filtering
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the header text
	pub fn header(mut self, text: impl Into<String>) -> Self {
		self.header = text.into();
		self
	}

	/// Makes the column sortable with the given initial state
	pub fn sortable(mut self, state: SortState) -> Self {
		self.sort_state = Some(state);
		self
	}

	/// Enables filtering with the given threshold
	///
	/// Returns [`TableError::InvalidThreshold`] for a zero threshold.
	pub fn filterable(mut self, threshold: usize) -> Result<Self> {
		if threshold == 0 {
			return Err(TableError::InvalidThreshold(threshold));
		}
		self.filtering.threshold = threshold;
		Ok(self)
	}

	/// Adds a class to the filter input
	pub fn filter_class(mut self, class: impl Into<String>) -> Self {
		self.filtering.css_classes.push(class.into());
		self
	}

	/// Adds a class to the header cell
	pub fn css_class(mut self, class: impl Into<String>) -> Self {
		self.css_classes.push(class.into());
		self
	}
}

/// Per-cell overrides for one row, keyed by column name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellConfig {
	/// Contextual state of the cell
	pub state: ContextualState,
	/// Extra classes on the cell
	pub css_classes: Vec<String>,
}

impl CellConfig {
	/// Creates an empty cell override
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the cell contextual state
	pub fn state(mut self, state: ContextualState) -> Self {
		self.state = state;
		self
	}

	/// Adds a class to the cell
	pub fn css_class(mut self, class: impl Into<String>) -> Self {
		self.css_classes.push(class.into());
		self
	}
}

/// Settings for one body row wrapping its entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowConfig<T> {
	/// The entity rendered by this row
	pub entity: T,
	/// Inactive rows render without click behavior
	pub active: bool,
	/// URL navigated to when the row is clicked
	pub navigation_url: String,
	/// Client handler invoked when the row is clicked
	pub row_click: String,
	/// Contextual state of the row
	pub state: ContextualState,
	/// Extra classes on the row
	pub css_classes: Vec<String>,
	/// Per-cell overrides keyed by column name
	pub cells: IndexMap<String, CellConfig>,
}

impl<T> RowConfig<T> {
	/// Creates an active row for the given entity
	pub fn new(entity: T) -> Self {
		Self {
			entity,
			active: true,
			navigation_url: String::new(),
			row_click: String::new(),
			state: ContextualState::Default,
			css_classes: Vec::new(),
			cells: IndexMap::new(),
		}
	}

	/// Marks the row active or inactive
	pub fn active(mut self, active: bool) -> Self {
		self.active = active;
		self
	}

	/// Sets the URL the browser navigates to on row click
	pub fn navigation_url(mut self, url: impl Into<String>) -> Self {
		self.navigation_url = url.into();
		self
	}

	/// Sets the client handler invoked on row click
	pub fn row_click(mut self, handler: impl Into<String>) -> Self {
		self.row_click = handler.into();
		self
	}

	/// Sets the row contextual state
	pub fn state(mut self, state: ContextualState) -> Self {
		self.state = state;
		self
	}

	/// Adds a class to the row
	pub fn css_class(mut self, class: impl Into<String>) -> Self {
		self.css_classes.push(class.into());
		self
	}

	/// Adds a cell override for the named column
	pub fn cell(mut self, column: impl Into<String>, cell: CellConfig) -> Self {
		self.cells.insert(column.into(), cell);
		self
	}
}

/// Complete configuration of one table render
///
/// Built fluently, then handed to the renderer read-only:
///
/// ```
/// use bootstrap_table::{ColumnConfig, SortState, TableConfig, UpdateConfig};
///
/// # fn build() -> bootstrap_table::Result<TableConfig<()>> {
/// let config = TableConfig::new()
///     .striped(true)
///     .caption("Employees")
///     .update(UpdateConfig::new().url("/employees/table"))
///     .column(
///         "Name",
///         ColumnConfig::new()
///             .header("Name")
///             .sortable(SortState::Ascending)
///             .filterable(2)?,
///     );
/// # Ok(config)
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableConfig<T> {
	/// Table element id; empty for none
	pub id: String,
	/// Table element name; empty for none
	pub name: String,
	/// Caption text; empty for none
	pub caption: String,
	/// Adds `table-striped`
	pub striped: bool,
	/// Adds `table-bordered`
	pub bordered: bool,
	/// Adds `table-condensed`
	pub condensed: bool,
	/// Adds `table-hover`
	pub hover_state: bool,
	/// Table-wide click handler, invoked with the row element
	pub row_click: String,
	/// AJAX update settings
	pub update: UpdateConfig,
	/// Sort icon styling
	pub sorting: SortingConfig,
	/// Footer settings
	pub footer: FooterConfig,
	/// Paging settings
	pub paging: PagingConfig,
	/// Body rows in render order
	pub rows: Vec<RowConfig<T>>,
	/// Columns keyed by property name, in render order
	pub columns: IndexMap<String, ColumnConfig>,
	/// Extra classes on the table element, appended last
	pub css_classes: Vec<String>,
}

impl<T> TableConfig<T> {
	/// Creates an empty table configuration
	pub fn new() -> Self {
		Self {
			id: String::new(),
			name: String::new(),
			caption: String::new(),
			striped: false,
			bordered: false,
			condensed: false,
			hover_state: false,
			row_click: String::new(),
			update: UpdateConfig::default(),
			sorting: SortingConfig::default(),
			footer: FooterConfig::default(),
			paging: PagingConfig::default(),
			rows: Vec::new(),
			columns: IndexMap::new(),
			css_classes: Vec::new(),
		}
	}

	/// Sets the table element id
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = id.into();
		self
	}

	/// Sets the table element name
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();
		self
	}

	/// Sets the caption text
	pub fn caption(mut self, caption: impl Into<String>) -> Self {
		self.caption = caption.into();
		self
	}

	/// Toggles `table-striped`
	pub fn striped(mut self, enabled: bool) -> Self {
		self.striped = enabled;
		self
	}

	/// Toggles `table-bordered`
	pub fn bordered(mut self, enabled: bool) -> Self {
		self.bordered = enabled;
		self
	}

	/// Toggles `table-condensed`
	pub fn condensed(mut self, enabled: bool) -> Self {
		self.condensed = enabled;
		self
	}

	/// Toggles `table-hover`
	pub fn hover_state(mut self, enabled: bool) -> Self {
		self.hover_state = enabled;
		self
	}

	/// Sets the table-wide row click handler
	pub fn row_click(mut self, handler: impl Into<String>) -> Self {
		self.row_click = handler.into();
		self
	}

	/// Sets the AJAX update settings
	pub fn update(mut self, update: UpdateConfig) -> Self {
		self.update = update;
		self
	}

	/// Sets the sort icon styling
	pub fn sorting(mut self, sorting: SortingConfig) -> Self {
		self.sorting = sorting;
		self
	}

	/// Sets the footer settings
	pub fn footer(mut self, footer: FooterConfig) -> Self {
		self.footer = footer;
		self
	}

	/// Sets the paging settings
	pub fn paging(mut self, paging: PagingConfig) -> Self {
		self.paging = paging;
		self
	}

	/// Adds a configured column keyed by property name
	pub fn column(mut self, property: impl Into<String>, column: ColumnConfig) -> Self {
		self.columns.insert(property.into(), column);
		self
	}

	/// Appends a body row
	pub fn row(mut self, row: RowConfig<T>) -> Self {
		self.rows.push(row);
		self
	}

	/// Appends body rows for plain entities with no per-row settings
	pub fn rows<I>(mut self, entities: I) -> Self
	where
		I: IntoIterator<Item = T>,
	{
		self.rows.extend(entities.into_iter().map(RowConfig::new));
		self
	}

	/// Adds a class to the table element
	pub fn css_class(mut self, class: impl Into<String>) -> Self {
		self.css_classes.push(class.into());
		self
	}

	/// True when paging is configured
	pub fn has_paging(&self) -> bool {
		self.paging.page_size > 0
	}

	/// True when any column is sortable
	pub fn has_sorting(&self) -> bool {
		self.columns.values().any(|c| c.sort_state.is_some())
	}

	/// True when any column has a filter input
	pub fn has_filtering(&self) -> bool {
		self.columns.values().any(|c| c.filtering.threshold > 0)
	}
}
