//! Table markup construction
//!
//! [`TableRenderer`] turns a configuration, a request state and the total
//! matching entity count into a [`TableNode`] tree with a single root, then
//! serializes it. Every generated link reproduces the current state in its
//! query string and advances exactly one aspect of it (sort, page or
//! filter), so the server can rebuild the table from the next request alone.

use tracing::debug;
use uuid::Uuid;

use crate::config::{PagingConfig, SortState, TableConfig, UpdateConfig};
use crate::entity::Entity;
use crate::error::{Result, TableError};
use crate::node::TableNode;
use crate::script;
use crate::state::TableState;

/// Serializes the ascending flag the way the state parser reads it back
fn bool_literal(value: bool) -> &'static str {
	if value { "True" } else { "False" }
}

/// Builds the markup tree for one table render
pub struct TableRenderer {
	state: TableState,
}

impl TableRenderer {
	/// Creates a renderer for the given request state
	pub fn new(state: TableState) -> Self {
		Self { state }
	}

	/// Renders the table to a markup string
	///
	/// `entity_count` is the post-filter, pre-paging count produced by the
	/// updater; it drives the pagination math.
	pub fn render<T: Entity>(&self, config: &TableConfig<T>, entity_count: usize) -> Result<String> {
		Ok(crate::node::serialize(&self.build(config, entity_count)?))
	}

	/// Builds the node tree without serializing it
	///
	/// The returned sequence always holds exactly one root node. Returns
	/// [`TableError::MissingUpdateUrl`] when paging, sorting or filtering is
	/// configured without an update URL.
	pub fn build<T: Entity>(
		&self,
		config: &TableConfig<T>,
		entity_count: usize,
	) -> Result<Vec<TableNode>> {
		if (config.has_paging() || config.has_sorting() || config.has_filtering())
			&& config.update.url.is_empty()
		{
			return Err(TableError::MissingUpdateUrl);
		}

		// A fresh id ties the generated links to the container actually
		// rendered; on AJAX re-renders the client echoes the original id.
		let (container_id, first_render) = match &self.state.container_id {
			Some(id) => (id.clone(), false),
			None => (Uuid::new_v4().to_string(), true),
		};
		debug!(container = %container_id, first_render, "rendering table");

		let links = LinkContext {
			update: &config.update,
			page_size: config.paging.page_size,
			state: &self.state,
			container_id: &container_id,
		};

		let mut content = vec![self.build_table(config, entity_count, &links)];
		if config.has_filtering() {
			content.push(links.filter_link());
			content.push(links.filter_template());
		}

		let mut root = TableNode::new("div");
		if first_render {
			root.set_attr("id", container_id.clone());
			root.add_class("TableContainer");
			let mut inner = TableNode::new("div");
			inner.set_raw(script::client_script(&container_id));
			for node in content {
				inner.add_child(node);
			}
			root.add_child(inner);
		} else {
			for node in content {
				root.add_child(node);
			}
		}
		Ok(vec![root])
	}

	fn build_table<T: Entity>(
		&self,
		config: &TableConfig<T>,
		entity_count: usize,
		links: &LinkContext<'_>,
	) -> TableNode {
		let mut table = TableNode::new("table");
		if !config.id.is_empty() {
			table.set_attr("id", config.id.clone());
		}
		if !config.name.is_empty() {
			table.set_attr("name", config.name.clone());
		}
		table.add_class("table");
		table.add_class_if("table-striped", config.striped);
		table.add_class_if("table-bordered", config.bordered);
		table.add_class_if("table-hover", config.hover_state);
		table.add_class_if("table-condensed", config.condensed);
		for class in &config.css_classes {
			table.add_class(class.clone());
		}

		if !config.caption.is_empty() {
			let mut caption = TableNode::new("caption");
			caption.set_text(config.caption.clone());
			table.add_child(caption);
		}
		if let Some(header) = self.build_header(config, links) {
			table.add_child(header);
		}
		table.add_child(self.build_body(config));
		if let Some(footer) = self.build_footer(config, entity_count, links) {
			table.add_child(footer);
		}
		table
	}

	/// Header section; present only when some column defines header text
	fn build_header<T: Entity>(
		&self,
		config: &TableConfig<T>,
		links: &LinkContext<'_>,
	) -> Option<TableNode> {
		if !config.columns.values().any(|c| !c.header.is_empty()) {
			return None;
		}

		let mut row = TableNode::new("tr");
		for (property, column) in &config.columns {
			let mut cell = TableNode::new("th");
			if !column.header.is_empty() {
				cell.set_text(column.header.clone());
			}
			for class in &column.css_classes {
				cell.add_class(class.clone());
			}
			if let Some(initial) = column.sort_state {
				cell.add_child(self.sort_link(config, links, property, initial, true));
				cell.add_child(self.sort_link(config, links, property, initial, false));
			}
			row.add_child(cell);
		}

		let mut header = TableNode::new("thead");
		header.add_child(row);
		if config.has_filtering() {
			header.add_child(self.build_filter_row(config));
		}
		Some(header)
	}

	fn sort_link<T: Entity>(
		&self,
		config: &TableConfig<T>,
		links: &LinkContext<'_>,
		property: &str,
		initial: SortState,
		ascending: bool,
	) -> TableNode {
		let active = match &self.state.sort_property {
			Some(current) => current == property && self.state.ascending == ascending,
			None => match initial {
				SortState::Ascending => ascending,
				SortState::Descending => !ascending,
				SortState::None => false,
			},
		};

		let mut link = TableNode::new("a");
		link.add_class("SortIcon");
		link.add_class_if("ActiveSort", active);
		links.apply_ajax(&mut link, &links.sort_url(property, ascending));

		let mut icon = TableNode::new("span");
		if !config.sorting.icon_lib.is_empty() {
			icon.add_class(config.sorting.icon_lib.clone());
		}
		let direction_class = if ascending {
			&config.sorting.ascending_css_class
		} else {
			&config.sorting.descending_css_class
		};
		if !direction_class.is_empty() {
			icon.add_class(direction_class.clone());
		}
		link.add_child(icon);
		link
	}

	/// One filter cell per column; empty for columns without filtering
	fn build_filter_row<T: Entity>(&self, config: &TableConfig<T>) -> TableNode {
		let mut row = TableNode::new("tr");
		for (property, column) in &config.columns {
			let mut cell = TableNode::new("td");
			if column.filtering.threshold > 0 {
				let mut input = TableNode::new("input");
				input.set_attr("type", "text");
				input.set_attr("data-filter-prop", property.clone());
				input.set_attr("data-filter-threshold", column.filtering.threshold.to_string());
				for class in &column.filtering.css_classes {
					input.add_class(class.clone());
				}
				input.add_class("form-control");
				if let Some(value) = self.state.filters.get(property) {
					input.set_attr("value", value.clone());
				}
				if self.state.current_filter.as_deref() == Some(property) {
					input.set_attr("data-filter-focus", "");
				}
				cell.add_child(input);
			}
			row.add_child(cell);
		}
		row
	}

	fn build_body<T: Entity>(&self, config: &TableConfig<T>) -> TableNode {
		let mut body = TableNode::new("tbody");
		for row_config in &config.rows {
			let mut row = TableNode::new("tr");
			for class in &row_config.css_classes {
				row.add_class(class.clone());
			}
			if let Some(class) = row_config.state.css_class() {
				row.add_class(class);
			}
			if row_config.active {
				if !row_config.navigation_url.is_empty() {
					row.set_attr(
						"onclick",
						format!("window.location.href = '{}'", row_config.navigation_url),
					);
				} else if !row_config.row_click.is_empty() {
					row.set_attr("onclick", row_config.row_click.clone());
				} else if !config.row_click.is_empty() {
					row.set_attr("onclick", format!("{}(this)", config.row_click));
				}
				if row.has_attr("onclick") {
					row.set_attr("style", "cursor: pointer");
				}
			}

			for property in config.columns.keys() {
				let mut cell = TableNode::new("td");
				let value = row_config.entity.property(property).to_string();
				cell.set_text(value);
				if let Some(overrides) = row_config.cells.get(property) {
					if let Some(class) = overrides.state.css_class() {
						cell.add_class(class);
					}
					for class in &overrides.css_classes {
						cell.add_class(class.clone());
					}
				}
				row.add_child(cell);
			}
			body.add_child(row);
		}
		body
	}

	/// Footer section; present when footer text is set or paging calls for it
	fn build_footer<T: Entity>(
		&self,
		config: &TableConfig<T>,
		entity_count: usize,
		links: &LinkContext<'_>,
	) -> Option<TableNode> {
		let last_page = self.last_page(&config.paging, entity_count);
		let has_text = !config.footer.text.is_empty();
		if !has_text && !(config.has_paging() && (last_page > 1 || config.paging.page_info)) {
			return None;
		}

		let mut cell = TableNode::new("td");
		cell.set_attr("colspan", config.columns.len().max(1).to_string());
		for class in &config.footer.css_classes {
			cell.add_class(class.clone());
		}
		if let Some(class) = config.footer.state.css_class() {
			cell.add_class(class);
		}

		if config.has_paging() && config.paging.page_info {
			cell.add_child(self.page_info(last_page));
		}
		if config.has_paging() && last_page > 1 {
			if config.paging.direct_page_access {
				cell.add_child(self.page_access(links, last_page));
			}
			let page = self.state.page;
			let paging = &config.paging;
			cell.add_child(self.nav_button(links, paging, "NavFirst", &paging.first_css_class, 1, page <= 1));
			cell.add_child(self.nav_button(
				links,
				paging,
				"NavPrevious",
				&paging.previous_css_class,
				page.saturating_sub(1).max(1),
				page <= 1,
			));
			cell.add_child(self.nav_button(
				links,
				paging,
				"NavNext",
				&paging.next_css_class,
				(page + 1).min(last_page),
				page >= last_page,
			));
			cell.add_child(self.nav_button(
				links,
				paging,
				"NavLast",
				&paging.last_css_class,
				last_page,
				page >= last_page,
			));
		}
		if has_text {
			let mut text = TableNode::new("span");
			text.add_class("FooterText");
			text.set_text(config.footer.text.clone());
			let mut container = TableNode::with_child("div", text);
			container.add_class("FooterTextContainer");
			cell.add_child(container);
		}

		Some(TableNode::with_child(
			"tfoot",
			TableNode::with_child("tr", cell),
		))
	}

	/// Pagination math from the effective page size, never below one page
	fn last_page(&self, paging: &PagingConfig, entity_count: usize) -> usize {
		let size = if self.state.page_size > 0 {
			self.state.page_size
		} else {
			paging.page_size
		};
		if size == 0 {
			1
		} else {
			entity_count.div_ceil(size).max(1)
		}
	}

	fn page_info(&self, last_page: usize) -> TableNode {
		let mut info = TableNode::new("span");
		info.set_text(format!("{}/{}", self.state.page, last_page));
		let mut container = TableNode::with_child("div", info);
		container.add_class("pull-right");
		container.add_class("NavInfoContainer");
		container
	}

	/// Page selector plus the hidden trigger link consuming its value
	fn page_access(&self, links: &LinkContext<'_>, last_page: usize) -> TableNode {
		let selector_id = Uuid::new_v4().to_string();

		let mut select = TableNode::new("select");
		select.set_attr("data-pageselector-id", format!("#{selector_id}"));
		for page in 1..=last_page {
			let mut option = TableNode::new("option");
			option.set_text(page.to_string());
			option.set_attr("value", links.page_url(page));
			if page == self.state.page {
				option.set_attr("selected", "");
			}
			select.add_child(option);
		}

		let mut trigger = TableNode::new("a");
		trigger.set_attr("id", selector_id);
		links.apply_ajax(&mut trigger, "");

		let mut container = TableNode::new("div");
		container.add_class("pull-right");
		container.add_class("NavAccessContainer");
		container.add_child(select);
		container.add_child(trigger);
		container
	}

	fn nav_button(
		&self,
		links: &LinkContext<'_>,
		paging: &PagingConfig,
		marker: &str,
		icon_class: &str,
		target_page: usize,
		disabled: bool,
	) -> TableNode {
		let mut button = TableNode::new("a");
		button.add_class("btn");
		button.add_class("btn-default");
		button.add_class(marker);
		if disabled {
			button.set_attr("disabled", "");
		}
		links.apply_ajax(&mut button, &links.page_url(target_page));
		if !paging.icon_lib.is_empty() {
			let mut icon = TableNode::new("span");
			icon.add_class(paging.icon_lib.clone());
			if !icon_class.is_empty() {
				icon.add_class(icon_class);
			}
			button.add_child(icon);
		}

		let mut container = TableNode::with_child("div", button);
		container.add_class("pull-right");
		container.add_class("NavBtnContainer");
		container
	}
}

/// Shared pieces of every generated link for one render
struct LinkContext<'a> {
	update: &'a UpdateConfig,
	page_size: usize,
	state: &'a TableState,
	container_id: &'a str,
}

impl LinkContext<'_> {
	/// Query parameters common to every link, in their fixed order
	fn base_params(&self, include_filters: bool) -> Vec<String> {
		let mut params = Vec::new();
		if self.page_size > 0 {
			params.push(format!("pageSize={}", self.page_size));
		}
		params.push(format!("containerId={}", self.container_id));
		if include_filters {
			for (property, value) in &self.state.filters {
				params.push(format!("filter[]={property}"));
				params.push(format!("filter[]={value}"));
			}
		}
		for (name, value) in &self.update.custom_query_params {
			params.push(format!("{name}={value}"));
		}
		params
	}

	fn url_with(&self, params: &[String]) -> String {
		format!("{}?{}", self.update.url, params.join("&"))
	}

	/// Link switching the sort to `property` in the given direction
	fn sort_url(&self, property: &str, ascending: bool) -> String {
		let mut params = self.base_params(true);
		params.push(format!("page={}", self.state.page));
		params.push(format!("asc={}", bool_literal(ascending)));
		params.push(format!("sort={property}"));
		self.url_with(&params)
	}

	/// Link jumping to `page` while preserving the current sort
	fn page_url(&self, page: usize) -> String {
		let mut params = self.base_params(true);
		self.push_current_sort(&mut params);
		params.push(format!("page={page}"));
		self.url_with(&params)
	}

	/// Reusable URL pattern for client-side filter substitution
	///
	/// Carries everything but the `filter[]` pairs; the client appends the
	/// live input values itself.
	fn template_url(&self) -> String {
		let mut params = self.base_params(false);
		self.push_current_sort(&mut params);
		params.push(format!("page={}", self.state.page));
		self.url_with(&params)
	}

	fn push_current_sort(&self, params: &mut Vec<String>) {
		params.push(format!(
			"sort={}",
			self.state.sort_property.as_deref().unwrap_or("")
		));
		params.push(format!("asc={}", bool_literal(self.state.ascending)));
	}

	/// Marks a node for asynchronous replacement of the container
	fn apply_ajax(&self, node: &mut TableNode, url: &str) {
		node.set_attr("data-ajax", "true");
		node.set_attr("data-ajax-mode", "replace");
		node.set_attr("data-ajax-update", format!("#{}", self.container_id));
		if !self.update.busy_indicator_id.is_empty() {
			node.set_attr("data-ajax-loading", format!("#{}", self.update.busy_indicator_id));
		}
		if !self.update.start.is_empty() {
			node.set_attr("data-ajax-begin", self.update.start.clone());
		}
		if !self.update.success.is_empty() {
			node.set_attr("data-ajax-success", self.update.success.clone());
		}
		if !self.update.error.is_empty() {
			node.set_attr("data-ajax-failure", self.update.error.clone());
		}
		if !self.update.complete.is_empty() {
			node.set_attr("data-ajax-complete", self.update.complete.clone());
		}
		node.set_attr("data-ajax-url", url);
	}

	/// Hidden link the client script drives to apply filter changes
	fn filter_link(&self) -> TableNode {
		let mut link = TableNode::new("a");
		link.set_attr("id", "FilterLink");
		self.apply_ajax(&mut link, "");
		link
	}

	/// Hidden input carrying the filter URL template
	fn filter_template(&self) -> TableNode {
		let mut template = TableNode::new("input");
		template.set_attr("id", "FilterLinkTemplate");
		template.set_attr("type", "hidden");
		template.set_attr("value", self.template_url());
		template
	}
}
