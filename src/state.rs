//! Per-request table state parsed from query parameters
//!
//! Every sort, page or filter interaction round-trips through the query
//! string: the client script requests the update URL with the parameters a
//! generated link carries, and the server parses them back into a
//! [`TableState`] that drives both the data pipeline and the next render.

use indexmap::IndexMap;
use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Transient UI state for a single table request
///
/// Parsed once per request and treated as immutable afterwards. Absent or
/// malformed parameters fall back to the documented defaults; parsing never
/// fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
	/// Property the table is sorted by, if any
	pub sort_property: Option<String>,
	/// Sort direction; only the literal query value `True` selects ascending
	pub ascending: bool,
	/// Current page, 1-based
	pub page: usize,
	/// Requested page size; 0 means no paging requested
	pub page_size: usize,
	/// Property whose filter input had focus when the update was triggered
	pub current_filter: Option<String>,
	/// Id of the container element this render replaces, echoed by the client
	pub container_id: Option<String>,
	/// Active filter values keyed by property, in submission order
	pub filters: IndexMap<String, String>,
}

impl Default for TableState {
	fn default() -> Self {
		Self {
			sort_property: None,
			ascending: false,
			page: 1,
			page_size: 0,
			current_filter: None,
			container_id: None,
			filters: IndexMap::new(),
		}
	}
}

impl TableState {
	/// Parses table state from decoded query parameter pairs
	///
	/// Pairs are consumed in encounter order. Repeated `filter[]` values are
	/// interpreted pairwise as property name followed by filter value; a
	/// dangling unpaired name is dropped.
	///
	/// # Examples
	///
	/// ```
	/// use bootstrap_table::TableState;
	///
	/// let state = TableState::parse([
	///     ("sort", "Name"),
	///     ("asc", "True"),
	///     ("page", "2"),
	///     ("filter[]", "Name"),
	///     ("filter[]", "Al"),
	/// ]);
	///
	/// assert_eq!(state.sort_property.as_deref(), Some("Name"));
	/// assert!(state.ascending);
	/// assert_eq!(state.page, 2);
	/// assert_eq!(state.filters.get("Name").map(String::as_str), Some("Al"));
	/// ```
	pub fn parse<'a, I>(query: I) -> Self
	where
		I: IntoIterator<Item = (&'a str, &'a str)>,
	{
		let mut state = Self::default();
		let mut filter_values: Vec<&str> = Vec::new();

		for (key, value) in query {
			match key {
				"sort" if !value.is_empty() => {
					state.sort_property = Some(value.to_string());
				}
				"asc" => state.ascending = value == "True",
				"page" => {
					if let Ok(page) = value.parse::<usize>() {
						state.page = page.max(1);
					}
				}
				"pageSize" => {
					if let Ok(size) = value.parse::<usize>() {
						state.page_size = size;
					}
				}
				"currentFilter" if !value.is_empty() => {
					state.current_filter = Some(value.to_string());
				}
				"containerId" if !value.is_empty() => {
					state.container_id = Some(value.to_string());
				}
				"filter[]" => filter_values.push(value),
				_ => {}
			}
		}

		if filter_values.len() % 2 != 0 {
			debug!(
				count = filter_values.len(),
				"dropping unpaired trailing filter[] value"
			);
			filter_values.pop();
		}
		for pair in filter_values.chunks_exact(2) {
			state.filters.insert(pair[0].to_string(), pair[1].to_string());
		}

		state
	}

	/// Parses table state from a raw query string
	///
	/// Splits on `&` and the first `=` of each pair, percent-decodes keys and
	/// values, then delegates to [`TableState::parse`].
	pub fn from_query_string(query: &str) -> Self {
		let pairs: Vec<(String, String)> = query
			.trim_start_matches('?')
			.split('&')
			.filter(|pair| !pair.is_empty())
			.map(|pair| {
				let mut parts = pair.splitn(2, '=');
				let key = parts.next().unwrap_or("");
				let value = parts.next().unwrap_or("");
				(
					percent_decode_str(key).decode_utf8_lossy().into_owned(),
					percent_decode_str(value).decode_utf8_lossy().into_owned(),
				)
			})
			.collect();

		Self::parse(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
	}
}
