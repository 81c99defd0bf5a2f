//! Query parameter parsing tests

use bootstrap_table::TableState;
use rstest::*;

#[rstest]
#[case("", None)]
#[case("sort=Value", Some("Value"))]
fn test_sort_property(#[case] query: &str, #[case] expected: Option<&str>) {
	let state = TableState::from_query_string(query);
	assert_eq!(state.sort_property.as_deref(), expected);
}

#[rstest]
#[case("", false)]
#[case("asc=True", true)]
#[case("asc=true", false)]
#[case("asc=False", false)]
#[case("asc=Value", false)]
fn test_sort_direction(#[case] query: &str, #[case] expected: bool) {
	assert_eq!(TableState::from_query_string(query).ascending, expected);
}

#[rstest]
#[case("", 1)]
#[case("page=5", 5)]
#[case("page=abc", 1)]
fn test_page(#[case] query: &str, #[case] expected: usize) {
	assert_eq!(TableState::from_query_string(query).page, expected);
}

#[rstest]
#[case("", 0)]
#[case("pageSize=5", 5)]
#[case("pageSize=-1", 0)]
fn test_page_size(#[case] query: &str, #[case] expected: usize) {
	assert_eq!(TableState::from_query_string(query).page_size, expected);
}

#[rstest]
#[case("", None)]
#[case("currentFilter=Property", Some("Property"))]
fn test_current_filter(#[case] query: &str, #[case] expected: Option<&str>) {
	let state = TableState::from_query_string(query);
	assert_eq!(state.current_filter.as_deref(), expected);
}

#[rstest]
#[case("", None)]
#[case("containerId=Id", Some("Id"))]
fn test_container_id(#[case] query: &str, #[case] expected: Option<&str>) {
	let state = TableState::from_query_string(query);
	assert_eq!(state.container_id.as_deref(), expected);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
fn test_filter_pairs(#[case] count: usize) {
	let query: Vec<String> = (1..=count)
		.flat_map(|i| [format!("filter[]=Prop{i}"), format!("filter[]=Value{i}")])
		.collect();
	let state = TableState::from_query_string(&query.join("&"));

	assert_eq!(state.filters.len(), count);
	for i in 1..=count {
		assert_eq!(
			state.filters.get(&format!("Prop{i}")).map(String::as_str),
			Some(format!("Value{i}").as_str())
		);
	}
}

#[rstest]
fn test_filter_pairs_keep_encounter_order() {
	let state =
		TableState::from_query_string("filter[]=B&filter[]=1&filter[]=A&filter[]=2");
	let keys: Vec<&str> = state.filters.keys().map(String::as_str).collect();
	assert_eq!(keys, ["B", "A"]);
}

#[rstest]
fn test_dangling_filter_value_is_dropped() {
	let state = TableState::from_query_string("filter[]=Prop&filter[]=Value&filter[]=Extra");
	assert_eq!(state.filters.len(), 1);
	assert_eq!(state.filters.get("Prop").map(String::as_str), Some("Value"));
}

#[rstest]
fn test_full_query_round_trip() {
	let state = TableState::from_query_string(
		"pageSize=5&containerId=Abc&filter[]=Name&filter[]=Al&page=2&asc=True&sort=Name&currentFilter=Name",
	);

	assert_eq!(state.page, 2);
	assert_eq!(state.page_size, 5);
	assert!(state.ascending);
	assert_eq!(state.sort_property.as_deref(), Some("Name"));
	assert_eq!(state.current_filter.as_deref(), Some("Name"));
	assert_eq!(state.container_id.as_deref(), Some("Abc"));
	assert_eq!(state.filters.get("Name").map(String::as_str), Some("Al"));
}
