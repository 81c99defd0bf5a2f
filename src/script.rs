//! Embedded client script
//!
//! A fixed template parameterized only by the container id, emitted as raw
//! markup on the first (non-AJAX) render. The script wires the filter inputs
//! to the hidden filter link and the page selector to its trigger link; the
//! actual requests go through the unobtrusive-ajax attributes on those links.

/// Client script template; `{container}` is replaced by the container id
const CLIENT_SCRIPT: &str = r##"<script>
(function () {
    var container = document.getElementById("{container}");
    if (!container) { return; }

    function buildFilterUrl() {
        var template = container.querySelector("#FilterLinkTemplate");
        var url = template.value;
        container.querySelectorAll("input[data-filter-prop]").forEach(function (input) {
            if (input.value.length > 0) {
                url += "&filter[]=" + encodeURIComponent(input.dataset.filterProp) +
                    "&filter[]=" + encodeURIComponent(input.value);
            }
        });
        return url;
    }

    container.addEventListener("input", function (event) {
        var input = event.target;
        if (!input.dataset || !input.dataset.filterProp) { return; }
        var threshold = parseInt(input.dataset.filterThreshold, 10);
        if (input.value.length !== 0 && input.value.length < threshold) { return; }
        var link = container.querySelector("#FilterLink");
        link.setAttribute("data-ajax-url",
            buildFilterUrl() + "&currentFilter=" + encodeURIComponent(input.dataset.filterProp));
        link.click();
    });

    container.addEventListener("change", function (event) {
        var select = event.target;
        if (!select.dataset || !select.dataset.pageselectorId) { return; }
        var trigger = container.querySelector(select.dataset.pageselectorId);
        trigger.setAttribute("data-ajax-url", select.options[select.selectedIndex].value);
        trigger.click();
    });

    var focused = container.querySelector("input[data-filter-focus]");
    if (focused) {
        focused.focus();
        focused.setSelectionRange(focused.value.length, focused.value.length);
    }
})();
</script>"##;

/// Renders the client script for the given container id
pub(crate) fn client_script(container_id: &str) -> String {
	CLIENT_SCRIPT.replace("{container}", container_id)
}

#[cfg(test)]
mod tests {
	use super::client_script;

	#[test]
	fn test_script_embeds_container_id() {
		let script = client_script("abc-123");
		assert!(script.contains("getElementById(\"abc-123\")"));
		assert!(script.starts_with("<script>"));
		assert!(script.ends_with("</script>"));
	}
}
