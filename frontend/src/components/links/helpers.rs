//! Cell text for the links table.

use links_common::Link;

pub fn id_cell(link: &Link) -> &str {
    if link.id.is_empty() { "N/A" } else { &link.id }
}

/// Presence warnings shown in the last column.
pub fn warning_cell(link: &Link) -> String {
    let missing = link.missing_fields();
    let mut parts = Vec::new();
    if missing.url {
        parts.push("🚫 URL");
    }
    if missing.id {
        parts.push("🚫 ID");
    }
    parts.join(" ")
}

pub fn submit_label(editing: bool) -> &'static str {
    if editing { "Update" } else { "Submit" }
}

/// Opens `url` in a new tab.
pub fn open_in_new_tab(url: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                log::error!("cannot open {}: {:?}", url, e);
            }
        }
        None => log::error!("no window to open {}", url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_for_incomplete_record() {
        let link = Link {
            title: "draft".to_string(),
            ..Default::default()
        };
        assert_eq!(id_cell(&link), "N/A");
        assert_eq!(warning_cell(&link), "🚫 URL 🚫 ID");
    }

    #[test]
    fn test_cells_for_complete_record() {
        let link = Link {
            id: "7".to_string(),
            url: "https://example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(id_cell(&link), "7");
        assert_eq!(warning_cell(&link), "");
        assert_eq!(submit_label(true), "Update");
        assert_eq!(submit_label(false), "Submit");
    }
}
