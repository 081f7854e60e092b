//! Terminal formatting for `View` snapshots.
//!
//! The core hands over a display description; this module only lays it
//! out. Labels arrive already escaped, so they can be printed as-is.

use todoui_core::View;

/// Format a full view snapshot as terminal text.
pub fn format_view(view: &View) -> String {
    let mut out = String::new();

    out.push_str("Users:\n");
    for option in &view.user_options {
        out.push_str(&format!("  [{}] {}\n", option.value, option.label));
    }

    out.push_str(&format!("Todos ({} total, {} done):\n", view.total, view.done));
    if let Some(notice) = view.empty_notice {
        out.push_str(&format!("  -- {notice} --\n"));
    }
    for item in &view.items {
        let mark = if item.checked { 'x' } else { ' ' };
        out.push_str(&format!(
            "  [{mark}] #{} {} · by {}  (rm {})\n",
            item.id, item.title, item.owner, item.id
        ));
    }

    if !view.status.is_empty() {
        out.push_str(&format!("status: {}\n", view.status));
    }
    if !view.hint.is_empty() {
        out.push_str(&format!("hint:   {}\n", view.hint));
    }

    out
}

/// The intrusive failure surface: printed prominently, in addition to the
/// status line the controller already updated.
pub fn format_alert(message: &str) -> String {
    format!("!! {message}\n")
}
