use web_sys::window;

/// Brings the section with `id` into view; smoothness comes from the
/// stylesheet's `scroll-behavior`.
pub fn scroll_to_section(id: &str) {
    match window().and_then(|w| w.document()).and_then(|doc| doc.get_element_by_id(id)) {
        Some(element) => element.scroll_into_view_with_bool(true),
        None => log::warn!("No section with id '{}'", id),
    }
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
