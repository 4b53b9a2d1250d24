use web_sys as web;

const TUTORIAL_ID: &str = "tutorial";

/// Hide the tutorial overlay. `instant` removes it outright (used when a
/// shared link opens already locked); otherwise the `hidden` class lets CSS
/// fade it out.
#[inline]
pub fn hide_tutorial(document: &web::Document, instant: bool) {
    if let Some(el) = document.get_element_by_id(TUTORIAL_ID) {
        if instant {
            el.remove();
        } else {
            _ = el.class_list().add_1("hidden");
        }
    }
}
