//! The inline brand mark shown at the start of the header and in the mobile
//! overlay.

use leptos::prelude::*;

use crate::theme::Theme;

pub const BRAND_MARK_PATH: &str = "M23.5 6.5C17.5 6.5 13.75 9.5 12.25 15.5C14.5 12.5 17.125 11.375 20.125 12.125C21.8367 12.5529 23.0601 13.7947 24.4142 15.1692C26.6202 17.4084 29.1734 20 34.75 20C40.75 20 44.5 17 46 11C43.75 14 41.125 15.125 38.125 14.375C36.4133 13.9471 35.1899 12.7053 33.8357 11.3308C31.6297 9.09158 29.0766 6.5 23.5 6.5ZM12.25 20C6.25 20 2.5 23 1 29C3.25 26 5.875 24.875 8.875 25.625C10.5867 26.0529 11.8101 27.2947 13.1642 28.6693C15.3702 30.9084 17.9234 33.5 23.5 33.5C29.5 33.5 33.25 30.5 34.75 24.5C32.5 27.5 29.875 28.625 26.875 27.875C25.1633 27.4471 23.9399 26.2053 22.5858 24.8307C20.3798 22.5916 17.8266 20 12.25 20Z";

// Placeholders filled in by asset post-processing, emitted verbatim.
pub const GRADIENT_ID_TOKEN: &str = "%%GRADIENT_ID%%";
pub const GRADIENT_TO_TOKEN: &str = "%%GRADIENT_TO%%";
pub const GRADIENT_FROM_TOKEN: &str = "%%GRADIENT_FROM%%";

/// Fill color of the mark: white on dark, black otherwise.
pub const fn fill_for(theme: Option<Theme>) -> &'static str {
    match theme {
        Some(Theme::Dark) => "#fff",
        Some(Theme::Light) | None => "#000",
    }
}

/// Renders the mark. Callers must not render this before the theme has been
/// resolved on the client.
pub fn component(theme: Signal<Option<Theme>>) -> impl IntoView {
    view! {
        <svg class="h-8" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 47 40" fill="none">
            <path fill=move || fill_for(theme.get()) d=BRAND_MARK_PATH />
            <defs>
                <linearGradient
                    id=GRADIENT_ID_TOKEN
                    x1="33.999"
                    x2="1"
                    y1="16.181"
                    y2="16.181"
                    gradientUnits="userSpaceOnUse"
                >
                    <stop stop-color=GRADIENT_TO_TOKEN />
                    <stop offset="1" stop-color=GRADIENT_FROM_TOKEN />
                </linearGradient>
            </defs>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_follows_resolved_theme() {
        assert_eq!(fill_for(Some(Theme::Dark)), "#fff");
        assert_eq!(fill_for(Some(Theme::Light)), "#000");
        assert_eq!(fill_for(None), "#000");
    }

    #[test]
    fn renders_gradient_placeholders_verbatim() {
        let owner = Owner::new();
        let html = owner.with(|| component(Signal::stored(Some(Theme::Dark))).to_html());

        assert!(html.contains(r##"fill="#fff""##));
        assert!(html.contains(GRADIENT_ID_TOKEN));
        assert!(html.contains(GRADIENT_TO_TOKEN));
        assert!(html.contains(GRADIENT_FROM_TOKEN));
    }
}
