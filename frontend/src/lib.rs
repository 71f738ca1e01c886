//! WASM entry point: hydrates the server-rendered portfolio in the browser.
//!
//! Hydration is what flips the navigation header into its mounted state, so
//! theme-dependent output only appears once this has run.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Installs browser logging and the panic hook, then hydrates the body with
/// [`app::component`].
pub fn hydrate() {
    use app::component;
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::debug!("hydrating portfolio");
    leptos::mount::hydrate_body(component);
}
