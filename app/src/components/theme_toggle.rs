use icondata::{BsMoon, BsSun};
use leptos::prelude::*;

use crate::{
    components::icons::glyph,
    theme::{Theme, use_theme},
};

/// Button switching between light and dark mode. Shows the sun while dark
/// mode is active and the moon otherwise.
pub fn component() -> impl IntoView {
    let theme = use_theme();
    let resolved = theme.resolved();

    view! {
        <button
            type="button"
            aria-label="Toggle color theme"
            class="inline-flex items-center justify-center rounded-md p-1 text-gray-600 hover:text-gray-900 dark:text-gray-300 dark:hover:text-white"
            on:click=move |_| theme.toggle()
        >
            {move || match resolved.get() {
                Some(Theme::Dark) => glyph(BsSun, "h-5 w-5").into_any(),
                Some(Theme::Light) | None => glyph(BsMoon, "h-5 w-5").into_any(),
            }}
        </button>
    }
}
