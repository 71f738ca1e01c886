//! Color theme resolution.
//!
//! The server cannot know the visitor's color scheme, so the resolved theme
//! starts as `None` and is only filled in by a client-side effect after
//! hydration. Views that depend on it must wait for that (see the navigation
//! header's `mounted` gate).

use core::fmt;

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reactive handle to the resolved theme, shared through context.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    resolved: RwSignal<Option<Theme>>,
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeContext {
    pub fn new() -> Self {
        Self {
            resolved: RwSignal::new(None),
        }
    }

    /// The resolved theme, `None` until the client has resolved it.
    pub fn resolved(self) -> Signal<Option<Theme>> {
        self.resolved.into()
    }

    pub fn resolve(self, theme: Theme) {
        self.resolved.set(Some(theme));
    }

    /// Switches to the opposite theme. An unresolved theme switches to dark.
    pub fn toggle(self) {
        self.resolved
            .update(|theme| *theme = Some(theme.map_or(Theme::Dark, Theme::toggled)));
    }
}

/// Creates the theme context and the client-side effects that resolve it from
/// the system preference and mirror it onto the document root.
pub fn provide_theme_context() -> ThemeContext {
    let context = ThemeContext::new();
    provide_context(context);

    Effect::new(move || {
        if context.resolved.get_untracked().is_none() {
            context.resolve(system_theme());
        }
    });
    Effect::new(move || {
        if let Some(theme) = context.resolved.get() {
            apply_to_document(theme);
        }
    });

    context
}

/// Reads the theme context, falling back to an unresolved one when no provider
/// is mounted above the caller.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_default()
}

fn system_theme() -> Theme {
    let prefers_dark = window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches());
    Theme::from_prefers_dark(prefers_dark)
}

fn apply_to_document(theme: Theme) {
    if let Some(root) = document().document_element() {
        if let Err(err) = root
            .class_list()
            .toggle_with_force("dark", theme == Theme::Dark)
        {
            leptos::logging::warn!("Failed to apply {theme} theme: {err:?}");
        }
    }
}
