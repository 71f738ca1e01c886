//! The persistent site header: brand mark, desktop navigation and the mobile
//! overlay menu.
//!
//! [`component`] wires the header to the router location and the theme
//! context. [`render`] takes those inputs explicitly so the header can be
//! rendered in isolation.

use icondata::{BsList, BsXLg};
use leptos::{ev, prelude::*};
use leptos_router::{components::A, hooks::use_location};

use crate::{
    components::{brand, icons::glyph, theme_toggle},
    config::{NavigationConfig, NavigationEntry, navigation},
    theme::{Theme, use_theme},
};

/// Classes shared by every desktop navigation link.
pub const NAV_ITEM_BASE_CLASS: &str = "border-b-2 pb-1 transition-all";
pub const NAV_ITEM_ACTIVE_CLASS: &str =
    "border-gray-600 font-semibold text-gray-700 dark:border-white dark:text-white";
pub const NAV_ITEM_INACTIVE_CLASS: &str = "border-transparent text-gray-600 hover:border-b hover:border-gray-400 hover:text-gray-900 dark:text-gray-300 dark:hover:text-white";

const MENU_BUTTON_CLASS: &str = "-m-2.5 inline-flex items-center justify-center rounded-md p-2.5 text-gray-600 hover:text-gray-900 dark:text-gray-300 dark:hover:text-white";
const OVERLAY_LINK_CLASS: &str = "-mx-3 block rounded-lg py-2 px-3 text-center text-base font-semibold leading-7 text-gray-600 transition hover:bg-gray-400/10 hover:text-gray-900 dark:text-gray-300 dark:hover:bg-gray-400/40 dark:hover:text-white";

/// UI-local header state. Never persisted; a fresh header starts closed and
/// unmounted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavBarState {
    mobile_menu_open: bool,
    mounted: bool,
}

impl NavBarState {
    pub const fn new() -> Self {
        Self {
            mobile_menu_open: false,
            mounted: false,
        }
    }

    pub const fn is_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Whether the first client render has completed.
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn open_menu(&mut self) {
        self.mobile_menu_open = true;
    }

    pub fn close_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// One-way: once mounted, a header stays mounted.
    pub fn mark_mounted(&mut self) {
        self.mounted = true;
    }
}

/// Exact comparison; `/works/rust` does not activate `/works`.
pub fn is_active(current_route: &str, href: &str) -> bool {
    current_route == href
}

pub fn nav_item_class(current_route: &str, href: &str) -> String {
    let state = if is_active(current_route, href) {
        NAV_ITEM_ACTIVE_CLASS
    } else {
        NAV_ITEM_INACTIVE_CLASS
    };
    format!("{state} {NAV_ITEM_BASE_CLASS}")
}

/// Entries the desktop navigation shows for `state`: none before mount.
pub fn visible_entries<'a>(
    state: &NavBarState,
    entries: &'a [NavigationEntry],
) -> &'a [NavigationEntry] {
    if state.is_mounted() { entries } else { &[] }
}

/// Joins router location parts into the route string entries are matched
/// against. Query and fragment keep their `?`/`#` prefixes.
pub fn current_route(pathname: &str, search: &str, hash: &str) -> String {
    let mut route = String::from(pathname);
    if !search.is_empty() {
        if !search.starts_with('?') {
            route.push('?');
        }
        route.push_str(search);
    }
    if !hash.is_empty() {
        if !hash.starts_with('#') {
            route.push('#');
        }
        route.push_str(hash);
    }
    route
}

/// Click handler of the "open menu" control.
pub fn show_overlay(state: RwSignal<NavBarState>) {
    state.update(NavBarState::open_menu);
}

/// Handler shared by every overlay control that leaves the menu: the close
/// button, the brand link, each entry link and the Escape key.
pub fn dismiss_overlay(state: RwSignal<NavBarState>) {
    state.update(NavBarState::close_menu);
}

/// Header bound to the router location and the theme context.
pub fn component() -> impl IntoView {
    let location = use_location();
    let route = Signal::derive(move || {
        current_route(
            &location.pathname.get(),
            &location.search.get(),
            &location.hash.get(),
        )
    });
    let theme = use_theme().resolved();
    let state = RwSignal::new(NavBarState::new());

    // Effects only run in the browser, after hydration.
    Effect::new(move || state.update(NavBarState::mark_mounted));
    Effect::new(move || {
        let handle = window_event_listener(ev::keydown, move |event| {
            if event.key() == "Escape" {
                dismiss_overlay(state);
            }
        });
        on_cleanup(move || handle.remove());
    });

    render(navigation(), state, route, theme)
}

/// Renders the header for explicit inputs.
pub fn render(
    config: &'static NavigationConfig,
    state: RwSignal<NavBarState>,
    route: Signal<String>,
    theme: Signal<Option<Theme>>,
) -> impl IntoView {
    let mounted = move || state.get().is_mounted();

    view! {
        <header class="px-6 pt-6 lg:px-8">
            <nav class="flex h-9 items-center justify-between" aria-label="Global">
                <div class="flex lg:min-w-0 lg:flex-1">
                    <A href="/" attr:class="-m-1.5 p-1.5">
                        <span class="sr-only">{config.site.title}</span>
                        <Show when=mounted>{brand::component(theme)}</Show>
                    </A>
                </div>
                <div class="flex lg:hidden">
                    <button
                        type="button"
                        class=MENU_BUTTON_CLASS
                        on:click=move |_| show_overlay(state)
                    >
                        <span class="sr-only">"Open main menu"</span>
                        {glyph(BsList, "h-6 w-6")}
                    </button>
                </div>
                <div class="hidden lg:flex lg:min-w-0 lg:flex-1 lg:justify-end lg:gap-x-12">
                    {move || {
                        visible_entries(&state.get(), config.header)
                            .iter()
                            .map(|entry| nav_item(entry, route))
                            .collect_view()
                    }}
                    <Show when=mounted>{theme_toggle::component()}</Show>
                </div>
            </nav>
            <Show when=move || state.get().is_menu_open()>
                {mobile_overlay(config, state, theme)}
            </Show>
        </header>
    }
}

fn nav_item(entry: &'static NavigationEntry, route: Signal<String>) -> impl IntoView {
    view! {
        <A
            href=entry.href
            exact=true
            attr:class=move || route.with(|route| nav_item_class(route, entry.href))
        >
            {entry.name}
        </A>
    }
}

fn mobile_overlay(
    config: &'static NavigationConfig,
    state: RwSignal<NavBarState>,
    theme: Signal<Option<Theme>>,
) -> impl IntoView {
    let close_menu = move |_: ev::MouseEvent| dismiss_overlay(state);

    view! {
        <div
            class="fixed inset-0 z-10 overflow-y-auto bg-white p-6 dark:bg-black lg:hidden"
            role="dialog"
            aria-modal="true"
        >
            <div class="flex h-9 items-center justify-between">
                <div class="flex">
                    <A href="/" attr:class="-m-1.5 p-1.5" on:click=close_menu>
                        <span class="sr-only">{config.site.title}</span>
                        {brand::component(theme)}
                    </A>
                </div>
                <div class="flex">
                    <button type="button" class=MENU_BUTTON_CLASS on:click=close_menu>
                        <span class="sr-only">"Close menu"</span>
                        {glyph(BsXLg, "h-6 w-6")}
                    </button>
                </div>
            </div>
            <div class="mt-6 flow-root">
                <div class="-my-6 divide-y divide-gray-500/10 dark:divide-gray-500/50">
                    <div class="space-y-2 py-6">
                        {config
                            .header
                            .iter()
                            .map(|entry| {
                                view! {
                                    <A href=entry.href attr:class=OVERLAY_LINK_CLASS on:click=close_menu>
                                        {entry.name}
                                    </A>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="py-6 text-center">{theme_toggle::component()}</div>
                </div>
            </div>
        </div>
    }
}
