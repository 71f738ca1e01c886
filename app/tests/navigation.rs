/// End-to-end checks of the header against the shipped site configuration,
/// rendered the way the server renders it (before hydration) and the way the
/// client renders it once mounted.
#[cfg(test)]
mod navigation_tests {
    use app::components::header::{
        NAV_ITEM_ACTIVE_CLASS, NAV_ITEM_INACTIVE_CLASS, NavBarState, nav_item_class, render,
    };
    use app::config::navigation;
    use app::theme::Theme;
    use leptos::prelude::*;
    use leptos_router::{components::Router, location::RequestUrl};

    fn render_header(state: NavBarState, route: &str, theme: Option<Theme>) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(RequestUrl::new(route));
            let state = RwSignal::new(state);
            let current = Signal::stored(route.to_owned());
            let theme = Signal::stored(theme);
            view! { <Router>{render(navigation(), state, current, theme)}</Router> }.to_html()
        })
    }

    fn mounted() -> NavBarState {
        let mut state = NavBarState::new();
        state.mark_mounted();
        state
    }

    /// Opening `<a ...>` tags linking to `href`, in document order.
    fn anchor_tags<'a>(html: &'a str, href: &str) -> Vec<(usize, &'a str)> {
        let needle = format!(r#"href="{href}""#);
        html.match_indices("<a ")
            .filter_map(|(start, _)| {
                let end = start + html[start..].find('>')?;
                let tag = &html[start..=end];
                tag.contains(&needle).then_some((start, tag))
            })
            .collect()
    }

    fn class_attr(route: &str, href: &str) -> String {
        format!(r#"class="{}""#, nav_item_class(route, href))
    }

    #[test]
    fn server_render_has_no_navigation_entries() {
        let html = render_header(NavBarState::new(), "/about", None);
        for entry in navigation().header {
            assert!(anchor_tags(&html, entry.href).is_empty(), "{}", entry.href);
        }
    }

    #[test]
    fn every_route_activates_exactly_its_own_entry() {
        for current in navigation().header {
            let html = render_header(mounted(), current.href, Some(Theme::Light));
            for entry in navigation().header {
                let tags = anchor_tags(&html, entry.href);
                assert_eq!(tags.len(), 1, "{}", entry.href);

                let (_, tag) = tags[0];
                assert!(tag.contains(&class_attr(current.href, entry.href)));

                let expected = if entry.href == current.href {
                    NAV_ITEM_ACTIVE_CLASS
                } else {
                    NAV_ITEM_INACTIVE_CLASS
                };
                assert!(tag.contains(expected), "{tag}");
            }
        }
    }

    #[test]
    fn nested_route_activates_nothing() {
        let html = render_header(mounted(), "/works/rust", Some(Theme::Dark));
        assert!(!html.contains(NAV_ITEM_ACTIVE_CLASS));
        assert_eq!(
            html.matches(NAV_ITEM_INACTIVE_CLASS).count(),
            navigation().header.len()
        );
    }

    #[test]
    fn entries_keep_configuration_order() {
        let html = render_header(mounted(), "/", None);
        let positions: Vec<usize> = navigation()
            .header
            .iter()
            .filter_map(|entry| anchor_tags(&html, entry.href).first().map(|(at, _)| *at))
            .collect();

        assert_eq!(positions.len(), navigation().header.len());
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn open_overlay_lists_the_header_and_toggle() {
        let mut state = mounted();
        state.open_menu();
        let html = render_header(state, "/", Some(Theme::Dark));

        assert!(html.contains("Close menu"));
        assert!(html.contains("Toggle color theme"));
        for entry in navigation().header {
            assert!(html.contains(&format!(">{}<", entry.name)));
        }
    }
}
