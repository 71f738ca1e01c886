// Application shell, routes and the pieces the header is built from
use crate::components::{error_template, header, icons};
use chrono::{Datelike as _, Utc};
use leptos::{
    html::{body, div, footer, head, html, link, meta, p},
    prelude::*,
};
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod components;
pub mod config;
mod pages;
pub mod theme;

use config::{ABOUT, CONTACT, PROJECTS, WORKS, navigation};

const BODY_CLASS: &str = "bg-white text-gray-900 dark:bg-black dark:text-white";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    document(options, self::component)
}

/// Full HTML document around `content`. Only the body is hydrated, so the
/// head is plain markup.
fn document(options: LeptosOptions, content: impl IntoView + 'static) -> impl IntoView {
    let site = &navigation().site;

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            meta().name("description").content(site.description),
            link().id("leptos").rel("stylesheet").href("/pkg/portfolio.css"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
        )),
        body().class(BODY_CLASS).child(content),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    theme::provide_theme_context();

    view! {
        <Title text=navigation().site.title/>
        <Router>
            <div class="flex flex-col min-h-screen font-sans antialiased">
                {header::component()}
                <main class="container flex flex-col flex-1 gap-8 px-6 pt-16 pb-14 mx-auto max-w-4xl lg:px-8">
                    <FlatRoutes fallback=error_template::not_found>
                        <Route path=StaticSegment("") view=pages::home/>
                        <Route path=StaticSegment("about") view=|| pages::section(&ABOUT)/>
                        <Route path=StaticSegment("works") view=|| pages::section(&WORKS)/>
                        <Route path=StaticSegment("projects") view=|| pages::section(&PROJECTS)/>
                        <Route path=StaticSegment("contact") view=|| pages::section(&CONTACT)/>
                    </FlatRoutes>
                </main>
                {footer_component()}
            </div>
        </Router>
    }
}

fn footer_component() -> impl IntoView {
    let config = navigation();

    footer()
        .class("py-6 text-center text-sm text-gray-500 dark:text-gray-400")
        .child(
            div().class("flex flex-col gap-1 justify-center items-center").child((
                icons::component(config),
                p().child(format!("\u{a9} {} {}", Utc::now().year(), config.site.title)),
            )),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_head_and_body() {
        let owner = Owner::new();
        let options = LeptosOptions::builder().output_name("portfolio").build();
        let html = owner.with(|| document(options, || "page content").to_html());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(&format!(
            r#"<meta name="description" content="{}">"#,
            navigation().site.description
        )));
        assert!(html.contains(r#"rel="stylesheet" href="/pkg/portfolio.css""#));
        assert!(html.contains(r#"<body class="bg-white text-gray-900 dark:bg-black dark:text-white">"#));
        assert!(html.contains("page content"));
    }

    #[test]
    fn test_footer_credits_site_owner() {
        let owner = Owner::new();
        let html = owner.with(|| footer_component().to_html());
        assert!(html.contains(navigation().site.title));
        assert!(html.contains(&Utc::now().year().to_string()));
    }
}
