//! Page bodies for the routes behind the navigation entries.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::{
    components::icons,
    config::{NavigationEntry, navigation},
};

/// Landing page: avatar, name, short description and the inner navigation.
pub fn home() -> impl IntoView {
    let config = navigation();
    let site = &config.site;

    view! {
        <Title text=site.title/>
        <section class="flex flex-col gap-6 items-center text-center">
            <img
                src=site.avatar_path
                alt=site.title
                width="128"
                height="128"
                class="rounded-full"
            />
            <h1 class="text-4xl font-bold tracking-tight sm:text-6xl">{site.title}</h1>
            <p class="text-lg leading-8 text-gray-600 dark:text-gray-300">{site.description}</p>
            <div class="flex flex-row gap-x-6 justify-center items-center">
                {config
                    .inner
                    .iter()
                    .map(|entry| {
                        view! {
                            <a
                                href=entry.href
                                class="text-sm font-semibold leading-6 text-gray-900 hover:underline dark:text-white"
                            >
                                {entry.name}
                                " \u{2192}"
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            {icons::component(config)}
        </section>
    }
}

/// Page for a single navigation entry.
pub fn section(entry: &'static NavigationEntry) -> impl IntoView {
    let site = &navigation().site;

    view! {
        <Title text=format!("{} | {}", entry.name, site.title)/>
        <section class="mx-auto max-w-3xl">
            <h1 class="mb-6 text-3xl font-bold tracking-tight sm:text-4xl">{entry.name}</h1>
            <p class="text-gray-600 dark:text-gray-300">{site.description}</p>
        </section>
    }
}
