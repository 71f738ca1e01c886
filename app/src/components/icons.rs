use icondata::{BsFacebook, BsGithub, BsLinkedin, BsTwitter, Icon};
use leptos::{
    html::{a, div},
    prelude::*,
    svg::svg,
};

use crate::config::{NavigationConfig, SocialPlatform};

const SOCIAL_LINK_CLASS: &str = "text-gray-600 transition-colors duration-300 hover:text-gray-900 dark:text-gray-300 dark:hover:text-white";

/// Inline SVG for an icon, colored by the surrounding text color.
pub fn glyph(icon: Icon, class: &'static str) -> impl IntoView {
    svg()
        .attr("viewBox", icon.view_box)
        .attr("fill", "currentColor")
        .attr("aria-hidden", "true")
        .class(class)
        .inner_html(icon.data)
}

pub fn platform_icon(platform: SocialPlatform) -> Icon {
    match platform {
        SocialPlatform::Facebook => BsFacebook,
        SocialPlatform::LinkedIn => BsLinkedin,
        SocialPlatform::GitHub => BsGithub,
        SocialPlatform::Twitter => BsTwitter,
    }
}

/// Row of outbound social profile links, in configuration order.
pub fn component(config: &'static NavigationConfig) -> impl IntoView {
    div().class("flex flex-row gap-4 items-center justify-center h-10").child(
        config
            .social_links
            .iter()
            .map(|link| {
                a().href(link.url)
                    .rel("noopener noreferrer")
                    .target("_blank")
                    .aria_label(link.platform.label())
                    .class(SOCIAL_LINK_CLASS)
                    .child(glyph(platform_icon(link.platform), "size-5"))
            })
            .collect_view(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::navigation;

    #[test]
    fn renders_every_configured_profile() {
        let owner = Owner::new();
        let html = owner.with(|| component(navigation()).to_html());

        for link in navigation().social_links {
            assert!(html.contains(link.url), "missing {}", link.url);
            assert!(html.contains(link.platform.label()));
        }
    }
}
