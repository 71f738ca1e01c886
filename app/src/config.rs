//! Static site configuration: identity, social links and navigation entries.
//!
//! Everything here is fixed at compile time. [`NavigationConfig::validate`]
//! exists so the server and the tests can catch authoring mistakes (an empty
//! header, a duplicated path) before any page is rendered.

use std::collections::HashSet;

use thiserror::Error;

/// A single link in the site navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavigationEntry {
    /// Display label.
    pub name: &'static str,
    /// Absolute path, also used as the active-link match key.
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    Facebook,
    LinkedIn,
    GitHub,
    Twitter,
}

impl SocialPlatform {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::LinkedIn => "linkedin",
            Self::GitHub => "github",
            Self::Twitter => "twitter",
        }
    }

    /// Human readable label, used for `aria-label`s.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::LinkedIn => "LinkedIn",
            Self::GitHub => "GitHub",
            Self::Twitter => "Twitter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub avatar_path: &'static str,
}

/// Site identity plus the two navigation sets.
///
/// `header` is the outer set rendered by the navigation bar; `inner` is the
/// subset linked from the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationConfig {
    pub site: SiteMetadata,
    pub social_links: &'static [SocialLink],
    pub inner: &'static [NavigationEntry],
    pub header: &'static [NavigationEntry],
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("navigation header has no entries")]
    EmptyHeader,
    #[error("navigation path `{0}` is used by more than one entry")]
    DuplicateHref(&'static str),
    #[error("navigation path `{0}` is not absolute")]
    RelativeHref(&'static str),
    #[error("social platform `{0}` is listed more than once")]
    DuplicatePlatform(&'static str),
}

pub const ABOUT: NavigationEntry = NavigationEntry {
    name: "About",
    href: "/about",
};
pub const WORKS: NavigationEntry = NavigationEntry {
    name: "Works",
    href: "/works",
};
pub const PROJECTS: NavigationEntry = NavigationEntry {
    name: "Projects",
    href: "/projects",
};
pub const CONTACT: NavigationEntry = NavigationEntry {
    name: "Contact",
    href: "/contact",
};

pub const INNER_NAVIGATION: [NavigationEntry; 3] = [ABOUT, WORKS, PROJECTS];
pub const OUTER_NAVIGATION: [NavigationEntry; 4] = [ABOUT, WORKS, PROJECTS, CONTACT];

const _: () = assert!(!OUTER_NAVIGATION.is_empty());

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        platform: SocialPlatform::Facebook,
        url: "https://www.facebook.com/alamariful1727",
    },
    SocialLink {
        platform: SocialPlatform::LinkedIn,
        url: "https://www.linkedin.com/in/alamariful1727",
    },
    SocialLink {
        platform: SocialPlatform::GitHub,
        url: "https://github.com/alamariful1727",
    },
    SocialLink {
        platform: SocialPlatform::Twitter,
        url: "https://twitter.com/alamariful1727",
    },
];

static NAVIGATION: NavigationConfig = NavigationConfig {
    site: SiteMetadata {
        title: "Ariful Alam",
        description: "This is my portfolio website.",
        avatar_path: "/static/avatar.jpg",
    },
    social_links: &SOCIAL_LINKS,
    inner: &INNER_NAVIGATION,
    header: &OUTER_NAVIGATION,
};

/// The configuration the site is built with.
pub fn navigation() -> &'static NavigationConfig {
    &NAVIGATION
}

impl NavigationConfig {
    /// Checks the invariants the navigation bar relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.header.is_empty() {
            return Err(ConfigError::EmptyHeader);
        }

        for entries in [self.header, self.inner] {
            let mut seen = HashSet::new();
            for entry in entries {
                if !entry.href.starts_with('/') {
                    return Err(ConfigError::RelativeHref(entry.href));
                }
                if !seen.insert(entry.href) {
                    return Err(ConfigError::DuplicateHref(entry.href));
                }
            }
        }

        let mut platforms = HashSet::new();
        for link in self.social_links {
            if !platforms.insert(link.platform) {
                return Err(ConfigError::DuplicatePlatform(link.platform.name()));
            }
        }

        Ok(())
    }

    pub fn social_link(&self, platform: SocialPlatform) -> Option<&'static str> {
        self.social_links
            .iter()
            .find(|link| link.platform == platform)
            .map(|link| link.url)
    }

    /// Header entry whose path equals `route`, if any.
    pub fn entry_for(&self, route: &str) -> Option<&'static NavigationEntry> {
        self.header.iter().find(|entry| entry.href == route)
    }
}
