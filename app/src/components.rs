//! Reusable UI pieces: the site header and what it is built from, plus the
//! error page.

pub mod brand;
pub mod error_template;
pub mod header;
pub mod icons;
pub mod theme_toggle;
