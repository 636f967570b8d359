//! Site header component

use leptos::prelude::*;

use crate::route::ROOT_PATH;

/// logo asset, copied to the site root by the bundler
pub const LOGO_SRC: &str = "/logo-blog.svg";
/// rendered logo width in pixels
pub const LOGO_WIDTH: u32 = 40;
/// shown next to the logo and used as the document title
pub const SITE_TITLE: &str = "GigPin Engineering blog";

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <nav class="site-nav">
            <img src=LOGO_SRC width=LOGO_WIDTH/>
            <a href=ROOT_PATH>
                <span class="title">{SITE_TITLE}</span>
            </a>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_src_is_root_absolute() {
        // the bundler copies the asset to the site root
        assert!(LOGO_SRC.starts_with('/'));
        assert!(LOGO_SRC.ends_with(".svg"));
    }

    #[test]
    fn test_logo_width_is_fixed() {
        assert_eq!(LOGO_WIDTH, 40);
    }

    #[test]
    fn test_site_title() {
        assert_eq!(SITE_TITLE, "GigPin Engineering blog");
    }
}
