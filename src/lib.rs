//! ==============================================================================
//! lib.rs - GigPin Engineering blog
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm frontend for the gigpin engineering blog.
//!     every page is wrapped by the `Template` component, which renders
//!     the shared site header above the page content.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - post index fetched from a static json asset
//!     - hosted on cloudflare pages
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use wasm_bindgen::prelude::*;

mod api;
mod components;
mod route;

use components::{PostList, Template, SITE_TITLE};
use route::{Location, RouteMatch};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    // drop the static loading placeholder before mounting
    if let Some(loading) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("loading"))
    {
        loading.remove();
    }

    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

// per-page instantiation of the template. the csr build serves a single
// page, the post index, so the root route is matched unconditionally.
#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=SITE_TITLE/>
        <Template location=Location::current() route=Some(RouteMatch::root())>
            <PostList />
        </Template>
    }
}
