//! Page template component

use leptos::prelude::*;

use crate::components::Header;
use crate::route::{Location, RouteMatch};

/// Wraps every page: site header first, then the page content.
///
/// `location` and `route` are accepted for parity with the hosting layer's
/// page contract; rendering does not read them.
#[component]
pub fn Template(
    /// current navigation location
    #[prop(optional_no_strip)]
    location: Option<Location>,
    /// route matched for this page
    #[prop(optional_no_strip)]
    route: Option<RouteMatch>,
    /// produces the page content, invoked once per render
    children: Children,
) -> impl IntoView {
    // accepted, never read
    let _ = (location, route);

    view! {
        <div class="page">
            <Header />
            {children()}
        </div>
    }
}
