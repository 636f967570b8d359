//! ==============================================================================
//! route.rs - navigation context handed to page templates
//! ==============================================================================
//!
//! purpose:
//!     opaque location and matched-route descriptors supplied by the hosting
//!     layer. `Template` threads them through without inspecting them, so
//!     future pages can read them without changing the template contract.
//!
//! ==============================================================================

/// site root, target of the header's home link
pub const ROOT_PATH: &str = "/";

/// current navigation location as reported by the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub pathname: String,
}

impl Location {
    /// capture the browser location; `None` outside a browser context
    pub fn current() -> Option<Self> {
        let pathname = web_sys::window()?.location().pathname().ok()?;
        Some(Self { pathname })
    }
}

/// route matched for the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub path: String,
}

impl RouteMatch {
    /// the index route, the only route in a csr build
    pub fn root() -> Self {
        Self {
            path: ROOT_PATH.to_string(),
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_route_matches_home_link_target() {
        assert_eq!(RouteMatch::root().path, ROOT_PATH);
    }

    #[test]
    fn test_location_is_plain_data() {
        let a = Location {
            pathname: "/posts/hello/".to_string(),
        };
        let b = a.clone();
        assert_eq!(a, b);
    }
}
