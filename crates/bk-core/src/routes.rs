//! Page routes of the Blog Keeper front end, as static data.

/// Page component a route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    BlogParser,
    ContactUs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub page: Page,
}

pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: "home",
        page: Page::BlogParser,
    },
    Route {
        path: "/contact",
        name: "contact",
        page: Page::ContactUs,
    },
];

/// Exact-match lookup; a trailing `/` is ignored except on the root.
pub fn find_route(path: &str) -> Option<&'static Route> {
    let trimmed = match path.trim_end_matches('/') {
        "" => "/",
        p => p,
    };
    ROUTES.iter().find(|r| r.path == trimmed)
}
