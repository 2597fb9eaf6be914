//! Shared types used across the render stages.
//!
//! [`Route`] is the single source of truth for the four pages: navigation,
//! breadcrumbs, the sitemap and the output layout all derive from it.

/// One of the site's pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Services,
    Rates,
    Contact,
}

impl Route {
    /// Every route, in navigation and sitemap order.
    pub const ALL: [Route; 4] = [Route::Home, Route::Services, Route::Rates, Route::Contact];

    /// Root-relative URL path, always with a trailing slash.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Services => "/services/",
            Route::Rates => "/rates/",
            Route::Contact => "/contact/",
        }
    }

    /// Output file relative to the output directory.
    pub fn file(self) -> &'static str {
        match self {
            Route::Home => "index.html",
            Route::Services => "services/index.html",
            Route::Rates => "rates/index.html",
            Route::Contact => "contact/index.html",
        }
    }

    /// Label in the header navigation. Home is reached through the logo.
    pub fn nav_label(self) -> Option<&'static str> {
        match self {
            Route::Home => None,
            Route::Services => Some("Services"),
            Route::Rates => Some("Rates"),
            Route::Contact => Some("Contact"),
        }
    }

    pub fn breadcrumb_name(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Services => "Services",
            Route::Rates => "Rates",
            Route::Contact => "Contact",
        }
    }

    /// Breadcrumb trail from the home page down to this route.
    pub fn trail(self) -> Vec<Route> {
        match self {
            Route::Home => vec![Route::Home],
            other => vec![Route::Home, other],
        }
    }
}

/// Mobile navigation menu. Closed on every page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following any menu link closes the menu.
    pub fn close(&mut self) {
        self.open = false;
    }
}
