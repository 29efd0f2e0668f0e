//! Client-side route table.
//!
//! Resolving a path never touches the network; protected routes fall back to
//! the login prompt when the session is anonymous.
use std::fmt;

use log::debug;

use crate::SessionGate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Dashboard,
    ProjectIdeas,
    NotFound(String),
}

/// What actually gets rendered for a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home,
    Dashboard,
    ProjectIdeas,
    LoginPrompt { requested: Route },
    NotFound(String),
}

impl Route {
    /// Trailing slashes are ignored, so `/dashboard/` resolves like `/dashboard`.
    pub fn resolve(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        match normalized {
            "" => Route::Home,
            "/dashboard" => Route::Dashboard,
            "/project-ideas" => Route::ProjectIdeas,
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::Dashboard => "/dashboard",
            Route::ProjectIdeas => "/project-ideas",
            Route::NotFound(path) => path,
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard | Route::ProjectIdeas)
    }

    pub fn view(&self, session: &SessionGate) -> View {
        if self.is_protected() && !session.is_authenticated() {
            debug!("{} requires login", self.path());
            return View::LoginPrompt {
                requested: self.clone(),
            };
        }
        match self {
            Route::Home => View::Home,
            Route::Dashboard => View::Dashboard,
            Route::ProjectIdeas => View::ProjectIdeas,
            Route::NotFound(path) => View::NotFound(path.clone()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
