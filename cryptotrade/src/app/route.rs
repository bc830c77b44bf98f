//! # Routes
//!
//! Screen addresses and the authentication guard.

/// Application screens, addressed by path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Trade,
    Wallet,
    Auth,
    Verification,
    Settings,
}

impl Route {
    pub fn all() -> &'static [Route] {
        &[
            Route::Dashboard,
            Route::Trade,
            Route::Wallet,
            Route::Auth,
            Route::Verification,
            Route::Settings,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Trade => "/trade",
            Route::Wallet => "/wallet",
            Route::Auth => "/auth",
            Route::Verification => "/verification",
            Route::Settings => "/settings",
        }
    }

    /// Get route title for the window header
    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Trade => "Buy/Sell Crypto",
            Route::Wallet => "Wallet",
            Route::Auth => "Sign In",
            Route::Verification => "Account Verification",
            Route::Settings => "Account Settings",
        }
    }

    /// Every route except `/auth` needs a signed-in user
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Auth)
    }

    /// Route actually shown when `self` is requested
    pub fn resolve(self, authenticated: bool) -> Route {
        if self.requires_auth() && !authenticated {
            Route::Auth
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_unique() {
        let paths: std::collections::HashSet<_> = Route::all().iter().map(|r| r.path()).collect();
        assert_eq!(paths.len(), Route::all().len());
    }

    #[test]
    fn test_protected_routes_resolve_to_auth() {
        for route in Route::all() {
            let resolved = route.resolve(false);
            assert_eq!(resolved, Route::Auth, "{} should be guarded", route.path());
        }
    }

    #[test]
    fn test_authenticated_routes_resolve_to_themselves() {
        for route in Route::all() {
            assert_eq!(route.resolve(true), *route);
        }
    }

    #[test]
    fn test_default_is_dashboard() {
        assert_eq!(Route::default().path(), "/");
    }
}
