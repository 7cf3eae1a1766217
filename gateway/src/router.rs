use hyper::Method;

/// What the gateway does with a matched request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAction {
    /// Proxy the search to the upstream app catalog
    SearchApps,
    /// Proxy the upstream health endpoint
    HealthProxy,
    /// Canned degraded-service payload for the backend route
    BackendFallback,
    /// Canned degraded-service payload for the health route
    HealthFallback,
}

/// Explicit route table: method + exact path to action.
///
/// The surface is fixed, so routes are declared in code rather than
/// configuration.
pub struct Router {
    routes: Vec<(Method, &'static str, RouteAction)>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            routes: vec![
                (Method::GET, "/api/apps/search", RouteAction::SearchApps),
                (Method::GET, "/health", RouteAction::HealthProxy),
                (Method::GET, "/fallback/backend", RouteAction::BackendFallback),
                (Method::GET, "/fallback/health", RouteAction::HealthFallback),
            ],
        }
    }

    /// Finds the first route matching the request's method and path.
    pub fn resolve(&self, method: &Method, path: &str) -> Option<RouteAction> {
        self.routes
            .iter()
            .find(|(m, p, _)| m == method && *p == path)
            .map(|(_, _, action)| *action)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_matching() {
        let router = Router::new();

        assert_eq!(
            router.resolve(&Method::GET, "/api/apps/search"),
            Some(RouteAction::SearchApps)
        );
        assert_eq!(
            router.resolve(&Method::GET, "/health"),
            Some(RouteAction::HealthProxy)
        );
        assert_eq!(
            router.resolve(&Method::GET, "/fallback/backend"),
            Some(RouteAction::BackendFallback)
        );
        assert_eq!(
            router.resolve(&Method::GET, "/fallback/health"),
            Some(RouteAction::HealthFallback)
        );
    }

    #[test]
    fn test_no_route_matched() {
        let router = Router::new();

        assert_eq!(router.resolve(&Method::GET, "/api/apps"), None);
        assert_eq!(router.resolve(&Method::GET, "/different"), None);
    }

    #[test]
    fn test_method_mismatch() {
        let router = Router::new();

        assert_eq!(router.resolve(&Method::POST, "/api/apps/search"), None);
        assert_eq!(router.resolve(&Method::DELETE, "/health"), None);
    }

    #[test]
    fn test_query_string_not_part_of_path() {
        // resolve() takes uri.path(), which excludes the query string
        let router = Router::new();
        assert_eq!(
            router.resolve(&Method::GET, "/api/apps/search"),
            Some(RouteAction::SearchApps)
        );
        assert_eq!(router.resolve(&Method::GET, "/api/apps/search?keyword=x"), None);
    }
}
