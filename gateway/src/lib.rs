pub mod config;
pub mod errors;
pub mod fallback;
pub mod router;
pub mod upstream;

use crate::config::Config;
use crate::errors::{GatewayError, Result};
use crate::fallback::FallbackPayload;
use crate::router::{RouteAction, Router};
use crate::upstream::AppServiceClient;
use http_body_util::{BodyExt, Full, combinators::BoxBody};
use hyper::body::{Bytes, Incoming};
use hyper::header::CONTENT_TYPE;
use hyper::service::Service;
use hyper::{Request, Response, StatusCode};
use shared::http::{make_error_response, make_text_response, run_http_service};
use std::pin::Pin;

pub type GatewayBody = BoxBody<Bytes, GatewayError>;

/// Binds the configured listener and serves the gateway until an I/O
/// error stops the accept loop.
pub async fn run(config: Config) -> Result<()> {
    tracing::info!(
        host = %config.listener.host,
        port = config.listener.port,
        upstream = %config.upstream.url,
        "Starting gateway"
    );

    let service = GatewayService::new(&config);
    run_http_service(&config.listener.host, config.listener.port, service).await
}

/// The gateway's HTTP service: resolves each request against the route
/// table and dispatches to the upstream client or a fallback payload.
pub struct GatewayService {
    router: Router,
    client: AppServiceClient,
}

impl GatewayService {
    pub fn new(config: &Config) -> Self {
        Self {
            router: Router::new(),
            client: AppServiceClient::new(&config.upstream),
        }
    }
}

impl Service<Request<Incoming>> for GatewayService {
    type Response = Response<GatewayBody>;
    type Error = GatewayError;
    type Future =
        Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send + 'static>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let action = self.router.resolve(req.method(), req.uri().path());
        let client = self.client.clone();

        Box::pin(async move {
            let response = match action {
                Some(action) => {
                    tracing::debug!(action = ?action, "Matched route");
                    dispatch(&client, action, &req).await
                }
                None => {
                    tracing::warn!(
                        method = %req.method(),
                        path = %req.uri().path(),
                        "No route matched"
                    );
                    Ok(make_error_response(StatusCode::NOT_FOUND))
                }
            };

            // Failures become status responses rather than dropped
            // connections; the circuit breaker in front of this gateway
            // observes the 5xx and redirects to the fallback routes.
            Ok(response.unwrap_or_else(|e| {
                tracing::warn!(error = %e, path = %req.uri().path(), "Request failed");
                make_failure_response(&e)
            }))
        })
    }
}

async fn dispatch(
    client: &AppServiceClient,
    action: RouteAction,
    req: &Request<Incoming>,
) -> Result<Response<GatewayBody>> {
    match action {
        RouteAction::SearchApps => {
            let keyword = extract_keyword(req.uri().query())?;
            let body = client.search(&keyword).await?;
            Ok(make_text_response(body))
        }
        RouteAction::HealthProxy => {
            let body = client.health().await?;
            Ok(make_text_response(body))
        }
        RouteAction::BackendFallback => make_fallback_response(fallback::backend_fallback()),
        RouteAction::HealthFallback => make_fallback_response(fallback::health_fallback()),
    }
}

/// Extracts the required `keyword` query parameter.
fn extract_keyword(query: Option<&str>) -> Result<String> {
    url::form_urlencoded::parse(query.unwrap_or("").as_bytes())
        .find(|(name, _)| name == "keyword")
        .map(|(_, value)| value.into_owned())
        .ok_or(GatewayError::MissingParameter("keyword"))
}

fn make_fallback_response(payload: FallbackPayload) -> Result<Response<GatewayBody>> {
    let bytes = serde_json::to_vec(&payload)?;

    Response::builder()
        .status(StatusCode::SERVICE_UNAVAILABLE)
        .header(CONTENT_TYPE, "application/json")
        .body(Full::new(Bytes::from(bytes)).map_err(|e| match e {}).boxed())
        .map_err(|e| GatewayError::InternalError(format!("Failed to build response: {e}")))
}

fn make_failure_response(error: &GatewayError) -> Response<GatewayBody> {
    let mut response = make_text_response(format!("{error}\n"));
    *response.status_mut() = error.status_code();
    response
}
