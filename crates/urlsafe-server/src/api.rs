//! Request handlers for the URL check endpoint.

use std::sync::Arc;

use tide::{Body, Request, Response, StatusCode};
use urlsafe_core::checker::UrlChecker;

/// Shared application state. The checker owns both caches for the process
/// lifetime; handlers never touch them directly.
#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<UrlChecker>,
}

impl AppState {
    pub fn new(checker: UrlChecker) -> Self {
        Self {
            checker: Arc::new(checker),
        }
    }
}

/// `GET /*url`: checks the URL embedded in the request path.
///
/// Every failure class collapses to the same response: reachable gives
/// 200 with the JSON body `["Safe", 200]`, everything else gives 500 with
/// the literal body `Invalid`. Only the logs say which stage failed.
pub async fn check_url(req: Request<AppState>) -> tide::Result {
    let raw = req.param("url")?.to_string();
    tracing::info!("URL under test: {raw}");
    tracing::debug!("ledger = {:?}", req.state().checker.ledger_snapshot());

    // The pipeline blocks on DNS and the probe; keep it off the executor.
    let checker = Arc::clone(&req.state().checker);
    let outcome = async_std::task::spawn_blocking(move || checker.check(&raw)).await;

    if outcome.is_safe() {
        let mut res = Response::new(StatusCode::Ok);
        res.set_body(Body::from_json(&serde_json::json!(["Safe", 200]))?);
        Ok(res)
    } else {
        let mut res = Response::new(StatusCode::InternalServerError);
        res.set_body("Invalid");
        Ok(res)
    }
}
