use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use crate::{
    challenge::handler::{history, refresh, reset, restart, summary, summary_text},
    docs::dto::ApiDoc,
    info::handler::info,
    state::ServerState,
    vote::handler::{cast_vote, get_votes},
};

pub fn router(state: Arc<ServerState>) -> Router {
    let doc = ApiDoc::openapi();

    let challenge_router = Router::new()
        .route("/challenge", get(summary))
        .route("/challenge/text", get(summary_text))
        .route("/challenge/history", get(history))
        .route("/challenge/refresh", post(refresh))
        .route("/challenge/reset", post(reset))
        .route("/challenge/restart", post(restart));

    Router::new()
        .merge(Redoc::with_url("/redoc", doc))
        .merge(challenge_router)
        .route("/", get(info))
        .route("/votes", get(get_votes).post(cast_vote))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use challenge_core::{
        ChallengeController, ChallengeResult,
        challenge::clock::ChallengeClock,
        helpers::config::parse_start,
        portfolio::{
            dto::{Portfolio, PriceSourceKind},
            handler::accumulate,
        },
        prices::{PriceSource, PriceSources, dto::FetchSummary},
        storage::ChallengeStorage,
    };
    use serde_json::{Value, json};
    use tempfile::TempDir;
    use tower::ServiceExt;

    /// Prices every holding at a flat price with no 24h move.
    struct FlatSource {
        kind: PriceSourceKind,
        price: f64,
    }

    #[async_trait]
    impl PriceSource for FlatSource {
        fn kind(&self) -> PriceSourceKind {
            self.kind
        }

        async fn refresh(&self, portfolio: &mut Portfolio) -> ChallengeResult<FetchSummary> {
            let mut summary = FetchSummary::default();
            for holding in portfolio.holdings.iter_mut() {
                holding.set_quote(self.price, 0.0);
                summary.priced.push(holding.symbol.clone());
            }
            portfolio.apply_totals(accumulate(&portfolio.holdings));
            Ok(summary)
        }
    }

    fn app() -> (Router, TempDir) {
        let dir = TempDir::new().unwrap();
        let db = sled::open(dir.path()).unwrap();
        let storage = ChallengeStorage::new(&db).unwrap();
        let sources = PriceSources::new(
            Arc::new(FlatSource {
                kind: PriceSourceKind::CoinGecko,
                price: 0.01,
            }),
            Arc::new(FlatSource {
                kind: PriceSourceKind::DexScreener,
                price: 0.02,
            }),
        );
        let clock = ChallengeClock::new(parse_start("2025-08-11").unwrap());
        let controller = ChallengeController::load(storage, sources, clock).unwrap();

        (
            router(Arc::new(ServerState::from(Arc::new(controller)))),
            dir,
        )
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_info() {
        let (app, _dir) = app();

        let (status, body) = send(&app, "GET", "/", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "challenge_server");
        assert_eq!(body["challenge_days"], 30);
    }

    #[tokio::test]
    async fn test_refresh_then_summary_and_history() {
        let (app, _dir) = app();

        let (status, report) = send(&app, "POST", "/challenge/refresh", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(report["easy"]["status"], "updated");
        assert_eq!(report["clemente"]["status"], "updated");

        let (status, summary) = send(&app, "GET", "/challenge", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(summary["standings"]["leadership"]["state"], "leading");
        assert_eq!(summary["standings"]["leadership"]["leader"], "clemente");
        assert!(summary["last_refresh"].is_object());

        let (status, history) = send(&app, "GET", "/challenge/history", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(history.as_array().unwrap().len(), 1);

        let (status, text) = send(&app, "GET", "/challenge/text", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(text["text"].as_str().unwrap().contains("Clemente Leading by"));
    }

    #[tokio::test]
    async fn test_vote_once() {
        let (app, _dir) = app();

        let (status, body) =
            send(&app, "POST", "/votes", Some(json!({ "portfolio": "easy" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outcome"]["status"], "accepted");
        assert_eq!(body["voting"]["easy_votes"], 1);

        let (status, body) =
            send(&app, "POST", "/votes", Some(json!({ "portfolio": "clemente" }))).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["outcome"]["status"], "already_voted");
        assert_eq!(body["voting"]["clemente_votes"], 0);

        let (status, body) = send(&app, "GET", "/votes", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_votes"], 1);
        assert_eq!(body["shares"]["easy"], 100);
    }

    #[tokio::test]
    async fn test_vote_for_unknown_portfolio_is_rejected() {
        let (app, _dir) = app();

        let (status, body) =
            send(&app, "POST", "/votes", Some(json!({ "portfolio": "bob" }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
        assert_eq!(body["message"], "Unknown portfolio: bob");

        let (_, votes) = send(&app, "GET", "/votes", None).await;
        assert_eq!(votes["total_votes"], 0);
        assert_eq!(votes["has_voted"], false);
    }

    #[tokio::test]
    async fn test_restart_keeps_votes_and_reset_clears_them() {
        let (app, _dir) = app();
        send(&app, "POST", "/challenge/refresh", None).await;
        send(&app, "POST", "/votes", Some(json!({ "portfolio": "clemente" }))).await;

        let (status, challenge) = send(&app, "POST", "/challenge/restart", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(challenge["historicalData"].as_array().unwrap().len(), 0);
        assert_eq!(challenge["startDate"], "2025-08-11T00:00:00Z");

        let (_, votes) = send(&app, "GET", "/votes", None).await;
        assert_eq!(votes["clemente_votes"], 1);

        let (status, _) = send(&app, "POST", "/challenge/reset", None).await;
        assert_eq!(status, StatusCode::OK);

        let (_, votes) = send(&app, "GET", "/votes", None).await;
        assert_eq!(votes["total_votes"], 0);
        assert_eq!(votes["has_voted"], false);
    }

    #[tokio::test]
    async fn test_redoc_is_served() {
        let (app, _dir) = app();

        let response = app
            .oneshot(Request::builder().uri("/redoc").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
