//! Axum router and server setup.
//! Used by: main.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::ops::health))
        .route("/metrics", get(handlers::ops::metrics))
        .route(
            "/session",
            get(handlers::session::current)
                .post(handlers::session::login)
                .delete(handlers::session::logout),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(state: AppState, addr: &str) -> std::io::Result<()> {
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, router).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
    use axum::http::{Request, Response, StatusCode};
    use axum_extra::extract::cookie::{Cookie, SameSite};
    use tower::ServiceExt;

    use crate::config::Environment;
    use crate::handlers::session::SessionResponse;
    use crate::state::build_test_state;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn login_request(user_id: &str, email: &str) -> std::result::Result<Request<Body>, axum::http::Error> {
        let body = serde_json::json!({ "user_id": user_id, "email": email }).to_string();
        Request::builder()
            .method("POST")
            .uri("/session")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
    }

    fn session_cookie(response: &Response<Body>) -> std::result::Result<Cookie<'static>, Box<dyn std::error::Error>> {
        let header = response
            .headers()
            .get(SET_COOKIE)
            .ok_or("missing Set-Cookie")?
            .to_str()?;
        Ok(Cookie::parse(header.to_owned())?)
    }

    #[tokio::test]
    async fn login_sets_cookie_and_reports_claims() -> TestResult {
        let state = build_test_state(Environment::Development)?;
        let response = build_router(state.clone())
            .oneshot(login_request("user-123", "test@example.com")?)
            .await?;
        assert_eq!(response.status(), StatusCode::OK);

        let cookie = session_cookie(&response)?;
        assert_eq!(cookie.name(), "auth-token");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_ne!(cookie.secure(), Some(true));
        assert!(cookie.expires_datetime().is_some());

        let body = to_bytes(response.into_body(), usize::MAX).await?;
        let session: SessionResponse = serde_json::from_slice(&body)?;
        assert_eq!(session.user_id, "user-123");
        assert_eq!(session.email, "test@example.com");
        assert_eq!(state.metrics.snapshot().sessions_issued, 1);
        Ok(())
    }

    #[tokio::test]
    async fn production_cookie_is_secure() -> TestResult {
        let state = build_test_state(Environment::Production)?;
        let response = build_router(state)
            .oneshot(login_request("user-123", "test@example.com")?)
            .await?;
        assert_eq!(session_cookie(&response)?.secure(), Some(true));
        Ok(())
    }

    #[tokio::test]
    async fn cookie_grants_access_to_current_session() -> TestResult {
        let state = build_test_state(Environment::Development)?;
        let router = build_router(state.clone());

        let login = router
            .clone()
            .oneshot(login_request("user-456", "jane@example.com")?)
            .await?;
        let cookie = session_cookie(&login)?;

        let request = Request::builder()
            .uri("/session")
            .header(COOKIE, format!("auth-token={}", cookie.value()))
            .body(Body::empty())?;
        let response = router.oneshot(request).await?;
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await?;
        let session: SessionResponse = serde_json::from_slice(&body)?;
        assert_eq!(session.user_id, "user-456");
        assert_eq!(session.email, "jane@example.com");
        assert_eq!(state.metrics.snapshot().sessions_verified, 1);
        Ok(())
    }

    #[tokio::test]
    async fn missing_cookie_is_unauthorized() -> TestResult {
        let state = build_test_state(Environment::Development)?;
        let request = Request::builder().uri("/session").body(Body::empty())?;
        let response = build_router(state.clone()).oneshot(request).await?;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(state.metrics.snapshot().sessions_rejected, 1);
        Ok(())
    }

    #[tokio::test]
    async fn forged_cookie_is_unauthorized() -> TestResult {
        let state = build_test_state(Environment::Development)?;
        let request = Request::builder()
            .uri("/session")
            .header(COOKIE, "auth-token=eyJhbGciOiJIUzI1NiJ9.e30.c2lnbmF0dXJl")
            .body(Body::empty())?;
        let response = build_router(state).oneshot(request).await?;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_login_is_bad_request() -> TestResult {
        let state = build_test_state(Environment::Development)?;
        let response = build_router(state.clone())
            .oneshot(login_request("", "test@example.com")?)
            .await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().get(SET_COOKIE).is_none());
        assert_eq!(state.metrics.snapshot().sessions_issued, 0);
        Ok(())
    }

    #[tokio::test]
    async fn logout_clears_cookie() -> TestResult {
        let state = build_test_state(Environment::Development)?;
        let request = Request::builder()
            .method("DELETE")
            .uri("/session")
            .body(Body::empty())?;
        let response = build_router(state.clone()).oneshot(request).await?;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let cookie = session_cookie(&response)?;
        assert_eq!(cookie.name(), "auth-token");
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
        assert_eq!(state.metrics.snapshot().sessions_cleared, 1);
        Ok(())
    }

    #[tokio::test]
    async fn health_reports_environment() -> TestResult {
        let state = build_test_state(Environment::Production)?;
        let request = Request::builder().uri("/health").body(Body::empty())?;
        let response = build_router(state).oneshot(request).await?;
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await?;
        let json: serde_json::Value = serde_json::from_slice(&body)?;
        assert_eq!(json["environment"], "production");
        Ok(())
    }
}
