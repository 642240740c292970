use axum::{routing::get, routing::post, Router};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_headers_layer, Config};
use crate::graphql::AppSchema;
use crate::handlers::{graphql_handler, graphql_playground, health_check, not_found, GRAPHQL_PATH};

pub fn create_routes(schema: AppSchema, config: &Config) -> Router {
    let graphql = if config.playground {
        get(graphql_playground).post(graphql_handler)
    } else {
        post(graphql_handler)
    };

    Router::new()
        .route("/health", get(health_check))
        .route(GRAPHQL_PATH, graphql)
        .fallback(not_found)
        .with_state(schema)
        .layer(create_security_headers_layer(config))
        .layer(create_cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::graphql::build_schema;
    use crate::store::Store;

    fn config(playground: bool) -> Config {
        Config {
            host: [127, 0, 0, 1].into(),
            port: 0,
            production: false,
            playground,
            seed_data_path: None,
            cors_allowed_origins: "http://localhost:3000".to_string(),
        }
    }

    fn app(playground: bool) -> Router {
        create_routes(build_schema(Arc::new(Store::new())), &config(playground))
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn graphql_post(query: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/graphql")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "query": query }).to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app(false)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-content-type-options"], "nosniff");

        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "ok");
    }

    #[tokio::test]
    async fn test_graphql_over_http() {
        let app = app(false);
        let created = app
            .clone()
            .oneshot(graphql_post(
                r#"mutation { createUser(data: { username: "a", email: "a@x.com" }) { id username } }"#,
            ))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::OK);
        let created = json_body(created).await;
        assert_eq!(created["data"]["createUser"]["username"], "a");

        let listed = app
            .oneshot(graphql_post("{ users { username email } }"))
            .await
            .unwrap();
        let listed = json_body(listed).await;
        assert_eq!(
            listed["data"],
            json!({ "users": [{ "username": "a", "email": "a@x.com" }] })
        );
    }

    #[tokio::test]
    async fn test_not_found_error_in_graphql_errors() {
        let response = app(false)
            .oneshot(graphql_post(r#"mutation { deleteLocation(id: "x") { id } }"#))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["data"], Value::Null);
        assert_eq!(body["errors"][0]["message"], "Location with id 'x' not found");
        assert_eq!(body["errors"][0]["extensions"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_playground_is_optional() {
        let enabled = app(true)
            .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(enabled.status(), StatusCode::OK);

        let disabled = app(false)
            .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(disabled.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_cors_uses_configured_origins() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/graphql")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let response = app(false).oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );

        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/graphql")
            .header(header::ORIGIN, "https://elsewhere.example")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let response = app(false).oneshot(request).await.unwrap();
        assert!(!response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[tokio::test]
    async fn test_unknown_route_uses_error_envelope() {
        let response = app(false)
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
