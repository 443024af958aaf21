//! Single binary web server: the dashboard page plus JSON and CSV views of it.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//!
//! Every control value travels in the query string, so each request rebuilds the
//! FilterState, recomputes the view and renders it from scratch.

use actix_web::{
    get, middleware,
    web::{self, Query},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Serialize;
use tennis_stats_web::{
    all_players, compute_view, export_csv, render, render_page, FilterState, PlayerRecord,
    Rendered, ServerConfig,
};

type QueryPairs = Query<Vec<(String, String)>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
struct ViewResponse {
    filter: FilterState,
    view: Vec<PlayerRecord>,
    rendered: Rendered,
}

fn bad_request(e: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

fn server_error(e: impl std::fmt::Display) -> HttpResponse {
    log::error!("{}", e);
    HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
}

/// Parse the controls and compute the view; the HttpResponse is the 400 for bad input.
fn filtered(query: &QueryPairs) -> Result<(FilterState, Vec<PlayerRecord>), HttpResponse> {
    let filter = FilterState::from_query_pairs(query).map_err(bad_request)?;
    let view = compute_view(all_players(), &filter);
    log::debug!(
        "view: {} of {} players (sort {:?}, chart {:?})",
        view.len(),
        all_players().len(),
        filter.sort_key,
        filter.chart_type
    );
    Ok((filter, view))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tennis-stats-web",
    })
}

/// Avoid 404 in browser tab: the page embeds its own icon.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// The dashboard page for the controls in the query string.
#[get("/")]
async fn index(query: QueryPairs) -> HttpResponse {
    let (filter, view) = match filtered(&query) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let rendered = render(&view, &filter);
    match render_page(&filter, &rendered) {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => server_error(e),
    }
}

/// Filter state, view rows and render output as JSON.
#[get("/api/view")]
async fn api_view(query: QueryPairs) -> HttpResponse {
    let (filter, view) = match filtered(&query) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let rendered = render(&view, &filter);
    HttpResponse::Ok().json(ViewResponse {
        filter,
        view,
        rendered,
    })
}

/// The current view as a CSV download.
#[get("/api/export.csv")]
async fn api_export_csv(query: QueryPairs) -> HttpResponse {
    let (_, view) = match filtered(&query) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match export_csv(&view) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                "Content-Disposition",
                "attachment; filename=\"tennis_players.csv\"",
            ))
            .body(body),
        Err(e) => server_error(e),
    }
}

/// Register every route; shared by the server and the handler tests.
fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(api_health)
        .service(favicon)
        .service(api_view)
        .service(api_export_csv);
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let bind = (config.host.as_str(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let server = HttpServer::new(|| {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(routes)
    })
    .bind(bind)
    .map_err(|e| {
        log::error!("Failed to bind {}:{}: {}", config.host, config.port, e);
        e
    })?;

    server.run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, StatusCode};
    use actix_web::test;

    /// "한국", percent-encoded for a request URI.
    const KOREA: &str = "%ED%95%9C%EA%B5%AD";

    #[actix_web::test]
    async fn first_visit_shows_every_player() {
        let app = test::init_service(App::new().configure(routes)).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        for p in all_players() {
            assert!(html.contains(p.name), "missing {}", p.name);
        }
        assert!(html.contains("📋 선수 기본 데이터"));
        assert!(html.contains("<svg"));
    }

    #[actix_web::test]
    async fn applied_form_without_controls_is_empty() {
        let app = test::init_service(App::new().configure(routes)).await;
        let req = test::TestRequest::get().uri("/?applied=1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(!html.contains("📋 선수 기본 데이터"));
        assert!(html.contains("데이터 없음"));
    }

    #[actix_web::test]
    async fn unknown_sort_key_is_bad_request() {
        let app = test::init_service(App::new().configure(routes)).await;
        let req = test::TestRequest::get().uri("/?sort=age").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Unknown sort key: age");
    }

    #[actix_web::test]
    async fn unknown_country_is_bad_request_on_every_route() {
        let app = test::init_service(App::new().configure(routes)).await;
        for uri in ["/?country=x", "/api/view?country=x", "/api/export.csv?country=x"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn view_json_reflects_submitted_controls() {
        let app = test::init_service(App::new().configure(routes)).await;
        let uri = format!("/api/view?applied=1&country={}&chart=country_distribution", KOREA);
        let req = test::TestRequest::get().uri(&uri).to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["filter"]["selected_countries"], serde_json::json!(["한국"]));
        assert_eq!(body["filter"]["show_table"], false);
        assert_eq!(body["view"].as_array().map(Vec::len), Some(1));
        assert!(body["rendered"]["table"].is_null());
        assert_eq!(body["rendered"]["chart"]["mark"], "pie");
        assert_eq!(body["rendered"]["chart"]["series"][0]["name"], "한국");
        assert_eq!(body["rendered"]["chart"]["series"][0]["points"][0]["value"], 1.0);
    }

    #[actix_web::test]
    async fn csv_export_is_an_attachment() {
        let app = test::init_service(App::new().configure(routes)).await;
        let req = test::TestRequest::get().uri("/api/export.csv?applied=1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/csv; charset=utf-8"
        );
        let disposition = resp
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment"));
        let body = test::read_body(resp).await;
        assert_eq!(std::str::from_utf8(&body).unwrap().lines().count(), 1);
    }

    #[actix_web::test]
    async fn health_and_favicon() {
        let app = test::init_service(App::new().configure(routes)).await;
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["ok"], true);

        let req = test::TestRequest::get().uri("/favicon.ico").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }
}
