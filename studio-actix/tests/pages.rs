use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use leptos_actix::{generate_route_list, LeptosRoutes};
use studio_actix::config::ServerConfig;
use studio_actix::server::{fallback_options, RequestTrace};

async fn get_page(path: &str) -> (StatusCode, String) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let routes = generate_route_list(studio_leptos::app::App);
    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(web::Data::new(ServerConfig::default()))
            .leptos_routes(fallback_options(), routes, studio_leptos::app::App),
    )
    .await;

    let req = test::TestRequest::get().uri(path).to_request();
    let res = test::call_service(&app, req).await;
    let status = res.status();
    let body = test::read_body(res).await;
    let body = String::from_utf8(body.to_vec()).expect("page is not utf8");

    (status, body)
}

fn count(body: &str, needle: &str) -> usize {
    body.matches(needle).count()
}

#[actix_web::test]
async fn home_renders_carousel_and_sections() {
    let (status, body) = get_page("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(count(&body, "data-carousel-layer="), 4);
    assert_eq!(count(&body, r#"data-card="featured""#), 3);
    assert_eq!(count(&body, r#"data-card="destination""#), 3);
    assert_eq!(count(&body, r#"data-card="service""#), 3);
    assert!(body.contains(r#"href="/contact""#));
    assert!(body.contains(r#"href="/portfolio""#));
}

#[actix_web::test]
async fn about_renders_team_and_approach() {
    let (status, body) = get_page("/about").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(count(&body, r#"data-card="team""#), 4);
    assert_eq!(count(&body, r#"data-card="approach""#), 4);
    for name in ["Sarah Johnson", "Michael Chen", "Emily Rodriguez", "James Wilson"] {
        assert!(body.contains(name), "missing team member {}", name);
    }
    assert!(body.contains("Get in Touch"));
    assert!(body.contains(r#"href="/contact""#));
}

#[actix_web::test]
async fn portfolio_links_every_gallery() {
    let (status, body) = get_page("/portfolio").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(count(&body, r#"data-card="gallery""#), 6);
    assert_eq!(count(&body, r#"data-card="latest""#), 2);
    for slug in [
        "santorini-sunset",
        "swiss-alps",
        "kyoto-gardens",
        "venice-canals",
        "machu-picchu",
        "northern-lights",
        "amalfi-coast",
        "bali-rice-terraces",
    ] {
        let href = format!(r#"href="/gallery/{}""#, slug);
        assert!(body.contains(&href), "missing link {}", href);
    }
    assert!(body.contains("BRITTANY &amp; SAM") || body.contains("BRITTANY & SAM"));
}

#[actix_web::test]
async fn contact_renders_form_fields() {
    let (status, body) = get_page("/contact").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(count(&body, "data-field="), 7);
    assert_eq!(count(&body, r#"data-card="info""#), 3);
    assert!(body.contains("<textarea"));
    assert!(body.contains(r#"href="mailto:hello@lifeandtimesphotography.com""#));
}

#[actix_web::test]
async fn unknown_path_renders_not_found() {
    let (status, body) = get_page("/nowhere").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
    assert!(!body.contains(r#"data-card="team""#));
}

#[actix_web::test]
async fn gallery_deep_link_is_not_routed() {
    let (status, body) = get_page("/gallery/swiss-alps").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
}
