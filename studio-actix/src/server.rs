use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Instant;

use actix_files::{Files, NamedFile};
use actix_web::dev::{forward_ready, Server, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, App, HttpServer};
use futures::future::{ready, LocalBoxFuture, Ready};
use leptos::{get_configuration, LeptosOptions};
use leptos_actix::{generate_route_list, LeptosRoutes};
use tracing::{debug, info, trace, warn};

use crate::config::{ServerConfig, ServerErr};

pub const DEFAULT_OUTPUT_NAME: &str = "studio";
pub const DEFAULT_SITE_PORT: u16 = 3000;

pub async fn favicon(config: web::Data<ServerConfig>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open(config.favicon_path())?)
}

/// Used when `Cargo.toml` with the leptos metadata is not next to the binary.
pub fn fallback_options() -> LeptosOptions {
    LeptosOptions::builder()
        .output_name(DEFAULT_OUTPUT_NAME)
        .site_root("target/site")
        .site_pkg_dir("pkg")
        .site_addr(SocketAddr::V4(SocketAddrV4::new(
            Ipv4Addr::UNSPECIFIED,
            DEFAULT_SITE_PORT,
        )))
        .build()
}

pub async fn load_options() -> LeptosOptions {
    match get_configuration(Some("Cargo.toml")).await {
        Ok(conf) => conf.leptos_options,
        Err(err) => {
            warn!("leptos config in Cargo.toml was not found: {}", err);
            fallback_options()
        }
    }
}

pub async fn create_server(config: &ServerConfig) -> Result<Server, ServerErr> {
    let leptos_options = load_options().await;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(studio_leptos::app::App);
    debug!("server: generated {} route(s)", routes.len());

    let config = config.clone();
    let workers = config.workers.get();

    let server = HttpServer::new(move || {
        let pkg_dir = config.pkg_dir();

        App::new()
            .wrap(RequestTrace)
            .app_data(web::Data::new(config.clone()))
            .route("/favicon.ico", web::get().to(favicon))
            .service(Files::new("/assets", &config.assets_root_dir))
            .service(Files::new("/pkg", pkg_dir))
            .leptos_routes(
                leptos_options.to_owned(),
                routes.to_owned(),
                studio_leptos::app::App,
            )
    })
    .workers(workers)
    .bind(addr)
    .map_err(|err| ServerErr::Bind { addr, err })?
    .run();

    info!("listening on http://{}", &addr);

    Ok(server)
}

/// Runs the server until it is stopped, surfacing its io error as [`ServerErr::Io`].
pub async fn run_server(server: Server) -> Result<(), ServerErr> {
    server.await?;
    info!("web server stopped");
    Ok(())
}

/// Logs method, path, status and time taken of every request.
pub struct RequestTrace;

pub struct RequestTraceService<S> {
    service: S,
}

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestTraceService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        trace!("request trace: middleware created");
        ready(Ok(RequestTraceService { service }))
    }
}

impl<S, B> Service<ServiceRequest> for RequestTraceService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.path().to_string();

        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;
            let status = res.status();
            let elapsed = started.elapsed();
            if status.is_server_error() {
                warn!("{} {} {} in {:?}", method, path, status.as_u16(), elapsed);
            } else {
                info!("{} {} {} in {:?}", method, path, status.as_u16(), elapsed);
            }
            Ok(res)
        })
    }
}
