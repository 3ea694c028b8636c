use actix_web::{App, HttpServer};
use studio_actix::server::run_server;

#[actix_web::test]
async fn stopped_server_returns_ok() {
    let server = HttpServer::new(App::new)
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("failed to bind test server")
        .run();
    let handle = server.handle();

    actix_web::rt::spawn(async move {
        handle.stop(true).await;
    });

    assert!(run_server(server).await.is_ok());
}
