use std::env;
use std::process::ExitCode;

use dotenv::dotenv;
use studio_actix::config::ServerConfig;
use studio_actix::server::{create_server, run_server};
use tracing::{error, trace};

#[actix_web::main]
async fn main() -> ExitCode {
    dotenv().ok();
    let subscriber = tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_file(true)
                .with_line_number(true),
        )
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    if let Err(err) = subscriber {
        eprintln!("failed to install tracing subscriber: {}", err);
    }

    trace!("started!");

    match env::current_dir() {
        Ok(path) => trace!("current working directory is {}", path.display()),
        Err(err) => error!("failed to read current working directory: {}", err),
    }

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("invalid configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let web_server = match create_server(&config).await {
        Ok(server) => server,
        Err(err) => {
            error!("failed to start web server: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = run_server(web_server).await {
        error!("{}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
