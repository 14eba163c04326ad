//! Command line front end: `reinhardt PORT DIR` or `reinhardt --config FILE`.

use std::process::ExitCode;

use log::error;
use reinhardt::{HttpServer, ServerConfig, ServerError};

fn config_from_args(args: &[String]) -> Option<Result<ServerConfig, ServerError>> {
    match args {
        [flag, file] if flag == "--config" => Some(ServerConfig::from_json_file(file)),
        [port, dir] => {
            let port = port.parse().ok()?;
            Some(Ok(ServerConfig::new(port, dir)))
        }
        _ => None,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("reinhardt");

    let config = match config_from_args(args.get(1..).unwrap_or_default()) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            error!("Could not load configuration: {e}");
            return ExitCode::FAILURE;
        }
        None => {
            eprintln!("Usage: {program} PORT DIR");
            eprintln!("       {program} --config FILE");
            return ExitCode::FAILURE;
        }
    };

    let server = HttpServer::new(config);
    if let Err(e) = server.start().await {
        error!("Server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
