//! # wirecall entry point
//!
//! Executes one request described on the command line and prints the
//! recorded response.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};
use wirecall::cmd_args::CommandLineArgs;
use wirecall::config::{get_profile_path, load_client_config};
use wirecall::{Body, ContentType, HttpClient, Request, Response};

fn main() -> Result<()> {
    init_tracing_subscriber();

    let cmd_args = CommandLineArgs::parse();

    let profile_path = get_profile_path();
    tracing::debug!(
        "Loading profile '{}' from '{}'",
        cmd_args.profile(),
        profile_path
    );
    let config = load_client_config(&profile_path, cmd_args.profile())?;

    let client = HttpClient::new(&config).context("Failed to create HTTP client")?;
    let request = build_request(&cmd_args);
    let response = client
        .execute(&request)
        .with_context(|| format!("{} {} failed", request.method, request.uri))?;

    if cmd_args.json() {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_response(&response, cmd_args.verbose());
    }

    Ok(())
}

fn build_request(args: &CommandLineArgs) -> Request {
    let mut request = Request::new(args.method().as_str(), args.url().as_str());
    for (name, value) in args.headers() {
        request.headers.add(name.as_str(), value.as_str());
    }
    if let Some(data) = args.data() {
        request.body = Body::new(ContentType::Text, data.as_bytes());
    }
    request
}

fn print_response(response: &Response, verbose: bool) {
    println!(
        "{} ({} ms, {} bytes)",
        response.status, response.time, response.size
    );

    if verbose {
        let mut names: Vec<&String> = response.headers.headers.keys().collect();
        names.sort();
        for name in names {
            for value in &response.headers.headers[name].values {
                println!("{name}: {value}");
            }
        }
        for cookie in response.cookies.cookies.values() {
            println!("cookie {}={}", cookie.code, cookie.value);
        }
    }

    println!();
    println!("{}", response.body.text());
}

fn init_tracing_subscriber() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_env(format!(
                "{}_LOG_LEVEL",
                env!("CARGO_PKG_NAME").to_uppercase()
            ))
            .add_directive("reqwest=warn".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("hyper_util=warn".parse().unwrap())
            .add_directive("rustls=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
}
