use std::{sync::Arc, net::{SocketAddr, IpAddr, Ipv4Addr}, path::PathBuf, str::FromStr};
use clap::Parser;
use axum::{routing::{get, post}, Router};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;
use reqwest::Client;

pub mod config;
pub mod controllers;
pub mod models;
pub mod render_loop;
pub mod services;
pub mod views;

use config::ApiConfig;
use controllers::index;
use render_loop::{RenderHandle, RenderLoop};
use services::{fetch_service::FetchService, github_user_service::GitHubUserService};


// Command line interface
#[derive(Parser, Debug)]
#[clap(name="smol-profile-view", about="A profile page for one GitHub user and their repositories")]
struct Opt {
    #[clap(short = 'l', long = "log", default_value = "debug")]
    log_level: String,

    #[clap(short = 'a', long = "addr", default_value = "::1")]
    addr: String,

    #[clap(short = 'p', long = "port", default_value = "8080")]
    port: u16,

    #[clap(long = "static_dir", default_value = "static")]
    static_dir: String,

    /// JSON file holding `username` and `token`. Keep it out of source control.
    #[clap(long = "token_file", default_value = "token.json")]
    token_file: PathBuf,

    #[clap(long = "api_base", default_value = config::DEFAULT_API_BASE)]
    api_base: String,
}

pub struct AppState {
    render_handle: RenderHandle,
}

fn app(state: Arc<AppState>, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index::get_index))
        .route("/remount", post(index::post_remount))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(ServiceBuilder::new().layer(
            TraceLayer::new_for_http().on_response(DefaultOnResponse::new().level(Level::INFO)),
        ))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Fetch console arguments
    let opt = Opt::parse();
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", format!("{},hyper=info,mio=info", opt.log_level));
    }
    // Enable console logging
    tracing_subscriber::fmt::init();

    // Register templates
    let registry = views::create_registry().unwrap_or_else(|err| {
        panic!("Failed to register templates!\n{:?}", err);
    });

    // Load credentials
    let credentials = config::load_credentials(&opt.token_file).unwrap_or_else(|err| {
        panic!("Failed to load credentials!\n{}", err);
    });

    // Setup services
    let github_user_service = GitHubUserService {
        fetch: FetchService::new(Client::new()),
        config: ApiConfig::new(&opt.api_base, credentials),
    };

    // Mount the view tree on its own task
    let (render_loop, render_handle) = RenderLoop::new(
        Arc::new(registry),
        Arc::new(github_user_service),
    );
    let render_task = tokio::spawn(render_loop.run());

    // Setup controller routes and inject app state
    let app_state = Arc::new(AppState {
        render_handle: render_handle.clone(),
    });
    let app = app(app_state, &opt.static_dir);

    let sock_addr = SocketAddr::from((
        IpAddr::from_str(opt.addr.as_str()).unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)),
        opt.port
    ));
    log::info!("Now listening on http://{}", sock_addr);

    let server = axum::Server::bind(&sock_addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                log::error!("Failed to listen for shutdown signal: {}", err);
            }
        });
    if let Err(err) = server.await {
        log::error!("Server error: {}", err);
    }

    render_handle.shutdown();
    if let Err(err) = render_task.await {
        log::error!("Render loop panicked: {}", err);
    }
}
