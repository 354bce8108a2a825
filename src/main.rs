use std::sync::Arc;
use tokio::signal;
use userdir::api;
use userdir::logger::*;
use userdir::server::*;
use userdir::settings::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logger = Logger::new_bootstrap();

    let project_settings = parse_settings(cli.settings.as_deref())?;
    info!(?project_settings);
    let logger_config = LogConfig {
        filter: project_settings.log.filter.clone(),
    };
    logger.reload_from_config(&logger_config)?;

    let address = project_settings.http.socket_addr()?;
    let server = Arc::new(Server::try_new(&project_settings)?);

    let (bound, serving) =
        warp::serve(api::app(server)).try_bind_with_graceful_shutdown(address, async {
            if let Err(e) = signal::ctrl_c().await {
                error!("could not register SIGINT: {}", e);
                std::future::pending::<()>().await;
            }
        })?;
    info!(%bound, "listening");

    serving.await;
    info!("server shutdown successfully");

    Ok(())
}
