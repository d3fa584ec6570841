use anyhow::Result;
use clap::Parser;
use urlsafe_core::checker::UrlChecker;
use urlsafe_core::logging;

mod api;

use api::AppState;

/// HTTP front end for the urlsafe reachability checker.
#[derive(Debug, Parser)]
#[command(name = "urlsafed")]
#[command(about = "urlsafed: URL reachability checking service", long_about = None)]
struct Args {
    /// Socket address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: String,
}

#[async_std::main]
async fn main() -> Result<()> {
    // Initialize logging as early as possible.
    logging::init_logging();

    let args = Args::parse();
    let state = AppState::new(UrlChecker::new());

    let mut app = tide::with_state(state);
    app.at("/*url").get(api::check_url);

    tracing::info!("urlsafed listening on {}", args.listen);
    app.listen(args.listen).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_default_listen_address() {
        let args = Args::try_parse_from(["urlsafed"]).unwrap();
        assert_eq!(args.listen, "127.0.0.1:8080");
    }

    #[test]
    fn args_listen_override() {
        let args = Args::try_parse_from(["urlsafed", "--listen", "0.0.0.0:9000"]).unwrap();
        assert_eq!(args.listen, "0.0.0.0:9000");
    }
}
