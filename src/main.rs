use dotenv::dotenv;
use rolodex_web::prelude::{AppError, run_app};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AppError> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    run_app()
}
