mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use resume_screener::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
