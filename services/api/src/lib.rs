mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use woning_ai::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
