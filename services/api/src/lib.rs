mod cli;
mod demo;
mod infra;
mod inspect;
mod routes;
mod server;

use border_checkpoint::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
