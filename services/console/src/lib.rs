mod cli;
mod demo;
mod infra;

use hireboard::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
