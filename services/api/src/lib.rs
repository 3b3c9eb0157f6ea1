mod assess;
mod cli;
mod infra;
mod routes;
mod server;

use router_checklist::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
