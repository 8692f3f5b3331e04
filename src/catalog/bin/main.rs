include!("../../lib.rs");
use lambda_http::{run, Error};
use crate::books::factory::create_database;
use crate::core::controller::AppState;
use crate::core::domain::{Configuration, RunMode};
use crate::routes::build_router;
use crate::utils::logs::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Configuration::from_env()?;
    setup_tracing(config.log_level);

    let database = create_database(config.store).await?;
    let state = AppState::new(config.clone(), database);

    match config.run_mode {
        RunMode::Local => {
            tracing::info!(branch = config.branch_id.as_str(), addr = %config.listen_addr,
                "GraphQL server is running on /books-graphql, RESTful server is running on /books");
            let app = build_router::<axum::body::Body>(state);
            axum::Server::bind(&config.listen_addr)
                .serve(app.into_make_service())
                .await?;
            Ok(())
        }
        RunMode::Lambda => {
            tracing::info!(branch = config.branch_id.as_str(), "starting book service lambda");
            run(build_router::<lambda_http::Body>(state)).await
        }
    }
}
