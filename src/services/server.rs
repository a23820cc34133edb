use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use log::info;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::create_router;
use crate::services::context::AppContext;

pub struct ServerService {
    context: Arc<AppContext>,
}

impl ServerService {
    pub fn new(context: AppContext) -> Self {
        Self {
            context: Arc::new(context),
        }
    }

    pub async fn run(&self) -> Result<()> {
        let app = create_router(Arc::clone(&self.context))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.context.config().server.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
