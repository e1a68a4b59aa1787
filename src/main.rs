use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use vehicle_rental::config::database::DatabaseConfig;
use vehicle_rental::config::environment::EnvironmentConfig;
use vehicle_rental::database::connection::mask_database_url;
use vehicle_rental::database::DatabaseConnection;
use vehicle_rental::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use vehicle_rental::routes;
use vehicle_rental::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Vehicle Rental API");
    info!("=====================");

    let config = EnvironmentConfig::from_env();

    // Inicializar base de datos
    let db_config = DatabaseConfig::default();
    info!("📦 Conectando a {}", mask_database_url(&db_config.url));

    let db_connection = match DatabaseConnection::new(&db_config).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if let Err(e) = db_connection.run_migrations().await {
        error!("❌ Error ejecutando migraciones: {}", e);
        return Err(anyhow::anyhow!("Error de migraciones: {}", e));
    }

    // CORS: permisivo en desarrollo, orígenes explícitos si se configuran
    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let state = AppState::new(db_connection.pool().clone(), config.clone());

    let app = routes::create_api_router()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/docs/openapi.json - Documento OpenAPI");
    info!("🚗 Endpoints - Vehicle:");
    info!("   POST   /api/vehicle/create - Crear vehículo");
    info!("   GET    /api/vehicle/read/:id - Obtener vehículo");
    info!("   PUT    /api/vehicle/update/:id - Actualizar vehículo");
    info!("   DELETE /api/vehicle/delete/:id - Eliminar vehículo");
    info!("   GET    /api/vehicle/list - Listar vehículos");
    info!("🏷️ Endpoints - Brand:");
    info!("   GET    /api/brand/list - Listar marcas");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
