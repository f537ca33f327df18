use anyhow::Result;
use axum::{routing::get, Json, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use fleet_management::config::environment::EnvironmentConfig;
use fleet_management::database::{create_pool, run_migrations};
use fleet_management::middleware::cors::cors_middleware;
use fleet_management::routes;
use fleet_management::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚚 Fleet Management System - API");
    info!("================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let pool = match create_pool(Some(&config.database_url)).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if let Err(e) = run_migrations(&pool).await {
        error!("❌ Error aplicando el schema: {}", e);
        return Err(anyhow::anyhow!("Error de schema: {}", e));
    }
    info!("✅ Base de datos lista");

    // Crear router de la API
    let app_state = AppState::new(pool, config.clone());

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/vehicle", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/driver", routes::driver_routes::create_driver_router())
        .nest(
            "/api/assignment",
            routes::assignment_routes::create_assignment_router(),
        )
        .nest(
            "/api/compliance",
            routes::compliance_routes::create_compliance_router(),
        )
        .nest(
            "/api/maintenance",
            routes::maintenance_routes::create_maintenance_router(),
        )
        .nest("/api/report", routes::report_routes::create_report_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(app_state);

    let addr: SocketAddr = config.server_addr().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚗 Vehicle:");
    info!("   POST /api/vehicle - Registrar vehículo");
    info!("   GET  /api/vehicle - Listar vehículos");
    info!("   GET  /api/vehicle/:plate - Obtener vehículo");
    info!("   PUT  /api/vehicle/:plate - Actualizar vehículo");
    info!("   DELETE /api/vehicle/:plate - Eliminar vehículo");
    info!("🧑 Driver:");
    info!("   POST /api/driver - Registrar conductor");
    info!("   GET  /api/driver - Listar conductores");
    info!("   GET  /api/driver/:id - Obtener conductor");
    info!("   PUT  /api/driver/:id - Actualizar conductor");
    info!("   DELETE /api/driver/:id - Eliminar conductor");
    info!("📋 Assignment:");
    info!("   POST /api/assignment - Crear asignación");
    info!("   GET  /api/assignment - Listar asignaciones");
    info!("   PUT  /api/assignment/:id - Actualizar asignación");
    info!("   DELETE /api/assignment/:id - Eliminar asignación");
    info!("🛡 Compliance:");
    info!("   GET  /api/compliance/:plate - Obtener compliance");
    info!("   PUT  /api/compliance/:plate - Guardar compliance");
    info!("🔧 Maintenance:");
    info!("   POST /api/maintenance/:plate - Registrar servicio");
    info!("   GET  /api/maintenance/:plate - Historial del vehículo");
    info!("   DELETE /api/maintenance/record/:id - Eliminar registro");
    info!("📊 Reports:");
    info!("   GET  /api/report/dashboard - Conteos y listas top-N");
    info!("   GET  /api/report/assignment-summary - Resumen de asignaciones");
    info!("   GET  /api/report/unassigned-vehicles - Vehículos sin asignar");
    info!("   GET  /api/report/driver-assignments - Roster de conductores");
    info!("   GET  /api/report/vehicle/:plate - Reporte de vehículo");
    info!("   GET  /api/report/driver - Reporte de conductor");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "fleet-management",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
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
