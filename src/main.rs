use std::net::SocketAddr;

use cine_server::config::{establish_connection, AppConfig};
use cine_server::state::AppState;
use cine_server::utils::logging::init_logging;

#[tokio::main]
async fn main() {
    // 1. Variables de entorno
    dotenvy::dotenv().ok();

    // 2. Logging (el guard debe vivir hasta el final del proceso)
    let _guard = init_logging();

    // 3. Configuración
    let config = AppConfig::from_env().expect("Configuración inválida");

    // 4. Base de datos
    let db = establish_connection(&config.database_url)
        .await
        .expect("No se pudo conectar a la base de datos");

    // 5. Router y servidor
    let server_port = config.server_port;
    let state = AppState { db, config };
    let app = cine_server::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], server_port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("No se pudo abrir el puerto");
    axum::serve(listener, app).await.expect("El servidor falló");
}
