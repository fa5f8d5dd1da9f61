//! Inicialización del logging estructurado en JSON.
//! Escribe a stdout y a un archivo diario en paralelo.

use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Inicializa el sistema de logging.
///
/// El nivel se controla con `RUST_LOG` (por defecto `info,cine_server=debug`)
/// y el directorio de archivos con `LOG_DIR` (por defecto `logs/`).
///
/// El `WorkerGuard` devuelto debe mantenerse vivo en `main`; si se suelta,
/// los logs bufferizados se pierden al terminar el proceso.
pub fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

    let file_appender = rolling::daily(&log_dir, "cine-server.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let stdout_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_current_span(true);

    let file_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_current_span(true)
        .with_ansi(false)
        .with_writer(non_blocking);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cine_server=debug"));

    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
    {
        // Un subscriber ya registrado (p. ej. en tests) no es fatal
        eprintln!("No se pudo inicializar el logging: {}", err);
    }

    guard
}
