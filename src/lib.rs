pub mod config;
pub mod domain;
pub mod global;
pub mod state;
pub mod utils;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use global::middleware::request_id_middleware;
use state::AppState;
use utils::BaseResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::auth::handler::register,
        domain::auth::handler::login,
        domain::auth::handler::logout,
        domain::auth::handler::me,
        domain::pelicula::handler::listar_publicas,
        domain::pelicula::handler::detalle,
        domain::pelicula::handler::buscar_simple,
        domain::funcion::handler::funciones_por_pelicula,
        domain::reserva::handler::detalle,
        domain::reserva::handler::crear,
        domain::reserva::handler::cancelar,
        domain::sala::handler::listar,
        domain::sala::handler::crear,
        domain::admin::handler::dashboard_stats,
        domain::admin::handler::reportes_summary,
        domain::catalogo::handler::listar_generos,
        domain::catalogo::handler::listar_paises,
    ),
    components(
        schemas(
            domain::auth::dto::RegistroRequest,
            domain::auth::dto::LoginRequest,
            domain::auth::dto::UsuarioResponse,
            domain::auth::dto::LoginResponse,
            domain::auth::dto::SuccessRegistroResponse,
            domain::auth::dto::SuccessLoginResponse,
            domain::auth::dto::SuccessSesionResponse,
            domain::auth::dto::SuccessLogoutResponse,
            domain::usuario::entity::usuario::TipoUsuario,
            domain::pelicula::dto::PeliculaListadoItem,
            domain::pelicula::dto::FiltrosAplicados,
            domain::pelicula::dto::ListadoPeliculasResponse,
            domain::pelicula::dto::FuncionResumen,
            domain::pelicula::dto::PeliculaDetalleResponse,
            domain::pelicula::dto::PeliculaSimpleItem,
            domain::pelicula::dto::SuccessListadoPeliculasResponse,
            domain::pelicula::dto::SuccessPeliculaDetalleResponse,
            domain::funcion::dto::FuncionListadoItem,
            domain::funcion::dto::SuccessFuncionesResponse,
            domain::sala::dto::SalaCrearRequest,
            domain::sala::dto::SalaResponse,
            domain::sala::dto::SalaResumen,
            domain::sala::dto::ListadoSalasResponse,
            domain::sala::dto::SuccessListadoSalasResponse,
            domain::sala::dto::SuccessSalaResponse,
            domain::sala::entity::sala::TipoSala,
            domain::reserva::dto::ReservaCrearRequest,
            domain::reserva::dto::AsientoAsignado,
            domain::reserva::dto::PeliculaReservaInfo,
            domain::reserva::dto::FuncionReservaInfo,
            domain::reserva::dto::ReservaDetalleResponse,
            domain::reserva::dto::SuccessReservaDetalleResponse,
            domain::reserva::entity::reserva::EstadoReserva,
            domain::admin::dto::ConteoPeliculas,
            domain::admin::dto::ReservasDelDia,
            domain::admin::dto::DashboardStatsResponse,
            domain::admin::dto::ReporteSummaryResponse,
            domain::admin::dto::SuccessDashboardStatsResponse,
            domain::admin::dto::SuccessReporteSummaryResponse,
            domain::catalogo::dto::GeneroResponse,
            domain::catalogo::dto::PaisResponse,
            utils::response::Paginacion,
            utils::response::ErrorResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Registro, login y sesión"),
        (name = "Películas", description = "Catálogo público y búsqueda administrativa"),
        (name = "Funciones", description = "Funciones disponibles para reservar"),
        (name = "Reservas", description = "Reservas de asientos"),
        (name = "Salas", description = "Gestión de salas"),
        (name = "Admin", description = "Dashboard y reportes"),
        (name = "Catálogo", description = "Listas de géneros y países")
    )
)]
pub struct ApiDoc;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health))
        // Auth
        .route("/api/auth/register", post(domain::auth::handler::register))
        .route("/api/auth/login", post(domain::auth::handler::login))
        .route("/api/auth/logout", post(domain::auth::handler::logout))
        .route("/api/auth/me", get(domain::auth::handler::me))
        // Catálogo público
        .route(
            "/api/public/peliculas",
            get(domain::pelicula::handler::listar_publicas),
        )
        .route(
            "/api/public/peliculas/:id",
            get(domain::pelicula::handler::detalle),
        )
        .route(
            "/api/cliente/peliculas/:id/funciones",
            get(domain::funcion::handler::funciones_por_pelicula),
        )
        .route("/api/generos", get(domain::catalogo::handler::listar_generos))
        .route("/api/paises", get(domain::catalogo::handler::listar_paises))
        // Reservas
        .route(
            "/api/cliente/reservas",
            post(domain::reserva::handler::crear),
        )
        .route(
            "/api/cliente/reservas/:id",
            get(domain::reserva::handler::detalle),
        )
        .route(
            "/api/cliente/reservas/:id/cancelar",
            post(domain::reserva::handler::cancelar),
        )
        // Administración
        .route(
            "/api/admin/dashboard/stats",
            get(domain::admin::handler::dashboard_stats),
        )
        .route(
            "/api/admin/reportes/summary",
            get(domain::admin::handler::reportes_summary),
        )
        .route(
            "/api/admin/salas",
            get(domain::sala::handler::listar).post(domain::sala::handler::crear),
        )
        .route(
            "/api/admin/peliculas/simple",
            get(domain::pelicula::handler::buscar_simple),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

async fn health() -> Json<BaseResponse<&'static str>> {
    Json(BaseResponse::success("OK"))
}
