use serde::Serialize;
use utoipa::ToSchema;

/// Respuesta base de la API
///
/// Formato:
/// ```json
/// {
///   "isSuccess": true,
///   "code": "COMMON200",
///   "message": "Operación exitosa.",
///   "result": { ... }
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseResponse<T: Serialize> {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Option<T>,
}

impl<T: Serialize> BaseResponse<T> {
    /// Respuesta de éxito (200)
    pub fn success(result: T) -> Self {
        Self {
            is_success: true,
            code: "COMMON200".to_string(),
            message: "Operación exitosa.".to_string(),
            result: Some(result),
        }
    }

    /// Respuesta de recurso creado (201)
    pub fn created(result: T) -> Self {
        Self {
            is_success: true,
            code: "COMMON201".to_string(),
            message: "Recurso creado exitosamente.".to_string(),
            result: Some(result),
        }
    }
}

/// Respuesta de error
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Option<()>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            code: code.into(),
            message: message.into(),
            result: None,
        }
    }
}

/// Metadatos de paginación compartidos por los listados
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Paginacion {
    pub total: u64,
    pub pagina: u64,
    pub limite: u64,
    pub total_paginas: u64,
    pub tiene_siguiente_pagina: bool,
    pub tiene_anterior_pagina: bool,
}

impl Paginacion {
    /// Calcula los metadatos a partir del total de filas y la página pedida.
    /// `pagina` es 1-indexada; `limite` ya debe venir acotado por el endpoint.
    pub fn nueva(total: u64, pagina: u64, limite: u64) -> Self {
        let limite = limite.max(1);
        let pagina = pagina.max(1);
        let total_paginas = total.div_ceil(limite);

        Self {
            total,
            pagina,
            limite,
            total_paginas,
            tiene_siguiente_pagina: pagina < total_paginas,
            tiene_anterior_pagina: pagina > 1 && total > 0,
        }
    }
}
