use super::error::AppError;

/// Factor de costo de bcrypt para hashes nuevos
pub const COSTO_BCRYPT: u32 = 12;

/// Hashea una contraseña en claro con sal aleatoria
pub fn hashear_contrasena(plain: &str) -> Result<String, AppError> {
    bcrypt::hash(plain, COSTO_BCRYPT)
        .map_err(|e| AppError::InternalError(format!("No se pudo hashear la contraseña: {}", e)))
}

/// Compara una contraseña en claro contra un hash almacenado.
/// Un hash corrupto cuenta como no-coincidencia, nunca como error.
pub fn verificar_contrasena(plain: &str, hash: &str) -> bool {
    bcrypt::verify(plain, hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_y_verificacion_coinciden() {
        // Costo bajo para que el test sea rápido
        let hash = bcrypt::hash("secreta123", 4).unwrap();

        assert!(verificar_contrasena("secreta123", &hash));
        assert!(!verificar_contrasena("otra_clave", &hash));
    }

    #[test]
    fn hash_corrupto_no_coincide() {
        assert!(!verificar_contrasena("secreta123", "no-es-un-hash"));
    }

    #[test]
    fn cada_hash_lleva_sal_distinta() {
        let a = bcrypt::hash("secreta123", 4).unwrap();
        let b = bcrypt::hash("secreta123", 4).unwrap();
        assert_ne!(a, b);
    }
}
