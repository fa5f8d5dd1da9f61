pub mod genero;
pub mod pais;
