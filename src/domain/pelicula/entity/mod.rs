pub mod pelicula;
pub mod pelicula_genero;
