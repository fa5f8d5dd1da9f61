pub mod admin;
pub mod auth;
pub mod catalogo;
pub mod funcion;
pub mod pelicula;
pub mod reserva;
pub mod sala;
pub mod usuario;
