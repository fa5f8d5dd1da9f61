pub mod funcion;
