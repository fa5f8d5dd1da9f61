//! Tests del listado público de películas
//!
//! Cubre:
//! - Mapeo etiqueta de UI → enum de clasificación
//! - Parseo del criterio de ordenación y su valor por defecto
//! - Acotado del límite de paginación
//! - Metadatos de paginación

use cine_server::domain::pelicula::dto::{
    FiltrosPeliculas, OrdenPeliculas, PeliculaListadoItem, LIMITE_MAX_PELICULAS,
};
use cine_server::domain::pelicula::entity::pelicula::Clasificacion;
use cine_server::utils::response::Paginacion;

// ============== Clasificación ==============

#[test]
fn mapea_etiquetas_de_ui_al_enum() {
    assert_eq!(Clasificacion::from_etiqueta("G"), Some(Clasificacion::G));
    assert_eq!(Clasificacion::from_etiqueta("PG"), Some(Clasificacion::Pg));
    assert_eq!(
        Clasificacion::from_etiqueta("PG-13"),
        Some(Clasificacion::Pg13)
    );
    assert_eq!(Clasificacion::from_etiqueta("R"), Some(Clasificacion::R));
    assert_eq!(
        Clasificacion::from_etiqueta("NC-17"),
        Some(Clasificacion::Nc17)
    );
}

#[test]
fn acepta_tambien_la_forma_interna() {
    assert_eq!(
        Clasificacion::from_etiqueta("PG_13"),
        Some(Clasificacion::Pg13)
    );
    assert_eq!(
        Clasificacion::from_etiqueta("NC_17"),
        Some(Clasificacion::Nc17)
    );
}

#[test]
fn rechaza_etiquetas_desconocidas() {
    assert_eq!(Clasificacion::from_etiqueta("X"), None);
    assert_eq!(Clasificacion::from_etiqueta(""), None);
    assert_eq!(Clasificacion::from_etiqueta("pg-13"), None);
}

#[test]
fn la_etiqueta_y_el_mapeo_son_inversos() {
    for clasificacion in [
        Clasificacion::G,
        Clasificacion::Pg,
        Clasificacion::Pg13,
        Clasificacion::R,
        Clasificacion::Nc17,
    ] {
        assert_eq!(
            Clasificacion::from_etiqueta(clasificacion.etiqueta()),
            Some(clasificacion)
        );
    }
}

// ============== Ordenación ==============

#[test]
fn parsea_los_criterios_soportados() {
    assert_eq!(
        OrdenPeliculas::parsear(Some("titulo")),
        OrdenPeliculas::Titulo
    );
    assert_eq!(
        OrdenPeliculas::parsear(Some("puntuacion")),
        OrdenPeliculas::Puntuacion
    );
    assert_eq!(
        OrdenPeliculas::parsear(Some("fecha_estreno")),
        OrdenPeliculas::FechaEstreno
    );
}

#[test]
fn ordena_por_fecha_de_estreno_por_defecto() {
    assert_eq!(OrdenPeliculas::parsear(None), OrdenPeliculas::FechaEstreno);
    assert_eq!(
        OrdenPeliculas::parsear(Some("desconocido")),
        OrdenPeliculas::FechaEstreno
    );
}

// ============== Límite de paginación ==============

#[test]
fn el_limite_se_acota_a_50_sea_cual_sea_lo_pedido() {
    let filtros = FiltrosPeliculas {
        limit: Some(5000),
        ..Default::default()
    };

    assert_eq!(filtros.limite(), LIMITE_MAX_PELICULAS);
}

#[test]
fn el_limite_cero_se_eleva_a_uno() {
    let filtros = FiltrosPeliculas {
        limit: Some(0),
        ..Default::default()
    };

    assert_eq!(filtros.limite(), 1);
}

#[test]
fn sin_limite_se_usa_el_maximo() {
    let filtros = FiltrosPeliculas::default();

    assert_eq!(filtros.limite(), LIMITE_MAX_PELICULAS);
    assert_eq!(filtros.pagina(), 1);
}

#[test]
fn la_pagina_cero_se_eleva_a_uno() {
    let filtros = FiltrosPeliculas {
        page: Some(0),
        ..Default::default()
    };

    assert_eq!(filtros.pagina(), 1);
}

// ============== Metadatos de paginación ==============

#[test]
fn calcula_las_paginas_redondeando_hacia_arriba() {
    let p = Paginacion::nueva(101, 1, 50);

    assert_eq!(p.total_paginas, 3);
    assert!(p.tiene_siguiente_pagina);
    assert!(!p.tiene_anterior_pagina);
}

#[test]
fn la_ultima_pagina_no_tiene_siguiente() {
    let p = Paginacion::nueva(100, 2, 50);

    assert_eq!(p.total_paginas, 2);
    assert!(!p.tiene_siguiente_pagina);
    assert!(p.tiene_anterior_pagina);
}

#[test]
fn un_listado_vacio_no_tiene_paginas() {
    let p = Paginacion::nueva(0, 1, 50);

    assert_eq!(p.total_paginas, 0);
    assert!(!p.tiene_siguiente_pagina);
    assert!(!p.tiene_anterior_pagina);
}

// ============== Serialización ==============

#[test]
fn el_item_del_listado_serializa_en_camel_case() {
    let item = PeliculaListadoItem {
        pelicula_id: 3,
        titulo: "La llegada".to_string(),
        poster_url: None,
        clasificacion: "PG-13".to_string(),
        duracion_minutos: 116,
        puntuacion_imdb: 7.9,
        fecha_estreno_local: "2016-11-11".to_string(),
        generos: "Ciencia ficción, Drama".to_string(),
    };

    let json = serde_json::to_string(&item).unwrap();

    assert!(json.contains("peliculaId"));
    assert!(json.contains("fechaEstrenoLocal"));
    assert!(json.contains("\"clasificacion\":\"PG-13\""));
    assert!(json.contains("\"generos\":\"Ciencia ficción, Drama\""));
}
