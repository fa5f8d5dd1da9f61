use crate::domain::{
    catalogo::entity::{genero, pais},
    funcion::entity::funcion,
    pelicula::entity::{pelicula, pelicula_genero},
    reserva::entity::{reserva, reserva_asiento},
    sala::entity::{asiento, sala},
    usuario::entity::usuario,
};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Schema, Statement};
use std::env;
use tracing::info;

pub async fn establish_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;
    info!("Successfully connected to the database.");

    let should_update_schema = env::var("DB_SCHEMA_UPDATE")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid DB_SCHEMA_UPDATE value, defaulting to false. Use 'true' or 'false'."
            );
            false
        });

    if should_update_schema {
        create_tables(&db).await?;
    } else {
        info!("Skipping database schema synchronization (DB_SCHEMA_UPDATE is not true).");
    }

    Ok(db)
}

async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    info!("Starting database schema synchronization...");

    // El orden importa por las claves foráneas (padres antes que hijos)

    // 1. Entidades independientes
    create_table_if_not_exists(db, &schema, usuario::Entity).await?;
    create_table_if_not_exists(db, &schema, genero::Entity).await?;
    create_table_if_not_exists(db, &schema, pais::Entity).await?;
    create_table_if_not_exists(db, &schema, sala::Entity).await?;

    // 2. Dependientes de nivel 1
    create_table_if_not_exists(db, &schema, pelicula::Entity).await?;
    create_table_if_not_exists(db, &schema, asiento::Entity).await?;

    // 3. Dependientes de nivel 2 y tablas de unión
    create_table_if_not_exists(db, &schema, pelicula_genero::Entity).await?;
    create_table_if_not_exists(db, &schema, funcion::Entity).await?;

    // 4. Reservas
    create_table_if_not_exists(db, &schema, reserva::Entity).await?;
    create_table_if_not_exists(db, &schema, reserva_asiento::Entity).await?;

    // Un asiento no puede reservarse dos veces para la misma función.
    // Los vínculos de reservas canceladas/expiradas se eliminan, así que
    // el índice cubre exactamente las ocupaciones vivas.
    create_unique_index_if_not_exists(
        db,
        "uq_reserva_asiento_funcion_asiento",
        "reserva_asiento",
        &["funcion_id", "asiento_id"],
    )
    .await?;

    // Índices para las consultas del dashboard y los listados
    create_index_if_not_exists(
        db,
        "idx_funcion_inicio",
        "funcion",
        &["fecha_hora_inicio"],
    )
    .await?;
    create_index_if_not_exists(db, "idx_reserva_fecha", "reserva", &["fecha_reserva"]).await?;
    create_index_if_not_exists(db, "idx_reserva_funcion", "reserva", &["funcion_id"]).await?;

    info!("Database schema synchronization completed.");
    Ok(())
}

async fn create_index_if_not_exists(
    db: &DatabaseConnection,
    index_name: &str,
    table_name: &str,
    columns: &[&str],
) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let cols = columns.join(", ");
    let sql = format!("CREATE INDEX {} ON {} ({})", index_name, table_name, cols);
    let stmt = Statement::from_string(backend, sql);
    match db.execute(stmt).await {
        Ok(_) => Ok(()),
        Err(e) => {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("duplicate")
                || err_str.contains("already exists")
                || err_str.contains("exists")
            {
                Ok(())
            } else {
                tracing::error!("Failed to create index {}: {}", index_name, e);
                Err(e)
            }
        }
    }
}

async fn create_unique_index_if_not_exists(
    db: &DatabaseConnection,
    index_name: &str,
    table_name: &str,
    columns: &[&str],
) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let cols = columns.join(", ");
    let sql = format!(
        "CREATE UNIQUE INDEX {} ON {} ({})",
        index_name, table_name, cols
    );
    let stmt = Statement::from_string(backend, sql);
    match db.execute(stmt).await {
        Ok(_) => Ok(()),
        Err(e) => {
            // Ignorar índices ya creados para que el arranque sea idempotente
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("duplicate")
                || err_str.contains("already exists")
                || err_str.contains("exists")
            {
                Ok(())
            } else {
                tracing::error!("Failed to create unique index {}: {}", index_name, e);
                Err(e)
            }
        }
    }
}

async fn create_table_if_not_exists<E>(
    db: &DatabaseConnection,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr>
where
    E: sea_orm::EntityTrait,
{
    let backend = db.get_database_backend();
    let create_stmt: Statement =
        backend.build(schema.create_table_from_entity(entity).if_not_exists());

    match db.execute(create_stmt).await {
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::error!("Failed to create table: {}", e);
            Err(e)
        }
    }
}
