#![allow(clippy::expect_used)]

pub mod call;
pub mod fixtures;

use deepmac_common::{config, db::Database};
use deepmac_entity::{company, device, media, model, oui};
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, Schema};
use test_context::AsyncTestContext;
use tracing::instrument;

/// A private, in-memory store, seeded with [`fixtures`].
pub struct DeepmacContext {
    pub db: Database,
}

impl DeepmacContext {
    /// Create an empty store, only containing the tables.
    pub async fn empty() -> Result<Self, anyhow::Error> {
        let db = Database::new(&config::Database::in_memory()).await?;
        create_tables(&db).await?;
        Ok(Self { db })
    }

    /// Create a store with the default fixtures.
    pub async fn seeded() -> Result<Self, anyhow::Error> {
        let ctx = Self::empty().await?;
        fixtures::seed(&ctx.db).await?;
        Ok(ctx)
    }
}

async fn create_tables(db: &Database) -> Result<(), anyhow::Error> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    // lookup tables first, the assignments reference them
    let statements = [
        schema.create_table_from_entity(company::Entity),
        schema.create_table_from_entity(media::Entity),
        schema.create_table_from_entity(device::Entity),
        schema.create_table_from_entity(model::Entity),
        schema.create_table_from_entity(oui::Entity),
    ];

    for statement in statements {
        db.execute(backend.build(&statement)).await?;
    }

    Ok(())
}

impl AsyncTestContext for DeepmacContext {
    #[instrument]
    async fn setup() -> DeepmacContext {
        DeepmacContext::seeded()
            .await
            .expect("Create an in-memory database")
    }

    async fn teardown(self) {
        if let Err(err) = self.db.close().await {
            log::warn!("Failed to close the database: {err}");
        }
    }
}

/// Count the rows of an entity's table.
pub async fn count<E: EntityTrait>(db: &Database) -> Result<u64, anyhow::Error>
where
    E::Model: Sync,
{
    Ok(E::find().count(db).await?)
}
