use crate::{
    error::Error,
    model::Request,
    query::{DetailRow, SearchRow, compose},
};
use deepmac_common::{
    db::{Database, DatabaseErrors},
    model::PaginatedResults,
};
use sea_orm::{ConnectionTrait, DbErr, FromQueryResult, PaginatorTrait};
use tracing::instrument;

pub struct SearchService {
    db: Database,
}

impl SearchService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Check that the store can be reached.
    #[instrument(skip(self), err(level=tracing::Level::INFO))]
    pub async fn ping(&self) -> Result<(), Error> {
        self.db.ping().await.map_err(|err| {
            log::warn!("Failed to reach the database: {err:#}");
            self.connection_error()
        })
    }

    /// Look up one page of the result list.
    #[instrument(skip(self), err(level=tracing::Level::INFO))]
    pub async fn search(&self, request: &Request) -> Result<PaginatedResults<SearchRow>, Error> {
        self.fetch(request).await
    }

    /// Look up one page of the details view.
    #[instrument(skip(self), err(level=tracing::Level::INFO))]
    pub async fn details(&self, request: &Request) -> Result<PaginatedResults<DetailRow>, Error> {
        self.fetch(request).await
    }

    async fn fetch<R>(&self, request: &Request) -> Result<PaginatedResults<R>, Error>
    where
        R: FromQueryResult + Send + Sync + 'static,
    {
        let select = compose(
            request.mode,
            &request.filters,
            request.sort,
            self.db.get_database_backend(),
        );

        let paginator = select
            .into_model::<R>()
            .paginate(&self.db, request.paginated.page_size.get());

        PaginatedResults::fetch(request.paginated, &paginator)
            .await
            .map_err(|err| self.query_error(err))
    }

    fn connection_error(&self) -> Error {
        Error::Connection {
            host: self.db.host().to_string(),
            user: self.db.user().to_string(),
        }
    }

    fn query_error(&self, err: DbErr) -> Error {
        if err.is_connection() {
            log::warn!("Failed to connect to the database: {err}");
            self.connection_error()
        } else {
            log::warn!("Failed to run lookup: {err}");
            Error::Query(err)
        }
    }
}
