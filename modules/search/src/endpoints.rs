use crate::{
    error::Error,
    model::{DetailsParams, Latin1Query, SearchParams},
    render::{self, grid},
    service::SearchService,
};
use actix_web::{HttpResponse, get, web};
use deepmac_common::{db::Database, model::DEFAULT_PAGE_SIZE};

/// mount the "search" module
pub fn configure(svc: &mut web::ServiceConfig, db: Database) {
    svc.app_data(web::Data::new(SearchService::new(db)))
        .service(index)
        .service(search)
        .service(details);
}

#[get("/")]
/// The search form
async fn index(service: web::Data<SearchService>) -> Result<HttpResponse, Error> {
    service.ping().await?;
    Ok(render::index(DEFAULT_PAGE_SIZE)?)
}

#[get("/search")]
/// Search for assignments
async fn search(
    Latin1Query(params): Latin1Query<SearchParams>,
    service: web::Data<SearchService>,
) -> Result<HttpResponse, Error> {
    let request = params
        .validate()
        .inspect_err(|err| log::info!("Rejecting search: {err}"))?;

    let results = service.search(&request).await?;
    Ok(render::results(&grid::list(), &results, &request)?)
}

#[get("/details")]
/// Show the details of a prefix
async fn details(
    Latin1Query(params): Latin1Query<DetailsParams>,
    service: web::Data<SearchService>,
) -> Result<HttpResponse, Error> {
    let request = params
        .validate()
        .inspect_err(|err| log::info!("Rejecting details: {err}"))?;

    let results = service.details(&request).await?;
    Ok(render::results(&grid::details(), &results, &request)?)
}
