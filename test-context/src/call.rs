use actix_http::Request;
use actix_web::{
    Error,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    web::Bytes,
};
use std::future::Future;

/// A rendered page, decoded from its ISO-8859-1 body
#[derive(Clone, Debug)]
pub struct Page {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

/// A trait wrapping an `impl Service` in a way that we can pass it as a reference.
pub trait CallService {
    fn call_service(&self, s: Request) -> impl Future<Output = ServiceResponse>;
    fn call_and_read_body(&self, r: Request) -> impl Future<Output = Bytes>;
    fn call_and_read_page(&self, r: Request) -> impl Future<Output = Page>;
}

impl<S> CallService for S
where
    S: Service<Request, Response = ServiceResponse, Error = Error>,
{
    async fn call_service(&self, r: Request) -> ServiceResponse {
        actix_web::test::call_service(self, r).await
    }

    async fn call_and_read_body(&self, r: Request) -> Bytes {
        actix_web::test::call_and_read_body(self, r).await
    }

    async fn call_and_read_page(&self, r: Request) -> Page {
        let response = self.call_service(r).await;
        let status = response.status();
        let content_type = response
            .headers()
            .get(actix_web::http::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);
        let body = actix_web::test::read_body(response).await;
        let (body, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(&body);

        Page {
            status,
            content_type,
            body: body.into_owned(),
        }
    }
}
