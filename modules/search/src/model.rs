use crate::{
    error::ValidationError,
    query::{Filters, QueryMode, Sort},
};
use deepmac_common::{
    model::{DEFAULT_PAGE_SIZE, Paginated},
    oui,
};
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use encoding_rs::WINDOWS_1252;
use serde::de::{DeserializeOwned, value::MapDeserializer};
use std::{
    collections::BTreeMap,
    future::{Ready, ready},
    num::NonZeroU64,
};

const MAX_MAC_ADDRESS_LEN: usize = 17;
const MAX_DATE_LEN: usize = 10;
const MAX_NAME_LEN: usize = 128;
const MAX_PAGE_SIZE_LEN: usize = 4;

/// Parameters of the result list, as submitted by the search form
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub date: String,
    pub macadd: String,
    pub comp: String,
    pub dev: String,
    pub numresults: String,
    pub page: String,
    pub sort: String,
}

/// Parameters of the details view
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct DetailsParams {
    pub macadd: String,
    pub numresults: String,
    pub page: String,
    pub sort: String,
}

/// Query parameters, decoded as ISO-8859-1.
///
/// Pages are served in that charset, so the form gets submitted in it too. A repeated parameter
/// keeps its last value.
pub struct Latin1Query<T>(pub T);

impl<T: DeserializeOwned> FromRequest for Latin1Query<T> {
    type Error = crate::error::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            from_query(req.query_string())
                .map(Self)
                .map_err(Into::into),
        )
    }
}

/// Deserialize parameters from a raw query string.
pub fn from_query<T: DeserializeOwned>(query: &str) -> Result<T, ValidationError> {
    let pairs: BTreeMap<String, String> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect();

    T::deserialize(MapDeserializer::<_, serde::de::value::Error>::new(
        pairs.into_iter(),
    ))
    .map_err(|err| ValidationError::Malformed(err.to_string()))
}

fn decode(value: &str) -> String {
    // a literal '+' arrives as %2B, so replacing first is safe
    let value = value.replace('+', " ");
    let bytes = urlencoding::decode_binary(value.as_bytes());
    WINDOWS_1252
        .decode_without_bom_handling(&bytes)
        .0
        .into_owned()
}

/// The length of a value, in ISO-8859-1 bytes
fn too_long(value: &str, max: usize) -> bool {
    WINDOWS_1252.encode(value).0.len() > max
}

/// A validated lookup request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub mode: QueryMode,
    pub filters: Filters,
    pub sort: Sort,
    pub paginated: Paginated,
    /// The (trimmed) search terms, to be repeated by links to other pages of the same lookup
    pub terms: Vec<(&'static str, String)>,
}

impl SearchParams {
    pub fn validate(self) -> Result<Request, ValidationError> {
        let date = self.date.trim();
        let macadd = self.macadd.trim();
        let comp = self.comp.trim();
        let dev = self.dev.trim();

        if too_long(comp, MAX_NAME_LEN) {
            return Err(ValidationError::CompanyTooLong(comp.into()));
        }
        if too_long(macadd, MAX_MAC_ADDRESS_LEN) {
            return Err(ValidationError::MacAddressTooLong(macadd.into()));
        }
        if too_long(date, MAX_DATE_LEN) {
            return Err(ValidationError::DateTooLong(date.into()));
        }
        if too_long(dev, MAX_NAME_LEN) {
            return Err(ValidationError::DeviceTooLong(dev.into()));
        }

        let paginated = paginated(&self.numresults, &self.page)?;
        let sort = sort(&self.sort)?;

        Ok(Request {
            mode: QueryMode::List,
            filters: Filters {
                oui: oui::normalize(macadd),
                date: date.into(),
                company: comp.into(),
                device: dev.into(),
            },
            sort,
            paginated,
            terms: vec![
                ("date", date.into()),
                ("macadd", macadd.into()),
                ("comp", comp.into()),
                ("dev", dev.into()),
                ("numresults", paginated.page_size.to_string()),
            ],
        })
    }
}

impl DetailsParams {
    pub fn validate(self) -> Result<Request, ValidationError> {
        let macadd = self.macadd.trim();

        if too_long(macadd, MAX_MAC_ADDRESS_LEN) {
            return Err(ValidationError::MacAddressTooLong(macadd.into()));
        }

        let paginated = paginated(&self.numresults, &self.page)?;
        let sort = sort(&self.sort)?;

        Ok(Request {
            mode: QueryMode::Details,
            filters: Filters {
                // keep more than the OUI, to allow drilling into longer assignments
                oui: oui::strip_separators(macadd),
                ..Default::default()
            },
            sort,
            paginated,
            terms: vec![
                ("macadd", macadd.into()),
                ("numresults", paginated.page_size.to_string()),
            ],
        })
    }
}

/// Parse the page size (`numresults`) and the one-based page number.
fn paginated(numresults: &str, page: &str) -> Result<Paginated, ValidationError> {
    let numresults = numresults.trim();
    let page_size = if numresults.is_empty() {
        DEFAULT_PAGE_SIZE
    } else if numresults.len() > MAX_PAGE_SIZE_LEN || !is_number(numresults) {
        return Err(ValidationError::InvalidPageSize(numresults.into()));
    } else {
        numresults
            .parse()
            .map_err(|_| ValidationError::InvalidPageSize(numresults.into()))?
    };
    let page_size = NonZeroU64::new(page_size)
        .ok_or_else(|| ValidationError::InvalidPageSize(numresults.into()))?;

    let page = page.trim();
    let page = if page.is_empty() {
        0
    } else if is_number(page) {
        page.parse::<u64>()
            .ok()
            .and_then(|page| page.checked_sub(1))
            .ok_or_else(|| ValidationError::InvalidPage(page.into()))?
    } else {
        return Err(ValidationError::InvalidPage(page.into()));
    };

    Ok(Paginated { page_size, page })
}

fn sort(sort: &str) -> Result<Sort, ValidationError> {
    let sort = sort.trim();
    if sort.is_empty() {
        return Ok(Sort::default());
    }
    sort.parse()
        .map_err(|()| ValidationError::InvalidSort(sort.into()))
}

fn is_number(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_digit())
}
