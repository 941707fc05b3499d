//! The result table, with its pager and sortable headers.

use super::vendor::{name_and_country, vendor_block};
use crate::{
    model::Request,
    query::{DetailRow, SearchRow, Sort, SortField},
};
use deepmac_common::model::PaginatedResults;
use encoding_rs::WINDOWS_1252;
use serde::Serialize;
use tera::escape_html;
use url::form_urlencoded;

/// Number of page links shown on each side of the current page
const PAGER_DELTA: u64 = 5;

/// The page size used when following a prefix into the details view
const DETAILS_PAGE_SIZE: u64 = 10;

pub type Format<R> = Box<dyn Fn(&R) -> String + Send + Sync>;

/// A column of the table, rendering a cell through `format`.
pub struct Column<R> {
    pub title: &'static str,
    pub sort: Option<SortField>,
    pub centered: bool,
    format: Format<R>,
}

impl<R> Column<R> {
    /// A column with a custom formatter. Its output is used as-is, so it must take care of
    /// escaping.
    pub fn new<F>(title: &'static str, sort: Option<SortField>, format: F) -> Self
    where
        F: Fn(&R) -> String + Send + Sync + 'static,
    {
        Self {
            title,
            sort,
            centered: false,
            format: Box::new(format),
        }
    }

    /// A column showing a plain value.
    pub fn text<F>(title: &'static str, sort: Option<SortField>, value: F) -> Self
    where
        F: for<'r> Fn(&'r R) -> Option<&'r str> + Send + Sync + 'static,
    {
        Self::new(title, sort, move |row| {
            escape_html(value(row).unwrap_or_default())
        })
    }

    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    pub fn format(&self, row: &R) -> String {
        (self.format)(row)
    }
}

pub struct Grid<R> {
    columns: Vec<Column<R>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GridView {
    pub headers: Vec<Header>,
    pub rows: Vec<Row>,
    pub pager: Pager,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Header {
    pub title: &'static str,
    pub href: Option<String>,
    /// `asc` or `desc` if the table is sorted by this column
    pub sorted: Option<&'static str>,
    pub centered: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Row {
    pub even: bool,
    pub cells: Vec<Cell>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub html: String,
    pub centered: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Pager {
    pub first: u64,
    pub last: u64,
    pub total: u64,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub pages: Vec<PageLink>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageLink {
    /// The one-based page number
    pub number: u64,
    /// The link, `None` for the current page
    pub href: Option<String>,
}

impl<R> Grid<R> {
    pub fn new(columns: Vec<Column<R>>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// Lay out one page of results.
    pub fn view(&self, results: &PaginatedResults<R>, request: &Request) -> GridView {
        let headers = self
            .columns
            .iter()
            .map(|column| Header {
                title: column.title,
                href: column
                    .sort
                    .map(|field| href(request, 0, request.sort.toggle(field))),
                sorted: column
                    .sort
                    .filter(|field| *field == request.sort.field)
                    .map(|_| if request.sort.ascending() { "asc" } else { "desc" }),
                centered: column.centered,
            })
            .collect();

        let rows = results
            .results
            .iter()
            .enumerate()
            .map(|(n, row)| Row {
                even: n % 2 == 1,
                cells: self
                    .columns
                    .iter()
                    .map(|column| Cell {
                        html: column.format(row),
                        centered: column.centered,
                    })
                    .collect(),
            })
            .collect();

        GridView {
            headers,
            rows,
            pager: pager(results, request),
        }
    }
}

fn pager<R>(results: &PaginatedResults<R>, request: &Request) -> Pager {
    let current = results.page;
    let start = current.saturating_sub(PAGER_DELTA);
    let end = (current + PAGER_DELTA + 1).min(results.number_of_pages);

    Pager {
        first: results.first_item(),
        last: results.last_item(),
        total: results.number_of_items,
        previous: results
            .previous_page
            .map(|p| href(request, p.page, request.sort)),
        next: results
            .next_page
            .map(|p| href(request, p.page, request.sort)),
        pages: (start..end)
            .map(|page| PageLink {
                number: page + 1,
                href: (page != current).then(|| href(request, page, request.sort)),
            })
            .collect(),
    }
}

/// A link to another (zero-based) page of the same lookup
fn href(request: &Request, page: u64, sort: Sort) -> String {
    let page = (page + 1).to_string();
    let sort = sort.to_string();
    let query = request
        .terms
        .iter()
        .map(|(key, value)| (*key, value.as_str()))
        .chain([("page", page.as_str()), ("sort", sort.as_str())])
        .map(|(key, value)| format!("{key}={}", encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{query}", request.mode.path())
}

/// Form-encode a value the way a browser submits it from an ISO-8859-1 page
fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(&WINDOWS_1252.encode(value).0).collect()
}

/// Link a prefix to its details view
pub fn details_link(prefix: &str) -> String {
    format!(
        r#"<A HREF="details?macadd={}&amp;numresults={DETAILS_PAGE_SIZE}">{}</A>"#,
        encode(prefix),
        escape_html(prefix)
    )
}

/// The table of the result list
pub fn list() -> Grid<SearchRow> {
    Grid::new(vec![
        Column::text("Date", Some(SortField::Date), |row: &SearchRow| {
            row.date.as_deref()
        }),
        Column::new("OUI", Some(SortField::Prefix), |row: &SearchRow| {
            details_link(&row.prefix)
        }),
        Column::new("Company", Some(SortField::Compname), |row: &SearchRow| {
            name_and_country(row.compname.as_deref(), row.country.as_deref())
        }),
        Column::text("Media Type", Some(SortField::Medianame), |row: &SearchRow| {
            row.medianame.as_deref()
        })
        .centered(),
        Column::text("Device Class", Some(SortField::Devname), |row: &SearchRow| {
            row.devname.as_deref()
        })
        .centered(),
        Column::text("Device Model", Some(SortField::Modelname), |row: &SearchRow| {
            row.modelname.as_deref()
        })
        .centered(),
    ])
}

/// The table of the details view
pub fn details() -> Grid<DetailRow> {
    Grid::new(vec![
        Column::text("OUI", Some(SortField::Prefix), |row: &DetailRow| {
            Some(row.prefix.as_str())
        }),
        Column::text("Date", Some(SortField::Date), |row: &DetailRow| row.date.as_deref()),
        Column::new("Company", Some(SortField::Compname), |row: &DetailRow| {
            vendor_block(
                row.compname.as_deref(),
                [
                    row.address1.as_deref(),
                    row.address2.as_deref(),
                    row.address3.as_deref(),
                    row.address4.as_deref(),
                    row.address5.as_deref(),
                ],
                row.country.as_deref(),
            )
        }),
        Column::new("OrgCompany", None, |row: &DetailRow| {
            vendor_block(
                row.orgcompname.as_deref(),
                [
                    row.orgaddress1.as_deref(),
                    row.orgaddress2.as_deref(),
                    row.orgaddress3.as_deref(),
                    row.orgaddress4.as_deref(),
                    row.orgaddress5.as_deref(),
                ],
                row.orgcountry.as_deref(),
            )
        }),
        Column::text("Media Type", Some(SortField::Medianame), |row: &DetailRow| {
            row.medianame.as_deref()
        })
        .centered(),
        Column::text("Device Class", Some(SortField::Devname), |row: &DetailRow| {
            row.devname.as_deref()
        })
        .centered(),
        Column::text("Device Model", Some(SortField::Modelname), |row: &DetailRow| {
            row.modelname.as_deref()
        })
        .centered(),
    ])
}
