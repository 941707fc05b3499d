use sea_orm::{ConnectionTrait, DbErr, ItemsAndPagesNumber, Paginator, SelectorTrait};
use std::num::NonZeroU64;

/// The default page size of a search
pub const DEFAULT_PAGE_SIZE: u64 = 50;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Paginated {
    pub page_size: NonZeroU64,
    /// The zero-based page number
    pub page: u64,
}

impl Default for Paginated {
    fn default() -> Self {
        Self {
            page_size: default::page_size(),
            page: 0,
        }
    }
}

mod default {
    use std::num::NonZeroU64;

    #[allow(clippy::unwrap_used)]
    pub(super) fn page_size() -> NonZeroU64 {
        NonZeroU64::new(super::DEFAULT_PAGE_SIZE).unwrap()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginatedResults<R> {
    pub results: Vec<R>,
    /// The zero-based page number actually returned
    pub page: u64,
    pub page_size: NonZeroU64,
    pub number_of_items: u64,
    pub number_of_pages: u64,
    pub previous_page: Option<Paginated>,
    pub next_page: Option<Paginated>,
}

impl<R> PaginatedResults<R> {
    /// Fetch one page through a paginator.
    ///
    /// A requested page past the end is clamped to the last page, so that a non-empty result
    /// set never renders an empty page.
    pub async fn fetch<'c, C, S>(
        paginated: Paginated,
        paginator: &Paginator<'c, C, S>,
    ) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
        S: SelectorTrait<Item = R> + 'c,
    {
        let ItemsAndPagesNumber {
            number_of_items,
            number_of_pages,
        } = paginator.num_items_and_pages().await?;

        let page = paginated.page.min(number_of_pages.saturating_sub(1));
        let results = if number_of_items == 0 {
            Vec::new()
        } else {
            paginator.fetch_page(page).await?
        };

        Ok(Self::new(
            Paginated {
                page_size: paginated.page_size,
                page,
            },
            results,
            number_of_items,
            number_of_pages,
        ))
    }

    pub fn new(
        paginated: Paginated,
        results: Vec<R>,
        number_of_items: u64,
        number_of_pages: u64,
    ) -> Self {
        PaginatedResults {
            results,
            page: paginated.page,
            page_size: paginated.page_size,
            number_of_items,
            number_of_pages,
            previous_page: if paginated.page > 0 {
                Some(Paginated {
                    page_size: paginated.page_size,
                    page: paginated.page - 1,
                })
            } else {
                None
            },
            next_page: if paginated.page + 1 < number_of_pages {
                Some(Paginated {
                    page_size: paginated.page_size,
                    page: paginated.page + 1,
                })
            } else {
                None
            },
        }
    }

    /// The one-based index of the first item on this page, or zero if there are none.
    pub fn first_item(&self) -> u64 {
        if self.results.is_empty() {
            0
        } else {
            self.page * self.page_size.get() + 1
        }
    }

    /// The one-based index of the last item on this page, or zero if there are none.
    pub fn last_item(&self) -> u64 {
        if self.results.is_empty() {
            0
        } else {
            self.page * self.page_size.get() + self.results.len() as u64
        }
    }

    pub fn is_empty(&self) -> bool {
        self.number_of_items == 0
    }
}
