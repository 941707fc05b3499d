use deepmac_entity::{company, device, media, model, oui};
use sea_orm::{
    ColumnTrait, Condition, DbBackend, EntityTrait, FromQueryResult, JoinType, Order, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select,
    sea_query::{SimpleExpr, extension::postgres::PgExpr},
};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The two shapes of a lookup
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QueryMode {
    /// The result list, filtering on all fields
    List,
    /// The drill-down into a prefix, including the full company records
    Details,
}

impl QueryMode {
    /// The (relative) path of the page serving this mode
    pub fn path(&self) -> &'static str {
        match self {
            Self::List => "search",
            Self::Details => "details",
        }
    }
}

/// Normalized search terms, an empty value matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub oui: String,
    pub date: String,
    pub company: String,
    pub device: String,
}

impl Filters {
    /// Assemble the predicates, in the order: OUI, date, company, device.
    ///
    /// Returns `None` if there is nothing to filter on. In [`QueryMode::Details`] only the OUI is
    /// considered.
    pub fn condition(&self, mode: QueryMode, backend: DbBackend) -> Option<Condition> {
        let mut predicates = vec![];

        if !self.oui.is_empty() {
            predicates.push(like(backend, oui::Column::Prefix, &self.oui));
        }

        if mode == QueryMode::List {
            if !self.date.is_empty() {
                predicates.push(like(backend, oui::Column::Date, &self.date));
            }
            if !self.company.is_empty() {
                predicates.push(like(backend, company::Column::Compname, &self.company));
            }
            if !self.device.is_empty() {
                predicates.push(like(backend, device::Column::Devname, &self.device));
            }
        }

        if predicates.is_empty() {
            return None;
        }

        Some(
            predicates
                .into_iter()
                .fold(Condition::all(), |condition, predicate| {
                    condition.add(predicate)
                }),
        )
    }
}

/// A "contains" match. The value is bound as a parameter, a `%` inside of it keeps acting as a
/// wildcard.
fn like<C: ColumnTrait>(backend: DbBackend, column: C, value: &str) -> SimpleExpr {
    let pattern = format!("%{value}%");
    match backend {
        DbBackend::Postgres => column.into_expr().ilike(pattern),
        _ => column.like(pattern),
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortField {
    Prefix,
    Date,
    Compname,
    Medianame,
    Devname,
    Modelname,
}

impl SortField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Date => "date",
            Self::Compname => "compname",
            Self::Medianame => "medianame",
            Self::Devname => "devname",
            Self::Modelname => "modelname",
        }
    }
}

impl FromStr for SortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "prefix" => Self::Prefix,
            "date" => Self::Date,
            "compname" => Self::Compname,
            "medianame" => Self::Medianame,
            "devname" => Self::Devname,
            "modelname" => Self::Modelname,
            _ => return Err(()),
        })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl From<Direction> for Order {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Asc => Order::Asc,
            Direction::Desc => Order::Desc,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: Direction,
}

impl Default for Sort {
    fn default() -> Self {
        Self {
            field: SortField::Date,
            direction: Direction::Asc,
        }
    }
}

impl Sort {
    pub fn ascending(&self) -> bool {
        self.direction == Direction::Asc
    }

    /// The sort to offer when clicking the header of `field`.
    pub fn toggle(&self, field: SortField) -> Self {
        let direction = if self.field == field && self.ascending() {
            Direction::Desc
        } else {
            Direction::Asc
        };
        Self { field, direction }
    }

    /// Apply the sort, falling back to the prefix to keep pages stable.
    pub fn apply<E: EntityTrait>(&self, select: Select<E>) -> Select<E> {
        let order = Order::from(self.direction);
        let select = match self.field {
            SortField::Prefix => select.order_by(oui::Column::Prefix, order),
            SortField::Date => select.order_by(oui::Column::Date, order),
            SortField::Compname => select.order_by(company::Column::Compname, order),
            SortField::Medianame => select.order_by(media::Column::Medianame, order),
            SortField::Devname => select.order_by(device::Column::Devname, order),
            SortField::Modelname => select.order_by(model::Column::Modelname, order),
        };

        match self.field {
            SortField::Prefix => select,
            _ => select.order_by_asc(oui::Column::Prefix),
        }
    }
}

impl FromStr for Sort {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_lowercase();
        let (field, direction) = match s.split(':').collect::<Vec<_>>()[..] {
            [f, "asc"] | [f] => (f, Direction::Asc),
            [f, "desc"] => (f, Direction::Desc),
            _ => return Err(()),
        };
        Ok(Self {
            field: field.parse()?,
            direction,
        })
    }
}

impl Display for Sort {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let order = if self.ascending() { "asc" } else { "desc" };
        write!(f, "{}:{order}", self.field.name())
    }
}

/// A row of the result list
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct SearchRow {
    pub prefix: String,
    pub date: Option<String>,
    pub compname: Option<String>,
    pub country: Option<String>,
    pub medianame: Option<String>,
    pub devname: Option<String>,
    pub modelname: Option<String>,
}

/// A row of the details view
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct DetailRow {
    pub prefix: String,
    pub date: Option<String>,
    pub compname: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub address4: Option<String>,
    pub address5: Option<String>,
    pub country: Option<String>,
    pub orgcompname: Option<String>,
    pub orgaddress1: Option<String>,
    pub orgaddress2: Option<String>,
    pub orgaddress3: Option<String>,
    pub orgaddress4: Option<String>,
    pub orgaddress5: Option<String>,
    pub orgcountry: Option<String>,
    pub medianame: Option<String>,
    pub devname: Option<String>,
    pub modelname: Option<String>,
}

/// Compose the lookup statement.
///
/// All lookup tables are left joined, so an assignment missing any of them still shows up.
pub fn compose(
    mode: QueryMode,
    filters: &Filters,
    sort: Sort,
    backend: DbBackend,
) -> Select<oui::Entity> {
    let select = oui::Entity::find()
        .select_only()
        .column(oui::Column::Prefix)
        .column(oui::Column::Date)
        .column(company::Column::Compname);

    let select = match mode {
        QueryMode::List => select.column(company::Column::Country),
        QueryMode::Details => select.columns([
            company::Column::Address1,
            company::Column::Address2,
            company::Column::Address3,
            company::Column::Address4,
            company::Column::Address5,
            company::Column::Country,
            company::Column::Orgcompname,
            company::Column::Orgaddress1,
            company::Column::Orgaddress2,
            company::Column::Orgaddress3,
            company::Column::Orgaddress4,
            company::Column::Orgaddress5,
            company::Column::Orgcountry,
        ]),
    };

    let mut select = select
        .column(media::Column::Medianame)
        .column(device::Column::Devname)
        .column(model::Column::Modelname)
        .join(JoinType::LeftJoin, oui::Relation::Company.def())
        .join(JoinType::LeftJoin, oui::Relation::Media.def())
        .join(JoinType::LeftJoin, oui::Relation::Device.def())
        .join(JoinType::LeftJoin, oui::Relation::Model.def());

    if let Some(condition) = filters.condition(mode, backend) {
        select = select.filter(condition);
    }

    sort.apply(select)
}
