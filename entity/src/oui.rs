use sea_orm::entity::prelude::*;

/// An IEEE assignment, keyed by its (MAC address) prefix
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tb_OUI")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub prefix: String,
    /// The assignment date, as `YYYY-MM-DD`
    pub date: Option<String>,
    pub comp_id: Option<i32>,
    pub media_id: Option<i32>,
    pub dev_id: Option<i32>,
    pub model_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompId",
        to = "super::company::Column::CompId"
    )]
    Company,
    #[sea_orm(
        belongs_to = "super::media::Entity",
        from = "Column::MediaId",
        to = "super::media::Column::MediaId"
    )]
    Media,
    #[sea_orm(
        belongs_to = "super::device::Entity",
        from = "Column::DevId",
        to = "super::device::Column::DevId"
    )]
    Device,
    #[sea_orm(
        belongs_to = "super::model::Entity",
        from = "Column::ModelId",
        to = "super::model::Column::ModelId"
    )]
    Model,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::media::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Media.def()
    }
}

impl Related<super::device::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Device.def()
    }
}

impl Related<super::model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Model.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
