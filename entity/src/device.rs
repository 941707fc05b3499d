use sea_orm::entity::prelude::*;

/// Lookup of a class of devices
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tb_device")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub dev_id: i32,
    pub devname: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::oui::Entity")]
    Oui,
}

impl Related<super::oui::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Oui.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
