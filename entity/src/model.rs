use sea_orm::entity::prelude::*;

/// Lookup of a device model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tb_model")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub model_id: i32,
    pub modelname: Option<String>,
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
