use sea_orm::entity::prelude::*;

/// A vendor, plus the (optional) organization it belongs to
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tb_company")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub comp_id: i32,
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
