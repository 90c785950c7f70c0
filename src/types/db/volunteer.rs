use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "volunteers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub cpf: String,
    pub birth_date: String,
    pub phone_number: String,
    pub volunteer_type: String,

    // Required at the schema level, semantically optional for
    // non-medical volunteers
    pub crm: String,

    pub area: String,
    pub state: String,
    pub availability: String,
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
