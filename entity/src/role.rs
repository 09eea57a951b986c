use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "role")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::role_group::Entity")]
    RoleGroup,
}

impl Related<super::role_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoleGroup.def()
    }
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        super::role_group::Relation::Group.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::role_group::Relation::Role.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
