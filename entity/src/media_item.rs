use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::MediaType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "media_item")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub collection_id: Uuid,
    pub media_type: MediaType,
    #[sea_orm(column_type = "Text")]
    pub original_url: String,
    pub metadata: Option<Json>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::media_collection::Entity",
        from = "Column::CollectionId",
        to = "super::media_collection::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MediaCollection,
}

impl Related<super::media_collection::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaCollection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
