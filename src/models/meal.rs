use chrono::{DateTime, NaiveDate, Utc};
use diesel::{AsChangeset, Identifiable, Insertable, Queryable};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Queryable, Debug, Identifiable, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::db::schema::meals)]
#[diesel(primary_key(meal_id))]
pub struct Meal {
    #[serde(rename = "id")]
    pub meal_id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub is_on_diet: bool,
    pub created_at: NaiveDate,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Insertable, Debug, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::db::schema::meals)]
pub struct NewMeal {
    pub meal_id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub is_on_diet: bool,
    pub created_at: NaiveDate,
}

#[derive(AsChangeset, Debug)]
#[diesel(table_name = crate::db::schema::meals)]
pub struct MealChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_on_diet: Option<bool>,
    pub created_at: Option<NaiveDate>,
    // Always stamped, so every successful update refreshes it.
    pub updated_at: DateTime<Utc>,
}
