use chrono::{DateTime, Utc};
use serde_derive::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TestCase {
    #[serde(rename = "_id", with = "crate::configuration::deserialize::object_id")]
    pub id: String,
    #[serde(with = "crate::configuration::deserialize::epoch_date")]
    pub created_on: DateTime<Utc>,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
}
