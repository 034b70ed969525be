use chrono::{DateTime, Utc};
use serde_derive::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TestSuite {
    #[serde(rename = "_id", with = "crate::configuration::deserialize::object_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub lab_name: Option<String>,
    #[serde(default)]
    pub board: Option<String>,
    #[serde(default)]
    pub arch: Option<String>,
    /// Tree the kernel was built from.
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub kernel: Option<String>,
    #[serde(default)]
    pub defconfig_full: Option<String>,
    #[serde(default, with = "crate::configuration::deserialize::optional_epoch_date")]
    pub created_on: Option<DateTime<Utc>>,
}
