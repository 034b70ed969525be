//! Helpers for the MongoDB extended JSON the reporting service emits.

pub mod object_id {
    use serde::{Deserialize, Deserializer};
    use serde_derive::Deserialize;

    #[derive(Deserialize)]
    struct ObjectId {
        #[serde(rename = "$oid")]
        oid: String,
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        ObjectId::deserialize(deserializer).map(|v| v.oid)
    }
}

pub mod epoch_date {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use serde_derive::Deserialize;

    #[derive(Deserialize)]
    struct Date {
        #[serde(rename = "$date")]
        date: i64,
    }

    /// Milliseconds since the epoch, truncated to whole seconds.
    pub fn from_millis(millis: i64) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(millis.div_euclid(1000), 0).single()
    }

    pub(super) fn checked<E: Error>(date: i64) -> Result<DateTime<Utc>, E> {
        from_millis(date).ok_or_else(|| E::custom(format!("timestamp {} is out of range", date)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Date { date } = Date::deserialize(deserializer)?;
        checked(date)
    }

    pub(super) fn deserialize_optional<'de, D>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Date>::deserialize(deserializer)? {
            Some(Date { date }) => checked(date).map(Some),
            None => Ok(None),
        }
    }
}

pub mod optional_epoch_date {
    use chrono::{DateTime, Utc};
    use serde::Deserializer;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::epoch_date::deserialize_optional(deserializer)
    }
}
