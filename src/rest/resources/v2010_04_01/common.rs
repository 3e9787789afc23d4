//! Serde helpers shared by the resources.
//!
//! Timestamps come back in RFC 2822 form (`Tue, 01 Apr 2014 12:00:00
//! +0000`) and may be `null`.

/// (De)serializes `Option<DateTime<Utc>>` as an RFC 2822 string.
///
/// Use together with `#[serde(default)]` so a missing field reads as
/// `None`.
pub mod rfc2822_option {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Writes the timestamp as RFC 2822, or `null`.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error.
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(timestamp) => serializer.serialize_some(&timestamp.to_rfc2822()),
            None => serializer.serialize_none(),
        }
    }

    /// Reads an RFC 2822 string; `null` and `""` read as `None`.
    ///
    /// # Errors
    ///
    /// Returns a deserializer error if the string is not RFC 2822.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| {
                DateTime::parse_from_rfc2822(raw.trim())
                    .map(|timestamp| timestamp.with_timezone(&Utc))
                    .map_err(de::Error::custom)
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Stamped {
        #[serde(default, with = "super::rfc2822_option")]
        date_created: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_reads_rfc2822_with_offset() {
        let stamped: Stamped =
            serde_json::from_str(r#"{"date_created": "Tue, 01 Apr 2014 14:00:00 +0200"}"#).unwrap();

        assert_eq!(
            stamped.date_created,
            Some(Utc.with_ymd_and_hms(2014, 4, 1, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_null_empty_and_missing_read_as_none() {
        for json in [r#"{"date_created": null}"#, r#"{"date_created": ""}"#, "{}"] {
            let stamped: Stamped = serde_json::from_str(json).unwrap();
            assert!(stamped.date_created.is_none(), "for {json}");
        }
    }

    #[test]
    fn test_rejects_iso_8601() {
        let result = serde_json::from_str::<Stamped>(r#"{"date_created": "2014-04-01T12:00:00Z"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_writes_rfc2822() {
        let stamped = Stamped {
            date_created: Some(Utc.with_ymd_and_hms(2014, 4, 1, 12, 0, 0).unwrap()),
        };

        let json = serde_json::to_value(&stamped).unwrap();
        assert_eq!(json["date_created"], "Tue, 1 Apr 2014 12:00:00 +0000");
    }
}
