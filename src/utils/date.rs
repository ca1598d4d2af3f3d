pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub mod serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        format!("{}", time.format(DATE_FMT)).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        let time = NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)?;
        Ok(time)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Serialize};
    use crate::utils::date::{serializer, DATE_FMT};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "serializer")]
        at: NaiveDateTime,
    }

    #[tokio::test]
    async fn test_should_parse_date_fmt() {
        let date = NaiveDateTime::parse_from_str("2025-01-04T10:30:00.5", DATE_FMT).expect("should parse");
        assert_eq!("2025-01-04T10:30:00.500", format!("{}", date.format(DATE_FMT)));
    }

    #[tokio::test]
    async fn test_should_round_trip_serializer() {
        let stamped = Stamped {
            at: NaiveDateTime::parse_from_str("2025-01-01T00:00:00.0", DATE_FMT).unwrap(),
        };
        let json = serde_json::to_string(&stamped).expect("should serialize");
        let loaded: Stamped = serde_json::from_str(json.as_str()).expect("should deserialize");
        assert_eq!(stamped, loaded);
    }
}
