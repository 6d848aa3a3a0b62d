use chrono::{Local, NaiveDate};

pub const DATE_FMT: &str = "%Y-%m-%d";

// today returns the local calendar date used to stamp loans and history
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

pub mod serializer {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::{DATE_FMT, format_date};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        format_date(*date).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let str_date: String = Deserialize::deserialize(deserializer)?;
        let date = NaiveDate::parse_from_str(&str_date, DATE_FMT).map_err(D::Error::custom)?;
        Ok(date)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};
    use crate::utils::date::{format_date, serializer};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamp {
        #[serde(with = "serializer")]
        date: NaiveDate,
    }

    #[tokio::test]
    async fn test_should_format_date() {
        let date = NaiveDate::from_ymd_opt(2016, 3, 1).expect("valid date");
        assert_eq!("2016-03-01", format_date(date));
    }

    #[tokio::test]
    async fn test_should_serialize_date() {
        let stamp = Stamp { date: NaiveDate::from_ymd_opt(2013, 12, 31).expect("valid date") };
        let json = serde_json::to_string(&stamp).expect("should serialize");
        assert_eq!(r#"{"date":"2013-12-31"}"#, json);
        let loaded: Stamp = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(stamp, loaded);
    }

    #[tokio::test]
    async fn test_should_reject_bad_date() {
        let res = serde_json::from_str::<Stamp>(r#"{"date":"31/12/2013"}"#);
        assert!(res.is_err());
    }
}
