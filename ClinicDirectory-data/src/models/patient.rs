use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the `patients` table, limited to the columns the API reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub patient_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// `None` when the column is NULL
    pub date_of_birth: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_serializes_date_as_iso_day() {
        let patient = Patient {
            patient_id: 7,
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 12, 10),
        };

        let json = serde_json::to_value(&patient).unwrap();
        assert_eq!(json["date_of_birth"], "1990-12-10");
        assert_eq!(json["patient_id"], 7);
    }

    #[test]
    fn test_null_columns_serialize_as_null() {
        let patient = Patient {
            patient_id: 8,
            first_name: Some("Grace".to_string()),
            last_name: None,
            date_of_birth: None,
        };

        let json = serde_json::to_value(&patient).unwrap();
        assert!(json["date_of_birth"].is_null());
        assert!(json["last_name"].is_null());
        assert_eq!(json.as_object().unwrap().len(), 4);
    }
}
