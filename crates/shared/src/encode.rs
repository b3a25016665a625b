use serde::{Deserialize, Serialize};

use crate::domain::{FieldSnapshot, NumericField};
use crate::error::EncodeError;

pub const FEATURE_COUNT: usize = 7;

/// Ordered numeric vector sent to the prediction service.
///
/// Order is fixed: `[Pclass, Sex, Age, SibSp, Parch, Fare, Embarked]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector(pub [f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Encode a validated snapshot into the canonical feature vector.
///
/// Pure and deterministic: the same snapshot always yields the same vector or
/// the same failure. Categorical fields are total enum mappings; only the
/// free-text numeric fields can fail.
pub fn encode(snapshot: &FieldSnapshot) -> Result<FeatureVector, EncodeError> {
    let age = parse_non_negative(NumericField::Age, &snapshot.age)?;
    let siblings_spouses =
        parse_non_negative(NumericField::SiblingsSpouses, &snapshot.siblings_spouses)?;
    let parents_children =
        parse_non_negative(NumericField::ParentsChildren, &snapshot.parents_children)?;
    let fare = parse_non_negative(NumericField::Fare, &snapshot.fare)?;

    Ok(FeatureVector([
        snapshot.passenger_class.code(),
        snapshot.sex.code(),
        age,
        siblings_spouses,
        parents_children,
        fare,
        snapshot.embarked.code(),
    ]))
}

fn parse_non_negative(field: NumericField, raw: &str) -> Result<f64, EncodeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EncodeError::MissingValue { field });
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| EncodeError::NotNumeric { field })?;
    // "inf" and "NaN" parse successfully but are not honest inputs.
    if !value.is_finite() {
        return Err(EncodeError::NotNumeric { field });
    }
    if value < 0.0 {
        return Err(EncodeError::Negative { field });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmbarkPort, PassengerClass, Sex};

    fn valid_snapshot() -> FieldSnapshot {
        FieldSnapshot {
            passenger_class: PassengerClass::First,
            sex: Sex::Female,
            embarked: EmbarkPort::Cherbourg,
            age: "29".to_string(),
            siblings_spouses: "0".to_string(),
            parents_children: "0".to_string(),
            fare: "100.5".to_string(),
        }
    }

    #[test]
    fn encodes_first_class_female_in_fixed_order() {
        let vector = encode(&valid_snapshot()).expect("encode");
        assert_eq!(vector.as_slice(), &[1.0, 0.0, 29.0, 0.0, 0.0, 100.5, 1.0]);
    }

    #[test]
    fn encoding_is_deterministic_for_unchanged_snapshot() {
        let snapshot = valid_snapshot();
        assert_eq!(encode(&snapshot), encode(&snapshot));
    }

    #[test]
    fn categorical_codes_match_dictionaries() {
        assert_eq!(PassengerClass::Second.code(), 2.0);
        assert_eq!(PassengerClass::Third.code(), 3.0);
        assert_eq!(Sex::Male.code(), 1.0);
        assert_eq!(EmbarkPort::Southampton.code(), 0.0);
        assert_eq!(EmbarkPort::Queenstown.code(), 2.0);
    }

    #[test]
    fn empty_age_is_a_missing_value() {
        let mut snapshot = valid_snapshot();
        snapshot.age = String::new();
        assert_eq!(
            encode(&snapshot),
            Err(EncodeError::MissingValue {
                field: NumericField::Age
            })
        );
    }

    #[test]
    fn whitespace_only_fare_is_a_missing_value() {
        let mut snapshot = valid_snapshot();
        snapshot.fare = "   ".to_string();
        assert_eq!(
            encode(&snapshot),
            Err(EncodeError::MissingValue {
                field: NumericField::Fare
            })
        );
    }

    #[test]
    fn non_numeric_siblings_field_fails() {
        let mut snapshot = valid_snapshot();
        snapshot.siblings_spouses = "two".to_string();
        assert_eq!(
            encode(&snapshot),
            Err(EncodeError::NotNumeric {
                field: NumericField::SiblingsSpouses
            })
        );
    }

    #[test]
    fn infinite_age_is_rejected_as_non_numeric() {
        let mut snapshot = valid_snapshot();
        snapshot.age = "inf".to_string();
        assert_eq!(
            encode(&snapshot),
            Err(EncodeError::NotNumeric {
                field: NumericField::Age
            })
        );
    }

    #[test]
    fn negative_fare_is_rejected() {
        let mut snapshot = valid_snapshot();
        snapshot.fare = "-7.25".to_string();
        assert_eq!(
            encode(&snapshot),
            Err(EncodeError::Negative {
                field: NumericField::Fare
            })
        );
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let mut snapshot = valid_snapshot();
        snapshot.age = " 29 ".to_string();
        let vector = encode(&snapshot).expect("encode");
        assert_eq!(vector.as_slice()[2], 29.0);
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = EncodeError::MissingValue {
            field: NumericField::ParentsChildren,
        };
        assert_eq!(err.to_string(), "Parents/Children Aboard is required");
    }
}
