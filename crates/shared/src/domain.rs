use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassengerClass {
    First,
    Second,
    Third,
}

impl PassengerClass {
    pub const ALL: [PassengerClass; 3] = [
        PassengerClass::First,
        PassengerClass::Second,
        PassengerClass::Third,
    ];

    /// Dictionary code sent on the wire: First=1, Second=2, Third=3.
    pub fn code(self) -> f64 {
        match self {
            PassengerClass::First => 1.0,
            PassengerClass::Second => 2.0,
            PassengerClass::Third => 3.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PassengerClass::First => "First",
            PassengerClass::Second => "Second",
            PassengerClass::Third => "Third",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Female, Sex::Male];

    /// Dictionary code sent on the wire: female=0, male=1.
    pub fn code(self) -> f64 {
        match self {
            Sex::Female => 0.0,
            Sex::Male => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmbarkPort {
    Southampton,
    Cherbourg,
    Queenstown,
}

impl EmbarkPort {
    pub const ALL: [EmbarkPort; 3] = [
        EmbarkPort::Southampton,
        EmbarkPort::Cherbourg,
        EmbarkPort::Queenstown,
    ];

    /// Dictionary code sent on the wire: S=0, C=1, Q=2.
    pub fn code(self) -> f64 {
        match self {
            EmbarkPort::Southampton => 0.0,
            EmbarkPort::Cherbourg => 1.0,
            EmbarkPort::Queenstown => 2.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EmbarkPort::Southampton => "Southampton (S)",
            EmbarkPort::Cherbourg => "Cherbourg (C)",
            EmbarkPort::Queenstown => "Queenstown (Q)",
        }
    }
}

/// The four free-text form fields that require numeric validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    Age,
    SiblingsSpouses,
    ParentsChildren,
    Fare,
}

impl NumericField {
    pub fn label(self) -> &'static str {
        match self {
            NumericField::Age => "Age",
            NumericField::SiblingsSpouses => "Siblings/Spouses Aboard",
            NumericField::ParentsChildren => "Parents/Children Aboard",
            NumericField::Fare => "Fare",
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current set of user-entered values for one form instance.
///
/// Categorical fields are enums so the form can only ever hold an enumerated
/// option; numeric fields stay raw strings until encoding, which is where
/// parse errors become user-facing validation failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub passenger_class: PassengerClass,
    pub sex: Sex,
    pub embarked: EmbarkPort,
    pub age: String,
    pub siblings_spouses: String,
    pub parents_children: String,
    pub fare: String,
}

impl Default for FieldSnapshot {
    fn default() -> Self {
        Self {
            passenger_class: PassengerClass::Third,
            sex: Sex::Male,
            embarked: EmbarkPort::Southampton,
            age: String::new(),
            siblings_spouses: String::new(),
            parents_children: String::new(),
            fare: String::new(),
        }
    }
}
