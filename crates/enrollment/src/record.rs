use crate::{
    base::sanitizer::text::Trim,
    core::{traits::Sanitizer, value::FieldKind},
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// RecordError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RecordError {
    #[error("unknown field '{0}'")]
    UnknownField(String),
}

///
/// Field
///
/// Every input on the enrollment form, in rendering order.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Field {
    // personal
    FirstName,
    MiddleName,
    LastName,
    Suffix,
    Dob,
    Gender,
    Nationality,
    Religion,

    // contact
    Email,
    Mobile,
    Landline,
    Street,
    Barangay,
    City,
    Province,
    ZipCode,

    // education
    GradeSchoolName,
    GradeSchoolYear,
    GradeSchoolAddress,
    JuniorHighName,
    JuniorHighYear,
    JuniorHighAddress,
    SeniorHighName,
    SeniorHighYear,
    SeniorHighAverage,
    SeniorHighAddress,

    // program
    AcademicLevel,
    CollegeDepartment,
    DegreeProgram,
    Semester,
    Campus,
}

impl Field {
    pub const ALL: [Self; 31] = [
        Self::FirstName,
        Self::MiddleName,
        Self::LastName,
        Self::Suffix,
        Self::Dob,
        Self::Gender,
        Self::Nationality,
        Self::Religion,
        Self::Email,
        Self::Mobile,
        Self::Landline,
        Self::Street,
        Self::Barangay,
        Self::City,
        Self::Province,
        Self::ZipCode,
        Self::GradeSchoolName,
        Self::GradeSchoolYear,
        Self::GradeSchoolAddress,
        Self::JuniorHighName,
        Self::JuniorHighYear,
        Self::JuniorHighAddress,
        Self::SeniorHighName,
        Self::SeniorHighYear,
        Self::SeniorHighAverage,
        Self::SeniorHighAddress,
        Self::AcademicLevel,
        Self::CollegeDepartment,
        Self::DegreeProgram,
        Self::Semester,
        Self::Campus,
    ];

    /// Wire name, as used for form keys, JSON and issue maps.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::MiddleName => "middleName",
            Self::LastName => "lastName",
            Self::Suffix => "suffix",
            Self::Dob => "dob",
            Self::Gender => "gender",
            Self::Nationality => "nationality",
            Self::Religion => "religion",
            Self::Email => "email",
            Self::Mobile => "mobile",
            Self::Landline => "landline",
            Self::Street => "street",
            Self::Barangay => "barangay",
            Self::City => "city",
            Self::Province => "province",
            Self::ZipCode => "zipCode",
            Self::GradeSchoolName => "gradeSchoolName",
            Self::GradeSchoolYear => "gradeSchoolYear",
            Self::GradeSchoolAddress => "gradeSchoolAddress",
            Self::JuniorHighName => "juniorHighName",
            Self::JuniorHighYear => "juniorHighYear",
            Self::JuniorHighAddress => "juniorHighAddress",
            Self::SeniorHighName => "seniorHighName",
            Self::SeniorHighYear => "seniorHighYear",
            Self::SeniorHighAverage => "seniorHighAverage",
            Self::SeniorHighAddress => "seniorHighAddress",
            Self::AcademicLevel => "academicLevel",
            Self::CollegeDepartment => "collegeDepartment",
            Self::DegreeProgram => "degreeProgram",
            Self::Semester => "semester",
            Self::Campus => "campus",
        }
    }

    /// Human-readable subject used at the start of error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::MiddleName => "Middle name",
            Self::LastName => "Last name",
            Self::Suffix => "Suffix",
            Self::Dob => "Date of birth",
            Self::Gender => "Gender",
            Self::Nationality => "Nationality",
            Self::Religion => "Religion",
            Self::Email => "Email",
            Self::Mobile => "Mobile number",
            Self::Landline => "Landline",
            Self::Street => "Street",
            Self::Barangay => "Barangay",
            Self::City => "City",
            Self::Province => "Province",
            Self::ZipCode => "Zip code",
            Self::GradeSchoolName => "Grade school name",
            Self::GradeSchoolYear => "Grade school year",
            Self::GradeSchoolAddress => "Grade school address",
            Self::JuniorHighName => "Junior high school name",
            Self::JuniorHighYear => "Junior high school year",
            Self::JuniorHighAddress => "Junior high school address",
            Self::SeniorHighName => "Senior high school name",
            Self::SeniorHighYear => "Senior high school year",
            Self::SeniorHighAverage => "Senior high school average",
            Self::SeniorHighAddress => "Senior high school address",
            Self::AcademicLevel => "Academic level",
            Self::CollegeDepartment => "College department",
            Self::DegreeProgram => "Degree program",
            Self::Semester => "Semester",
            Self::Campus => "Campus",
        }
    }

    #[must_use]
    pub const fn kind(self) -> FieldKind {
        match self {
            Self::Dob => FieldKind::Date,
            Self::GradeSchoolYear
            | Self::JuniorHighYear
            | Self::SeniorHighYear
            | Self::SeniorHighAverage => FieldKind::Number,
            _ => FieldKind::Text,
        }
    }

    /// Maximum characters the input accepts.
    #[must_use]
    pub const fn max_chars(self) -> Option<usize> {
        match self {
            Self::Suffix => Some(10),
            Self::ZipCode => Some(4),
            Self::Mobile => Some(11),
            Self::FirstName
            | Self::MiddleName
            | Self::LastName
            | Self::Religion
            | Self::Barangay
            | Self::City
            | Self::Province => Some(50),
            Self::Street
            | Self::GradeSchoolName
            | Self::GradeSchoolAddress
            | Self::JuniorHighName
            | Self::JuniorHighAddress
            | Self::SeniorHighName
            | Self::SeniorHighAddress => Some(100),
            _ => None,
        }
    }

    /// Inputs that only take digit keystrokes.
    #[must_use]
    pub const fn digits_only(self) -> bool {
        matches!(self, Self::Mobile | Self::Landline | Self::ZipCode)
    }

    /// Fields whose option list depends on this field's value.
    #[must_use]
    pub const fn dependents(self) -> &'static [Self] {
        match self {
            Self::AcademicLevel => &[Self::CollegeDepartment, Self::DegreeProgram],
            Self::CollegeDepartment => &[Self::DegreeProgram],
            _ => &[],
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| RecordError::UnknownField(s.to_string()))
    }
}

///
/// RawInput
/// JSON input value; numeric inputs may arrive as numbers.
///

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    Text(String),
    Number(f64),
}

impl From<RawInput> for String {
    fn from(raw: RawInput) -> Self {
        match raw {
            RawInput::Text(s) => s,
            RawInput::Number(n) => n.to_string(),
        }
    }
}

///
/// EnrollmentRecord
///
/// Flat mapping of field -> raw input text for one enrollment submission.
/// Unset and empty fields are not stored.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(
    try_from = "BTreeMap<String, Option<RawInput>>",
    into = "BTreeMap<String, String>"
)]
pub struct EnrollmentRecord {
    values: BTreeMap<Field, String>,
}

impl EnrollmentRecord {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Raw value for a field; `None` when unset.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Raw value for a field, or `""` when unset.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.get(field).unwrap_or_default()
    }

    /// Set a field; an empty value unsets it.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();

        if value.is_empty() {
            self.values.remove(&field);
        } else {
            self.values.insert(field, value);
        }
    }

    /// Builder form of [`Self::set`].
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn clear(&mut self, field: Field) -> Option<String> {
        self.values.remove(&field)
    }

    #[must_use]
    pub fn is_set(&self, field: Field) -> bool {
        self.values.contains_key(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.values.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// Copy with every value trimmed; whitespace-only values drop out.
    /// This is the form validation judges and the handler receives.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        self.iter().fold(Self::new(), |record, (field, value)| {
            let mut value = value.to_string();
            Trim.sanitize(&mut value);

            record.with(field, value)
        })
    }
}

impl TryFrom<BTreeMap<String, Option<RawInput>>> for EnrollmentRecord {
    type Error = RecordError;

    fn try_from(map: BTreeMap<String, Option<RawInput>>) -> Result<Self, Self::Error> {
        let mut record = Self::new();

        for (name, raw) in map {
            let field: Field = name.parse()?;
            if let Some(raw) = raw {
                record.set(field, String::from(raw));
            }
        }

        Ok(record)
    }
}

impl From<EnrollmentRecord> for BTreeMap<String, String> {
    fn from(record: EnrollmentRecord) -> Self {
        record
            .values
            .into_iter()
            .map(|(f, v)| (f.name().to_string(), v))
            .collect()
    }
}

///
/// TESTS
///
