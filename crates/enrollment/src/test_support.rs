use crate::{
    core::{issue::IssueContext, traits::Validator, types::Date},
    record::{EnrollmentRecord, Field},
};

///
/// Collector
/// Bare context that keeps predicates as reported.
///

#[derive(Debug, Default)]
pub(crate) struct Collector(pub(crate) Vec<String>);

impl IssueContext for Collector {
    fn add_issue(&mut self, message: String) {
        self.0.push(message);
    }
}

/// Run a validator over one value and return its predicates.
pub(crate) fn check<T: ?Sized, V: Validator<T>>(validator: &V, value: &T) -> Vec<String> {
    let mut ctx = Collector::default();
    validator.validate(value, &mut ctx);

    ctx.0
}

pub(crate) fn date(s: &str) -> Date {
    Date::parse(s).expect("test date")
}

/// Fixed "today" used across tests.
pub(crate) fn today() -> Date {
    date("2025-06-01")
}

/// A record that passes every rule of the default schema.
pub(crate) fn valid_record() -> EnrollmentRecord {
    [
        (Field::FirstName, "Maria"),
        (Field::MiddleName, "Santos"),
        (Field::LastName, "Reyes"),
        (Field::Dob, "2006-03-14"),
        (Field::Gender, "Female"),
        (Field::Nationality, "Filipino"),
        (Field::Email, "maria.reyes@example.com"),
        (Field::Mobile, "09171234567"),
        (Field::Street, "123 Rizal Avenue"),
        (Field::Barangay, "San Roque"),
        (Field::City, "Manila"),
        (Field::Province, "Metro Manila"),
        (Field::ZipCode, "1000"),
        (Field::GradeSchoolName, "San Roque Elementary School"),
        (Field::GradeSchoolYear, "2018"),
        (Field::GradeSchoolAddress, "San Roque, Manila"),
        (Field::JuniorHighName, "Manila Science High School"),
        (Field::JuniorHighYear, "2022"),
        (Field::JuniorHighAddress, "Ermita, Manila"),
        (Field::SeniorHighName, "Manila Science High School"),
        (Field::SeniorHighYear, "2024"),
        (Field::SeniorHighAverage, "93.5"),
        (Field::SeniorHighAddress, "Ermita, Manila"),
        (Field::AcademicLevel, "Undergraduate"),
        (Field::CollegeDepartment, "College of Computer Studies"),
        (Field::DegreeProgram, "BS Computer Science"),
        (Field::Semester, "First Semester"),
        (Field::Campus, "Manila"),
    ]
    .into_iter()
    .fold(EnrollmentRecord::new(), |r, (f, v)| r.with(f, v))
}
