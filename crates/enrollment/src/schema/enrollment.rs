use super::{DateBound, FieldSchema, Rule, RuleKind, Schema, SchemaError};
use crate::{
    base::validator::{len, num, text},
    catalog,
    config::FormConfig,
    record::Field,
};

const MOBILE_PATTERN: &str = r"^[0-9]{10,11}$";
const ZIP_PATTERN: &str = r"^[0-9]{4}$";

/// Text rows with no rules beyond an optional length cap.
fn text_field(field: Field, required: bool) -> FieldSchema {
    let fs = if required {
        FieldSchema::required(field)
    } else {
        FieldSchema::optional(field)
    };

    match field.max_chars() {
        Some(max) => fs.rule(RuleKind::MaxLen(len::Max::new(max))),
        None => fs,
    }
}

fn year_field(field: Field, years: num::Range) -> FieldSchema {
    FieldSchema::required(field)
        .rule(RuleKind::Integer)
        .rule(RuleKind::Range(years))
}

///
/// enrollment_schema
///
/// The enrollment form's rule table. Format rules carry fixed messages;
/// everything else falls back to "<label> <predicate>".
///
pub fn enrollment_schema(config: &FormConfig) -> Result<Schema, SchemaError> {
    let years = num::Range::new(config.graduation_year.min, config.graduation_year.max)?;
    let average = num::Range::new(config.average.min, config.average.max)?;

    Schema::new(vec![
        // personal
        text_field(Field::FirstName, true),
        text_field(Field::MiddleName, false),
        text_field(Field::LastName, true),
        text_field(Field::Suffix, false),
        FieldSchema::required(Field::Dob).rule(
            Rule::new(RuleKind::NotAfter(DateBound::Today))
                .message("Date of birth cannot be in the future"),
        ),
        FieldSchema::required(Field::Gender).rule(RuleKind::OneOf(catalog::GENDERS)),
        FieldSchema::required(Field::Nationality).rule(RuleKind::OneOf(catalog::NATIONALITIES)),
        text_field(Field::Religion, false),
        // contact
        FieldSchema::required(Field::Email)
            .rule(Rule::new(RuleKind::Email).message("Invalid email")),
        FieldSchema::required(Field::Mobile).rule(
            Rule::new(RuleKind::Pattern(text::Pattern::new(MOBILE_PATTERN)?))
                .message("Mobile number must be 10-11 digits"),
        ),
        FieldSchema::optional(Field::Landline).rule(RuleKind::Digits),
        text_field(Field::Street, true),
        text_field(Field::Barangay, true),
        text_field(Field::City, true),
        text_field(Field::Province, true),
        FieldSchema::required(Field::ZipCode).rule(
            Rule::new(RuleKind::Pattern(text::Pattern::new(ZIP_PATTERN)?))
                .message("Zip code must be 4 digits"),
        ),
        // education
        text_field(Field::GradeSchoolName, true),
        year_field(Field::GradeSchoolYear, years),
        text_field(Field::GradeSchoolAddress, true),
        text_field(Field::JuniorHighName, true),
        year_field(Field::JuniorHighYear, years),
        text_field(Field::JuniorHighAddress, true),
        text_field(Field::SeniorHighName, true),
        year_field(Field::SeniorHighYear, years),
        FieldSchema::required(Field::SeniorHighAverage).rule(RuleKind::Range(average)),
        text_field(Field::SeniorHighAddress, true),
        // program
        FieldSchema::required(Field::AcademicLevel)
            .rule(RuleKind::OneOf(catalog::ACADEMIC_LEVELS)),
        FieldSchema::required(Field::CollegeDepartment).rule(
            Rule::new(RuleKind::DepartmentOf {
                level: Field::AcademicLevel,
            })
            .message("College department is not offered for the selected academic level"),
        ),
        FieldSchema::required(Field::DegreeProgram).rule(
            Rule::new(RuleKind::ProgramOf {
                level: Field::AcademicLevel,
                department: Field::CollegeDepartment,
            })
            .message("Degree program is not offered by the selected department"),
        ),
        FieldSchema::required(Field::Semester).rule(RuleKind::OneOf(catalog::SEMESTERS)),
        FieldSchema::required(Field::Campus).rule(RuleKind::OneOf(catalog::CAMPUSES)),
    ])
}

///
/// TESTS
///
