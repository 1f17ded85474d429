//! Dependent option lists.
//!
//! Pure functions of their inputs. The form calls them on every change of
//! `academicLevel` or `collegeDepartment`; the schema calls them to check
//! that a submitted selection is still offered.

use crate::{
    catalog::{self, AcademicLevel},
    record::{EnrollmentRecord, Field},
};
use tracing::debug;

/// Departments offered for an academic level, in catalog order.
/// Empty when the level is unset or not a recognised value.
/// Surrounding whitespace is ignored, as it is by validation.
#[must_use]
pub fn departments_for(academic_level: &str) -> Vec<&'static str> {
    AcademicLevel::from_value(academic_level.trim())
        .map(|level| level.departments().iter().map(|d| d.name).collect())
        .unwrap_or_default()
}

/// Programs offered by a department under an academic level, in catalog order.
/// Empty when either input is unset or the department is not under the level.
#[must_use]
pub fn programs_for(academic_level: &str, department: &str) -> &'static [&'static str] {
    AcademicLevel::from_value(academic_level.trim())
        .and_then(|level| catalog::department(level, department.trim()))
        .map(|d| d.programs)
        .unwrap_or_default()
}

///
/// reconcile
///
/// Drop downstream selections that the current upstream values no longer
/// offer. Department is checked first, so a cleared department also clears
/// the program. Returns the cleared fields in that order.
///
pub fn reconcile(record: &mut EnrollmentRecord) -> Vec<Field> {
    let mut cleared = Vec::new();

    let level = record.value(Field::AcademicLevel).to_string();

    if let Some(dept) = record.get(Field::CollegeDepartment)
        && !departments_for(&level).contains(&dept.trim())
    {
        debug!(level = %level, department = %dept, "clearing stale department");
        record.clear(Field::CollegeDepartment);
        cleared.push(Field::CollegeDepartment);
    }

    let dept = record.value(Field::CollegeDepartment).to_string();

    if let Some(program) = record.get(Field::DegreeProgram)
        && !programs_for(&level, &dept).contains(&program.trim())
    {
        debug!(level = %level, department = %dept, program = %program, "clearing stale program");
        record.clear(Field::DegreeProgram);
        cleared.push(Field::DegreeProgram);
    }

    cleared
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn undergraduate_departments_in_catalog_order() {
        assert_eq!(
            departments_for("Undergraduate"),
            [
                "College of Engineering and Architecture",
                "College of Computer Studies",
                "College of Business Education",
                "College of Arts",
            ]
        );
    }

    #[test]
    fn graduate_departments_in_catalog_order() {
        assert_eq!(
            departments_for("Graduate"),
            ["Doctorate Degrees", "Master's Degrees"]
        );
    }

    #[test]
    fn unknown_or_unset_level_has_no_departments() {
        assert!(departments_for("").is_empty());
        assert!(departments_for("undergraduate").is_empty());
        assert!(departments_for("Postgraduate").is_empty());
    }

    #[test]
    fn computer_studies_programs_in_catalog_order() {
        assert_eq!(
            programs_for("Undergraduate", "College of Computer Studies"),
            [
                "BS Computer Science",
                "BS Data Science and Analytics",
                "BS Entertainment and Multimedia Computing",
                "BS Information Technology",
            ]
        );
    }

    #[test]
    fn programs_empty_for_unknown_department_or_level() {
        assert!(programs_for("Undergraduate", "Unknown Dept").is_empty());
        assert!(programs_for("", "College of Computer Studies").is_empty());
        assert!(programs_for("Graduate", "College of Computer Studies").is_empty());
    }

    #[test]
    fn reconcile_clears_department_and_program_after_level_change() {
        let mut record = EnrollmentRecord::new()
            .with(Field::AcademicLevel, "Graduate")
            .with(Field::CollegeDepartment, "College of Computer Studies")
            .with(Field::DegreeProgram, "BS Computer Science");

        let cleared = reconcile(&mut record);

        assert_eq!(cleared, [Field::CollegeDepartment, Field::DegreeProgram]);
        assert!(!record.is_set(Field::CollegeDepartment));
        assert!(!record.is_set(Field::DegreeProgram));
        assert_eq!(record.get(Field::AcademicLevel), Some("Graduate"));
    }

    #[test]
    fn reconcile_clears_only_program_after_department_change() {
        let mut record = EnrollmentRecord::new()
            .with(Field::AcademicLevel, "Undergraduate")
            .with(Field::CollegeDepartment, "College of Arts")
            .with(Field::DegreeProgram, "BS Computer Science");

        assert_eq!(reconcile(&mut record), [Field::DegreeProgram]);
        assert_eq!(record.get(Field::CollegeDepartment), Some("College of Arts"));
    }

    #[test]
    fn reconcile_keeps_consistent_selection() {
        let mut record = EnrollmentRecord::new()
            .with(Field::AcademicLevel, "Graduate")
            .with(Field::CollegeDepartment, "Master's Degrees")
            .with(Field::DegreeProgram, "Master of Science in Computer Science");
        let before = record.clone();

        assert!(reconcile(&mut record).is_empty());
        assert_eq!(record, before);
    }

    #[test]
    fn padded_selections_resolve_like_trimmed_ones() {
        assert_eq!(departments_for(" Graduate "), departments_for("Graduate"));
        assert_eq!(
            programs_for("Undergraduate ", " College of Arts"),
            programs_for("Undergraduate", "College of Arts")
        );
    }

    #[test]
    fn reconcile_keeps_padded_selection_that_validation_accepts() {
        let mut record = EnrollmentRecord::new()
            .with(Field::AcademicLevel, "Graduate ")
            .with(Field::CollegeDepartment, "Master's Degrees ")
            .with(Field::DegreeProgram, " Master of Science in Computer Science");

        assert!(reconcile(&mut record).is_empty());
        assert_eq!(record.value(Field::CollegeDepartment), "Master's Degrees ");
    }

    fn any_level() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("Undergraduate".to_string()),
            Just("Graduate".to_string()),
            Just(String::new()),
            "[A-Za-z ]{0,12}",
        ]
    }

    fn any_department() -> impl Strategy<Value = String> {
        let known: Vec<String> = catalog::UNDERGRADUATE
            .iter()
            .chain(catalog::GRADUATE)
            .map(|d| d.name.to_string())
            .collect();

        prop_oneof![proptest::sample::select(known), "[A-Za-z' ]{0,24}"]
    }

    proptest! {
        #[test]
        fn resolver_is_idempotent(level in any_level(), dept in any_department()) {
            prop_assert_eq!(departments_for(&level), departments_for(&level));
            prop_assert_eq!(programs_for(&level, &dept), programs_for(&level, &dept));
        }

        #[test]
        fn programs_imply_department_is_offered(level in any_level(), dept in any_department()) {
            if !programs_for(&level, &dept).is_empty() {
                prop_assert!(departments_for(&level).contains(&dept.trim()));
            }
        }

        #[test]
        fn reconciled_record_is_always_consistent(
            level in any_level(),
            dept in any_department(),
            program in "[A-Za-z ]{0,20}",
        ) {
            let first_program = programs_for(&level, &dept).first().copied().unwrap_or_default();
            let program = if program.len() % 2 == 0 { first_program.to_string() } else { program };

            let mut record = EnrollmentRecord::new()
                .with(Field::AcademicLevel, level.clone())
                .with(Field::CollegeDepartment, dept)
                .with(Field::DegreeProgram, program);
            reconcile(&mut record);

            if let Some(d) = record.get(Field::CollegeDepartment) {
                prop_assert!(departments_for(&level).contains(&d.trim()));
            }
            if let Some(p) = record.get(Field::DegreeProgram) {
                prop_assert!(programs_for(&level, record.value(Field::CollegeDepartment)).contains(&p.trim()));
            }
        }
    }
}
