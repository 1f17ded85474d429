//! `enroll`: check enrollment records against the form rules, browse the
//! program catalog, and push records through the submit flow.
//!
//! Records are JSON objects keyed by field name (`firstName`, `zipCode`, ...).
//! Logging goes to stderr and follows `RUST_LOG`.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use enrollment::{
    catalog::AcademicLevel,
    config::FormConfig,
    core::{issue::Issues, types::Date},
    form::EnrollmentForm,
    record::EnrollmentRecord,
    resolver::{departments_for, programs_for},
    schema::enrollment_schema,
    submit::{LogSubmitter, SubmitError},
    validate::validate_with,
};
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(name = "enroll", version, about = "Student enrollment form tools")]
struct Cli {
    /// Form configuration file (TOML)
    #[arg(long, global = true, env = "ENROLL_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check a record and list every field issue
    Validate(RecordArgs),

    /// List academic levels, departments or programs
    Catalog(CatalogArgs),

    /// Run a record through the form and submit it
    Submit(RecordArgs),
}

#[derive(Debug, Args)]
struct RecordArgs {
    /// Record file (JSON object keyed by field name)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Date used for the date-of-birth check, YYYY-MM-DD (defaults to today, UTC)
    #[arg(long, value_name = "DATE")]
    today: Option<Date>,
}

#[derive(Debug, Args)]
struct CatalogArgs {
    /// List the departments of this academic level
    #[arg(long)]
    level: Option<AcademicLevel>,

    /// List the programs of this department
    #[arg(long, requires = "level")]
    department: Option<String>,
}

fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("enrollment=info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let cli = Cli::parse();
    let mut out = io::stdout().lock();

    match run(cli, &mut out) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli, out: &mut impl Write) -> Result<ExitCode> {
    let config = load_config(cli.config.as_deref())?;

    let passed = match cli.command {
        Command::Validate(args) => {
            let record = load_record(&args.file)?;
            let today = args.today.unwrap_or_else(Date::today);

            validate_record(&config, &record, today, out)?
        }
        Command::Catalog(args) => {
            catalog(&args, out)?;
            true
        }
        Command::Submit(args) => {
            let record = load_record(&args.file)?;

            submit_record(config, &record, args.today, out)?
        }
    };

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

// ----------------------------------------------------------------------
// Loading
// ----------------------------------------------------------------------

fn load_config(path: Option<&Path>) -> Result<FormConfig> {
    let Some(path) = path else {
        return Ok(FormConfig::default());
    };
    debug!(path = %path.display(), "loading form config");

    FormConfig::load(path).with_context(|| format!("loading config {}", path.display()))
}

fn load_record(path: &Path) -> Result<EnrollmentRecord> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading record {}", path.display()))?;

    parse_record(&text).with_context(|| format!("parsing record {}", path.display()))
}

fn parse_record(text: &str) -> Result<EnrollmentRecord> {
    Ok(serde_json::from_str(text)?)
}

// ----------------------------------------------------------------------
// Commands
// ----------------------------------------------------------------------

/// Prints `valid` or one `field: message` line per issue.
fn validate_record(
    config: &FormConfig,
    record: &EnrollmentRecord,
    today: Date,
    out: &mut impl Write,
) -> Result<bool> {
    let schema = enrollment_schema(config)?;

    match validate_with(&schema, record, today) {
        Ok(()) => {
            writeln!(out, "valid")?;
            Ok(true)
        }
        Err(err) => {
            write_issues(err.issues(), out)?;
            Ok(false)
        }
    }
}

fn catalog(args: &CatalogArgs, out: &mut impl Write) -> Result<()> {
    let entries = match (args.level, args.department.as_deref()) {
        (None, _) => AcademicLevel::ALL
            .into_iter()
            .map(AcademicLevel::as_str)
            .collect(),
        (Some(level), None) => departments_for(level.as_str()),
        (Some(level), Some(department)) => {
            let programs = programs_for(level.as_str(), department);
            if programs.is_empty() {
                bail!("no department '{department}' under {level}");
            }

            programs.to_vec()
        }
    };

    for entry in entries {
        writeln!(out, "{entry}")?;
    }

    Ok(())
}

/// Checks the record as stored, then feeds it through the form field by
/// field and submits it to the logging stub.
///
/// The form's input filters (digit-only, length caps) rewrite keystrokes; a
/// stored record that needs rewriting is rejected instead of repaired.
fn submit_record(
    config: FormConfig,
    record: &EnrollmentRecord,
    today: Option<Date>,
    out: &mut impl Write,
) -> Result<bool> {
    let today = today.unwrap_or_else(Date::today);

    let schema = enrollment_schema(&config)?;
    if let Err(err) = validate_with(&schema, record, today) {
        write_issues(err.issues(), out)?;
        return Ok(false);
    }

    let mut submitter = LogSubmitter::new(config.acknowledgement.clone());
    let mut form = EnrollmentForm::new(config)?.with_today(today);

    for (field, value) in record.iter() {
        for cleared in form.set(field, value) {
            debug!(%field, %cleared, "selection cleared while filling form");
        }
    }

    match form.submit(&mut submitter) {
        Ok(ack) => {
            writeln!(out, "{}", ack.message)?;
            Ok(true)
        }
        Err(SubmitError::Invalid(issues)) => {
            write_issues(&issues, out)?;
            Ok(false)
        }
        Err(err) => Err(err.into()),
    }
}

fn write_issues(issues: &Issues, out: &mut impl Write) -> io::Result<()> {
    for (field, messages) in issues.iter() {
        for message in messages {
            writeln!(out, "{field}: {message}")?;
        }
    }

    Ok(())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use enrollment::record::Field;

    const VALID: &str = r#"{
        "firstName": "Juan",
        "lastName": "Dela Cruz",
        "dob": "2005-11-02",
        "gender": "Male",
        "nationality": "Filipino",
        "email": "juan.delacruz@example.com",
        "mobile": "09181234567",
        "street": "45 Mabini Street",
        "barangay": "Poblacion",
        "city": "Quezon City",
        "province": "Metro Manila",
        "zipCode": "1100",
        "gradeSchoolName": "Poblacion Elementary School",
        "gradeSchoolYear": 2017,
        "gradeSchoolAddress": "Poblacion, Quezon City",
        "juniorHighName": "Quezon City High School",
        "juniorHighYear": 2021,
        "juniorHighAddress": "Diliman, Quezon City",
        "seniorHighName": "Quezon City Science High School",
        "seniorHighYear": 2023,
        "seniorHighAverage": 91.25,
        "seniorHighAddress": "Diliman, Quezon City",
        "academicLevel": "Undergraduate",
        "collegeDepartment": "College of Engineering and Architecture",
        "degreeProgram": "BS Civil Engineering",
        "semester": "First Semester",
        "campus": "Quezon City",
        "middleName": null
    }"#;

    fn today() -> Date {
        Date::parse("2025-06-01").unwrap()
    }

    fn valid() -> EnrollmentRecord {
        parse_record(VALID).unwrap()
    }

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_validate_with_today() {
        let cli = Cli::try_parse_from(["enroll", "validate", "r.json", "--today", "2025-06-01"])
            .unwrap();

        let Command::Validate(args) = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(args.file, PathBuf::from("r.json"));
        assert_eq!(args.today, Some(today()));
    }

    #[test]
    fn rejects_malformed_today() {
        assert!(Cli::try_parse_from(["enroll", "submit", "r.json", "--today", "01/06/2025"]).is_err());
    }

    #[test]
    fn department_requires_level() {
        assert!(Cli::try_parse_from(["enroll", "catalog", "--department", "College of Arts"]).is_err());
    }

    #[test]
    fn validate_reports_valid_record() {
        let mut buf = Vec::new();

        let passed = validate_record(&FormConfig::default(), &valid(), today(), &mut buf).unwrap();

        assert!(passed);
        assert_eq!(output(buf), "valid\n");
    }

    #[test]
    fn validate_lists_each_issue() {
        let mut record = valid();
        record.set(Field::ZipCode, "11000");
        record.clear(Field::City);
        let mut buf = Vec::new();

        let passed = validate_record(&FormConfig::default(), &record, today(), &mut buf).unwrap();

        assert!(!passed);
        let text = output(buf);
        assert!(text.contains("city: City is required\n"));
        assert!(text.contains("zipCode: Zip code must be 4 digits\n"));
    }

    #[test]
    fn validate_respects_configured_bounds() {
        let config = FormConfig::from_toml_str("[average]\nmin = 95.0\nmax = 100.0\n").unwrap();
        let mut buf = Vec::new();

        let passed = validate_record(&config, &valid(), today(), &mut buf).unwrap();

        assert!(!passed);
        assert!(output(buf).starts_with("seniorHighAverage: "));
    }

    #[test]
    fn unknown_field_is_an_error() {
        assert!(parse_record(r#"{ "nickname": "Jun" }"#).is_err());
    }

    #[test]
    fn catalog_lists_levels_departments_and_programs() {
        let mut buf = Vec::new();
        catalog(
            &CatalogArgs {
                level: None,
                department: None,
            },
            &mut buf,
        )
        .unwrap();
        assert_eq!(output(buf), "Undergraduate\nGraduate\n");

        let mut buf = Vec::new();
        catalog(
            &CatalogArgs {
                level: Some(AcademicLevel::Graduate),
                department: None,
            },
            &mut buf,
        )
        .unwrap();
        assert_eq!(output(buf), "Doctorate Degrees\nMaster's Degrees\n");

        let mut buf = Vec::new();
        catalog(
            &CatalogArgs {
                level: Some(AcademicLevel::Undergraduate),
                department: Some("College of Computer Studies".to_string()),
            },
            &mut buf,
        )
        .unwrap();
        assert_eq!(output(buf).lines().count(), 4);
    }

    #[test]
    fn catalog_rejects_department_from_other_level() {
        let args = CatalogArgs {
            level: Some(AcademicLevel::Graduate),
            department: Some("College of Arts".to_string()),
        };

        assert!(catalog(&args, &mut Vec::new()).is_err());
    }

    #[test]
    fn submit_acknowledges_valid_record() {
        let mut buf = Vec::new();

        let passed = submit_record(FormConfig::default(), &valid(), Some(today()), &mut buf).unwrap();

        assert!(passed);
        assert_eq!(output(buf), "Registration submitted successfully!\n");
    }

    #[test]
    fn submit_rejects_values_the_input_filters_would_rewrite() {
        for (field, value, message) in [
            (Field::Mobile, "123456789012", "mobile: Mobile number must be 10-11 digits\n"),
            (Field::Mobile, "0917-123-4567", "mobile: Mobile number must be 10-11 digits\n"),
            (
                Field::FirstName,
                "Juan Miguel Antonio Francisco Emmanuel Bartolome Santiago",
                "firstName: First name must be at most 50 characters\n",
            ),
        ] {
            let record = valid().with(field, value);
            let mut buf = Vec::new();

            let passed =
                submit_record(FormConfig::default(), &record, Some(today()), &mut buf).unwrap();

            assert!(!passed, "{field} = {value:?} should be rejected");
            assert!(output(buf).contains(message), "{field} = {value:?}");
        }
    }

    #[test]
    fn submit_rejects_stale_department_as_stored() {
        let record = valid().with(Field::AcademicLevel, "Graduate");
        let mut buf = Vec::new();

        let passed = submit_record(FormConfig::default(), &record, Some(today()), &mut buf).unwrap();

        assert!(!passed);
        assert!(output(buf).contains(
            "collegeDepartment: College department is not offered for the selected academic level\n"
        ));
    }

    #[test]
    fn submit_accepts_padded_values() {
        let record = valid()
            .with(Field::Campus, "Quezon City ")
            .with(Field::FirstName, " Juan");
        let mut buf = Vec::new();

        let passed = submit_record(FormConfig::default(), &record, Some(today()), &mut buf).unwrap();

        assert!(passed);
        assert_eq!(output(buf), "Registration submitted successfully!\n");
    }
}
