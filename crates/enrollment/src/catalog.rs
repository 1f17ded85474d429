//! Static program catalog.
//!
//! Two tables, one per academic level, mapping department -> programs.
//! Order is significant and is the order shown to the user.

use std::{fmt, str::FromStr};

///
/// AcademicLevel
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum AcademicLevel {
    Undergraduate,
    Graduate,
}

impl AcademicLevel {
    pub const ALL: [Self; 2] = [Self::Undergraduate, Self::Graduate];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undergraduate => "Undergraduate",
            Self::Graduate => "Graduate",
        }
    }

    /// Exact, case-sensitive match against the option value.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == value)
    }

    #[must_use]
    pub const fn departments(self) -> &'static [Department] {
        match self {
            Self::Undergraduate => UNDERGRADUATE,
            Self::Graduate => GRADUATE,
        }
    }
}

impl fmt::Display for AcademicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AcademicLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_value(s).ok_or_else(|| format!("unknown academic level '{s}'"))
    }
}

///
/// Department
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Department {
    pub name: &'static str,
    pub programs: &'static [&'static str],
}

impl Department {
    #[must_use]
    pub fn offers(&self, program: &str) -> bool {
        self.programs.contains(&program)
    }
}

/// Look up a department by exact name under a level.
#[must_use]
pub fn department(level: AcademicLevel, name: &str) -> Option<&'static Department> {
    level.departments().iter().find(|d| d.name == name)
}

// ============================================================================
// Tables
// ============================================================================

pub const UNDERGRADUATE: &[Department] = &[
    Department {
        name: "College of Engineering and Architecture",
        programs: &[
            "BS Architecture",
            "BS Chemical Engineering",
            "BS Civil Engineering",
            "BS Computer Engineering",
            "BS Electrical Engineering",
            "BS Electronics Engineering",
            "BS Industrial Engineering",
            "BS Mechanical Engineering",
        ],
    },
    Department {
        name: "College of Computer Studies",
        programs: &[
            "BS Computer Science",
            "BS Data Science and Analytics",
            "BS Entertainment and Multimedia Computing",
            "BS Information Technology",
        ],
    },
    Department {
        name: "College of Business Education",
        programs: &[
            "BS Accountancy",
            "BS Accounting Information System",
            "BS Business Administration",
            "Financial Management",
            "Human Resource Management",
            "Logistics and Supply Chain Management",
            "Marketing Management",
        ],
    },
    Department {
        name: "College of Arts",
        programs: &[
            "Bachelor of Arts in English Language",
            "Bachelor of Arts in Political Science",
        ],
    },
];

pub const GRADUATE: &[Department] = &[
    Department {
        name: "Doctorate Degrees",
        programs: &[
            "Doctor in Information Technology",
            "Doctor of Engineering with Specialization in Computer Engineering",
            "Doctor of Philosophy in Computer Science",
        ],
    },
    Department {
        name: "Master's Degrees",
        programs: &[
            "Master in Information Systems",
            "Master in Information Technology",
            "Master in Logistics and Supply Chain Management",
            "Master of Engineering with Specialization in Civil Engineering",
            "Master of Engineering with Specialization in Computer Engineering",
            "Master of Engineering with Specialization in Electrical Engineering",
            "Master of Engineering with Specialization in Electronics Engineering",
            "Master of Engineering with Specialization in Industrial Engineering",
            "Master of Engineering with Specialization in Mechanical Engineering",
            "Master of Science in Computer Science",
        ],
    },
];

// ============================================================================
// Fixed option lists
// ============================================================================

pub const GENDERS: &[&str] = &["Male", "Female", "Non-binary"];
pub const NATIONALITIES: &[&str] = &["Filipino", "American", "Other"];
pub const SEMESTERS: &[&str] = &["First Semester", "Second Semester", "Summer"];
pub const CAMPUSES: &[&str] = &["Manila", "Quezon City"];
pub const ACADEMIC_LEVELS: &[&str] = &["Undergraduate", "Graduate"];

///
/// TESTS
///
