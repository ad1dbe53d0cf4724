//! Programs tracked on the Program Leader dashboard.
//!
//! Reports carry a course code, not a program. A program is identified by
//! the prefix of the course codes that belong to it.

/// A program and the course-code prefix that identifies its reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramPrefix {
    pub program: &'static str,
    pub course_code_prefix: &'static str,
}

pub const DASHBOARD_PROGRAMS: &[ProgramPrefix] = &[
    ProgramPrefix {
        program: "Web Development",
        course_code_prefix: "DIWA",
    },
    ProgramPrefix {
        program: "Database Systems",
        course_code_prefix: "DBS",
    },
    ProgramPrefix {
        program: "Networking",
        course_code_prefix: "NET",
    },
];

impl ProgramPrefix {
    /// SQL `LIKE` pattern matching every course code of this program.
    ///
    /// The prefixes are alphanumeric, so no `LIKE` escaping is needed.
    pub fn like_pattern(&self) -> String {
        format!("{}%", self.course_code_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_appends_wildcard() {
        assert_eq!(DASHBOARD_PROGRAMS[0].like_pattern(), "DIWA%");
    }

    #[test]
    fn prefixes_are_distinct() {
        for (i, a) in DASHBOARD_PROGRAMS.iter().enumerate() {
            for b in &DASHBOARD_PROGRAMS[i + 1..] {
                assert_ne!(a.course_code_prefix, b.course_code_prefix);
            }
        }
    }
}
