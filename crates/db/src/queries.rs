//! Shared SQL fragments and the report summary query builder.
//!
//! Every dashboard computes attendance and rating figures the same way; the
//! expressions live here so near-duplicate queries cannot drift apart.
//! Fragments are built from code-side constants only. Request values are
//! always bound as `$N` parameters by the caller.

/// Column list of the `reports` table, unqualified.
pub const REPORT_COLUMNS: &str = "\
    id, lecturer_id, lecturer_name, faculty_name, class_name, week_of_reporting, \
    date_of_lecture, course_name, course_code, actual_students_present, \
    total_registered_students, venue, scheduled_time, topic_taught, \
    learning_outcomes, recommendations, prl_feedback, status, created_at";

/// Attendance percentage of the report row aliased `alias`.
///
/// SQLite evaluates division by zero to NULL, so a report with no registered
/// students contributes nothing to an average instead of failing.
pub fn attendance_pct(alias: &str) -> String {
    format!("({alias}.actual_students_present * 100.0 / {alias}.total_registered_students)")
}

/// `AVG` of [`attendance_pct`]. Null over an empty group.
pub fn avg_attendance(alias: &str) -> String {
    format!("AVG({})", attendance_pct(alias))
}

/// Average rating of the single report aliased `alias`.
pub fn report_avg_rating(alias: &str) -> String {
    format!("(SELECT AVG(rt.rating_value) FROM ratings rt WHERE rt.report_id = {alias}.id)")
}

/// Number of ratings on the single report aliased `alias`.
pub fn report_rating_count(alias: &str) -> String {
    format!("(SELECT COUNT(*) FROM ratings rt WHERE rt.report_id = {alias}.id)")
}

/// Average rating over all reports satisfying `report_filter`, a boolean
/// expression over the report alias `rr`.
pub fn avg_rating_where(report_filter: &str) -> String {
    format!(
        "(SELECT AVG(rt.rating_value) FROM ratings rt \
         JOIN reports rr ON rr.id = rt.report_id WHERE {report_filter})"
    )
}

/// Report columns qualified with `r`. The lecturer name comes from the
/// joined user `u` when the report is linked to an account.
fn summary_report_columns() -> String {
    REPORT_COLUMNS
        .split(',')
        .map(str::trim)
        .map(|col| {
            if col == "lecturer_name" {
                "COALESCE(u.name, r.lecturer_name) AS lecturer_name".to_string()
            } else {
                format!("r.{col}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Ordering of report listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOrder {
    /// Most recently submitted first.
    NewestFirst,
    /// Most recent lecture date first.
    LectureDateDesc,
}

impl ReportOrder {
    fn as_sql(self) -> &'static str {
        match self {
            ReportOrder::NewestFirst => "r.created_at DESC, r.id DESC",
            ReportOrder::LectureDateDesc => "r.date_of_lecture DESC, r.id DESC",
        }
    }
}

/// Builds `SELECT`s returning [`crate::models::report::ReportSummary`]
/// rows, optionally widened with extra joins and columns.
#[derive(Debug, Clone)]
pub struct ReportSummaryQuery {
    joins: Vec<String>,
    extra_columns: Vec<String>,
    filters: Vec<String>,
    order: ReportOrder,
    limit: Option<i64>,
}

impl Default for ReportSummaryQuery {
    fn default() -> Self {
        Self {
            joins: Vec::new(),
            extra_columns: Vec::new(),
            filters: Vec::new(),
            order: ReportOrder::NewestFirst,
            limit: None,
        }
    }
}

impl ReportSummaryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn join(mut self, join: impl Into<String>) -> Self {
        self.joins.push(join.into());
        self
    }

    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.extra_columns.push(column.into());
        self
    }

    /// Add a `WHERE` condition; multiple conditions are `AND`ed.
    pub fn filter(mut self, condition: impl Into<String>) -> Self {
        self.filters.push(condition.into());
        self
    }

    pub fn order(mut self, order: ReportOrder) -> Self {
        self.order = order;
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn build(&self) -> String {
        let mut columns = vec![
            summary_report_columns(),
            format!("{} AS attendance_rate", attendance_pct("r")),
            format!("{} AS avg_rating", report_avg_rating("r")),
            format!("{} AS total_ratings", report_rating_count("r")),
        ];
        columns.extend(self.extra_columns.iter().cloned());

        let mut sql = format!(
            "SELECT {} FROM reports r LEFT JOIN users u ON u.id = r.lecturer_id",
            columns.join(", ")
        );
        for join in &self.joins {
            sql.push(' ');
            sql.push_str(join);
        }
        if !self.filters.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.filters.join(" AND "));
        }
        sql.push_str(" ORDER BY ");
        sql.push_str(self.order.as_sql());
        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        sql
    }
}
