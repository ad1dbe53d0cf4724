//! Repository for the `program_modules` table.

use luct_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::program_module::{CreateProgramModule, ModuleOverview, ProgramModule};
use crate::queries::{avg_attendance, avg_rating_where};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, module_code, module_name, program, credits, semester, lecturer_id, status, created_at";

/// Provides CRUD operations for the module catalog.
pub struct ProgramModuleRepo;

impl ProgramModuleRepo {
    /// Insert a new module, returning the created row.
    ///
    /// Fails with a unique violation when `module_code` is already used.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateProgramModule,
    ) -> Result<ProgramModule, sqlx::Error> {
        let query = format!(
            "INSERT INTO program_modules \
                 (module_code, module_name, program, credits, semester, lecturer_id) \
             VALUES ($1, $2, $3, COALESCE($4, 3), COALESCE($5, 1), $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProgramModule>(&query)
            .bind(&input.module_code)
            .bind(&input.module_name)
            .bind(&input.program)
            .bind(input.credits)
            .bind(input.semester)
            .bind(input.lecturer_id)
            .fetch_one(pool)
            .await
    }

    /// Set (or clear) the lecturer of a module. Returns `true` if a row was
    /// updated.
    pub async fn assign_lecturer(
        pool: &SqlitePool,
        id: DbId,
        lecturer_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE program_modules SET lecturer_id = $1 WHERE id = $2")
            .bind(lecturer_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List modules with their lecturer and the statistics of reports filed
    /// under the module code, ordered by program then semester.
    pub async fn list_overview(pool: &SqlitePool) -> Result<Vec<ModuleOverview>, sqlx::Error> {
        let query = format!(
            "SELECT pm.id, pm.module_code, pm.module_name, pm.program, pm.credits, \
                 pm.semester, pm.lecturer_id, pm.status, pm.created_at, \
                 u.name AS lecturer_name, \
                 COUNT(r.id) AS total_lectures, \
                 {} AS avg_attendance, \
                 {} AS avg_rating \
             FROM program_modules pm \
             LEFT JOIN users u ON u.id = pm.lecturer_id \
             LEFT JOIN reports r ON r.course_code = pm.module_code \
             GROUP BY pm.id \
             ORDER BY pm.program, pm.semester, pm.id",
            avg_attendance("r"),
            avg_rating_where("rr.course_code = pm.module_code"),
        );
        sqlx::query_as::<_, ModuleOverview>(&query)
            .fetch_all(pool)
            .await
    }
}
