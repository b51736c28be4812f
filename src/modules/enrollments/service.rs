use anyhow::{Context, anyhow};
use sqlx::PgPool;
use tracing::{info, instrument};

use academia_core::{AppError, PaginationMeta};

use super::model::{
    ALREADY_ENROLLED, CreateEnrollmentDto, Enrollment, EnrollmentDetails, EnrollmentFilterParams,
    PaginatedEnrollmentsResponse, SECTION_FULL, SECTION_NOT_FOUND, STUDENT_NOT_FOUND,
};

/// Enrollment rows joined with student, section and course names.
pub(crate) const ENROLLMENT_DETAILS_SELECT: &str = r#"
    SELECT
        i.id,
        i.id_estudiante,
        u.nombre || ' ' || u.apellido AS estudiante,
        u.email,
        i.id_paralelo,
        p.nombre AS paralelo,
        c.id AS id_curso,
        c.nombre AS curso,
        i.estado,
        i.calificacion_final,
        i.observaciones,
        i.fecha_inscripcion,
        EXISTS (SELECT 1 FROM certificado ce WHERE ce.id_inscripcion = i.id) AS tiene_certificado
    FROM inscripcion i
    JOIN estudiante e ON e.id = i.id_estudiante
    JOIN usuario u ON u.id = e.id_usuario
    JOIN paralelo p ON p.id = i.id_paralelo
    JOIN curso c ON c.id = p.id_curso"#;

const ENROLLMENT_FILTER: &str = r#"
    WHERE ($1::estado_inscripcion IS NULL OR i.estado = $1)
      AND ($2::int IS NULL OR i.id_paralelo = $2)
      AND ($3::int IS NULL OR c.id = $3)"#;

pub struct EnrollmentService;

impl EnrollmentService {
    #[instrument(skip(db))]
    pub async fn get_enrollments(
        db: &PgPool,
        filters: EnrollmentFilterParams,
    ) -> Result<PaginatedEnrollmentsResponse, AppError> {
        let pagination = filters.pagination();

        let total = sqlx::query_scalar::<_, i64>(&format!(
            r#"SELECT COUNT(*)
               FROM inscripcion i
               JOIN paralelo p ON p.id = i.id_paralelo
               JOIN curso c ON c.id = p.id_curso
               {ENROLLMENT_FILTER}"#
        ))
        .bind(filters.estado)
        .bind(filters.id_paralelo)
        .bind(filters.id_curso)
        .fetch_one(db)
        .await
        .context("Failed to count enrollments")
        .map_err(AppError::database)?;

        let data = sqlx::query_as::<_, EnrollmentDetails>(&format!(
            "{ENROLLMENT_DETAILS_SELECT} {ENROLLMENT_FILTER}
             ORDER BY i.fecha_inscripcion DESC, i.id DESC
             LIMIT $4 OFFSET $5"
        ))
        .bind(filters.estado)
        .bind(filters.id_paralelo)
        .bind(filters.id_curso)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(db)
        .await
        .context("Failed to fetch enrollments")
        .map_err(AppError::database)?;

        Ok(PaginatedEnrollmentsResponse {
            data,
            meta: PaginationMeta::new(total, &pagination),
        })
    }

    /// Enrolls a student, refusing duplicates and full sections.
    ///
    /// The section row is locked so concurrent enrollments cannot both take
    /// the last seat.
    #[instrument(skip(db))]
    pub async fn create_enrollment(
        db: &PgPool,
        dto: CreateEnrollmentDto,
    ) -> Result<Enrollment, AppError> {
        let mut tx = db
            .begin()
            .await
            .context("Failed to begin transaction")
            .map_err(AppError::database)?;

        let cupo = sqlx::query_scalar::<_, i32>("SELECT cupo FROM paralelo WHERE id = $1 FOR UPDATE")
            .bind(dto.id_paralelo)
            .fetch_optional(&mut *tx)
            .await
            .context("Failed to lock section")
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(anyhow!(SECTION_NOT_FOUND)))?;

        let student_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM estudiante WHERE id = $1)")
                .bind(dto.id_estudiante)
                .fetch_one(&mut *tx)
                .await
                .context("Failed to check student")
                .map_err(AppError::database)?;

        if !student_exists {
            return Err(AppError::not_found(anyhow!(STUDENT_NOT_FOUND)));
        }

        let taken = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM inscripcion WHERE id_paralelo = $1 AND estado <> 'withdrawn'",
        )
        .bind(dto.id_paralelo)
        .fetch_one(&mut *tx)
        .await
        .context("Failed to count section seats")
        .map_err(AppError::database)?;

        if taken >= i64::from(cupo) {
            return Err(AppError::bad_request(anyhow!(SECTION_FULL)));
        }

        let enrollment = sqlx::query_as::<_, Enrollment>(
            r#"INSERT INTO inscripcion (id_estudiante, id_paralelo)
               VALUES ($1, $2)
               RETURNING id, id_estudiante, id_paralelo, estado, calificacion_final,
                         observaciones, fecha_inscripcion"#,
        )
        .bind(dto.id_estudiante)
        .bind(dto.id_paralelo)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::conflict(anyhow!(ALREADY_ENROLLED));
            }
            AppError::database(anyhow::Error::from(e).context("Failed to create enrollment"))
        })?;

        tx.commit()
            .await
            .context("Failed to commit enrollment")
            .map_err(AppError::database)?;

        info!(enrollment_id = enrollment.id, "Enrollment created");
        Ok(enrollment)
    }
}
