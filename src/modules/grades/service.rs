use anyhow::{Context, anyhow};
use sqlx::PgPool;
use tracing::{info, instrument};

use academia_core::AppError;

use crate::validator::validate_body;

use super::model::{
    ENROLLMENT_NOT_FOUND, EnrollmentStatus, GRADE_OUT_OF_RANGE, GradeAggregates, GradeStatistics,
    PASSING_GRADE, UpdateGradeDto, is_valid_grade,
};

pub struct GradeService;

impl GradeService {
    /// Records the final grade of an enrollment.
    ///
    /// The grade and remarks are always written. A passing grade also moves
    /// an `active` enrollment to `completed`; any other state is left alone,
    /// so repeating the same update changes nothing. Both happen under a row
    /// lock in one transaction.
    #[instrument(skip(db, dto), fields(calificacion = dto.calificacion_final))]
    pub async fn update_grade(
        db: &PgPool,
        enrollment_id: i32,
        dto: UpdateGradeDto,
    ) -> Result<EnrollmentStatus, AppError> {
        let grade = dto.calificacion_final;
        if !is_valid_grade(grade) {
            return Err(AppError::bad_request(anyhow!(GRADE_OUT_OF_RANGE)));
        }
        validate_body(&dto)?;

        let mut tx = db
            .begin()
            .await
            .context("Failed to begin transaction")
            .map_err(AppError::database)?;

        let current = sqlx::query_scalar::<_, EnrollmentStatus>(
            "SELECT estado FROM inscripcion WHERE id = $1 FOR UPDATE",
        )
        .bind(enrollment_id)
        .fetch_optional(&mut *tx)
        .await
        .context("Failed to lock enrollment")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow!(ENROLLMENT_NOT_FOUND)))?;

        let next = current.after_grade(grade);

        sqlx::query(
            r#"UPDATE inscripcion
               SET calificacion_final = $1,
                   observaciones = COALESCE($2, observaciones),
                   estado = $3,
                   updated_at = NOW()
               WHERE id = $4"#,
        )
        .bind(grade)
        .bind(dto.observaciones)
        .bind(next)
        .bind(enrollment_id)
        .execute(&mut *tx)
        .await
        .context("Failed to update grade")
        .map_err(AppError::database)?;

        tx.commit()
            .await
            .context("Failed to commit grade update")
            .map_err(AppError::database)?;

        if next != current {
            info!(enrollment_id, ?current, ?next, "Enrollment status changed by grade");
        }

        Ok(next)
    }

    #[instrument(skip(db))]
    pub async fn get_statistics(db: &PgPool) -> Result<GradeStatistics, AppError> {
        let aggregates = sqlx::query_as::<_, GradeAggregates>(
            r#"SELECT
                COUNT(*) AS total_inscripciones,
                COUNT(calificacion_final) AS calificadas,
                COUNT(*) FILTER (WHERE calificacion_final >= $1) AS aprobadas,
                COUNT(*) FILTER (WHERE calificacion_final < $1) AS reprobadas,
                AVG(calificacion_final) AS promedio,
                MAX(calificacion_final) AS nota_maxima,
                MIN(calificacion_final) AS nota_minima
               FROM inscripcion"#,
        )
        .bind(PASSING_GRADE)
        .fetch_one(db)
        .await
        .context("Failed to compute grade statistics")
        .map_err(AppError::database)?;

        Ok(GradeStatistics::from(aggregates))
    }
}
