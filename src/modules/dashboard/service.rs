use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use academia_core::AppError;

use super::model::{DashboardSummary, RecentEnrollment, TopCourse};

pub struct DashboardService;

impl DashboardService {
    /// Courses ranked by how many enrollments their sections hold.
    #[instrument(skip(db))]
    pub async fn get_top_courses(db: &PgPool, limit: i64) -> Result<Vec<TopCourse>, AppError> {
        sqlx::query_as::<_, TopCourse>(
            r#"SELECT
                c.id,
                c.nombre,
                COUNT(DISTINCT p.id) AS paralelos,
                COUNT(i.id) AS inscripciones
               FROM curso c
               LEFT JOIN paralelo p ON p.id_curso = c.id
               LEFT JOIN inscripcion i ON i.id_paralelo = p.id
               GROUP BY c.id, c.nombre
               ORDER BY inscripciones DESC, c.nombre
               LIMIT $1"#,
        )
        .bind(limit)
        .fetch_all(db)
        .await
        .context("Failed to fetch top courses")
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn get_recent_enrollments(
        db: &PgPool,
        limit: i64,
    ) -> Result<Vec<RecentEnrollment>, AppError> {
        sqlx::query_as::<_, RecentEnrollment>(
            r#"SELECT
                i.id,
                u.nombre || ' ' || u.apellido AS estudiante,
                c.nombre AS curso,
                p.nombre AS paralelo,
                i.estado,
                i.fecha_inscripcion
               FROM inscripcion i
               JOIN estudiante e ON e.id = i.id_estudiante
               JOIN usuario u ON u.id = e.id_usuario
               JOIN paralelo p ON p.id = i.id_paralelo
               JOIN curso c ON c.id = p.id_curso
               ORDER BY i.fecha_inscripcion DESC, i.id DESC
               LIMIT $1"#,
        )
        .bind(limit)
        .fetch_all(db)
        .await
        .context("Failed to fetch recent enrollments")
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn get_summary(db: &PgPool) -> Result<DashboardSummary, AppError> {
        sqlx::query_as::<_, DashboardSummary>(
            r#"SELECT
                (SELECT COUNT(*) FROM usuario WHERE rol = 'student' AND activo) AS total_estudiantes,
                (SELECT COUNT(*) FROM usuario WHERE rol = 'instructor' AND activo) AS total_instructores,
                (SELECT COUNT(*) FROM curso WHERE activo) AS cursos_activos,
                (SELECT COUNT(*) FROM inscripcion WHERE estado = 'active') AS inscripciones_activas,
                (SELECT COUNT(*) FROM certificado) AS certificados_emitidos"#,
        )
        .fetch_one(db)
        .await
        .context("Failed to compute dashboard summary")
        .map_err(AppError::database)
    }
}
