use anyhow::{Context, anyhow};
use chrono::Utc;
use sqlx::PgPool;
use tracing::{info, instrument};

use academia_core::{AppError, PaginationMeta};

use super::model::{
    CERTIFICATE_ALREADY_ISSUED, CERTIFICATE_NOT_FOUND, Certificate, CertificateFilterParams,
    CertificateStatistics, CertificateWithDetails, CertificatesByCourse, ENROLLMENT_NOT_COMPLETED,
    ENROLLMENT_NOT_FOUND, EnrollmentStatus, IssueCertificateDto, PaginatedCertificatesResponse,
    certificate_code,
};

pub struct CertificateService;

impl CertificateService {
    #[instrument(skip(db))]
    pub async fn get_certificates(
        db: &PgPool,
        filters: CertificateFilterParams,
    ) -> Result<PaginatedCertificatesResponse, AppError> {
        let pagination = filters.pagination();

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM certificado")
            .fetch_one(db)
            .await
            .context("Failed to count certificates")
            .map_err(AppError::database)?;

        let data = sqlx::query_as::<_, CertificateWithDetails>(
            r#"SELECT
                ce.id,
                ce.id_inscripcion,
                ce.codigo,
                ce.fecha_emision,
                u.nombre || ' ' || u.apellido AS estudiante,
                u.email,
                c.nombre AS curso,
                p.nombre AS paralelo,
                i.calificacion_final
               FROM certificado ce
               JOIN inscripcion i ON i.id = ce.id_inscripcion
               JOIN estudiante e ON e.id = i.id_estudiante
               JOIN usuario u ON u.id = e.id_usuario
               JOIN paralelo p ON p.id = i.id_paralelo
               JOIN curso c ON c.id = p.id_curso
               ORDER BY ce.fecha_emision DESC, ce.id DESC
               LIMIT $1 OFFSET $2"#,
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(db)
        .await
        .context("Failed to fetch certificates")
        .map_err(AppError::database)?;

        Ok(PaginatedCertificatesResponse {
            data,
            meta: PaginationMeta::new(total, &pagination),
        })
    }

    /// Issues the certificate of a completed enrollment.
    #[instrument(skip(db))]
    pub async fn issue_certificate(
        db: &PgPool,
        dto: IssueCertificateDto,
    ) -> Result<Certificate, AppError> {
        let mut tx = db
            .begin()
            .await
            .context("Failed to begin transaction")
            .map_err(AppError::database)?;

        let estado = sqlx::query_scalar::<_, EnrollmentStatus>(
            "SELECT estado FROM inscripcion WHERE id = $1 FOR UPDATE",
        )
        .bind(dto.id_inscripcion)
        .fetch_optional(&mut *tx)
        .await
        .context("Failed to load enrollment")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow!(ENROLLMENT_NOT_FOUND)))?;

        if estado != EnrollmentStatus::Completed {
            return Err(AppError::bad_request(anyhow!(ENROLLMENT_NOT_COMPLETED)));
        }

        let issued_at = Utc::now();
        let certificate = sqlx::query_as::<_, Certificate>(
            r#"INSERT INTO certificado (id_inscripcion, codigo, fecha_emision)
               VALUES ($1, $2, $3)
               RETURNING id, id_inscripcion, codigo, fecha_emision"#,
        )
        .bind(dto.id_inscripcion)
        .bind(certificate_code(dto.id_inscripcion, issued_at))
        .bind(issued_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::conflict(anyhow!(CERTIFICATE_ALREADY_ISSUED));
            }
            AppError::database(anyhow::Error::from(e).context("Failed to issue certificate"))
        })?;

        tx.commit()
            .await
            .context("Failed to commit certificate")
            .map_err(AppError::database)?;

        info!(certificate_id = certificate.id, codigo = %certificate.codigo, "Certificate issued");
        Ok(certificate)
    }

    #[instrument(skip(db))]
    pub async fn revoke_certificate(db: &PgPool, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM certificado WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete certificate")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!(CERTIFICATE_NOT_FOUND)));
        }

        info!(certificate_id = id, "Certificate revoked");
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn get_statistics(db: &PgPool) -> Result<CertificateStatistics, AppError> {
        let (total_emitidos, emitidos_ultimo_mes) = sqlx::query_as::<_, (i64, i64)>(
            r#"SELECT
                COUNT(*),
                COUNT(*) FILTER (WHERE fecha_emision >= NOW() - INTERVAL '30 days')
               FROM certificado"#,
        )
        .fetch_one(db)
        .await
        .context("Failed to count certificates")
        .map_err(AppError::database)?;

        let pendientes = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*)
               FROM inscripcion i
               WHERE i.estado = 'completed'
                 AND NOT EXISTS (SELECT 1 FROM certificado ce WHERE ce.id_inscripcion = i.id)"#,
        )
        .fetch_one(db)
        .await
        .context("Failed to count pending certificates")
        .map_err(AppError::database)?;

        let por_curso = sqlx::query_as::<_, CertificatesByCourse>(
            r#"SELECT c.id AS id_curso, c.nombre AS curso, COUNT(ce.id) AS emitidos
               FROM certificado ce
               JOIN inscripcion i ON i.id = ce.id_inscripcion
               JOIN paralelo p ON p.id = i.id_paralelo
               JOIN curso c ON c.id = p.id_curso
               GROUP BY c.id, c.nombre
               ORDER BY emitidos DESC, c.nombre"#,
        )
        .fetch_all(db)
        .await
        .context("Failed to group certificates by course")
        .map_err(AppError::database)?;

        Ok(CertificateStatistics {
            total_emitidos,
            emitidos_ultimo_mes,
            pendientes,
            por_curso,
        })
    }
}
