use anyhow::{Context, anyhow};
use sqlx::PgPool;
use tracing::{info, instrument};

use academia_core::{AppError, PaginationMeta};

use super::model::{
    COURSE_HAS_ENROLLMENTS, COURSE_NOT_FOUND, Course, CourseFilterParams, CreateCourseDto,
    CreateSectionDto, INSTRUCTOR_NOT_FOUND, PaginatedCoursesResponse, SECTION_NAME_TAKEN,
    Section, SectionWithStats, UpdateCourseDto,
};

const COURSE_COLUMNS: &str = "id, nombre, descripcion, duracion_horas, activo, created_at";

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db))]
    pub async fn create_course(db: &PgPool, dto: CreateCourseDto) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(&format!(
            r#"INSERT INTO curso (nombre, descripcion, duracion_horas)
               VALUES ($1, $2, $3)
               RETURNING {COURSE_COLUMNS}"#
        ))
        .bind(dto.nombre.trim())
        .bind(&dto.descripcion)
        .bind(dto.duracion_horas)
        .fetch_one(db)
        .await
        .context("Failed to create course")
        .map_err(AppError::database)?;

        info!(course_id = course.id, "Course created");
        Ok(course)
    }

    #[instrument(skip(db))]
    pub async fn get_courses(
        db: &PgPool,
        filters: CourseFilterParams,
    ) -> Result<PaginatedCoursesResponse, AppError> {
        let pagination = filters.pagination();
        let name_pattern = filters.nombre.as_ref().map(|n| format!("%{}%", n.trim()));

        let total = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM curso
               WHERE ($1::text IS NULL OR nombre ILIKE $1)
                 AND ($2::bool IS NULL OR activo = $2)"#,
        )
        .bind(&name_pattern)
        .bind(filters.activo)
        .fetch_one(db)
        .await
        .context("Failed to count courses")
        .map_err(AppError::database)?;

        let data = sqlx::query_as::<_, Course>(&format!(
            r#"SELECT {COURSE_COLUMNS} FROM curso
               WHERE ($1::text IS NULL OR nombre ILIKE $1)
                 AND ($2::bool IS NULL OR activo = $2)
               ORDER BY nombre, id
               LIMIT $3 OFFSET $4"#
        ))
        .bind(&name_pattern)
        .bind(filters.activo)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(db)
        .await
        .context("Failed to fetch courses")
        .map_err(AppError::database)?;

        Ok(PaginatedCoursesResponse {
            data,
            meta: PaginationMeta::new(total, &pagination),
        })
    }

    #[instrument(skip(db))]
    pub async fn get_course_by_id(db: &PgPool, id: i32) -> Result<Course, AppError> {
        sqlx::query_as::<_, Course>(&format!("SELECT {COURSE_COLUMNS} FROM curso WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await
            .context("Failed to fetch course")
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(anyhow!(COURSE_NOT_FOUND)))
    }

    #[instrument(skip(db))]
    pub async fn update_course(
        db: &PgPool,
        id: i32,
        dto: UpdateCourseDto,
    ) -> Result<Course, AppError> {
        sqlx::query_as::<_, Course>(&format!(
            r#"UPDATE curso
               SET nombre = COALESCE($2, nombre),
                   descripcion = COALESCE($3, descripcion),
                   duracion_horas = COALESCE($4, duracion_horas),
                   activo = COALESCE($5, activo)
               WHERE id = $1
               RETURNING {COURSE_COLUMNS}"#
        ))
        .bind(id)
        .bind(dto.nombre.as_deref().map(str::trim))
        .bind(&dto.descripcion)
        .bind(dto.duracion_horas)
        .bind(dto.activo)
        .fetch_optional(db)
        .await
        .context("Failed to update course")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow!(COURSE_NOT_FOUND)))
    }

    /// Deletes a course and its sections. Refused while any section still
    /// holds enrollments, so grades and certificates are never dropped.
    #[instrument(skip(db))]
    pub async fn delete_course(db: &PgPool, id: i32) -> Result<(), AppError> {
        let mut tx = db
            .begin()
            .await
            .context("Failed to begin transaction")
            .map_err(AppError::database)?;

        let has_enrollments = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(
                SELECT 1 FROM inscripcion i
                JOIN paralelo p ON p.id = i.id_paralelo
                WHERE p.id_curso = $1
            )"#,
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .context("Failed to check course enrollments")
        .map_err(AppError::database)?;

        if has_enrollments {
            return Err(AppError::conflict(anyhow!(COURSE_HAS_ENROLLMENTS)));
        }

        let result = sqlx::query("DELETE FROM curso WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .context("Failed to delete course")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!(COURSE_NOT_FOUND)));
        }

        tx.commit()
            .await
            .context("Failed to commit course deletion")
            .map_err(AppError::database)?;

        info!(course_id = id, "Course deleted");
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn get_sections(
        db: &PgPool,
        course_id: i32,
    ) -> Result<Vec<SectionWithStats>, AppError> {
        // Distinguish an unknown course from one without sections.
        Self::get_course_by_id(db, course_id).await?;

        sqlx::query_as::<_, SectionWithStats>(
            r#"SELECT
                p.id,
                p.id_curso,
                p.id_instructor,
                u.nombre || ' ' || u.apellido AS instructor,
                p.nombre,
                p.cupo,
                p.fecha_inicio,
                COUNT(i.id) FILTER (WHERE i.estado <> 'withdrawn') AS inscritos,
                p.created_at
               FROM paralelo p
               LEFT JOIN instructor ins ON ins.id = p.id_instructor
               LEFT JOIN usuario u ON u.id = ins.id_usuario
               LEFT JOIN inscripcion i ON i.id_paralelo = p.id
               WHERE p.id_curso = $1
               GROUP BY p.id, u.nombre, u.apellido
               ORDER BY p.fecha_inicio, p.nombre"#,
        )
        .bind(course_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch sections")
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn create_section(
        db: &PgPool,
        course_id: i32,
        dto: CreateSectionDto,
    ) -> Result<Section, AppError> {
        Self::get_course_by_id(db, course_id).await?;

        let section = sqlx::query_as::<_, Section>(
            r#"INSERT INTO paralelo (id_curso, id_instructor, nombre, cupo, fecha_inicio)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id, id_curso, id_instructor, nombre, cupo, fecha_inicio, created_at"#,
        )
        .bind(course_id)
        .bind(dto.id_instructor)
        .bind(dto.nombre.trim())
        .bind(dto.cupo)
        .bind(dto.fecha_inicio)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::conflict(anyhow!(SECTION_NAME_TAKEN));
                }
                if db_err.is_foreign_key_violation() {
                    return AppError::not_found(anyhow!(INSTRUCTOR_NOT_FOUND));
                }
            }
            AppError::database(anyhow::Error::from(e).context("Failed to create section"))
        })?;

        info!(section_id = section.id, course_id, "Section created");
        Ok(section)
    }
}
