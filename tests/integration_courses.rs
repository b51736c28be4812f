mod common;

use academia_models::users::UserRole;
use axum::http::StatusCode;
use common::{
    body_json, create_test_course, create_test_enrollment, create_test_section, create_test_user,
    login, request, setup_test_app,
};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

async fn admin_app(pool: &PgPool) -> (axum::Router, String) {
    let admin = create_test_user(pool, UserRole::Admin).await;
    let app = setup_test_app(pool.clone());
    let cookie = login(&app, &admin).await;
    (app, cookie)
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_get_course(pool: PgPool) {
    let (app, cookie) = admin_app(&pool).await;

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/admin/cursos",
            Some(&cookie),
            Some(json!({
                "nombre": "Programación en Rust",
                "descripcion": "Desde cero",
                "duracion_horas": 60
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["nombre"], "Programación en Rust");
    assert_eq!(body["activo"], true);
    let id = body["id"].as_i64().unwrap();

    let response = app
        .oneshot(request(
            "GET",
            &format!("/api/admin/cursos/{}", id),
            Some(&cookie),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["duracion_horas"], 60);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_course_validation(pool: PgPool) {
    let (app, cookie) = admin_app(&pool).await;

    let response = app
        .oneshot(request(
            "POST",
            "/api/admin/cursos",
            Some(&cookie),
            Some(json!({"nombre": "", "duracion_horas": 0})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_courses_filters_by_name(pool: PgPool) {
    create_test_course(&pool, "Rust Avanzado").await;
    create_test_course(&pool, "Go Básico").await;
    let (app, cookie) = admin_app(&pool).await;

    let response = app
        .oneshot(request(
            "GET",
            "/api/admin/cursos?nombre=rust",
            Some(&cookie),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["meta"]["total"], 1);
    assert_eq!(body["data"][0]["nombre"], "Rust Avanzado");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_course_keeps_omitted_fields(pool: PgPool) {
    let id = create_test_course(&pool, "Rust").await;
    let (app, cookie) = admin_app(&pool).await;

    let response = app
        .oneshot(request(
            "PUT",
            &format!("/api/admin/cursos/{}", id),
            Some(&cookie),
            Some(json!({"activo": false})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["nombre"], "Rust");
    assert_eq!(body["duracion_horas"], 40);
    assert_eq!(body["activo"], false);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_unknown_course(pool: PgPool) {
    let (app, cookie) = admin_app(&pool).await;

    let response = app
        .oneshot(request("GET", "/api/admin/cursos/999999", Some(&cookie), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Curso no encontrado");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_course_with_enrollments_conflicts(pool: PgPool) {
    let course = create_test_course(&pool, "Rust").await;
    let section = create_test_section(&pool, course, "A", 10).await;
    let student = create_test_user(&pool, UserRole::Student).await;
    create_test_enrollment(&pool, student.id_perfil.unwrap(), section).await;
    let empty = create_test_course(&pool, "Vacío").await;
    let (app, cookie) = admin_app(&pool).await;

    let response = app
        .clone()
        .oneshot(request(
            "DELETE",
            &format!("/api/admin/cursos/{}", course),
            Some(&cookie),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .oneshot(request(
            "DELETE",
            &format!("/api/admin/cursos/{}", empty),
            Some(&cookie),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_sections_of_course(pool: PgPool) {
    let course = create_test_course(&pool, "Rust").await;
    let instructor = create_test_user(&pool, UserRole::Instructor).await;
    let (app, cookie) = admin_app(&pool).await;
    let uri = format!("/api/admin/cursos/{}/paralelos", course);

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            &uri,
            Some(&cookie),
            Some(json!({
                "nombre": "A",
                "id_instructor": instructor.id_perfil,
                "cupo": 25,
                "fecha_inicio": "2026-03-02"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["fecha_inicio"], "2026-03-02");

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            &uri,
            Some(&cookie),
            Some(json!({"nombre": "A", "cupo": 10, "fecha_inicio": "2026-03-02"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .oneshot(request("GET", &uri, Some(&cookie), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["instructor"], "Test User");
    assert_eq!(rows[0]["inscritos"], 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_sections_of_unknown_course(pool: PgPool) {
    let (app, cookie) = admin_app(&pool).await;

    let response = app
        .oneshot(request(
            "GET",
            "/api/admin/cursos/999999/paralelos",
            Some(&cookie),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
