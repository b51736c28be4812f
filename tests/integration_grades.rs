mod common;

use academia_models::users::UserRole;
use axum::http::StatusCode;
use common::{
    body_json, create_enrolled_student, create_test_user, enrollment_state, login, request,
    setup_test_app,
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

async fn put_grade(app: &axum::Router, cookie: &str, id: i32, body: serde_json::Value) -> axum::response::Response {
    app.clone()
        .oneshot(request(
            "PUT",
            &format!("/api/admin/calificaciones/{}", id),
            Some(cookie),
            Some(body),
        ))
        .await
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_passing_grade_completes_enrollment(pool: PgPool) {
    let enrollment = create_enrolled_student(&pool).await;
    let (app, cookie) = admin_app(&pool).await;

    let response = put_grade(
        &app,
        &cookie,
        enrollment,
        json!({"calificacion_final": 85, "observaciones": "Muy bien"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({"success": true, "message": "Calificación actualizada correctamente"})
    );

    let (estado, nota, obs) = enrollment_state(&pool, enrollment).await;
    assert_eq!(estado, "completed");
    assert_eq!(nota, Some(85.0));
    assert_eq!(obs.as_deref(), Some("Muy bien"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_exactly_51_passes(pool: PgPool) {
    let enrollment = create_enrolled_student(&pool).await;
    let (app, cookie) = admin_app(&pool).await;

    let response = put_grade(&app, &cookie, enrollment, json!({"calificacion_final": 51})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let (estado, nota, _) = enrollment_state(&pool, enrollment).await;
    assert_eq!(estado, "completed");
    assert_eq!(nota, Some(51.0));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_failing_grade_keeps_enrollment_active(pool: PgPool) {
    let enrollment = create_enrolled_student(&pool).await;
    let (app, cookie) = admin_app(&pool).await;

    let response =
        put_grade(&app, &cookie, enrollment, json!({"calificacion_final": 50.99})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let (estado, nota, _) = enrollment_state(&pool, enrollment).await;
    assert_eq!(estado, "active");
    assert_eq!(nota, Some(50.99));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_boundary_grades_accepted(pool: PgPool) {
    let enrollment = create_enrolled_student(&pool).await;
    let (app, cookie) = admin_app(&pool).await;

    let response = put_grade(&app, &cookie, enrollment, json!({"calificacion_final": 0})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let (estado, nota, _) = enrollment_state(&pool, enrollment).await;
    assert_eq!(estado, "active");
    assert_eq!(nota, Some(0.0));

    let response = put_grade(&app, &cookie, enrollment, json!({"calificacion_final": 100})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let (estado, nota, _) = enrollment_state(&pool, enrollment).await;
    assert_eq!(estado, "completed");
    assert_eq!(nota, Some(100.0));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_out_of_range_grade_rejected_without_changes(pool: PgPool) {
    let enrollment = create_enrolled_student(&pool).await;
    let (app, cookie) = admin_app(&pool).await;

    for grade in [json!(-0.5), json!(100.01), json!(150)] {
        let response = put_grade(
            &app,
            &cookie,
            enrollment,
            json!({"calificacion_final": grade}),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "La calificación debe estar entre 0 y 100");
    }

    let (estado, nota, _) = enrollment_state(&pool, enrollment).await;
    assert_eq!(estado, "active");
    assert_eq!(nota, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_out_of_range_grade_wins_over_long_observaciones(pool: PgPool) {
    let enrollment = create_enrolled_student(&pool).await;
    let (app, cookie) = admin_app(&pool).await;

    let response = put_grade(
        &app,
        &cookie,
        enrollment,
        json!({"calificacion_final": 120, "observaciones": "x".repeat(2001)}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "La calificación debe estar entre 0 y 100");

    let response = put_grade(
        &app,
        &cookie,
        enrollment,
        json!({"calificacion_final": 80, "observaciones": "x".repeat(2001)}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let (estado, nota, _) = enrollment_state(&pool, enrollment).await;
    assert_eq!(estado, "active");
    assert_eq!(nota, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_missing_or_non_numeric_grade_is_bad_request(pool: PgPool) {
    let enrollment = create_enrolled_student(&pool).await;
    let (app, cookie) = admin_app(&pool).await;

    let response = put_grade(&app, &cookie, enrollment, json!({"observaciones": "x"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response =
        put_grade(&app, &cookie, enrollment, json!({"calificacion_final": "noventa"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_unknown_enrollment_is_not_found(pool: PgPool) {
    let (app, cookie) = admin_app(&pool).await;

    let response = put_grade(&app, &cookie, 999_999, json!({"calificacion_final": 80})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Inscripción no encontrada");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_regrade_of_completed_enrollment_never_reverts(pool: PgPool) {
    let enrollment = create_enrolled_student(&pool).await;
    let (app, cookie) = admin_app(&pool).await;

    put_grade(&app, &cookie, enrollment, json!({"calificacion_final": 90})).await;
    let response = put_grade(&app, &cookie, enrollment, json!({"calificacion_final": 30})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let (estado, nota, _) = enrollment_state(&pool, enrollment).await;
    assert_eq!(estado, "completed");
    assert_eq!(nota, Some(30.0));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_repeating_same_grade_is_idempotent(pool: PgPool) {
    let enrollment = create_enrolled_student(&pool).await;
    let (app, cookie) = admin_app(&pool).await;

    for _ in 0..2 {
        let response =
            put_grade(&app, &cookie, enrollment, json!({"calificacion_final": 75})).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);

        let (estado, nota, _) = enrollment_state(&pool, enrollment).await;
        assert_eq!(estado, "completed");
        assert_eq!(nota, Some(75.0));
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_withdrawn_enrollment_stays_withdrawn(pool: PgPool) {
    let enrollment = create_enrolled_student(&pool).await;
    sqlx::query("UPDATE inscripcion SET estado = 'withdrawn' WHERE id = $1")
        .bind(enrollment)
        .execute(&pool)
        .await
        .unwrap();
    let (app, cookie) = admin_app(&pool).await;

    let response = put_grade(&app, &cookie, enrollment, json!({"calificacion_final": 95})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let (estado, nota, _) = enrollment_state(&pool, enrollment).await;
    assert_eq!(estado, "withdrawn");
    assert_eq!(nota, Some(95.0));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_omitted_observaciones_keep_previous_value(pool: PgPool) {
    let enrollment = create_enrolled_student(&pool).await;
    let (app, cookie) = admin_app(&pool).await;

    put_grade(
        &app,
        &cookie,
        enrollment,
        json!({"calificacion_final": 40, "observaciones": "Falta el proyecto"}),
    )
    .await;
    put_grade(&app, &cookie, enrollment, json!({"calificacion_final": 45})).await;

    let (_, nota, obs) = enrollment_state(&pool, enrollment).await;
    assert_eq!(nota, Some(45.0));
    assert_eq!(obs.as_deref(), Some("Falta el proyecto"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_grade_update_requires_admin(pool: PgPool) {
    let enrollment = create_enrolled_student(&pool).await;
    let instructor = create_test_user(&pool, UserRole::Instructor).await;
    let app = setup_test_app(pool.clone());
    let cookie = login(&app, &instructor).await;

    let response = put_grade(&app, &cookie, enrollment, json!({"calificacion_final": 90})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(request(
            "PUT",
            &format!("/api/admin/calificaciones/{}", enrollment),
            None,
            Some(json!({"calificacion_final": 90})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let (estado, nota, _) = enrollment_state(&pool, enrollment).await;
    assert_eq!(estado, "active");
    assert_eq!(nota, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_grade_statistics(pool: PgPool) {
    let e1 = create_enrolled_student(&pool).await;
    let e2 = create_enrolled_student(&pool).await;
    let e3 = create_enrolled_student(&pool).await;
    let _ungraded = create_enrolled_student(&pool).await;
    let (app, cookie) = admin_app(&pool).await;

    put_grade(&app, &cookie, e1, json!({"calificacion_final": 90})).await;
    put_grade(&app, &cookie, e2, json!({"calificacion_final": 60})).await;
    put_grade(&app, &cookie, e3, json!({"calificacion_final": 30})).await;

    let response = app
        .oneshot(request(
            "GET",
            "/api/admin/calificaciones/estadisticas",
            Some(&cookie),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total_inscripciones"], 4);
    assert_eq!(body["calificadas"], 3);
    assert_eq!(body["sin_calificar"], 1);
    assert_eq!(body["aprobadas"], 2);
    assert_eq!(body["reprobadas"], 1);
    assert_eq!(body["promedio"], 60.0);
    assert_eq!(body["nota_maxima"], 90.0);
    assert_eq!(body["nota_minima"], 30.0);
    assert_eq!(body["tasa_aprobacion"], 66.67);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_grade_listing_filters_by_state(pool: PgPool) {
    let e1 = create_enrolled_student(&pool).await;
    let _e2 = create_enrolled_student(&pool).await;
    let (app, cookie) = admin_app(&pool).await;

    put_grade(&app, &cookie, e1, json!({"calificacion_final": 70})).await;

    let response = app
        .oneshot(request(
            "GET",
            "/api/admin/calificaciones?estado=completed",
            Some(&cookie),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["meta"]["total"], 1);
    assert_eq!(body["data"][0]["id"], e1);
    assert_eq!(body["data"][0]["calificacion_final"], 70.0);
    assert_eq!(body["data"][0]["tiene_certificado"], false);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_grade_listing_with_huge_page_is_empty(pool: PgPool) {
    create_enrolled_student(&pool).await;
    let (app, cookie) = admin_app(&pool).await;

    let response = app
        .oneshot(request(
            "GET",
            "/api/admin/calificaciones?page=9223372036854775807",
            Some(&cookie),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["meta"]["total"], 1);
    assert_eq!(body["meta"]["has_more"], false);
    assert_eq!(body["data"], json!([]));
}
