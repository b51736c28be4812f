#![allow(dead_code)]

use academia::config::cors::CorsConfig;
use academia::config::dashboard::DashboardConfig;
use academia::config::jwt::JwtConfig;
use academia::config::rate_limit::RateLimitConfig;
use academia::config::session::SessionConfig;
use academia::router::init_router;
use academia::state::AppState;
use academia_core::hash_password;
use academia_models::users::UserRole;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_PASSWORD: &str = "testpass123";

pub struct TestUser {
    pub id: i32,
    pub email: String,
    pub password: String,
    /// `estudiante.id` or `instructor.id`; `None` for admins.
    pub id_perfil: Option<i32>,
}

pub fn test_state(pool: PgPool) -> AppState {
    dotenvy::dotenv().ok();
    AppState {
        db: pool,
        jwt_config: JwtConfig::from_env(),
        session_config: SessionConfig::default(),
        cors_config: CorsConfig::from_env(),
        rate_limit_config: RateLimitConfig::default(),
        dashboard_config: DashboardConfig::default(),
    }
}

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    init_router(test_state(pool))
}

pub fn setup_test_app_with_state(state: AppState) -> axum::Router {
    init_router(state)
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

/// Inserts a user directly, with the profile row its role needs.
pub async fn create_test_user(pool: &PgPool, rol: UserRole) -> TestUser {
    let email = generate_unique_email();
    let hashed = hash_password(TEST_PASSWORD).unwrap();

    let id = sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO usuario (email, password_hash, nombre, apellido, rol)
        VALUES ($1, $2, 'Test', 'User', $3)
        RETURNING id
        "#,
    )
    .bind(&email)
    .bind(hashed)
    .bind(rol)
    .fetch_one(pool)
    .await
    .unwrap();

    let id_perfil = match rol {
        UserRole::Student => Some(
            sqlx::query_scalar::<_, i32>(
                "INSERT INTO estudiante (id_usuario) VALUES ($1) RETURNING id",
            )
            .bind(id)
            .fetch_one(pool)
            .await
            .unwrap(),
        ),
        UserRole::Instructor => Some(
            sqlx::query_scalar::<_, i32>(
                "INSERT INTO instructor (id_usuario) VALUES ($1) RETURNING id",
            )
            .bind(id)
            .fetch_one(pool)
            .await
            .unwrap(),
        ),
        UserRole::Admin => None,
    };

    TestUser {
        id,
        email,
        password: TEST_PASSWORD.to_string(),
        id_perfil,
    }
}

pub async fn deactivate_user(pool: &PgPool, user_id: i32) {
    sqlx::query("UPDATE usuario SET activo = FALSE WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_course(pool: &PgPool, nombre: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO curso (nombre, duracion_horas) VALUES ($1, 40) RETURNING id",
    )
    .bind(nombre)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_section(pool: &PgPool, id_curso: i32, nombre: &str, cupo: i32) -> i32 {
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO paralelo (id_curso, nombre, cupo, fecha_inicio)
        VALUES ($1, $2, $3, CURRENT_DATE)
        RETURNING id
        "#,
    )
    .bind(id_curso)
    .bind(nombre)
    .bind(cupo)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_enrollment(pool: &PgPool, id_estudiante: i32, id_paralelo: i32) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO inscripcion (id_estudiante, id_paralelo) VALUES ($1, $2) RETURNING id",
    )
    .bind(id_estudiante)
    .bind(id_paralelo)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// A student enrolled in a fresh course and section. Returns the
/// enrollment id.
pub async fn create_enrolled_student(pool: &PgPool) -> i32 {
    let student = create_test_user(pool, UserRole::Student).await;
    let course = create_test_course(pool, "Rust Básico").await;
    let section = create_test_section(pool, course, "A", 30).await;
    create_test_enrollment(pool, student.id_perfil.unwrap(), section).await
}

pub async fn create_test_notification(pool: &PgPool, id_usuario: i32, titulo: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO notificacion (id_usuario, titulo, mensaje)
        VALUES ($1, $2, 'Mensaje de prueba')
        RETURNING id
        "#,
    )
    .bind(id_usuario)
    .bind(titulo)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn enrollment_state(pool: &PgPool, id: i32) -> (String, Option<f64>, Option<String>) {
    sqlx::query_as::<_, (String, Option<f64>, Option<String>)>(
        "SELECT estado::text, calificacion_final, observaciones FROM inscripcion WHERE id = $1",
    )
    .bind(id)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Builds a request with an optional session cookie and JSON body.
pub fn request(method: &str, uri: &str, cookie: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// `POST /api/login` with a client address for the rate limiter to key on.
pub fn login_body_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/login")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-forwarded-for", "10.0.0.1")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

pub fn login_request(email: &str, password: &str) -> Request<Body> {
    login_body_request(json!({
        "email": email,
        "password": password
    }))
}

/// The `name=value` part of the response's `Set-Cookie` header.
pub fn session_cookie_pair(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.trim().to_string())
}

/// Logs in and returns the cookie to send on later requests.
pub async fn login(app: &axum::Router, user: &TestUser) -> String {
    let response = app
        .clone()
        .oneshot(login_request(&user.email, &user.password))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    session_cookie_pair(&response).expect("login must set the session cookie")
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
