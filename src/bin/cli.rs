use academia::cli::create_admin;
use academia_db::run_migrations;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "academia-cli")]
#[command(about = "Academia CLI - Administrative tools for the academy API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an administrator account
    CreateAdmin {
        /// First name
        #[arg(short = 'n', long)]
        nombre: Option<String>,

        /// Last name
        #[arg(short = 'a', long)]
        apellido: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Apply pending database migrations
    Migrate,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let cli = Cli::parse();

    match cli.command {
        Commands::CreateAdmin {
            nombre,
            apellido,
            email,
            password,
        } => handle_create_admin(&pool, nombre, apellido, email, password).await,
        Commands::Migrate => handle_migrate(&pool).await,
    }
}

async fn handle_create_admin(
    pool: &sqlx::postgres::PgPool,
    nombre: Option<String>,
    apellido: Option<String>,
    email: Option<String>,
    password: Option<String>,
) {
    let nombre = nombre.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Nombre")
            .interact_text()
            .expect("Failed to read first name")
    });

    let apellido = apellido.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Apellido")
            .interact_text()
            .expect("Failed to read last name")
    });

    let email = email.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Email")
            .interact_text()
            .expect("Failed to read email")
    });

    let password = password.unwrap_or_else(|| {
        Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .expect("Failed to read password")
    });

    match create_admin(pool, &nombre, &apellido, &email, &password).await {
        Ok(id) => {
            println!("\n✅ Admin created successfully!");
            println!("   ID: {}", id);
            println!("   Email: {}", email);
            println!("   Name: {} {}", nombre, apellido);
        }
        Err(e) => {
            eprintln!("\n❌ Error creating admin: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_migrate(pool: &sqlx::postgres::PgPool) {
    match run_migrations(pool).await {
        Ok(()) => println!("✅ Migrations applied"),
        Err(e) => {
            eprintln!("❌ Migration failed: {}", e);
            std::process::exit(1);
        }
    }
}
