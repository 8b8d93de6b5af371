use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use educa_cli::admin;
use educa_cli::seeder::{self, SeedConfig};
use sqlx::PgPool;

#[derive(Parser)]
#[command(name = "educa-cli")]
#[command(about = "Educa CLI - Administrative tools for the Educa API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a user account
    CreateUser {
        /// Display name
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake users and students
    Seed {
        /// Number of students to create
        #[arg(short = 's', long, default_value = "100")]
        students: usize,

        /// Number of users to create
        #[arg(short = 'u', long, default_value = "5")]
        users: usize,
    },
    /// Clear all seeded users and students
    ClearSeed,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let pool = match educa_db::init_db_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::CreateUser {
            username,
            email,
            password,
        } => handle_create_user(&pool, username, email, password).await,
        Commands::Seed { students, users } => handle_seed(&pool, students, users).await,
        Commands::ClearSeed => handle_clear_seed(&pool).await,
    }
}

fn prompt_missing(
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> Result<(String, String, String), dialoguer::Error> {
    let username = match username {
        Some(username) => username,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let email = match email {
        Some(email) => email,
        None => Input::new().with_prompt("Email address").interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    Ok((username, email, password))
}

async fn handle_create_user(
    pool: &PgPool,
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
) {
    let (username, email, password) = match prompt_missing(username, email, password) {
        Ok(values) => values,
        Err(e) => {
            eprintln!("\n❌ Failed to read input: {}", e);
            std::process::exit(1);
        }
    };

    if password.len() < 6 {
        eprintln!("\n❌ Password must be at least 6 characters");
        std::process::exit(1);
    }

    match admin::create_user(pool, &username, &email, &password).await {
        Ok(Some(id)) => {
            println!("\n✅ User created successfully!");
            println!("   ID: {}", id);
            println!("   Email: {}", email);
            println!("   Username: {}", username);
        }
        Ok(None) => {
            eprintln!("\n❌ A user with email {} already exists", email);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("\n❌ Error creating user: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed(pool: &PgPool, students: usize, users: usize) {
    let config = SeedConfig { users, students };

    if let Err(e) = seeder::seed_all(pool, config).await {
        eprintln!("\n❌ Error seeding database: {}", e);
        std::process::exit(1);
    }
}

async fn handle_clear_seed(pool: &PgPool) {
    if let Err(e) = seeder::clear_all(pool).await {
        eprintln!("\n❌ Error clearing seeded data: {}", e);
        std::process::exit(1);
    }
}
