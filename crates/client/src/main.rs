use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use linkasa_client::models::{
    AssignmentChanges, CourseChanges, NewAssignment, NewCourse, Registration, Role,
};
use linkasa_client::token::FileTokenStore;
use linkasa_client::{ApiClient, Session};

#[derive(Parser)]
#[command(name = "linkasa", about = "LinKasa learning platform client", version)]
struct Cli {
    /// Base URL of the LinKasa API.
    #[arg(long, env = "LINKASA_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    /// Directory holding the stored access token (default: `$HOME/.linkasa`).
    #[arg(long, env = "LINKASA_HOME")]
    home: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign in and store the access token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, value_enum, default_value_t = RoleArg::Student)]
        role: RoleArg,
    },
    /// Forget the stored access token.
    Logout,
    /// Show the signed-in account.
    Profile,
    /// Check that the server and its database are up.
    Health,
    /// Manage courses.
    #[command(subcommand)]
    Courses(CourseCommand),
    /// Manage assignments.
    #[command(subcommand)]
    Assignments(AssignmentCommand),
}

#[derive(Subcommand)]
enum CourseCommand {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        category: String,
        /// Create the course as inactive.
        #[arg(long)]
        inactive: bool,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand)]
enum AssignmentCommand {
    List {
        #[arg(long)]
        course: i64,
    },
    Create {
        #[arg(long)]
        course: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        finished: Option<bool>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Student,
    Lecturer,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Student => Role::Student,
            RoleArg::Lecturer => Role::Lecturer,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let home = cli.home.unwrap_or_else(default_home);
    let api_url = cli.api_url;
    let session = Session::new(ApiClient::new(api_url.clone()), FileTokenStore::new(home));

    match cli.command {
        Command::Login { email, password } => {
            session.login(&email, &password).await.context("Login failed")?;
            println!("Login successful!");
        }
        Command::Register {
            name,
            email,
            password,
            role,
        } => {
            let account = session
                .register(&Registration {
                    name,
                    email,
                    password,
                    role: role.into(),
                })
                .await
                .context("Registration failed")?;
            println!("Registered account {} ({})", account.id, account.email);
        }
        Command::Logout => {
            session.logout()?;
            println!("Logged out");
        }
        Command::Profile => {
            let account = session.profile().await?;
            println!("id:    {}", account.id);
            println!("name:  {}", account.name);
            println!("email: {}", account.email);
            println!("role:  {:?}", account.role);
        }
        Command::Health => {
            let health = ApiClient::new(api_url).health().await?;
            println!("status:   {} (v{})", health.status, health.version);
            println!("database: {}", health.database);
            if let Some(catalog) = health.catalog {
                println!(
                    "catalog:  {} accounts, {}/{} active courses, {}/{} open assignments",
                    catalog.accounts,
                    catalog.active_courses,
                    catalog.courses,
                    catalog.open_assignments,
                    catalog.assignments
                );
            }
        }
        Command::Courses(command) => run_course_command(&session, command).await?,
        Command::Assignments(command) => run_assignment_command(&session, command).await?,
    }

    Ok(())
}

async fn run_course_command(
    session: &Session<FileTokenStore>,
    command: CourseCommand,
) -> anyhow::Result<()> {
    let api = session.guarded()?;

    match command {
        CourseCommand::List => {
            for course in api.courses().await? {
                println!(
                    "{:>5}  {:<30}  {:<15}  {}",
                    course.id,
                    course.name,
                    course.category,
                    if course.is_active { "active" } else { "inactive" }
                );
            }
        }
        CourseCommand::Create {
            name,
            description,
            category,
            inactive,
        } => {
            let course = api
                .create_course(&NewCourse {
                    name,
                    description,
                    is_active: !inactive,
                    category,
                })
                .await?;
            println!("Created course {}", course.id);
        }
        CourseCommand::Update {
            id,
            name,
            description,
            category,
            active,
        } => {
            let changes = CourseChanges {
                name,
                description,
                is_active: active,
                category,
            };
            let course = api.update_course(id, &changes).await?;
            println!("Updated course {}", course.id);
        }
        CourseCommand::Delete { id } => {
            api.delete_course(id).await?;
            println!("Deleted course {id}");
        }
    }
    Ok(())
}

async fn run_assignment_command(
    session: &Session<FileTokenStore>,
    command: AssignmentCommand,
) -> anyhow::Result<()> {
    let api = session.guarded()?;

    match command {
        AssignmentCommand::List { course } => {
            for assignment in api.assignments_for_course(course).await? {
                println!(
                    "{:>5}  {:<30}  {}",
                    assignment.id,
                    assignment.name,
                    if assignment.is_finished { "finished" } else { "open" }
                );
            }
        }
        AssignmentCommand::Create {
            course,
            name,
            description,
        } => {
            let user_id = session.claims()?.sub;
            let assignment = api
                .create_assignment(&NewAssignment {
                    user_id,
                    course_id: course,
                    name,
                    description,
                    is_finished: false,
                })
                .await?;
            println!("Created assignment {}", assignment.id);
        }
        AssignmentCommand::Update {
            id,
            name,
            description,
            finished,
        } => {
            let changes = AssignmentChanges {
                name,
                description,
                is_finished: finished,
                ..Default::default()
            };
            let assignment = api.update_assignment(id, &changes).await?;
            println!("Updated assignment {}", assignment.id);
        }
        AssignmentCommand::Delete { id } => {
            api.delete_assignment(id).await?;
            println!("Deleted assignment {id}");
        }
    }
    Ok(())
}

fn default_home() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".linkasa")
}
