use std::ffi::OsString;

pub use clap::Parser;
use clap::{Args, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Optional. Profile to read the API base URL and default headers from.
    /// If the profile is not configured, the built-in base URL is used.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// Base URL override
    #[clap(long, help = "API base URL, e.g. http://localhost:5000/api")]
    base_url: Option<String>,

    /// Verbose mode
    /// Optional. Print the rendered form after a submit.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,

    #[command(subcommand)]
    page: Page,
}

/// Page to mount
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Page {
    /// Users management
    #[command(subcommand)]
    Users(UsersCommand),
    /// Companies management
    #[command(subcommand)]
    Companies(CompaniesCommand),
    /// Jobs management
    #[command(subcommand)]
    Jobs(JobsCommand),
    /// Applications management
    #[command(subcommand)]
    Applications(ApplicationsCommand),
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum UsersCommand {
    /// List all users
    List,
    /// Create a user
    Create(UserFields),
}

#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct UserFields {
    #[clap(long)]
    pub full_name: Option<String>,
    #[clap(long)]
    pub email: Option<String>,
    #[clap(long)]
    pub phone: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum CompaniesCommand {
    /// List all companies
    List,
    /// Create a company
    Create(CompanyFields),
}

#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct CompanyFields {
    #[clap(long)]
    pub name: Option<String>,
    #[clap(long)]
    pub website: Option<String>,
    #[clap(long)]
    pub description: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum JobsCommand {
    /// List all jobs
    List,
    /// Show one job
    Show { id: i64 },
    /// Create a job
    Create(JobFields),
    /// Update a job. The form is pre-populated from the current job, supplied
    /// fields overwrite it, and every non-blank field is sent; a supplied
    /// empty value clears an optional field
    Edit {
        id: i64,
        #[command(flatten)]
        fields: JobFields,
    },
    /// Delete a job
    Delete { id: i64 },
}

#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct JobFields {
    #[clap(long)]
    pub title: Option<String>,
    #[clap(long)]
    pub location: Option<String>,
    #[clap(long)]
    pub salary: Option<String>,
    #[clap(long)]
    pub company_id: Option<String>,
    #[clap(long)]
    pub description: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ApplicationsCommand {
    /// List all applications
    List,
    /// Submit an application
    Create(ApplicationFields),
}

#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct ApplicationFields {
    #[clap(long)]
    pub user_id: Option<String>,
    #[clap(long)]
    pub job_id: Option<String>,
    #[clap(long)]
    pub resume_url: Option<String>,
    #[clap(long)]
    pub cover_letter: Option<String>,
    #[clap(long)]
    pub expected_salary: Option<String>,
    #[clap(long)]
    pub status: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    base_url: Option<String>,
    verbose: bool,
    page: Page,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from(ClapArgs::parse_from(itr))
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn page(&self) -> &Page {
        &self.page
    }
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            base_url: args.base_url,
            verbose: args.verbose,
            page: args.page,
        }
    }
}
