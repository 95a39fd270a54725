use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "redact")]
#[command(about = "Client for a remote text and document redaction service", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the authenticated session
    #[command(subcommand)]
    Auth(AuthCommands),

    /// Redact pasted text (max 5000 characters)
    Text {
        /// The text to redact
        text: String,

        /// Output path (default: redacted_output.txt)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Also print the redacted text and detected entities
        #[arg(long)]
        print: bool,
    },

    /// Redact a CSV, PDF, or DOCX file (max 5 MB)
    File {
        /// Path to the file
        path: PathBuf,

        /// CSV columns to redact (default: all columns)
        #[arg(long, value_delimiter = ',')]
        columns: Vec<String>,

        /// Entity types to redact in a PDF/DOCX (default: all detected)
        #[arg(long, value_delimiter = ',')]
        entities: Vec<String>,

        /// List the file's columns or detected entities and exit
        #[arg(long)]
        list: bool,

        /// Output path (default: original name with a _redacted suffix)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Create an account
    Register {
        /// Full name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Password (prompted twice when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Log in and store the session token
    Login {
        /// Email address
        #[arg(long)]
        email: String,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Clear the stored session token
    Logout,

    /// Show whether a session token is stored
    Status,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the loaded configuration
    Show,

    /// Print the configuration file path
    Path,
}
