//! Shared aliases and the CLI command tree.
//!
//! The same `Commands` enum drives one-shot invocations and the lines typed
//! into the interactive shell.
use clap::{Args, Subcommand};

use crate::{FolioError, IdeaStatus, TagFilter};

/// A specialized Result type for folio operations.
pub type Result<T> = std::result::Result<T, FolioError>;

/// Available subcommands for the folio application
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Log in as the site admin
    Login {
        username: String,

        /// Password (prompted for when omitted)
        #[clap(short, long)]
        password: Option<String>,
    },

    /// End the admin session
    Logout,

    /// Show who is logged in
    Whoami,

    /// Show or switch the light/dark theme
    Theme {
        /// Switch to the other theme and remember it
        #[clap(short, long)]
        toggle: bool,
    },

    /// Render the home page sections
    Home,

    /// Browse public projects
    Projects {
        /// Only show projects with this tag ("All" shows everything)
        #[clap(short, long, default_value = "All")]
        tag: TagFilter,

        /// Expand the details of one project (again to collapse)
        #[clap(short, long)]
        expand: Option<String>,

        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// Open a route such as /, /dashboard or /project-ideas
    Open { path: String },

    /// Send a message through the contact form
    Contact(ContactArgs),

    /// Dashboard operations on the project catalog (login required)
    #[clap(subcommand)]
    Project(ProjectCommand),

    /// Project idea board operations (login required)
    #[clap(subcommand)]
    Idea(IdeaCommand),

    /// Interactive session; catalog and idea edits last until exit
    Shell,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ContactArgs {
    #[clap(short, long)]
    pub name: String,

    #[clap(short, long)]
    pub email: String,

    #[clap(short, long, default_value = "")]
    pub subject: String,

    #[clap(short, long)]
    pub message: String,
}

/// Fields shared by project create and edit
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct ProjectFields {
    /// Short description (up to 100 characters are shown)
    #[clap(short, long)]
    pub short: Option<String>,

    /// Full description
    #[clap(short, long)]
    pub description: Option<String>,

    /// Write the full description in an editor
    #[clap(short, long)]
    pub edit: bool,

    /// Image URL
    #[clap(short, long)]
    pub image: Option<String>,

    /// Tech stack (comma-separated)
    #[clap(long)]
    pub tech: Option<String>,

    #[clap(long)]
    pub github: Option<String>,

    #[clap(long)]
    pub demo: Option<String>,

    #[clap(long)]
    pub youtube: Option<String>,

    #[clap(long)]
    pub blog: Option<String>,

    /// Admin-only notes
    #[clap(long)]
    pub notes: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ProjectCommand {
    /// List every project, including private ones
    List {
        #[clap(short, long, default_value = "All")]
        tag: TagFilter,

        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// Show one project with its notes
    Show { id: String },

    /// Add a project
    Add {
        #[clap(short = 'T', long)]
        title: String,

        #[clap(flatten)]
        fields: ProjectFields,

        /// Tags (comma-separated, e.g. "ML,Web App")
        #[clap(short, long)]
        tags: Option<String>,

        /// Hide the project from the public listing
        #[clap(long)]
        private: bool,
    },

    /// Edit a project
    Edit {
        id: String,

        #[clap(short = 'T', long)]
        title: Option<String>,

        #[clap(flatten)]
        fields: ProjectFields,

        /// Replace all tags (comma-separated)
        #[clap(short, long, conflicts_with = "toggle_tag")]
        tags: Option<String>,

        /// Add the tag if missing, remove it if present
        #[clap(long)]
        toggle_tag: Vec<String>,
    },

    /// Delete a project
    Delete {
        id: String,

        /// Skip confirmation prompt
        #[clap(short, long)]
        force: bool,
    },

    /// Flip public/private visibility
    Toggle { id: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum IdeaCommand {
    /// List ideas in the order they were added
    List {
        #[clap(short, long)]
        json: bool,
    },

    /// Add an idea
    Add {
        #[clap(short = 'T', long)]
        title: String,

        #[clap(short, long)]
        description: String,

        /// Tags (comma-separated, free text)
        #[clap(short, long)]
        tags: Option<String>,

        #[clap(short, long, default_value = "Planned")]
        status: IdeaStatus,
    },

    /// Edit an idea
    Edit {
        id: String,

        #[clap(short = 'T', long)]
        title: Option<String>,

        #[clap(short, long)]
        description: Option<String>,

        /// Replace all tags (comma-separated)
        #[clap(short, long)]
        tags: Option<String>,

        #[clap(short, long)]
        status: Option<IdeaStatus>,
    },

    /// Delete an idea
    Delete {
        id: String,

        /// Skip confirmation prompt
        #[clap(short, long)]
        force: bool,
    },
}
