//! CLI module for the folio application
//!
//! This module handles the command-line interface: it owns the session gate,
//! the catalog, the idea board and the listing state for the lifetime of the
//! process and maps each command onto them.
use std::{
    fs::{read_to_string, OpenOptions},
    io::{stdin, stdout, BufRead, Write},
    path::Path,
    process::Command,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use clap::{error::ErrorKind, Parser};
use console::style;
use log::{debug, info};
use shell_words::split;
use tempfile::Builder;
use tokio::sync::Mutex;

use crate::{
    confirm, detect_system_theme, parse_list, parse_tags, seed_ideas, seed_projects, toggle_tag,
    write_admin_list, write_home, write_ideas, write_login_prompt, write_not_found,
    write_project_detail, write_project_list, write_projects_json, Commands, Config, ContactArgs,
    ContactForm, FolioError, IdeaBoard, IdeaCommand, IdeaDraft, IdeaPatch, LocalStorage,
    ProjectBrowser, ProjectCatalog, ProjectCommand, ProjectDraft, ProjectFields, ProjectPatch,
    Result, Route, SessionGate, ShellLine, TagFilter, ThemePreference, View,
};

/// CLI Application handler - processes commands against the in-memory state
pub struct App {
    /// Admin session, restored from local storage on startup
    session: Arc<Mutex<SessionGate>>,

    /// Project catalog, seeded on every start
    catalog: Arc<Mutex<ProjectCatalog>>,

    /// Idea board, seeded on every start
    ideas: Arc<Mutex<IdeaBoard>>,

    /// Active filter and expanded project of the public listing
    browser: Mutex<ProjectBrowser>,

    theme: Mutex<ThemePreference>,

    /// Set once the startup delay has run
    loaded: AtomicBool,

    /// Application configuration
    config: Config,

    /// Whether to display verbose output
    verbose: bool,
}

impl App {
    /// Opens local storage, restores the session and seeds the stores.
    pub fn new(config: Config, verbose: bool) -> Result<Self> {
        let storage = LocalStorage::open(&config.data_dir)?;

        let mut session = SessionGate::new(storage.clone());
        session.restore_session();

        let system_theme = config.system_theme.unwrap_or_else(detect_system_theme);
        let theme = ThemePreference::load(storage, system_theme);

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            catalog: Arc::new(Mutex::new(ProjectCatalog::new(seed_projects()))),
            ideas: Arc::new(Mutex::new(IdeaBoard::new(seed_ideas()))),
            browser: Mutex::new(ProjectBrowser::new()),
            theme: Mutex::new(theme),
            loaded: AtomicBool::new(false),
            config,
            verbose,
        })
    }

    /// Simulated splash delay before the first view; later calls return at once.
    pub async fn show_loading(&self) {
        if self.loaded.swap(true, Ordering::SeqCst) {
            return;
        }
        if self.config.loading_delay_ms > 0 {
            debug!("Loading for {} ms", self.config.loading_delay_ms);
            tokio::time::sleep(Duration::from_millis(self.config.loading_delay_ms)).await;
        }
    }

    /// Run the CLI application with the given command
    pub async fn run(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Login { username, password } => {
                self.handle_login(username, password).await?
            }

            Commands::Logout => {
                self.session.lock().await.logout()?;
                println!("Logged out.");
            }

            Commands::Whoami => match self.session.lock().await.user() {
                Some(user) => println!("Logged in as {} (id {})", user.username, user.id),
                None => println!("Not logged in."),
            },

            Commands::Theme { toggle } => self.handle_theme(toggle).await?,

            Commands::Home => self.render_view(View::Home).await?,

            Commands::Projects { tag, expand, json } => {
                self.browse_projects(tag, expand, json).await?
            }

            Commands::Open { path } => {
                let route = Route::resolve(&path);
                let view = route.view(&*self.session.lock().await);
                self.render_view(view).await?
            }

            Commands::Contact(args) => self.handle_contact(args).await?,

            Commands::Project(command) => {
                self.require_admin(&Route::Dashboard).await?;
                self.handle_project(command).await?
            }

            Commands::Idea(command) => {
                self.require_admin(&Route::ProjectIdeas).await?;
                self.handle_idea(command).await?
            }

            Commands::Shell => println!("Already in the shell."),
        }

        Ok(())
    }

    /// Reads commands from stdin until `exit`, keeping all edits in memory.
    pub async fn run_shell(&self) -> Result<()> {
        self.show_loading().await;
        println!(
            "{} Type `help` for commands, `exit` to quit. Edits last until you exit.",
            style("folio shell").bold()
        );

        loop {
            print!("folio> ");
            stdout().flush()?;

            let mut line = String::new();
            if stdin().lock().read_line(&mut line)? == 0 {
                println!();
                break;
            }

            let words = match split(&line) {
                Ok(words) => words,
                Err(e) => {
                    eprintln!("{} {}", style("error:").red(), e);
                    continue;
                }
            };

            match words.first().map(String::as_str) {
                None => continue,
                Some("exit") | Some("quit") => break,
                Some("help") => {
                    if let Err(e) = ShellLine::try_parse_from(["--help"]) {
                        e.print()?;
                    }
                    continue;
                }
                _ => {}
            }

            let command = match ShellLine::try_parse_from(words) {
                Ok(parsed) => parsed.command,
                Err(e)
                    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
                {
                    e.print()?;
                    continue;
                }
                Err(e) => {
                    eprintln!("{}", e.render());
                    continue;
                }
            };

            if let Err(e) = self.run(command).await {
                eprintln!("{} {}", style("error:").red(), e);
            }
        }

        info!("Shell closed");
        Ok(())
    }

    async fn require_admin(&self, route: &Route) -> Result<()> {
        self.session
            .lock()
            .await
            .require_authenticated(route.path())
            .map(|_| ())
    }

    async fn handle_login(&self, username: String, password: Option<String>) -> Result<()> {
        let password = match password {
            Some(p) => p,
            None => {
                print!("Password: ");
                stdout().flush()?;
                let mut input = String::new();
                stdin().lock().read_line(&mut input)?;
                input.trim_end_matches(['\r', '\n']).to_string()
            }
        };

        if self.session.lock().await.login(&username, &password)? {
            println!("{}", style("Login successful!").green());
            Ok(())
        } else {
            Err(FolioError::InvalidCredentials)
        }
    }

    async fn handle_theme(&self, toggle: bool) -> Result<()> {
        let mut theme = self.theme.lock().await;
        if toggle {
            let next = theme.toggle()?;
            println!("Switched to {} mode", next);
        } else {
            println!("Current theme: {}", theme.current());
        }
        Ok(())
    }

    async fn render_view(&self, view: View) -> Result<()> {
        let mut out = stdout();
        match view {
            View::Home => {
                self.show_loading().await;
                let catalog = self.catalog.lock().await;
                let projects = catalog.public_projects(TagFilter::All);
                write_home(&mut out, &projects, self.theme.lock().await.current())?;
            }
            View::Dashboard => {
                let catalog = self.catalog.lock().await;
                if let Some(user) = self.session.lock().await.user() {
                    println!("Welcome back, {}", style(&user.username).bold());
                }
                let projects = catalog.filter_by_tag(TagFilter::All);
                write_admin_list(&mut out, &projects)?;
            }
            View::ProjectIdeas => {
                write_ideas(&mut out, self.ideas.lock().await.ideas())?;
            }
            View::LoginPrompt { requested } => write_login_prompt(&mut out, &requested)?,
            View::NotFound(path) => write_not_found(&mut out, &path)?,
        }
        Ok(())
    }

    /// Public projects section: filter change collapses, expand toggles
    async fn browse_projects(
        &self,
        tag: TagFilter,
        expand: Option<String>,
        json: bool,
    ) -> Result<()> {
        let mut browser = self.browser.lock().await;
        if browser.filter() != tag {
            browser.set_filter(tag);
        }
        if let Some(id) = expand {
            browser.toggle_details(&id);
        }

        let catalog = self.catalog.lock().await;
        let projects = browser.visible(&catalog);
        let mut out = stdout();
        if json {
            write_projects_json(&mut out, &projects, false)?;
        } else {
            write_project_list(&mut out, &projects, browser.expanded(), browser.filter())?;
            if self.verbose {
                println!("\nShowing {} of {} projects", projects.len(), catalog.len());
            }
        }
        Ok(())
    }

    async fn handle_contact(&self, args: ContactArgs) -> Result<()> {
        let mut form = ContactForm {
            name: args.name,
            email: args.email,
            subject: args.subject,
            message: args.message,
        };
        form.validate()?;

        println!("Sending...");
        let receipt = form
            .submit(Duration::from_millis(self.config.contact_delay_ms))
            .await?;
        println!(
            "{} Thanks {}, I'll reply to {}.",
            style("Message sent successfully!").green(),
            receipt.name,
            receipt.email
        );
        Ok(())
    }

    async fn handle_project(&self, command: ProjectCommand) -> Result<()> {
        let mut out = stdout();
        match command {
            ProjectCommand::List { tag, json } => {
                let catalog = self.catalog.lock().await;
                let projects = catalog.filter_by_tag(tag);
                if json {
                    write_projects_json(&mut out, &projects, true)?;
                } else {
                    write_admin_list(&mut out, &projects)?;
                }
            }

            ProjectCommand::Show { id } => {
                let catalog = self.catalog.lock().await;
                let project = catalog
                    .get(&id)
                    .ok_or(FolioError::ProjectNotFound { id })?;
                write_project_detail(&mut out, project)?;
            }

            ProjectCommand::Add {
                title,
                fields,
                tags,
                private,
            } => {
                let draft = self.build_draft(title, fields, tags, private)?;
                let project = self.catalog.lock().await.create(draft)?;
                println!("Project added with ID: {}", project.id);
            }

            ProjectCommand::Edit {
                id,
                title,
                fields,
                tags,
                toggle_tag,
            } => {
                let patch = self.build_patch(&id, title, fields, tags, toggle_tag).await?;
                if patch.is_empty() {
                    println!("Nothing to change for {}", id);
                    return Ok(());
                }
                let project = self.catalog.lock().await.update(&id, patch)?;
                println!("Project {} updated successfully", project.id);
            }

            ProjectCommand::Delete { id, force } => self.handle_project_delete(id, force).await?,

            ProjectCommand::Toggle { id } => {
                let mut catalog = self.catalog.lock().await;
                catalog.toggle_visibility(&id);
                match catalog.get(&id) {
                    Some(p) if p.is_public => println!("{} is now public", id),
                    Some(_) => println!("{} is now private", id),
                    None => println!("No project with ID {}", id),
                }
            }
        }
        Ok(())
    }

    fn build_draft(
        &self,
        title: String,
        fields: ProjectFields,
        tags: Option<String>,
        private: bool,
    ) -> Result<ProjectDraft> {
        let full_description = match (fields.description, fields.edit) {
            (Some(text), _) => text,
            (None, true) => self.open_editor_for_content(&title, "")?,
            (None, false) => String::new(),
        };

        let mut draft = ProjectDraft::new(
            title,
            fields.short.unwrap_or_default(),
            fields.image.unwrap_or_default(),
        )
        .full_description(full_description)
        .tech_stack(parse_list(fields.tech))
        .public(!private);

        draft.tags = parse_tags(tags)?;
        if let Some(url) = fields.github {
            draft = draft.github(url);
        }
        if let Some(url) = fields.demo {
            draft = draft.demo(url);
        }
        if let Some(url) = fields.youtube {
            draft = draft.youtube(url);
        }
        if let Some(url) = fields.blog {
            draft = draft.blog(url);
        }
        if let Some(notes) = fields.notes {
            draft = draft.notes(notes);
        }
        Ok(draft)
    }

    async fn build_patch(
        &self,
        id: &str,
        title: Option<String>,
        fields: ProjectFields,
        tags: Option<String>,
        toggle_tags: Vec<String>,
    ) -> Result<ProjectPatch> {
        let current = self
            .catalog
            .lock()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| FolioError::ProjectNotFound { id: id.to_string() })?;

        let full_description = match (fields.description, fields.edit) {
            (Some(text), _) => Some(text),
            (None, true) => Some(
                self.open_editor_for_content(&current.title, &current.full_description)?,
            ),
            (None, false) => None,
        };

        let tags = if tags.is_some() {
            Some(parse_tags(tags)?)
        } else if !toggle_tags.is_empty() {
            let mut updated = current.tags.clone();
            for name in toggle_tags {
                toggle_tag(&mut updated, name.parse()?);
            }
            Some(updated)
        } else {
            None
        };

        Ok(ProjectPatch {
            title,
            short_description: fields.short,
            full_description,
            image: fields.image,
            tags,
            tech_stack: fields.tech.map(|t| parse_list(Some(t))),
            github: fields.github,
            demo: fields.demo,
            youtube: fields.youtube,
            blog: fields.blog,
            is_public: None,
            notes: fields.notes,
        })
    }

    async fn handle_project_delete(&self, id: String, force: bool) -> Result<()> {
        let project = match self.catalog.lock().await.get(&id).cloned() {
            Some(project) => project,
            None => {
                println!("No project with ID {}", id);
                return Ok(());
            }
        };

        if !force {
            println!("You are about to delete the following project:");
            println!("ID:     {}", project.id);
            println!("Title:  {}", project.title);
            if !confirm("Are you sure you want to delete this project?")? {
                println!("Deletion cancelled.");
                return Ok(());
            }
        }

        self.catalog.lock().await.delete(&id);
        println!("Project '{}' ({}) deleted.", project.title, project.id);
        Ok(())
    }

    async fn handle_idea(&self, command: IdeaCommand) -> Result<()> {
        match command {
            IdeaCommand::List { json } => {
                let ideas = self.ideas.lock().await;
                if json {
                    println!("{}", serde_json::to_string_pretty(ideas.ideas())?);
                } else {
                    write_ideas(&mut stdout(), ideas.ideas())?;
                }
            }

            IdeaCommand::Add {
                title,
                description,
                tags,
                status,
            } => {
                let mut draft = IdeaDraft::new(title, description).status(status);
                for tag in parse_list(tags) {
                    draft = draft.tag(&tag);
                }
                let idea = self.ideas.lock().await.create(draft)?;
                println!("Project idea added with ID: {}", idea.id);
            }

            IdeaCommand::Edit {
                id,
                title,
                description,
                tags,
                status,
            } => {
                let tags = tags.map(|t| {
                    let mut unique = Vec::new();
                    for tag in parse_list(Some(t)) {
                        crate::add_idea_tag(&mut unique, &tag);
                    }
                    unique
                });
                let patch = IdeaPatch {
                    title,
                    description,
                    tags,
                    status,
                };
                let idea = self.ideas.lock().await.update(&id, patch)?;
                println!("Project idea {} updated ({})", idea.id, idea.status);
            }

            IdeaCommand::Delete { id, force } => {
                let title = match self.ideas.lock().await.get(&id) {
                    Some(idea) => idea.title.clone(),
                    None => {
                        println!("No project idea with ID {}", id);
                        return Ok(());
                    }
                };
                if !force && !confirm(&format!("Delete the project idea '{}'?", title))? {
                    println!("Deletion cancelled.");
                    return Ok(());
                }
                self.ideas.lock().await.delete(&id);
                println!("Project idea '{}' deleted.", title);
            }
        }
        Ok(())
    }

    fn open_editor_for_content(&self, title: &str, existing: &str) -> Result<String> {
        // Create a temporary file with .md extension
        let temp_file = Builder::new().suffix(".md").tempfile()?;
        let temp_path = temp_file.path().to_path_buf();

        let editor_cmd = self.config.get_editor_command();
        self.write_editor_template(&temp_path, title, existing)?;

        info!("Opening editor for the description. Save and exit when done...");
        self.launch_editor(&editor_cmd, &temp_path)?;

        let content = read_to_string(&temp_path)?;
        Ok(process_editor_content(&content))
    }

    fn write_editor_template(&self, path: &Path, title: &str, existing: &str) -> Result<()> {
        let mut file = OpenOptions::new().write(true).open(path)?;

        writeln!(file, "<!-- Full description for: {} -->", title)?;
        writeln!(
            file,
            "<!-- Lines that start with <!-- and end with --> are ignored. -->"
        )?;
        if !existing.is_empty() {
            writeln!(file, "{}", existing)?;
        }
        Ok(())
    }

    fn launch_editor(&self, editor_cmd: &str, file_path: &Path) -> Result<()> {
        let args = split(editor_cmd).map_err(|e| FolioError::EditorError {
            message: format!("Failed to parse editor command: {}", e),
        })?;

        let (program, rest) = args.split_first().ok_or_else(|| FolioError::EditorError {
            message: "Empty editor command".to_string(),
        })?;

        let status = Command::new(program).args(rest).arg(file_path).status()?;

        if !status.success() {
            return Err(FolioError::EditorError {
                message: "Editor exited with non-zero status".to_string(),
            });
        }

        Ok(())
    }
}

// Drops the template comment lines and surrounding blank lines
fn process_editor_content(content: &str) -> String {
    content
        .lines()
        .filter(|line| {
            !(line.trim_start().starts_with("<!--") && line.trim_end().ends_with("-->"))
        })
        .collect::<Vec<&str>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn setup_app() -> (App, TempDir) {
        let dir = tempdir().unwrap();
        let config = Config {
            data_dir: dir.path().to_path_buf(),
            contact_delay_ms: 1,
            loading_delay_ms: 0,
            system_theme: Some(crate::Theme::Light),
            ..Config::default()
        };
        (App::new(config, false).unwrap(), dir)
    }

    fn login(username: &str, password: &str) -> Commands {
        Commands::Login {
            username: username.to_string(),
            password: Some(password.to_string()),
        }
    }

    fn add_project(title: &str) -> Commands {
        Commands::Project(ProjectCommand::Add {
            title: title.to_string(),
            fields: ProjectFields {
                short: Some("desc".to_string()),
                image: Some("http://x/y.png".to_string()),
                tech: Some("Rust, Tokio".to_string()),
                ..ProjectFields::default()
            },
            tags: Some("ML".to_string()),
            private: false,
        })
    }

    #[tokio::test]
    async fn test_project_commands_need_login() {
        let (app, _dir) = setup_app();
        let result = app.run(add_project("My App")).await;
        assert!(matches!(result, Err(FolioError::Unauthorized { .. })));
        assert_eq!(app.catalog.lock().await.len(), 6);
    }

    #[tokio::test]
    async fn test_wrong_password_is_invalid_credentials() {
        let (app, dir) = setup_app();
        let result = app.run(login("admin", "wrong")).await;
        assert!(matches!(result, Err(FolioError::InvalidCredentials)));
        assert!(!dir.path().join("user.json").exists());
    }

    #[tokio::test]
    async fn test_admin_add_edit_delete() {
        let (app, _dir) = setup_app();
        app.run(login("admin", "password")).await.unwrap();

        app.run(add_project("My App")).await.unwrap();
        {
            let catalog = app.catalog.lock().await;
            let project = catalog.get("my-app").unwrap();
            assert_eq!(project.tech_stack, vec!["Rust".to_string(), "Tokio".to_string()]);
            assert_eq!(catalog.len(), 7);
        }

        app.run(Commands::Project(ProjectCommand::Edit {
            id: "my-app".to_string(),
            title: Some("X".to_string()),
            fields: ProjectFields::default(),
            tags: None,
            toggle_tag: vec!["ML".to_string(), "NLP".to_string()],
        }))
        .await
        .unwrap();
        {
            let catalog = app.catalog.lock().await;
            let project = catalog.get("my-app").unwrap();
            assert_eq!(project.title, "X");
            assert_eq!(project.tags, vec![crate::Tag::Nlp]);
        }

        app.run(Commands::Project(ProjectCommand::Delete {
            id: "my-app".to_string(),
            force: true,
        }))
        .await
        .unwrap();
        assert!(app.catalog.lock().await.get("my-app").is_none());
    }

    #[tokio::test]
    async fn test_add_with_repeated_tag_keeps_it_once() {
        let (app, _dir) = setup_app();
        app.run(login("admin", "password")).await.unwrap();

        app.run(Commands::Project(ProjectCommand::Add {
            title: "Twice".to_string(),
            fields: ProjectFields {
                short: Some("desc".to_string()),
                image: Some("http://x/y.png".to_string()),
                ..ProjectFields::default()
            },
            tags: Some("ML,ML".to_string()),
            private: false,
        }))
        .await
        .unwrap();

        let catalog = app.catalog.lock().await;
        assert_eq!(catalog.get("twice").unwrap().tags, vec![crate::Tag::Ml]);
    }

    #[tokio::test]
    async fn test_loading_delay_runs_once() {
        let dir = tempdir().unwrap();
        let config = Config {
            data_dir: dir.path().to_path_buf(),
            loading_delay_ms: 200,
            system_theme: Some(crate::Theme::Light),
            ..Config::default()
        };
        let app = App::new(config, false).unwrap();

        let started = tokio::time::Instant::now();
        app.show_loading().await;
        assert!(started.elapsed() >= Duration::from_millis(200));

        let again = tokio::time::Instant::now();
        app.run(Commands::Home).await.unwrap();
        assert!(again.elapsed() < Duration::from_millis(200));
    }

    #[tokio::test]
    async fn test_session_survives_restart() {
        let (app, dir) = setup_app();
        app.run(login("admin", "password")).await.unwrap();
        app.run(add_project("Scratch")).await.unwrap();

        let config = Config {
            data_dir: dir.path().to_path_buf(),
            loading_delay_ms: 0,
            ..Config::default()
        };
        let restarted = App::new(config, false).unwrap();
        assert!(restarted.session.lock().await.is_authenticated());
        // catalog edits are not written back
        assert!(restarted.catalog.lock().await.get("scratch").is_none());
    }

    #[tokio::test]
    async fn test_browse_filter_resets_expansion() {
        let (app, _dir) = setup_app();
        app.run(Commands::Projects {
            tag: TagFilter::All,
            expand: Some("travel-ai-planner".to_string()),
            json: false,
        })
        .await
        .unwrap();
        assert_eq!(app.browser.lock().await.expanded(), Some("travel-ai-planner"));

        app.run(Commands::Projects {
            tag: "Hackathon".parse().unwrap(),
            expand: None,
            json: false,
        })
        .await
        .unwrap();
        assert_eq!(app.browser.lock().await.expanded(), None);
    }

    #[tokio::test]
    async fn test_theme_toggle_persists() {
        let (app, dir) = setup_app();
        app.run(Commands::Theme { toggle: true }).await.unwrap();
        let stored = std::fs::read_to_string(dir.path().join("theme.json")).unwrap();
        assert_eq!(stored, "\"dark\"");
    }

    #[tokio::test]
    async fn test_idea_lifecycle() {
        let (app, _dir) = setup_app();
        app.run(login("admin", "password")).await.unwrap();

        app.run(Commands::Idea(IdeaCommand::Add {
            title: "Rust port".to_string(),
            description: "Rewrite it".to_string(),
            tags: Some("Rust, Rust, CLI".to_string()),
            status: crate::IdeaStatus::Blocked,
        }))
        .await
        .unwrap();

        let idea = app.ideas.lock().await.ideas().last().cloned().unwrap();
        assert_eq!(idea.tags, vec!["Rust".to_string(), "CLI".to_string()]);
        assert_eq!(idea.status, crate::IdeaStatus::Blocked);

        app.run(Commands::Idea(IdeaCommand::Delete {
            id: idea.id.clone(),
            force: true,
        }))
        .await
        .unwrap();
        assert_eq!(app.ideas.lock().await.len(), 2);
    }

    #[tokio::test]
    async fn test_contact_requires_fields() {
        let (app, _dir) = setup_app();
        let result = app
            .run(Commands::Contact(ContactArgs {
                name: "Ada".to_string(),
                email: String::new(),
                subject: String::new(),
                message: "hi".to_string(),
            }))
            .await;
        assert!(matches!(result, Err(FolioError::ValidationFailed { .. })));
    }

    #[test]
    fn test_process_editor_content_strips_comments() {
        let content = "<!-- Full description for: A -->\n<!-- ignored -->\n\nBody line\n";
        assert_eq!(process_editor_content(content), "Body line");
    }
}
