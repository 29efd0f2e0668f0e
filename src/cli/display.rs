//! Text and JSON rendering of the site's views.
use std::io::Write;

use console::style;

use crate::{
    get_content_preview, profile, Project, ProjectIdea, Result, Route, TagFilter, Theme,
    SHORT_DESCRIPTION_LIMIT,
};

fn separator_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
        .min(50)
}

/// Hero, about, projects and contact sections of the home page
pub fn write_home(out: &mut impl Write, projects: &[&Project], theme: Theme) -> Result<()> {
    let profile = profile();
    let width = separator_width();

    writeln!(out, "{}", style(format!("Hi, I'm {}", profile.name)).bold())?;
    writeln!(out, "{}", profile.headline)?;
    writeln!(out, "{}", "=".repeat(width))?;

    writeln!(out, "{}", style("About").bold().underlined())?;
    writeln!(out, "{}", profile.about)?;
    writeln!(out, "Skills: {}", profile.skills.join(", "))?;
    writeln!(out)?;

    writeln!(out, "{}", style("Projects").bold().underlined())?;
    write_project_list(out, projects, None, TagFilter::All)?;
    writeln!(out)?;

    writeln!(out, "{}", style("Contact").bold().underlined())?;
    writeln!(out, "Email:  {}", profile.email)?;
    writeln!(out, "GitHub: {}", profile.github)?;
    writeln!(out, "Send a message with `folio contact`.")?;
    writeln!(out, "{}", "=".repeat(width))?;
    writeln!(out, "Theme: {}", theme)?;
    Ok(())
}

/// Project cards; the expanded one also shows its full description and links.
pub fn write_project_list(
    out: &mut impl Write,
    projects: &[&Project],
    expanded: Option<&str>,
    filter: TagFilter,
) -> Result<()> {
    if projects.is_empty() {
        writeln!(
            out,
            "No projects found with the {} filter. Try another category!",
            filter
        )?;
        return Ok(());
    }

    let width = separator_width();
    for (i, project) in projects.iter().enumerate() {
        if i > 0 {
            writeln!(out, "{}", "-".repeat(width))?;
        }
        writeln!(out, "{} ({})", style(&project.title).bold(), project.id)?;
        writeln!(
            out,
            "{}",
            get_content_preview(&project.short_description, SHORT_DESCRIPTION_LIMIT)
        )?;
        if !project.tags.is_empty() {
            let tags = project
                .tags
                .iter()
                .map(|tag| format!("#{}", tag))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(out, "Tags: {}", style(tags).cyan())?;
        }

        if expanded == Some(project.id.as_str()) {
            if !project.full_description.is_empty() {
                writeln!(out, "\n{}\n", project.full_description)?;
            }
            if !project.tech_stack.is_empty() {
                writeln!(out, "Tech stack: {}", project.tech_stack.join(", "))?;
            }
            for (label, link) in project.links() {
                writeln!(out, "{}: {}", label, link)?;
            }
        }
    }
    Ok(())
}

/// Dashboard row format: visibility marker, id, title, tags
pub fn write_admin_list(out: &mut impl Write, projects: &[&Project]) -> Result<()> {
    if projects.is_empty() {
        writeln!(out, "No projects in the catalog.")?;
        return Ok(());
    }
    for project in projects {
        let marker = if project.is_public {
            style("public ").green()
        } else {
            style("private").yellow()
        };
        let tags = project
            .tags
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "[{}] {:<28} {} ({})", marker, project.id, project.title, tags)?;
    }
    writeln!(
        out,
        "\n{} project{}",
        projects.len(),
        if projects.len() == 1 { "" } else { "s" }
    )?;
    Ok(())
}

/// Everything the dashboard knows about one project, notes included
pub fn write_project_detail(out: &mut impl Write, project: &Project) -> Result<()> {
    writeln!(out, "ID:          {}", project.id)?;
    writeln!(out, "Title:       {}", style(&project.title).bold())?;
    let visibility = if project.is_public { "public" } else { "private" };
    writeln!(out, "Visibility:  {}", visibility)?;
    writeln!(out, "Image:       {}", project.image)?;
    writeln!(out, "Short:       {}", project.short_description)?;
    if !project.tags.is_empty() {
        let tags = project.tags.iter().map(|t| t.as_str()).collect::<Vec<_>>();
        writeln!(out, "Tags:        {}", tags.join(", "))?;
    }
    if !project.tech_stack.is_empty() {
        writeln!(out, "Tech stack:  {}", project.tech_stack.join(", "))?;
    }
    for (label, link) in project.links() {
        writeln!(out, "{:<12} {}", format!("{}:", label), link)?;
    }
    if !project.full_description.is_empty() {
        writeln!(out, "\n{}", project.full_description)?;
    }
    if let Some(notes) = &project.notes {
        writeln!(out, "\n{} {}", style("Notes:").dim(), notes)?;
    }
    Ok(())
}

pub fn write_ideas(out: &mut impl Write, ideas: &[ProjectIdea]) -> Result<()> {
    if ideas.is_empty() {
        writeln!(out, "No project ideas yet. Add one with `idea add`.")?;
        return Ok(());
    }
    let width = separator_width();
    for (i, idea) in ideas.iter().enumerate() {
        if i > 0 {
            writeln!(out, "{}", "-".repeat(width))?;
        }
        writeln!(out, "{} ({})", style(&idea.title).bold(), idea.id)?;
        writeln!(out, "Status:  {}", style(idea.status).cyan())?;
        writeln!(out, "Created: {}", idea.created_at.format("%b %-d, %Y"))?;
        if !idea.tags.is_empty() {
            writeln!(out, "Tags:    {}", idea.tags.join(", "))?;
        }
        writeln!(out, "{}", idea.description)?;
    }
    Ok(())
}

/// JSON listing; admin notes are dropped unless `with_notes` is set
pub fn write_projects_json(
    out: &mut impl Write,
    projects: &[&Project],
    with_notes: bool,
) -> Result<()> {
    let values: Vec<serde_json::Value> = projects
        .iter()
        .map(|project| {
            let mut value = serde_json::to_value(project)?;
            if !with_notes {
                if let Some(map) = value.as_object_mut() {
                    map.remove("notes");
                }
            }
            Ok(value)
        })
        .collect::<Result<_>>()?;
    writeln!(out, "{}", serde_json::to_string_pretty(&values)?)?;
    Ok(())
}

pub fn write_login_prompt(out: &mut impl Write, requested: &Route) -> Result<()> {
    writeln!(out, "{}", style("Admin Login").bold())?;
    writeln!(
        out,
        "{} is only available to the admin. Log in with `login <username>` first.",
        requested
    )?;
    Ok(())
}

pub fn write_not_found(out: &mut impl Write, path: &str) -> Result<()> {
    writeln!(out, "{}", style("404").bold())?;
    writeln!(out, "Nothing lives at {}. Head back home with `open /`.", path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{seed_ideas, seed_projects};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_expanded_project_shows_links() {
        let projects = seed_projects();
        let refs: Vec<&Project> = projects.iter().collect();
        let text = render(|out| {
            write_project_list(out, &refs, Some("travel-ai-planner"), TagFilter::All)
        });
        assert!(text.contains("YouTube: https://www.youtube.com/watch?v=RRHHwmlU9do"));
        assert!(!text.contains("Keras, NumPy"));
    }

    #[test]
    fn test_empty_list_message_names_filter() {
        let text = render(|out| {
            write_project_list(out, &[], None, "Web App".parse().unwrap())
        });
        assert!(text.contains("Web App filter"));
    }

    #[test]
    fn test_json_hides_notes_unless_asked() {
        let mut projects = seed_projects();
        projects[0].notes = Some("secret".to_string());
        let refs: Vec<&Project> = projects.iter().take(1).collect();

        let public = render(|out| write_projects_json(out, &refs, false));
        assert!(!public.contains("secret"));
        let admin = render(|out| write_projects_json(out, &refs, true));
        assert!(admin.contains("secret"));
    }

    #[test]
    fn test_ideas_render_status() {
        let text = render(|out| write_ideas(out, &seed_ideas()));
        assert!(text.contains("In Progress"));
        assert!(text.contains("Personalized AI Study Assistant"));
    }

    #[test]
    fn test_home_has_all_sections() {
        let projects = seed_projects();
        let refs: Vec<&Project> = projects.iter().collect();
        let text = render(|out| write_home(out, &refs, Theme::Dark));
        for section in ["About", "Projects", "Contact", "Theme: dark"] {
            assert!(text.contains(section), "missing {}", section);
        }
    }
}
