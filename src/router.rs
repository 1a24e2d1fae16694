// ABOUTME: View router — maps the selected menu item to a render description.
// ABOUTME: Pure function over the booth content; no state, re-run on every interaction.

use serde::Deserialize;

use crate::content::BoothContent;
use crate::demo::DemoRequest;

/// The five fixed sidebar entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MenuItem {
    Overview,
    Schedule,
    Projects,
    Team,
    Contact,
}

impl MenuItem {
    pub const ALL: [MenuItem; 5] = [
        MenuItem::Overview,
        MenuItem::Schedule,
        MenuItem::Projects,
        MenuItem::Team,
        MenuItem::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Overview => "Overview",
            MenuItem::Schedule => "Schedule & Sessions",
            MenuItem::Projects => "Projects & Demos",
            MenuItem::Team => "Our Team",
            MenuItem::Contact => "Contact & Outreach",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            MenuItem::Overview => "🚀",
            MenuItem::Schedule => "🗓️",
            MenuItem::Projects => "📦",
            MenuItem::Team => "👥",
            MenuItem::Contact => "📝",
        }
    }

    /// Short name accepted on the command line.
    pub fn alias(self) -> &'static str {
        match self {
            MenuItem::Overview => "overview",
            MenuItem::Schedule => "schedule",
            MenuItem::Projects => "projects",
            MenuItem::Team => "team",
            MenuItem::Contact => "contact",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|m| *m == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next entry, wrapping around to the first.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous entry, wrapping around to the last.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Resolve a plain label, an icon-prefixed label, or a CLI alias.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|item| {
            label.eq_ignore_ascii_case(item.label())
                || label.eq_ignore_ascii_case(item.alias())
                || label == format!("{} {}", item.icon(), item.label())
        })
    }
}

/// One project as shown in the Projects view.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub index: usize,
    pub heading: String,
    pub summary: String,
    pub details: String,
    pub stack: String,
    pub demo_label: String,
}

/// A single element of a rendered view.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Title(String),
    Header(String),
    Subheader(String),
    Text(String),
    Strong(String),
    Emphasis(String),
    Caption(String),
    /// Highlighted info box.
    Callout(String),
    Bullet(String),
    Link { label: String, url: String },
    /// Image placeholder; holds the text drawn inside it.
    Avatar(String),
    Divider,
    Project(ProjectCard),
    /// Where the contact form is drawn.
    ContactForm,
}

/// The render description for one menu item.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub item: MenuItem,
    pub blocks: Vec<Block>,
}

impl View {
    /// Flatten the view to plain text, one block per line.
    pub fn plain_text(&self) -> String {
        let mut out = Vec::new();
        for block in &self.blocks {
            match block {
                Block::Title(s)
                | Block::Header(s)
                | Block::Subheader(s)
                | Block::Text(s)
                | Block::Strong(s)
                | Block::Emphasis(s)
                | Block::Caption(s)
                | Block::Callout(s) => out.push(s.clone()),
                Block::Bullet(s) => out.push(format!("- {}", s)),
                Block::Link { label, url } => out.push(format!("{}: {}", label, url)),
                Block::Avatar(s) => out.push(format!("[ {} ]", s)),
                Block::Divider => out.push("---".to_string()),
                Block::Project(card) => {
                    out.push(card.heading.clone());
                    out.push(format!("Summary: {}", card.summary));
                    out.push(format!("Project Goal: {}", card.details));
                    out.push(format!("Core Stack: {}", card.stack));
                    out.push(format!("[{}]", card.demo_label));
                }
                Block::ContactForm => out.push("[contact form]".to_string()),
            }
        }
        out.join("\n")
    }

    pub fn projects(&self) -> impl Iterator<Item = &ProjectCard> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Project(card) => Some(card),
            _ => None,
        })
    }
}

/// Build the view for `item` from the content tables.
pub fn render_view(item: MenuItem, content: &BoothContent) -> View {
    let blocks = match item {
        MenuItem::Overview => overview(content),
        MenuItem::Schedule => schedule(content),
        MenuItem::Projects => projects(content),
        MenuItem::Team => team(content),
        MenuItem::Contact => contact(content),
    };
    View { item, blocks }
}

/// Resolve a free-form label; anything unknown falls back to the overview.
pub fn route(label: &str, content: &BoothContent) -> View {
    let item = MenuItem::from_label(label).unwrap_or_else(|| {
        tracing::warn!(label, "unknown menu label, falling back to overview");
        MenuItem::Overview
    });
    render_view(item, content)
}

fn overview(content: &BoothContent) -> Vec<Block> {
    let event = &content.event;
    let mut blocks = vec![
        Block::Title(format!("{} at {}", event.company, event.event_name)),
        Block::Header(event.headline.clone()),
    ];
    for paragraph in event.pitch.split("\n\n") {
        blocks.push(Block::Text(paragraph.to_string()));
    }
    blocks.push(Block::Divider);
    blocks.push(Block::Callout(format!(
        "Find Our Booth! We are located at {}. We'll be here {} to discuss your {} and ML challenges.",
        event.booth_location, event.booth_hours, event.topic
    )));
    blocks
}

fn schedule(content: &BoothContent) -> Vec<Block> {
    let event = &content.event;
    let mut blocks = vec![
        Block::Title("🗓️ Conference Schedule & Key Sessions".to_string()),
        Block::Strong(format!(
            "Booth Hours: {} | Location: {}",
            event.booth_hours, event.booth_location
        )),
        Block::Divider,
        Block::Header("Featured Sessions".to_string()),
        Block::Text("Join our team for these technical deep-dives.".to_string()),
    ];

    for session in &content.sessions {
        blocks.push(Block::Subheader(format!("Session: {}", session.title)));
        blocks.push(Block::Strong(session.time.clone()));
        blocks.push(Block::Strong(format!("Room: {}", session.location)));
        blocks.push(Block::Caption(format!("Speaker: {}", session.speaker)));
        blocks.push(Block::Emphasis(session.summary.clone()));
        blocks.push(Block::Divider);
    }

    blocks.push(Block::Header("Live Demo Schedule at the Booth".to_string()));
    blocks.push(Block::Text(
        "Ask any of our team members for a live demonstration of these projects!".to_string(),
    ));
    blocks
}

fn projects(content: &BoothContent) -> Vec<Block> {
    let mut blocks = vec![
        Block::Title("📦 Featured Projects & Code Demos".to_string()),
        Block::Text(format!(
            "All demos run live at the {} booth. Select a project and press Enter to show details.",
            content.event.company
        )),
    ];

    for (index, project) in content.projects.iter().enumerate() {
        blocks.push(Block::Project(ProjectCard {
            index,
            heading: format!("{} {}", project.icon, project.title),
            summary: project.summary.clone(),
            details: project.details.clone(),
            stack: project.tech.join(" | "),
            demo_label: DemoRequest::button_label(project),
        }));
    }
    blocks
}

fn team(content: &BoothContent) -> Vec<Block> {
    let mut blocks = vec![
        Block::Title(format!("👥 Meet the {} Team", content.event.team_name)),
        Block::Text(
            "These are the experts available at the booth. Feel free to connect with them!"
                .to_string(),
        ),
    ];

    for member in &content.team {
        blocks.push(Block::Avatar(member.first_name().to_string()));
        blocks.push(Block::Subheader(member.name.clone()));
        blocks.push(Block::Strong(member.role.clone()));
        blocks.push(Block::Link {
            label: "Connect on LinkedIn".to_string(),
            url: member.linkedin_url(),
        });
        blocks.push(Block::Divider);
    }
    blocks
}

fn contact(content: &BoothContent) -> Vec<Block> {
    let event = &content.event;
    vec![
        Block::Title("📝 Contact & Outreach".to_string()),
        Block::Text(format!(
            "The {} team is eager to connect with you. Use the form below to initiate a \
             follow-up or subscribe to our event updates.",
            event.team_name
        )),
        Block::Subheader("Booth & General Contact".to_string()),
        Block::Bullet(format!("Booth: {}", event.booth_location)),
        Block::Bullet(format!("Email: {}", event.contact_email)),
        Block::Divider,
        Block::Subheader("Connect with DevRel".to_string()),
        Block::ContactForm,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_resolve_in_all_spellings() {
        for item in MenuItem::ALL {
            assert_eq!(MenuItem::from_label(item.label()), Some(item));
            assert_eq!(MenuItem::from_label(item.alias()), Some(item));
            let prefixed = format!("{} {}", item.icon(), item.label());
            assert_eq!(MenuItem::from_label(&prefixed), Some(item));
        }
        assert_eq!(MenuItem::from_label("our team"), Some(MenuItem::Team));
        assert_eq!(MenuItem::from_label("Sponsors"), None);
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(MenuItem::Contact.next(), MenuItem::Overview);
        assert_eq!(MenuItem::Overview.prev(), MenuItem::Contact);
        assert_eq!(MenuItem::Schedule.next(), MenuItem::Projects);
    }

    #[test]
    fn index_round_trips() {
        for (i, item) in MenuItem::ALL.iter().enumerate() {
            assert_eq!(item.index(), i);
            assert_eq!(MenuItem::from_index(i), Some(*item));
        }
        assert_eq!(MenuItem::from_index(5), None);
    }

    #[test]
    fn unknown_label_falls_back_to_overview() {
        let content = BoothContent::default();
        let view = route("Sponsors", &content);
        assert_eq!(view.item, MenuItem::Overview);
    }

    #[test]
    fn render_is_deterministic() {
        let content = BoothContent::default();
        for item in MenuItem::ALL {
            assert_eq!(render_view(item, &content), render_view(item, &content));
        }
    }

    #[test]
    fn projects_view_builds_one_card_per_project() {
        let content = BoothContent::default();
        let view = render_view(MenuItem::Projects, &content);
        let cards: Vec<_> = view.projects().collect();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[1].index, 1);
        assert_eq!(cards[0].stack, "Snowpark | PyTorch | Python | MLOps");
        assert_eq!(
            cards[2].demo_label,
            "Request Live Demo of LLM Fine-Tuning Sandbox"
        );
    }

    #[test]
    fn only_contact_view_has_form_slot() {
        let content = BoothContent::default();
        for item in MenuItem::ALL {
            let view = render_view(item, &content);
            let has_form = view.blocks.contains(&Block::ContactForm);
            assert_eq!(has_form, item == MenuItem::Contact, "{:?}", item);
        }
    }
}
