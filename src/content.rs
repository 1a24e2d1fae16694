// ABOUTME: Booth content tables — event info, sessions, projects, and team members.
// ABOUTME: Built once at startup from the built-in defaults or a TOML content file.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Event and booth details shown across several views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventInfo {
    pub team_name: String,
    /// Short company name used in page titles ("{company} at {event}").
    pub company: String,
    pub event_name: String,
    /// Framework the booth is about, used in the callout and form prompts.
    pub topic: String,
    pub event_url: String,
    pub booth_location: String,
    pub booth_hours: String,
    pub contact_email: String,
    pub headline: String,
    pub pitch: String,
}

impl Default for EventInfo {
    fn default() -> Self {
        Self {
            team_name: "Snowflake Developer Relations".to_string(),
            company: "Snowflake".to_string(),
            event_name: "PyTorch Conference 2025".to_string(),
            topic: "PyTorch".to_string(),
            event_url: "https://pytorch.org/event/pytorch-conference-2025/".to_string(),
            booth_location: "Main Expo Hall, Booth S-20 (near the ML Track)".to_string(),
            booth_hours: "Wednesday & Thursday, 9:00 AM - 5:00 PM".to_string(),
            contact_email: "devrel@snowflake.com".to_string(),
            headline: "Build Better AI with Snowpark and PyTorch".to_string(),
            pitch: "The Snowflake Developer Relations team is excited to be at the PyTorch \
                    Conference 2025! We are showcasing how Snowpark and Snowpark Container \
                    Services provide a secure, scalable, and powerful environment to build, \
                    train, and deploy your PyTorch models without ever moving your data.\n\n\
                    Stop by our booth for live code examples, swag, and 1:1 sessions with our \
                    architects!"
                .to_string(),
        }
    }
}

impl EventInfo {
    /// Label of the follow-up checkbox on the contact form.
    pub fn follow_up_label(&self) -> String {
        format!(
            "✅ I would like a {} DevRel team member to follow up with me directly regarding my {} project.",
            self.company, self.topic
        )
    }

    /// Label of the updates opt-in checkbox on the contact form.
    pub fn opt_in_label(&self) -> String {
        format!(
            "🚀 Opt-in: Receive occasional emails about future developer events and new {}/{} integrations.",
            self.topic, self.company
        )
    }
}

/// A featured talk given by the team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub title: String,
    pub speaker: String,
    pub time: String,
    pub location: String,
    pub summary: String,
}

/// A project demoed at the booth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub icon: String,
    pub summary: String,
    pub details: String,
    #[serde(default)]
    pub tech: Vec<String>,
}

impl Project {
    /// The title up to the first ':', used for button labels and acknowledgements.
    pub fn short_title(&self) -> &str {
        self.title.split(':').next().unwrap_or(&self.title)
    }
}

/// A team member staffing the booth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub linkedin: String,
}

impl TeamMember {
    pub fn first_name(&self) -> &str {
        self.name.split(' ').next().unwrap_or(&self.name)
    }

    pub fn linkedin_url(&self) -> String {
        format!("https://linkedin.com/in/{}", self.linkedin)
    }
}

/// All read-only content the kiosk renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoothContent {
    pub event: EventInfo,
    pub sessions: Vec<Session>,
    pub projects: Vec<Project>,
    pub team: Vec<TeamMember>,
}

impl Default for BoothContent {
    fn default() -> Self {
        Self {
            event: EventInfo::default(),
            sessions: default_sessions(),
            projects: default_projects(),
            team: default_team(),
        }
    }
}

impl BoothContent {
    /// Load content from a TOML file. Tables missing from the file keep their built-in values.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read content file {}", path.display()))?;
        Self::from_toml(&raw)
            .with_context(|| format!("failed to parse content file {}", path.display()))
    }

    /// Load from `path` when given, otherwise use the built-in content.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

fn default_sessions() -> Vec<Session> {
    vec![
        Session {
            title: "Scaling GenAI Inference with Snowpark Containers".to_string(),
            speaker: "Alice Johnson (Lead ML Advocate)".to_string(),
            time: "Wed, Oct 22 | 11:00 AM - 11:45 AM".to_string(),
            location: "ML Track Stage 1 (Room 302)".to_string(),
            summary: "A deep dive into deploying high-throughput PyTorch models for inference \
                      using Snowpark Containers, focusing on resource optimization and security."
                .to_string(),
        },
        Session {
            title: "Data Governance for PyTorch Feature Engineering".to_string(),
            speaker: "Bob Chen (Data Governance Architect)".to_string(),
            time: "Thu, Oct 23 | 2:00 PM - 2:45 PM".to_string(),
            location: "Data & Ethics Stage (Room 105)".to_string(),
            summary: "Learn how Snowflake's governance framework ensures compliance and \
                      auditability for features used in PyTorch training pipelines."
                .to_string(),
        },
    ]
}

fn default_projects() -> Vec<Project> {
    vec![
        Project {
            title: "Snowpark for PyTorch Model Training".to_string(),
            icon: "🧠".to_string(),
            summary: "Training PyTorch models directly within Snowflake using Snowpark containers."
                .to_string(),
            details: "See how to eliminate data movement by running your custom PyTorch training \
                      loops inside Snowflake's secure, scalable environment. This demo includes a \
                      distributed training example."
                .to_string(),
            tech: vec!["Snowpark", "PyTorch", "Python", "MLOps"]
                .into_iter()
                .map(String::from)
                .collect(),
        },
        Project {
            title: "Zero-Copy Data Access with Iceberg & Snowpark".to_string(),
            icon: "🧊".to_string(),
            summary: "Showcasing PyTorch data loading from external Iceberg tables without data \
                      movement."
                .to_string(),
            details: "Explore our solution for seamless, high-performance data loading from \
                      Apache Iceberg tables stored outside Snowflake, all integrated with your \
                      PyTorch data pipelines."
                .to_string(),
            tech: vec!["Iceberg", "Snowpark", "PyTorch DataLoaders"]
                .into_iter()
                .map(String::from)
                .collect(),
        },
        Project {
            title: "LLM Fine-Tuning Sandbox".to_string(),
            icon: "🤖".to_string(),
            summary: "An interactive demo showing the fine-tuning of a small LLM using a PyTorch \
                      pipeline and Snowflake data."
                .to_string(),
            details: "Attendees can provide input data and see the model fine-tuning process \
                      start in real-time, demonstrating the power of Snowpark's compute \
                      environment for custom GenAI projects."
                .to_string(),
            tech: vec![
                "LLM",
                "PyTorch",
                "Snowpark Container Services",
                "Gemini API (Data Prep)",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        },
    ]
}

fn default_team() -> Vec<TeamMember> {
    [
        ("Alice Johnson", "Lead ML Advocate", "alice-j-sf"),
        ("Bob Chen", "Data Governance Architect", "bob-c-sf"),
        ("Carol Diaz", "Senior DevRel Engineer", "carol-d-sf"),
    ]
    .into_iter()
    .map(|(name, role, linkedin)| TeamMember {
        name: name.to_string(),
        role: role.to_string(),
        linkedin: linkedin.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_have_expected_sizes() {
        let content = BoothContent::default();
        assert_eq!(content.sessions.len(), 2);
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.team.len(), 3);
    }

    #[test]
    fn short_title_stops_at_colon() {
        let mut project = BoothContent::default().projects[0].clone();
        assert_eq!(project.short_title(), "Snowpark for PyTorch Model Training");
        project.title = "Edge Demo: Quantized Models".to_string();
        assert_eq!(project.short_title(), "Edge Demo");
    }

    #[test]
    fn team_member_helpers() {
        let member = &BoothContent::default().team[2];
        assert_eq!(member.first_name(), "Carol");
        assert_eq!(member.linkedin_url(), "https://linkedin.com/in/carol-d-sf");
    }

    #[test]
    fn checkbox_labels_follow_event_info() {
        let mut event = EventInfo::default();
        assert_eq!(
            event.follow_up_label(),
            "✅ I would like a Snowflake DevRel team member to follow up with me directly \
             regarding my PyTorch project."
        );
        assert!(event.opt_in_label().ends_with("new PyTorch/Snowflake integrations."));

        event.company = "Ferris Labs".to_string();
        event.topic = "Rust".to_string();
        assert!(event.follow_up_label().contains("a Ferris Labs DevRel team member"));
        assert!(event.opt_in_label().contains("new Rust/Ferris Labs integrations"));
    }

    #[test]
    fn partial_content_file_keeps_builtin_tables() {
        let toml_str = r#"
[event]
event_name = "RustConf 2026"

[[team]]
name = "Dana Ortiz"
role = "Staff Engineer"
linkedin = "dana-o"
"#;
        let content = BoothContent::from_toml(toml_str).unwrap();
        assert_eq!(content.event.event_name, "RustConf 2026");
        assert_eq!(content.event.team_name, "Snowflake Developer Relations");
        assert_eq!(content.team.len(), 1);
        assert_eq!(content.team[0].name, "Dana Ortiz");
        assert_eq!(content.sessions.len(), 2);
        assert_eq!(content.projects.len(), 3);
    }

    #[test]
    fn project_tech_defaults_to_empty() {
        let toml_str = r#"
[[projects]]
title = "Bare"
icon = "x"
summary = "s"
details = "d"
"#;
        let content = BoothContent::from_toml(toml_str).unwrap();
        assert!(content.projects[0].tech.is_empty());
    }

    #[test]
    fn load_reports_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = BoothContent::load(&tmp.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read content file"));
    }
}
