// ABOUTME: Per-project live demo requests made from the Projects view.
// ABOUTME: Builds the acknowledgement shown to the visitor; nothing is stored.

use crate::content::Project;

/// A visitor asked for a live demo of one project.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoRequest {
    pub index: usize,
    pub project: String,
}

impl DemoRequest {
    pub fn for_project(index: usize, project: &Project) -> Self {
        Self {
            index,
            project: project.short_title().to_string(),
        }
    }

    pub fn button_label(project: &Project) -> String {
        format!("Request Live Demo of {}", project.short_title())
    }

    /// Record the request in the log and return the acknowledgement text.
    pub fn acknowledge(&self) -> String {
        tracing::info!(project = %self.project, index = self.index, "live demo requested");
        format!(
            "A team member will be notified about your interest in the {} demo!",
            self.project
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::BoothContent;

    #[test]
    fn acknowledgement_names_the_project() {
        let content = BoothContent::default();
        let request = DemoRequest::for_project(1, &content.projects[1]);
        assert_eq!(request.index, 1);
        assert_eq!(
            request.acknowledge(),
            "A team member will be notified about your interest in the Zero-Copy Data Access \
             with Iceberg & Snowpark demo!"
        );
    }

    #[test]
    fn acknowledgement_uses_short_title() {
        let mut project = BoothContent::default().projects[0].clone();
        project.title = "Edge Demo: Quantized Models".to_string();
        let request = DemoRequest::for_project(0, &project);
        assert!(request.acknowledge().contains("in the Edge Demo demo!"));
        assert_eq!(
            DemoRequest::button_label(&project),
            "Request Live Demo of Edge Demo"
        );
    }
}
