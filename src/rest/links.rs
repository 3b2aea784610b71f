//! Well-known `Links` keys and link normalization.

/// Key of the link to the resource itself.
pub const SELF: &str = "Self";
/// Key of the link to the owning project.
pub const PROJECT: &str = "Project";
/// Key of the link to the target environment.
pub const ENVIRONMENT: &str = "Environment";
/// Key of the link to the release being deployed.
pub const RELEASE: &str = "Release";
/// Key of the link to the server task.
pub const TASK: &str = "Task";
/// Key of the link to a collection of deployments.
pub const DEPLOYMENTS: &str = "Deployments";
/// Key of the link to a collection of interruptions.
pub const INTERRUPTIONS: &str = "Interruptions";
/// Key of the link to a variable set.
pub const VARIABLES: &str = "Variables";
/// Key of the continuation link on a page of results.
pub const PAGE_NEXT: &str = "Page.Next";

/// Strips a URI-template query suffix from a link.
///
/// Octopus publishes some links as templates such as
/// `/api/deployments{?skip,take}`. Everything from the first `{?` onward is
/// dropped; links without a template are returned unchanged.
///
/// # Example
///
/// ```rust
/// use octopus_api::rest::strip_link_template;
///
/// assert_eq!(
///     strip_link_template("/api/variables/variableset-1{?includeId}"),
///     "/api/variables/variableset-1"
/// );
/// assert_eq!(strip_link_template("/api/tasks/ServerTasks-1"), "/api/tasks/ServerTasks-1");
/// ```
#[must_use]
pub fn strip_link_template(link: &str) -> &str {
    link.find("{?").map_or(link, |index| &link[..index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_template_suffix() {
        assert_eq!(
            strip_link_template("/api/releases/Releases-1/deployments{?skip,take}"),
            "/api/releases/Releases-1/deployments"
        );
    }

    #[test]
    fn test_strips_from_first_template_only() {
        assert_eq!(
            strip_link_template("/api/a{?x}/b{?y}"),
            "/api/a"
        );
    }

    #[test]
    fn test_plain_braces_are_kept() {
        assert_eq!(strip_link_template("/api/{id}"), "/api/{id}");
    }

    #[test]
    fn test_link_without_template_is_unchanged() {
        assert_eq!(strip_link_template(""), "");
        assert_eq!(
            strip_link_template("/api/interruptions?regarding=ServerTasks-1"),
            "/api/interruptions?regarding=ServerTasks-1"
        );
    }
}
