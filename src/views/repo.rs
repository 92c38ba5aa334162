use handlebars::{Handlebars, RenderError};

use crate::models::github_repo::GithubRepo;

/// One list entry linking to the repository.
pub fn render(registry: &Handlebars, repo: &GithubRepo) -> Result<String, RenderError> {
    registry.render("repo", repo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::create_registry;

    #[test]
    fn links_name_to_html_url() {
        let registry = create_registry().unwrap();
        let repo = GithubRepo {
            id: 1,
            name: "foo".into(),
            html_url: "http://x/foo".into(),
        };

        let html = render(&registry, &repo).unwrap();

        assert_eq!(
            html.trim(),
            r#"<li data-key="1"><a href="http://x/foo">foo</a></li>"#
        );
    }

    #[test]
    fn escapes_markup_in_name() {
        let registry = create_registry().unwrap();
        let repo = GithubRepo {
            id: 2,
            name: "<script>".into(),
            html_url: "http://x/s".into(),
        };

        let html = render(&registry, &repo).unwrap();

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
