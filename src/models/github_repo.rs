use serde::{Deserialize, Serialize};

/// Repository record from `/users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GithubRepo {
    /// Unique within one response, used as the list key.
    pub id: u64,
    pub name: String,
    pub html_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_unconsumed_fields() {
        let repos: Vec<GithubRepo> = serde_json::from_str(
            r#"[{"id": 7, "name": "foo", "html_url": "http://x/foo", "fork": false, "stargazers_count": 3}]"#,
        )
        .unwrap();

        assert_eq!(
            repos,
            vec![GithubRepo {
                id: 7,
                name: "foo".into(),
                html_url: "http://x/foo".into(),
            }]
        );
    }

    #[test]
    fn rejects_record_without_id() {
        let result: Result<GithubRepo, _> =
            serde_json::from_str(r#"{"name": "foo", "html_url": "http://x/foo"}"#);
        assert!(result.is_err());
    }
}
