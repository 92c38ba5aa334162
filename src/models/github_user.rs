use serde::{Deserialize, Serialize};

/// Profile record from `/users/{username}`. Only the fields the header shows
/// are kept; everything else in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GithubUser {
    pub login: String,
    pub avatar_url: String,
}
