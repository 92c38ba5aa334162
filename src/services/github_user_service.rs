use urlencoding::encode;

use crate::config::ApiConfig;
use crate::models::{github_repo::GithubRepo, github_user::GithubUser};
use crate::services::fetch_service::{FetchError, FetchService};

pub struct GitHubUserService {
    pub fetch: FetchService,
    pub config: ApiConfig,
}

impl GitHubUserService {
    pub fn user_url(&self) -> String {
        let credentials = &self.config.credentials;
        format!(
            "{}/users/{}?access_token={}",
            self.config.base_url,
            encode(&credentials.username),
            encode(&credentials.token)
        )
    }

    pub fn repos_url(&self) -> String {
        let credentials = &self.config.credentials;
        format!(
            "{}/users/{}/repos?access_token={}",
            self.config.base_url,
            encode(&credentials.username),
            encode(&credentials.token)
        )
    }

    pub async fn get_user(&self) -> Result<GithubUser, FetchError> {
        self.fetch.get_data(&self.user_url()).await
    }

    pub async fn get_repos(&self) -> Result<Vec<GithubRepo>, FetchError> {
        self.fetch.get_data(&self.repos_url()).await
    }
}
