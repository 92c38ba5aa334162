use handlebars::{Handlebars, RenderError};
use serde::Serialize;

use crate::models::github_repo::GithubRepo;
use crate::views::lifecycle::{Fetched, MountContext, MountId, Stateful, ViewState};
use crate::views::repo;

#[derive(Debug, Serialize)]
struct RepoListViewModel {
    items: Vec<String>,
}

/// The configured user's repositories, in the order the API returned them.
#[derive(Default)]
pub struct RepoList {
    repos: Stateful<Vec<GithubRepo>>,
}

impl RepoList {
    pub fn new() -> Self {
        RepoList {
            repos: Stateful::new(),
        }
    }

    pub fn mount(&mut self, id: MountId, context: &MountContext) {
        let context = context.clone();
        let task = tokio::spawn(async move {
            match context.service.get_repos().await {
                Ok(repos) => {
                    log::debug!("repos {:?}", repos);
                    context.deliver(Fetched::Repos(id, repos));
                }
                Err(e) => log::error!("Fetch data failed with {}", e),
            }
        });
        self.repos.mount(id, task);
    }

    pub fn unmount(&mut self) {
        self.repos.unmount();
    }

    pub fn receive(&mut self, id: MountId, repos: Vec<GithubRepo>) -> bool {
        self.repos.receive(id, repos)
    }

    pub fn is_loading(&self) -> bool {
        self.repos.is_loading()
    }

    pub fn render(&self, registry: &Handlebars) -> Result<String, RenderError> {
        match self.repos.state() {
            ViewState::Loading => registry.render("loading", &()),
            ViewState::Loaded(repos) => {
                let items = repos
                    .iter()
                    .map(|r| repo::render(registry, r))
                    .collect::<Result<Vec<_>, _>>()?;
                registry.render("repo_list", &RepoListViewModel { items })
            }
        }
    }
}
