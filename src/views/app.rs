use handlebars::{Handlebars, RenderError};
use serde::Serialize;

use crate::views::lifecycle::{Fetched, MountContext, MountId};
use crate::views::repo_list::RepoList;
use crate::views::user_header::UserHeader;

#[derive(Debug, Serialize)]
pub struct TemplateViewModel {
    pub title: String,
    pub body: String,
    pub loading: bool,
}

#[derive(Debug, Serialize)]
struct AppViewModel {
    user_header: String,
    repo_list: String,
}

/// Root of the view tree: the header followed by the repository list.
#[derive(Default)]
pub struct App {
    header: UserHeader,
    repo_list: RepoList,
}

impl App {
    pub fn new() -> Self {
        App {
            header: UserHeader::new(),
            repo_list: RepoList::new(),
        }
    }

    pub fn mount(&mut self, id: MountId, context: &MountContext) {
        self.header.mount(id, context);
        self.repo_list.mount(id, context);
    }

    pub fn unmount(&mut self) {
        self.header.unmount();
        self.repo_list.unmount();
    }

    /// Routes a fetch result to the view that owns it. Returns `true` if the
    /// tree changed and needs a re-render.
    pub fn apply(&mut self, fetched: Fetched) -> bool {
        match fetched {
            Fetched::Profile(id, user) => self.header.receive(id, user),
            Fetched::Repos(id, repos) => self.repo_list.receive(id, repos),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.header.is_loading() || self.repo_list.is_loading()
    }

    /// Renders the whole page.
    pub fn render(&self, registry: &Handlebars) -> Result<String, RenderError> {
        let body = registry.render(
            "app",
            &AppViewModel {
                user_header: self.header.render(registry)?,
                repo_list: self.repo_list.render(registry)?,
            },
        )?;

        registry.render(
            "template",
            &TemplateViewModel {
                title: "Profile".into(),
                body,
                loading: self.is_loading(),
            },
        )
    }
}
