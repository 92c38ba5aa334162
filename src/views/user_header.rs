use handlebars::{Handlebars, RenderError};

use crate::models::github_user::GithubUser;
use crate::views::lifecycle::{Fetched, MountContext, MountId, Stateful, ViewState};

/// Avatar and login of the configured user.
#[derive(Default)]
pub struct UserHeader {
    user: Stateful<GithubUser>,
}

impl UserHeader {
    pub fn new() -> Self {
        UserHeader {
            user: Stateful::new(),
        }
    }

    pub fn mount(&mut self, id: MountId, context: &MountContext) {
        let context = context.clone();
        let task = tokio::spawn(async move {
            match context.service.get_user().await {
                Ok(user) => {
                    log::debug!("userheader {:?}", user);
                    context.deliver(Fetched::Profile(id, user));
                }
                Err(e) => log::error!("Fetch data failed with {}", e),
            }
        });
        self.user.mount(id, task);
    }

    pub fn unmount(&mut self) {
        self.user.unmount();
    }

    pub fn receive(&mut self, id: MountId, user: GithubUser) -> bool {
        self.user.receive(id, user)
    }

    pub fn is_loading(&self) -> bool {
        self.user.is_loading()
    }

    pub fn render(&self, registry: &Handlebars) -> Result<String, RenderError> {
        match self.user.state() {
            ViewState::Loading => registry.render("loading", &()),
            ViewState::Loaded(user) => registry.render("user_header", user),
        }
    }
}
