use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::models::{github_repo::GithubRepo, github_user::GithubUser};
use crate::render_loop::Message;
use crate::services::github_user_service::GitHubUserService;

/// Identifies one mount of the view tree. A result tagged with an older
/// mount belongs to a torn-down view and is dropped.
pub type MountId = u64;

/// A completed fetch on its way back to the view that asked for it.
#[derive(Debug)]
pub enum Fetched {
    Profile(MountId, GithubUser),
    Repos(MountId, Vec<GithubRepo>),
}

/// What a view needs to start its fetch.
#[derive(Clone)]
pub struct MountContext {
    pub service: Arc<GitHubUserService>,
    pub sender: UnboundedSender<Message>,
}

impl MountContext {
    /// Hands a fetch result to the render loop. Fails quietly if the loop
    /// has already stopped.
    pub fn deliver(&self, fetched: Fetched) {
        if self.sender.send(Message::Fetched(fetched)).is_err() {
            log::debug!("Render loop stopped before fetch result arrived");
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    Loading,
    Loaded(T),
}

struct Lifetime {
    id: MountId,
    task: JoinHandle<()>,
}

impl Drop for Lifetime {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Fetched state owned by one view, plus the task filling it.
pub struct Stateful<T> {
    state: ViewState<T>,
    lifetime: Option<Lifetime>,
}

impl<T> Stateful<T> {
    pub fn new() -> Self {
        Stateful {
            state: ViewState::Loading,
            lifetime: None,
        }
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    pub fn is_mounted(&self) -> bool {
        self.lifetime.is_some()
    }

    /// Starts a new lifetime driven by `task`. Any previous task is aborted.
    pub fn mount(&mut self, id: MountId, task: JoinHandle<()>) {
        if self.is_mounted() {
            log::debug!("Replacing live mount with #{}", id);
        }
        self.state = ViewState::Loading;
        self.lifetime = Some(Lifetime { id, task });
    }

    pub fn unmount(&mut self) {
        self.lifetime = None;
        self.state = ViewState::Loading;
    }

    /// Applies a fetch result. Returns `false` when the result is for a
    /// mount that is gone, or the state was already loaded for this mount.
    pub fn receive(&mut self, id: MountId, value: T) -> bool {
        match &self.lifetime {
            Some(lifetime) if lifetime.id == id && self.is_loading() => {
                self.state = ViewState::Loaded(value);
                true
            }
            _ => false,
        }
    }

    /// Waits for the current fetch task to finish.
    #[cfg(test)]
    pub async fn settle(&mut self) {
        if let Some(lifetime) = self.lifetime.as_mut() {
            let _ = (&mut lifetime.task).await;
        }
    }
}

impl<T> Default for Stateful<T> {
    fn default() -> Self {
        Self::new()
    }
}
