use std::sync::Arc;

use handlebars::Handlebars;
use tokio::sync::{mpsc, watch};

use crate::services::github_user_service::GitHubUserService;
use crate::views::app::App;
use crate::views::lifecycle::{Fetched, MountContext, MountId};

#[derive(Debug)]
pub enum Message {
    Fetched(Fetched),
    Remount,
    Shutdown,
}

/// Cloneable access to the running loop: the latest frame, and a way to ask
/// for a remount or shutdown.
#[derive(Clone)]
pub struct RenderHandle {
    sender: mpsc::UnboundedSender<Message>,
    frames: watch::Receiver<String>,
}

impl RenderHandle {
    pub fn new(sender: mpsc::UnboundedSender<Message>, frames: watch::Receiver<String>) -> Self {
        RenderHandle { sender, frames }
    }

    pub fn frame(&self) -> String {
        self.frames.borrow().clone()
    }

    #[cfg(test)]
    pub fn frames(&self) -> watch::Receiver<String> {
        self.frames.clone()
    }

    /// Returns `false` if the loop is no longer running.
    pub fn remount(&self) -> bool {
        self.sender.send(Message::Remount).is_ok()
    }

    pub fn shutdown(&self) -> bool {
        self.sender.send(Message::Shutdown).is_ok()
    }
}

/// Owns the view tree. All state changes happen on the task running
/// [`RenderLoop::run`], one message at a time.
pub struct RenderLoop {
    registry: Arc<Handlebars<'static>>,
    context: MountContext,
    receiver: mpsc::UnboundedReceiver<Message>,
    frames: watch::Sender<String>,
    app: App,
    mount_id: MountId,
}

impl RenderLoop {
    pub fn new(
        registry: Arc<Handlebars<'static>>,
        service: Arc<GitHubUserService>,
    ) -> (RenderLoop, RenderHandle) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let (frames, frame_receiver) = watch::channel(String::new());
        let handle = RenderHandle::new(sender.clone(), frame_receiver);
        let render_loop = RenderLoop {
            registry,
            context: MountContext { service, sender },
            receiver,
            frames,
            app: App::new(),
            mount_id: 0,
        };
        (render_loop, handle)
    }

    pub async fn run(mut self) {
        self.mount();
        self.publish();

        while let Some(message) = self.receiver.recv().await {
            match message {
                Message::Fetched(fetched) => {
                    if !self.app.apply(fetched) {
                        log::debug!("Dropped fetch result for a torn-down view");
                        continue;
                    }
                }
                Message::Remount => {
                    self.app.unmount();
                    self.mount();
                }
                Message::Shutdown => break,
            }
            self.publish();
        }

        self.app.unmount();
        log::info!("Render loop stopped");
    }

    fn mount(&mut self) {
        self.mount_id += 1;
        log::info!("Mounting view tree #{}", self.mount_id);
        self.app.mount(self.mount_id, &self.context);
    }

    fn publish(&self) {
        match self.app.render(&self.registry) {
            Ok(frame) => {
                self.frames.send_replace(frame);
            }
            Err(e) => log::error!("Failed to render frame: {}", e),
        }
    }
}
