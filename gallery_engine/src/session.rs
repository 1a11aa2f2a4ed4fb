//! The walk session: owns the mutable user + view pair and drives one
//! action at a time through the resolve-transform cycle.
//!
//! All mutation funnels through `&mut self`, which keeps the
//! one-action-in-flight invariant for free in single-threaded use; callers
//! on multiple threads must serialize access to the session themselves.

use serde::Serialize;

use crate::artwork::ArtworkInstance;
use crate::controller::{handle_action, NavAction};
use crate::layout::GalleryLayout;
use crate::navigation::User;
use crate::perspective::{compute_transform, ViewTransform};
use crate::sightline::find_faced_artwork;

/// Undo depth, matching the upstream snapshot cap.
const MAX_HISTORY: usize = 20;

/// Derived view parameters, overwritten wholesale after every action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub faced_instance_id: Option<String>,
    pub transform: ViewTransform,
    pub visible: bool,
}

impl ViewState {
    fn hidden() -> Self {
        Self {
            faced_instance_id: None,
            transform: ViewTransform::identity(),
            visible: false,
        }
    }
}

/// A walkthrough in progress. The layout and artwork instances are fixed at
/// construction; the user and derived view are the only mutable state.
pub struct WalkSession {
    layout: GalleryLayout,
    instances: Vec<ArtworkInstance>,
    user: User,
    view: ViewState,
    history: Vec<User>,
}

impl WalkSession {
    pub fn new(layout: GalleryLayout, instances: Vec<ArtworkInstance>, start: User) -> Self {
        let view = resolve_view(&start, &instances);
        Self {
            layout,
            instances,
            user: start,
            view,
            history: Vec::new(),
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn layout(&self) -> &GalleryLayout {
        &self.layout
    }

    pub fn instances(&self) -> &[ArtworkInstance] {
        &self.instances
    }

    /// Apply one action, then recompute the faced artwork and its transform.
    pub fn apply(&mut self, action: NavAction) {
        self.push_history();
        self.user = handle_action(action, self.user, &self.layout);
        self.view = resolve_view(&self.user, &self.instances);
    }

    /// Restore the user state from before the most recent action. Returns
    /// false when the history is empty.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(user) => {
                self.user = user;
                self.view = resolve_view(&self.user, &self.instances);
                true
            }
            None => false,
        }
    }

    fn push_history(&mut self) {
        if self.history.len() == MAX_HISTORY {
            self.history.remove(0);
        }
        self.history.push(self.user);
    }

    /// The full record for the faced placement, when one is in view.
    pub fn faced_instance(&self) -> Option<&ArtworkInstance> {
        let id = self.view.faced_instance_id.as_deref()?;
        self.instances
            .iter()
            .find(|inst| inst.instance_id == id)
    }

    /// Info-panel lines: where the visitor stands, what shares their cell,
    /// and what they are looking at.
    pub fn describe(&self) -> Vec<String> {
        let grid = self.layout.grid_size();
        let position = self.user.position;
        let cell_number = (position.y - 1) * grid + position.x;

        let mut lines = vec![format!(
            "User: {position} | Cell: {cell_number} | Facing: {}",
            self.user.facing
        )];

        if let Some(at) = self
            .instances
            .iter()
            .find(|inst| inst.position() == position)
        {
            lines.push(format!("At: {} ({})", at.name, at.dimensions_original));
        }

        if let Some(viewed) = self.faced_instance() {
            lines.push(format!(
                "Viewing: {} ({})",
                viewed.name, viewed.dimensions_original
            ));
            if !viewed.medium.is_empty() {
                lines.push(format!("Medium: {}", viewed.medium));
            }
            if !viewed.exhibition.is_empty() {
                lines.push(format!("Exhibition: {}", viewed.exhibition));
            }
        }

        lines
    }
}

fn resolve_view(user: &User, instances: &[ArtworkInstance]) -> ViewState {
    match find_faced_artwork(user, instances) {
        Some(inst) => ViewState {
            faced_instance_id: Some(inst.instance_id.clone()),
            transform: compute_transform(user, inst),
            visible: true,
        },
        None => ViewState::hidden(),
    }
}
