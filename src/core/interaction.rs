use glam::Vec2;

/// Converts a screen-space point into surface-local coordinates given the
/// surface's bounding-box top-left corner.
#[inline]
pub fn to_local(client: Vec2, bounds_origin: Vec2) -> Vec2 {
    client - bounds_origin
}

/// Common sink for hover (mouse) and tap (touch) input. Each call writes the
/// flag and position together.
pub trait InteractionSampler {
    fn on_pointer_activate(&mut self, local: Vec2);
    fn on_pointer_move(&mut self, local: Vec2);
    fn on_pointer_deactivate(&mut self);
}

/// Snapshot read once per frame by the physics step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InteractionState {
    pub active: bool,
    pub pointer: Option<Vec2>,
}

impl InteractionState {
    /// The point particles are pushed away from, if any.
    #[inline]
    pub fn repulsion_point(&self) -> Option<Vec2> {
        if self.active {
            self.pointer
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Interaction {
    state: InteractionState,
    pending_release: Option<u32>,
    next_token: u32,
}

impl Interaction {
    #[inline]
    pub fn snapshot(&self) -> InteractionState {
        self.state
    }

    #[inline]
    pub fn has_pending_release(&self) -> bool {
        self.pending_release.is_some()
    }

    /// Activates at the first touch point and arms an automatic release.
    /// The returned token must be passed to [`Interaction::release_touch`]
    /// when the delay elapses; arming again invalidates older tokens.
    pub fn touch_start(&mut self, local: Vec2) -> u32 {
        self.on_pointer_activate(local);
        self.next_token = self.next_token.wrapping_add(1);
        self.pending_release = Some(self.next_token);
        self.next_token
    }

    /// Releases immediately unless an automatic release is still armed.
    pub fn touch_end(&mut self) {
        if self.pending_release.is_none() {
            self.on_pointer_deactivate();
        }
    }

    /// Disarms any pending release and deactivates. Returns whether a timer
    /// was pending, so the caller knows to clear it.
    pub fn touch_cancel(&mut self) -> bool {
        let had_pending = self.pending_release.take().is_some();
        self.on_pointer_deactivate();
        had_pending
    }

    /// Fires the delayed release. Stale tokens are ignored.
    pub fn release_touch(&mut self, token: u32) -> bool {
        if self.pending_release != Some(token) {
            return false;
        }
        self.pending_release = None;
        self.on_pointer_deactivate();
        true
    }
}

impl InteractionSampler for Interaction {
    fn on_pointer_activate(&mut self, local: Vec2) {
        self.state = InteractionState {
            active: true,
            pointer: Some(local),
        };
    }

    fn on_pointer_move(&mut self, local: Vec2) {
        self.state = InteractionState {
            active: true,
            pointer: Some(local),
        };
    }

    fn on_pointer_deactivate(&mut self) {
        self.state = InteractionState::default();
    }
}
