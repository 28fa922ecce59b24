use bitflags::bitflags;
use tracing::trace;

bitflags! {
    /// Interaction states a workbench surface can be in.
    ///
    /// States are not mutually exclusive: the live state is the union of
    /// every condition currently holding (a dragged block can highlight the
    /// trash can at the same time). Which combinations are meaningful is the
    /// controller's policy; every combination is representable here.
    ///
    /// `DEFAULT` is its own bit so that entering the default state is an
    /// observable transition rather than an absence of state.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    #[repr(transparent)]
    pub struct UiState: u32 {
        /// Nothing special is happening on the surface.
        const DEFAULT = 1 << 0;
        /// The trash can is open.
        const TRASH_CAN_OPEN = 1 << 1;
        /// The trash can is highlighted by a hovering drag.
        const TRASH_CAN_HIGHLIGHTED = 1 << 2;
        /// A toolbox category is open.
        const CATEGORY_OPEN = 1 << 3;
        /// A text field is being edited.
        const EDITING_TEXT_FIELD = 1 << 4;
        /// A block is currently being dragged.
        const DRAGGING_BLOCK = 1 << 5;
        /// A popover is being presented.
        const PRESENTING_POPOVER = 1 << 6;
        /// The user panned the workspace.
        const DID_PAN_WORKSPACE = 1 << 7;
        /// The user tapped the workspace.
        const DID_TAP_WORKSPACE = 1 << 8;

        // Callers layer their own states onto the same mask; bits we don't
        // name round-trip through every operation instead of being truncated.
        const _ = !0;
    }
}

/// Tracks the interaction state of one workbench surface.
///
/// State is ephemeral and lives for a single editing session; nothing is
/// persisted. All operations are constant-time bit operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiStateTracker {
    state: UiState,
}

impl Default for UiStateTracker {
    fn default() -> Self { Self::new() }
}

impl UiStateTracker {
    /// Starts in the `{DEFAULT}` state.
    pub fn new() -> Self {
        Self {
            state: UiState::DEFAULT,
        }
    }

    /// The current set of states.
    pub fn state(&self) -> UiState { self.state }

    /// Adds `states` to the current set. Never clears bits already set.
    pub fn add(&mut self, states: UiState) {
        let old = self.state;
        self.state.insert(states);
        if self.state != old {
            trace!(?old, new = ?self.state, "ui state added");
        }
    }

    /// Removes `states` from the current set. Removing a state that is not
    /// set is a no-op.
    pub fn remove(&mut self, states: UiState) {
        let old = self.state;
        self.state.remove(states);
        if self.state != old {
            trace!(?old, new = ?self.state, "ui state removed");
        }
    }

    /// True iff every bit of `states` is currently set.
    pub fn contains(&self, states: UiState) -> bool { self.state.contains(states) }

    /// True iff at least one bit of `states` is currently set.
    pub fn intersects(&self, states: UiState) -> bool { self.state.intersects(states) }

    /// Returns to the initial `{DEFAULT}` state as an explicit transition.
    pub fn reset(&mut self) {
        let old = self.state;
        self.state = UiState::DEFAULT;
        if self.state != old {
            trace!(?old, "ui state reset");
        }
    }
}
