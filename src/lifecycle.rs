//=========================================================================
// Lifecycle State & Cross-Thread Dispatch
//
// Two threads matter here: the OS main/UI thread delivers lifecycle and
// input callbacks, and the rendering thread owns the graphics context.
// Lifecycle notifications destined for the rendering thread cross over
// an MPSC channel and are applied there in submission order, relative to
// frame steps.
//
// The "just resumed" one-shot is modeled as an explicit two-state
// machine rather than a bare flag: resuming arms it, and the first frame
// afterwards consumes it.
//
//=========================================================================

//=== External Crates =====================================================

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::warn;

//=== ResumeState =========================================================

/// One-shot state machine deferring the resumed notification to the
/// first frame drawn after a resume, when a valid graphics context is
/// guaranteed to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResumeState {
    /// A resume was observed; the next frame must notify the engine.
    AwaitingFirstFrame,

    /// No resumed notification pending.
    #[default]
    Steady,
}

impl ResumeState {
    /// Arms the one-shot. Idempotent across repeated resumes before a
    /// frame is drawn.
    pub fn mark_resumed(&mut self) {
        *self = Self::AwaitingFirstFrame;
    }

    /// Consumes the one-shot. Returns `true` exactly once per resume,
    /// on the first call after [`ResumeState::mark_resumed`].
    pub fn take_pending(&mut self) -> bool {
        match self {
            Self::AwaitingFirstFrame => {
                *self = Self::Steady;
                true
            }
            Self::Steady => false,
        }
    }
}

//=== ViewState ===========================================================

/// Coarse lifecycle of a view instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Constructed; no surface yet.
    #[default]
    Created,

    /// A surface exists and frames may be drawn.
    Active,

    /// The view was torn down; no further callbacks are expected.
    Destroyed,
}

//=== LifecycleEvent ======================================================

/// Lifecycle notifications posted from the UI thread to the rendering
/// thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The activity resumed. Arms the deferred resumed notification and
    /// restores window focus.
    Resumed,

    /// The activity paused. Drops window focus and notifies the engine
    /// immediately when applied.
    Paused,

    /// The activity started; frame production may begin.
    StartRendering,

    /// The activity stopped; frame production should halt.
    StopRendering,
}

//=== LifecycleSender =====================================================

/// UI-thread handle posting lifecycle events to the rendering thread.
///
/// A disconnected channel (rendering thread gone) is logged and the
/// event dropped; tearing down out of order must not take the UI thread
/// down with it.
#[derive(Debug, Clone)]
pub struct LifecycleSender {
    tx: Sender<LifecycleEvent>,
}

impl LifecycleSender {
    pub fn post(&self, event: LifecycleEvent) {
        if self.tx.send(event).is_err() {
            warn!(
                target: "lifecycle",
                "Rendering thread gone, dropping {:?}",
                event
            );
        }
    }
}

/// Creates the channel pair carrying lifecycle events across the thread
/// boundary. Unbounded: lifecycle traffic is a handful of events per
/// activity transition, and submission order must never be disturbed by
/// backpressure.
pub fn lifecycle_channel() -> (LifecycleSender, Receiver<LifecycleEvent>) {
    let (tx, rx) = unbounded();
    (LifecycleSender { tx }, rx)
}

//=========================================================================
// Unit Tests
//=========================================================================
