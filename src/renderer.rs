pub mod cpu_overlay;

pub use cpu_overlay::{CpuOverlayRenderer, OverlayStyle};

use crate::sequencer::{StepRendered, WalkthroughEvent};

/// Receiver of sequencer output.
///
/// Renderers own all drawing, masking and fade timing. They are borrowed by
/// the sequencer per call, never stored.
pub trait WalkthroughRenderer {
    fn step_rendered(&mut self, step: &StepRendered);

    fn finished(&mut self);

    /// Routes an event to the matching callback.
    fn dispatch(&mut self, event: &WalkthroughEvent) {
        match event {
            WalkthroughEvent::StepRendered(step) => self.step_rendered(step),
            WalkthroughEvent::Finished => self.finished(),
        }
    }
}
