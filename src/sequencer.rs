use crate::{
    dataset::{LayoutConfig, WalkthroughDataset, WalkthroughItem},
    geometry::{Rect, RenderArtifacts},
    measure::TextMeasurer,
    renderer::WalkthroughRenderer,
    step_queue::StepQueue,
};

/// Source of the current display surface bounds.
///
/// Queried once per advance so rotations and resizes between steps are
/// picked up.
pub trait ViewportProvider {
    fn bounds(&self) -> Rect;
}

impl ViewportProvider for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

/// Where the walkthrough is.
#[derive(Clone, Debug, PartialEq)]
pub enum SequencerState {
    /// Dataset set, no step shown yet.
    Idle,
    /// Showing the step at `index` (zero-based, in dataset order).
    ShowingStep {
        index: usize,
        item: WalkthroughItem,
        artifacts: RenderArtifacts,
    },
    /// Every step has been shown. Terminal until a dataset is set again.
    Finished,
}

/// Draw instructions for one step.
#[derive(Clone, Debug, PartialEq)]
pub struct StepRendered {
    pub index: usize,
    pub label_text: String,
    pub artifacts: RenderArtifacts,
}

/// Output of a single [`WalkthroughSequencer::advance`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum WalkthroughEvent {
    StepRendered(StepRendered),
    Finished,
}

/// State machine that walks through a dataset one tap at a time.
///
/// The sequencer owns its step queue and dataset but never the renderer or
/// the viewport; those are borrowed per call. Each advance either renders the
/// next step or reports that the walkthrough is over.
///
/// ```rust
/// use shirube::{
///     WalkthroughDataset, WalkthroughEvent, WalkthroughItem, WalkthroughSequencer,
///     geometry::{Point, Rect, Size},
///     measure::FixedAdvanceMeasurer,
/// };
///
/// let viewport = Rect::new(Point::zero(), Size::new(375.0, 667.0));
/// let target = Rect::new(Point::new(20.0, 40.0), Size::new(80.0, 32.0));
///
/// let mut sequencer = WalkthroughSequencer::new();
/// sequencer.initialize(WalkthroughDataset::new(vec![WalkthroughItem::new("Balance", target)]));
///
/// let measurer = FixedAdvanceMeasurer::default();
/// assert!(matches!(
///     sequencer.advance(&viewport, &measurer),
///     WalkthroughEvent::StepRendered(_)
/// ));
/// assert_eq!(sequencer.advance(&viewport, &measurer), WalkthroughEvent::Finished);
/// ```
#[derive(Clone, Debug)]
pub struct WalkthroughSequencer {
    dataset: Option<WalkthroughDataset>,
    layout: LayoutConfig,
    queue: StepQueue,
    state: SequencerState,
    shown: usize,
}

impl Default for WalkthroughSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl WalkthroughSequencer {
    /// Creates a sequencer with default layout constants and no dataset.
    pub fn new() -> Self {
        Self::with_layout(LayoutConfig::default())
    }

    /// Creates a sequencer with custom layout constants and no dataset.
    pub fn with_layout(layout: LayoutConfig) -> Self {
        Self {
            dataset: None,
            layout,
            queue: StepQueue::new(),
            state: SequencerState::Idle,
            shown: 0,
        }
    }

    /// Replaces the dataset and restarts from its first item.
    pub fn initialize(&mut self, dataset: WalkthroughDataset) {
        log::debug!(
            "Walkthrough initialized with {} step(s).",
            dataset.items.len()
        );
        self.queue = StepQueue::from_items(&dataset.items);
        self.dataset = Some(dataset);
        self.state = SequencerState::Idle;
        self.shown = 0;
    }

    /// Moves to the next step.
    ///
    /// Returns [`WalkthroughEvent::Finished`] once the queue is exhausted, and
    /// keeps returning it on later calls.
    pub fn advance<V, M>(&mut self, viewport: &V, measurer: &M) -> WalkthroughEvent
    where
        V: ViewportProvider + ?Sized,
        M: TextMeasurer + ?Sized,
    {
        if matches!(self.state, SequencerState::Finished) {
            return WalkthroughEvent::Finished;
        }

        let Some(dataset) = &self.dataset else {
            log::warn!("Advance called before a dataset was set; finishing.");
            self.state = SequencerState::Finished;
            return WalkthroughEvent::Finished;
        };

        let Some(item) = self.queue.pop() else {
            log::debug!("Walkthrough finished after {} step(s).", self.shown);
            self.state = SequencerState::Finished;
            return WalkthroughEvent::Finished;
        };

        let bounds = viewport.bounds();
        let artifacts = RenderArtifacts::compute(&item, dataset, &self.layout, bounds, measurer);
        let index = self.shown;
        self.shown += 1;

        log::trace!(
            "Step {index}: circle {:?}, label {:?} {:?}.",
            artifacts.circle_rect,
            artifacts.label_position,
            artifacts.label_rect
        );

        let event = StepRendered {
            index,
            label_text: item.description_text.clone(),
            artifacts: artifacts.clone(),
        };
        self.state = SequencerState::ShowingStep {
            index,
            item,
            artifacts,
        };

        WalkthroughEvent::StepRendered(event)
    }

    /// Advances and hands the resulting event to `renderer`.
    pub fn advance_with<V, M, R>(&mut self, viewport: &V, measurer: &M, renderer: &mut R)
    where
        V: ViewportProvider + ?Sized,
        M: TextMeasurer + ?Sized,
        R: WalkthroughRenderer + ?Sized,
    {
        let event = self.advance(viewport, measurer);
        renderer.dispatch(&event);
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &SequencerState {
        &self.state
    }

    /// The dataset passed to the last `initialize`, if any.
    pub fn dataset(&self) -> Option<&WalkthroughDataset> {
        self.dataset.as_ref()
    }

    /// Layout constants used for every step.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Steps not shown yet.
    pub fn remaining(&self) -> usize {
        self.queue.count()
    }

    /// Checks if the walkthrough has run out of steps.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, SequencerState::Finished)
    }
}
