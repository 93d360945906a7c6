use anyhow::Error;
use tokio::sync::mpsc;
use crate::config::config::PipelineConfig;
use crate::modules::classifier::GestureClassifier;
use crate::modules::frame::LandmarkFrame;
use crate::modules::gesture::Gesture;
use crate::modules::gesture_store::GestureStore;

/// Frame callback of the holistic detector: classify each frame, publish the result.
#[derive(Debug, Clone)]
pub struct GesturePipeline {
    classifier: GestureClassifier,
    store: GestureStore,
}

impl GesturePipeline {

    /// new initializes new instance of the pipeline
    pub fn new(classifier: GestureClassifier, store: GestureStore) -> Self {
        GesturePipeline {
            classifier,
            store,
        }
    }

    /// from_config builds a pipeline with a fresh gesture store.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(GestureClassifier::new(config.classifier.clone()), GestureStore::new())
    }

    pub fn store(&self) -> &GestureStore {
        &self.store
    }

    /// on_results classifies one detector result and writes it into the gesture store.
    ///
    /// The store is written on every frame, a frame without landmarks clears it.
    ///
    /// # Arguments
    /// * `frame` - &LandmarkFrame
    ///
    /// # Returns
    /// * `Option<Gesture>`
    pub fn on_results(&self, frame: &LandmarkFrame) -> Option<Gesture> {
        let gesture = self.classifier.classify(frame);
        let previous = self.store.set_gesture(gesture);

        tracing::trace!(gesture = ?gesture, "frame classified");
        if previous != gesture {
            tracing::info!(
                from = previous.map(|g| g.as_str()).unwrap_or("none"),
                to = gesture.map(|g| g.as_str()).unwrap_or("none"),
                "gesture changed"
            );
        }
        gesture
    }

    /// on_results_json decodes and validates a JSON detector result before classifying it.
    ///
    /// # Arguments
    /// * `s` - JSON detector result
    ///
    /// # Returns
    /// * `Result<Option<Gesture>, Error>`
    pub fn on_results_json(&self, s: &str) -> Result<Option<Gesture>, Error> {
        let frame = LandmarkFrame::from_json(s)?;
        frame.validate()?;
        Ok(self.on_results(&frame))
    }

    /// run processes frames in arrival order until every sender is dropped.
    ///
    /// # Arguments
    /// * `frames` - receiving side of the detector frame queue
    ///
    /// # Returns
    /// * `usize` - number of frames processed
    pub async fn run(&self, mut frames: mpsc::Receiver<LandmarkFrame>) -> usize {
        let mut processed: usize = 0;
        while let Some(frame) = frames.recv().await {
            self.on_results(&frame);
            processed += 1;
        }
        tracing::debug!(processed, "frame queue closed");
        processed
    }
}
