use anyhow::Error;
use tokio::sync::watch;
use crate::config::config::DisplayConfig;
use crate::modules::gesture::Gesture;
use crate::modules::gesture_store::GestureStore;

/// Maps the observed gesture to the image resource to show.
#[derive(Debug, Clone)]
pub struct ImageDisplay {
    pub smile_image: String,
    pub serious_image: String,
    pub eureca_image: String,
    pub placeholder_image: String,
    rx: watch::Receiver<Option<Gesture>>,
}

impl ImageDisplay {
    pub fn new(store: &GestureStore, config: DisplayConfig) -> Self {
        ImageDisplay {
            smile_image: config.smile_image,
            serious_image: config.serious_image,
            eureca_image: config.eureca_image,
            placeholder_image: config.placeholder_image,
            rx: store.subscribe(),
        }
    }

    /// image_for returns the image path of a gesture, the placeholder when there is none.
    pub fn image_for(&self, gesture: Option<Gesture>) -> &str {
        match gesture {
            None => self.placeholder_image.as_str(),
            Some(Gesture::Smile) => self.smile_image.as_str(),
            Some(Gesture::Serious) => self.serious_image.as_str(),
            Some(Gesture::Eureca) => self.eureca_image.as_str(),
        }
    }

    pub fn current_gesture(&self) -> Option<Gesture> {
        *self.rx.borrow()
    }

    pub fn current_image(&self) -> &str {
        self.image_for(self.current_gesture())
    }

    /// changed waits for the next gesture write and returns it with its image path.
    ///
    /// # Returns
    /// * `Result<(Option<Gesture>, String), Error>` - fails once every store handle is dropped
    pub async fn changed(&mut self) -> Result<(Option<Gesture>, String), Error> {
        if self.rx.changed().await.is_err() {
            return Err(Error::msg("image_display - gesture store closed"))
        }
        let gesture = *self.rx.borrow_and_update();
        Ok((gesture, self.image_for(gesture).to_string()))
    }
}
