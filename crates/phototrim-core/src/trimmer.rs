//! The trimming session a host view drives.
//!
//! A [`PhotoTrimmer`] owns the loaded bitmap, the crop window and the current
//! placement. The host forwards container size changes and gesture samples,
//! draws the image at [`PhotoTrimmer::display_frame`], and asks for the
//! cropped bitmap when the user commits.

use image::RgbaImage;

use crate::bitmap::Bitmap;
use crate::config::{ConfigError, TrimConfig};
use crate::geometry::Rect;
use crate::interaction::{reduce, Animation, DisplayPlacement, GestureEvent, InteractionState};
use crate::layout::{self, Segment};
use crate::transform::{apply_circular_mask, crop, CropError};

#[derive(Debug, Clone)]
pub struct PhotoTrimmer {
    config: TrimConfig,
    container: Rect,
    crop_region: Rect,
    image: Option<Bitmap>,
    state: Option<InteractionState>,
}

impl PhotoTrimmer {
    /// Create a session for a container frame in view space.
    pub fn new(container: Rect, config: TrimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let crop_region = layout::crop_region(container, config.crop_width_fraction);
        Ok(Self {
            config,
            container,
            crop_region,
            image: None,
            state: None,
        })
    }

    pub fn config(&self) -> &TrimConfig {
        &self.config
    }

    /// Replace the configuration. A new crop width fraction re-lays out the
    /// crop window and resets the placement; zoom limits apply from the next
    /// pinch clamp pass.
    pub fn set_config(&mut self, config: TrimConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let relayout = config.crop_width_fraction != self.config.crop_width_fraction;
        self.config = config;
        if relayout {
            self.layout();
        }
        Ok(())
    }

    /// Change the lower zoom bound on its own.
    ///
    /// Only positivity is checked, so the two limits can be moved one at a
    /// time in either order. While the range is inverted the zoom clamp still
    /// resolves: a scale below the minimum resets to 1.0, then the maximum
    /// applies.
    pub fn set_minimum_zoom_scale(&mut self, scale: f64) -> Result<(), ConfigError> {
        let config = TrimConfig {
            minimum_zoom_scale: scale,
            ..self.config.clone()
        };
        config.validate_zoom_scales()?;
        self.config = config;
        Ok(())
    }

    /// Change the upper zoom bound on its own. See
    /// [`set_minimum_zoom_scale`](Self::set_minimum_zoom_scale).
    pub fn set_maximum_zoom_scale(&mut self, scale: f64) -> Result<(), ConfigError> {
        let config = TrimConfig {
            maximum_zoom_scale: scale,
            ..self.config.clone()
        };
        config.validate_zoom_scales()?;
        self.config = config;
        Ok(())
    }

    pub fn container(&self) -> Rect {
        self.container
    }

    /// Update the container frame. The crop window is re-laid out and a loaded
    /// image gets a fresh initial placement.
    pub fn set_container(&mut self, container: Rect) {
        if container == self.container {
            return;
        }
        self.container = container;
        self.layout();
    }

    pub fn crop_region(&self) -> Rect {
        self.crop_region
    }

    /// Load a bitmap, replacing any previous one, and reset the placement.
    pub fn set_image(&mut self, bitmap: Bitmap) {
        log::debug!("loading {}x{} image", bitmap.width, bitmap.height);
        self.image = Some(bitmap);
        self.reset_placement();
    }

    pub fn image(&self) -> Option<&Bitmap> {
        self.image.as_ref()
    }

    /// Current placement, `None` before an image is placed.
    pub fn placement(&self) -> Option<DisplayPlacement> {
        self.state.map(|s| s.placement)
    }

    /// Frame to draw the image at.
    pub fn display_frame(&self) -> Option<Rect> {
        self.placement().map(|p| p.frame())
    }

    pub fn interaction_state(&self) -> Option<InteractionState> {
        self.state
    }

    /// Feed one gesture sample. Returns an animation hint when a clamp pass
    /// moved the image. Samples are dropped while no image is placed.
    pub fn handle(&mut self, event: impl Into<GestureEvent>) -> Option<Animation> {
        let state = self.state?;
        let transition = reduce(state, event.into(), self.crop_region, &self.config);
        self.state = Some(transition.state);
        transition.animation
    }

    /// Crop the image to what is visible through the crop window.
    pub fn cropped_image(&self) -> Result<Bitmap, CropError> {
        let display_frame = self.display_frame().unwrap_or_default();
        crop(self.image.as_ref(), self.crop_region, display_frame).inspect_err(|e| {
            log::warn!("crop failed: {e}");
        })
    }

    /// Like [`cropped_image`](Self::cropped_image), with the area outside the
    /// circular window made transparent.
    pub fn circular_cropped_image(&self) -> Result<RgbaImage, CropError> {
        self.cropped_image().map(|bitmap| apply_circular_mask(&bitmap))
    }

    /// Guide lines to draw, empty when disabled.
    pub fn guide_lines(&self) -> Vec<Segment> {
        if self.config.show_guide_lines {
            layout::guide_lines(self.crop_region).to_vec()
        } else {
            Vec::new()
        }
    }

    fn layout(&mut self) {
        self.crop_region = layout::crop_region(self.container, self.config.crop_width_fraction);
        self.reset_placement();
    }

    fn reset_placement(&mut self) {
        let Some(image) = &self.image else {
            self.state = None;
            return;
        };
        let placement = layout::initial_placement(image.size(), self.crop_region, self.container);
        if placement.is_none() {
            log::warn!(
                "cannot place {}x{} image in container {:?}",
                image.width,
                image.height,
                self.container
            );
        }
        self.state = placement.map(InteractionState::new);
    }
}
