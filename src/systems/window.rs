//! Window management system
//!
//! Owns the single demo window: creation from config, borderless
//! fullscreen toggling, and the status text shown after the title.

use std::sync::Arc;
use winit::{
    dpi::LogicalSize,
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};
use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
    /// Last title handed to the platform, so unchanged titles are skipped
    shown_title: String,
}

impl WindowSystem {
    /// Create window from config, titled `title`
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
        title: impl Into<String>,
    ) -> Result<Self, WindowError> {
        let base_title = title.into();
        let attrs = Window::default_attributes()
            .with_title(base_title.as_str())
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_fullscreen(fullscreen_mode(config.fullscreen));

        let window = event_loop
            .create_window(attrs)
            .map_err(|e| WindowError::CreationFailed(e.to_string()))?;

        Ok(Self {
            window: Arc::new(window),
            shown_title: base_title.clone(),
            base_title,
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Switch between windowed and borderless fullscreen
    ///
    /// Returns true if the window is now fullscreen.
    pub fn toggle_fullscreen(&self) -> bool {
        let fullscreen = self.window.fullscreen().is_none();
        self.window.set_fullscreen(fullscreen_mode(fullscreen));
        log::info!("Fullscreen: {}", if fullscreen { "ON" } else { "OFF" });
        fullscreen
    }

    /// Show `status` after the base title
    pub fn update_title(&mut self, status: &str) {
        let title = compose_title(&self.base_title, status);
        if title != self.shown_title {
            self.window.set_title(&title);
            self.shown_title = title;
        }
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

fn fullscreen_mode(fullscreen: bool) -> Option<Fullscreen> {
    fullscreen.then_some(Fullscreen::Borderless(None))
}

fn compose_title(base: &str, status: &str) -> String {
    if status.is_empty() {
        base.to_string()
    } else {
        format!("{} - {}", base, status)
    }
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_with_status() {
        assert_eq!(
            compose_title("Phong", "lab | Gouraud"),
            "Phong - lab | Gouraud"
        );
    }

    #[test]
    fn test_title_without_status() {
        assert_eq!(compose_title("Phong", ""), "Phong");
    }

    #[test]
    fn test_fullscreen_mode() {
        assert!(fullscreen_mode(false).is_none());
        assert!(matches!(fullscreen_mode(true), Some(Fullscreen::Borderless(None))));
    }

    #[test]
    fn test_window_error_display() {
        let err = WindowError::CreationFailed("no display".into());
        assert_eq!(err.to_string(), "Window creation failed: no display");
    }
}
