//! Capture session controller
//!
//! Opens a temporary capture buffer so longer input can be composed with the
//! normal editing keys, then delivers the text back (inserted at the saved
//! origin, or handed to a callback) or throws it away.
//!
//! ```text
//! Closed --open (no surface, or replace confirmed)--> Open
//! Open   --open (replace declined)-----------------> Open   (no-op)
//! Open   --save | cancel---------------------------> Closed
//! ```

use std::fmt;

use crate::host::CaptureHost;
use crate::keymap::CaptureKeymap;
use quill_core::prelude::*;

/// Well-known name of the capture buffer
pub const DEFAULT_SURFACE_NAME: &str = "*quill-capture*";

/// Receives the captured text on save
pub type SaveCallback = Box<dyn FnOnce(String)>;

/// What happens to the text on save
pub enum Delivery {
    /// Insert at the origin location
    Insert,
    /// Hand the text to a callback; nothing is inserted
    Invoke(SaveCallback),
}

impl fmt::Debug for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delivery::Insert => write!(f, "Insert"),
            Delivery::Invoke(_) => write!(f, "Invoke(<callback>)"),
        }
    }
}

/// Result of [`CaptureController::open`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A fresh capture buffer is shown and focused
    Opened,
    /// A capture buffer already existed and the user kept it
    Declined,
}

/// One open-to-close cycle
struct CaptureSession<L, Y> {
    origin: L,
    layout: Y,
    delivery: Delivery,
}

/// Owns the single live capture session, if any.
pub struct CaptureController<H: CaptureHost> {
    keymap: CaptureKeymap,
    surface_name: String,
    session: Option<CaptureSession<H::Location, H::Layout>>,
}

impl<H: CaptureHost> fmt::Debug for CaptureController<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureController")
            .field("keymap", &self.keymap)
            .field("surface_name", &self.surface_name)
            .field("open", &self.is_open())
            .field(
                "delivery",
                &self.session.as_ref().map(|session| &session.delivery),
            )
            .finish()
    }
}

impl<H: CaptureHost> Default for CaptureController<H> {
    fn default() -> Self {
        Self::new(CaptureKeymap::default(), DEFAULT_SURFACE_NAME)
    }
}

impl<H: CaptureHost> CaptureController<H> {
    pub fn new(keymap: CaptureKeymap, surface_name: impl Into<String>) -> Self {
        Self {
            keymap,
            surface_name: surface_name.into(),
            session: None,
        }
    }

    pub fn keymap(&self) -> &CaptureKeymap {
        &self.keymap
    }

    pub fn surface_name(&self) -> &str {
        &self.surface_name
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Open the capture buffer, optionally seeded with `initial_text`.
    ///
    /// If the buffer already exists the user is asked whether to destroy it.
    /// Declining leaves everything untouched.
    pub fn open(
        &mut self,
        host: &mut H,
        initial_text: Option<&str>,
        on_save: Option<SaveCallback>,
    ) -> Result<OpenOutcome> {
        if host.surface_exists(&self.surface_name) {
            let question = format!(
                "{} already exists. Discard it and start over?",
                self.surface_name
            );
            if !host.confirm(&question) {
                debug!("Kept existing {}", self.surface_name);
                return Ok(OpenOutcome::Declined);
            }

            info!("Discarding existing {}", self.surface_name);
            host.destroy_surface(&self.surface_name);
            self.session = None;
        }

        let origin = host.current_location();
        let layout = host.save_layout();

        host.present_surface(&self.surface_name)?;
        host.set_surface_text(&self.surface_name, initial_text.unwrap_or_default())?;

        let delivery = match on_save {
            Some(callback) => Delivery::Invoke(callback),
            None => Delivery::Insert,
        };

        host.set_header(&self.surface_name, &self.keymap.help_banner())?;
        host.bind_actions(&self.surface_name, &self.keymap.bindings())?;

        info!(
            "Opened {} (delivery: {:?}, seeded: {})",
            self.surface_name,
            delivery,
            initial_text.is_some()
        );
        self.session = Some(CaptureSession {
            origin,
            layout,
            delivery,
        });

        Ok(OpenOutcome::Opened)
    }

    /// Deliver the buffer text and close the capture buffer.
    ///
    /// The session is consumed before the host is touched, so the controller
    /// is closed afterwards even if a host call fails. The buffer is destroyed
    /// and the layout restored in every case; the first error is returned.
    ///
    /// Returns the number of characters delivered.
    pub fn save(&mut self, host: &mut H) -> Result<usize> {
        let session = self.session.take().ok_or(Error::NoActiveCapture)?;

        let delivered = Self::deliver(host, &self.surface_name, &session.origin, session.delivery);
        let closed = self.close(host, session.layout);

        let count = delivered?;
        closed?;
        info!("Saved {} ({} chars)", self.surface_name, count);
        Ok(count)
    }

    /// Discard the buffer text and close the capture buffer.
    pub fn cancel(&mut self, host: &mut H) -> Result<()> {
        let session = self.session.take().ok_or(Error::NoActiveCapture)?;

        let focused = host.focus_location(&session.origin);
        let closed = self.close(host, session.layout);

        focused?;
        closed?;
        info!("Cancelled {}", self.surface_name);
        Ok(())
    }

    fn deliver(
        host: &mut H,
        surface_name: &str,
        origin: &H::Location,
        delivery: Delivery,
    ) -> Result<usize> {
        let text = host.surface_text(surface_name)?;
        host.focus_location(origin)?;

        let count = text.chars().count();
        match delivery {
            Delivery::Invoke(callback) => {
                debug!("Handing {} chars to save callback", count);
                callback(text);
            }
            Delivery::Insert => host.insert_at_point(&text)?,
        }

        Ok(count)
    }

    fn close(&self, host: &mut H, layout: H::Layout) -> Result<()> {
        host.destroy_surface(&self.surface_name);
        host.restore_layout(layout).map_err(|e| {
            warn!("Failed to restore layout after capture: {}", e);
            e
        })
    }
}
