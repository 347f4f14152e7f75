//! Session orchestration for the site shell.
//!
//! The Session owns what the page's scripts would own in a browser: the
//! shared page surface, the event loop with its timer service, and the
//! theme store. Startup applies the persisted theme; commands go through
//! the session so state never lives in globals.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use event_loop::EventLoop;
use page_model::Page;
use shootout::driver;
use theme_store::{PreferenceStorage, Theme, ThemeStore};

use crate::error::SiteResult;

/// Preferences file name inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Owns the page, the event loop and the theme store.
pub struct Session {
    page: Rc<RefCell<Page>>,
    event_loop: EventLoop,
    theme: ThemeStore,
    samples: usize,
}

impl Session {
    /// Opens the preference store under `data_dir` and initializes the
    /// page with the persisted (or default) theme.
    pub fn new(data_dir: &Path, samples: usize) -> SiteResult<Self> {
        Self::with_page(data_dir, samples, Page::shared())
    }

    /// Like [`new`], but over a caller-supplied page (used by tests to
    /// capture streamed result lines).
    ///
    /// [`new`]: Session::new
    pub fn with_page(
        data_dir: &Path,
        samples: usize,
        page: Rc<RefCell<Page>>,
    ) -> SiteResult<Self> {
        let storage = PreferenceStorage::open(data_dir.join(PREFERENCES_FILE))?;
        let mut theme = ThemeStore::load(storage);
        theme.apply_current(&mut page.borrow_mut().body)?;
        log::debug!("theme initialized to {}", theme.current());

        Ok(Self {
            page,
            event_loop: EventLoop::new(),
            theme,
            samples: samples.max(1),
        })
    }

    /// Returns a handle to the shared page.
    pub fn page(&self) -> Rc<RefCell<Page>> {
        Rc::clone(&self.page)
    }

    /// Returns the current theme preference.
    pub fn current_theme(&self) -> Theme {
        self.theme.current()
    }

    /// Returns the configured samples per trial.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Applies and persists the given theme.
    pub fn set_theme(&mut self, theme: Theme) -> SiteResult<()> {
        self.theme
            .set_preference(theme, &mut self.page.borrow_mut().body)?;
        log::info!("theme set to {}", theme);
        Ok(())
    }

    /// Switches to the opposite theme and returns the new value.
    pub fn toggle_theme(&mut self) -> SiteResult<Theme> {
        let next = self.theme.toggle(&mut self.page.borrow_mut().body)?;
        log::info!("theme toggled to {}", next);
        Ok(next)
    }

    /// Triggers a shootout run and drains the event loop until it
    /// finishes.
    ///
    /// Returns `Ok(false)` without scheduling anything if the run control
    /// is disabled, i.e. a run is already in flight.
    pub fn run_shootout(&mut self) -> SiteResult<bool> {
        if self.page.borrow().run_button.is_disabled() {
            log::warn!("ignoring shootout trigger while a run is in flight");
            return Ok(false);
        }

        log::debug!("starting shootout with {} samples per trial", self.samples);
        let spawner = self.event_loop.spawner();
        let timers = self.event_loop.timers();
        driver::trigger(Rc::clone(&self.page), &spawner, &timers, self.samples);
        self.event_loop.run_until_done()?;
        Ok(true)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("theme", &self.theme.current())
            .field("samples", &self.samples)
            .finish_non_exhaustive()
    }
}
