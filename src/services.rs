// SPDX-License-Identifier: MPL-2.0
//! Composition root.
//!
//! [`Services`] owns one page stack, one window stack, the dialog services and
//! the translations. Callers build it once at startup and pass references to
//! whoever needs a service.

use crate::application::navigation::{NavigationStack, PageFlavor, WindowFlavor};
use crate::application::port::{DialogService, FileDialogService, PageFactory, WindowFactory};
use crate::config::{self, Config};
use crate::convert::SiPrefixes;
use crate::i18n::I18n;
use crate::infrastructure::{RfdDialogService, RfdFileDialogService};

pub struct Services<P: PageFactory, W: WindowFactory> {
    config: Config,
    i18n: I18n,
    pages: NavigationStack<PageFlavor<P>>,
    windows: NavigationStack<WindowFlavor<W>>,
    dialogs: Box<dyn DialogService>,
    files: Box<dyn FileDialogService>,
}

impl<P: PageFactory, W: WindowFactory> Services<P, W> {
    /// Wires the services together and registers the routes from `config`.
    pub fn new(
        config: Config,
        i18n: I18n,
        pages: P,
        windows: W,
        dialogs: Box<dyn DialogService>,
        files: Box<dyn FileDialogService>,
    ) -> Self {
        let pages = NavigationStack::new(PageFlavor::new(pages));
        let windows = NavigationStack::new(WindowFlavor::new(windows));

        let page_routes = config.pages.apply(&pages.registry());
        let window_routes = config.windows.apply(&windows.registry());
        log::debug!("Registered {page_routes} page and {window_routes} window routes");

        Self {
            config,
            i18n,
            pages,
            windows,
            dialogs,
            files,
        }
    }

    /// Like [`new`](Self::new), with native dialogs.
    pub fn with_system_dialogs(config: Config, i18n: I18n, pages: P, windows: W) -> Self {
        let dialogs = Box::new(RfdDialogService::new(&i18n));
        Self::new(
            config,
            i18n,
            pages,
            windows,
            dialogs,
            Box::new(RfdFileDialogService::new()),
        )
    }

    /// Loads the settings file and builds the services with native dialogs.
    ///
    /// Returns the warning key from [`config::load`] alongside.
    pub fn load(pages: P, windows: W) -> (Self, Option<String>) {
        let (config, warning) = config::load();
        let i18n = I18n::new(None, &config);
        (Self::with_system_dialogs(config, i18n, pages, windows), warning)
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    pub fn i18n_mut(&mut self) -> &mut I18n {
        &mut self.i18n
    }

    /// The page stack. Clones share its state.
    #[must_use]
    pub fn pages(&self) -> &NavigationStack<PageFlavor<P>> {
        &self.pages
    }

    /// The window stack. Clones share its state.
    #[must_use]
    pub fn windows(&self) -> &NavigationStack<WindowFlavor<W>> {
        &self.windows
    }

    #[must_use]
    pub fn dialogs(&self) -> &dyn DialogService {
        self.dialogs.as_ref()
    }

    #[must_use]
    pub fn files(&self) -> &dyn FileDialogService {
        self.files.as_ref()
    }

    /// SI prefixes of the current locale.
    #[must_use]
    pub fn si_prefixes(&self) -> SiPrefixes {
        self.i18n.si_prefixes()
    }
}
