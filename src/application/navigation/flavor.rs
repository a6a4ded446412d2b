// SPDX-License-Identifier: MPL-2.0
//! The two deployment flavors of a navigation stack.

use crate::application::port::{
    CloseHook, DestinationMaterializer, OwnedWindow, PageFactory, WindowFactory,
};
use crate::domain::navigation::Locator;

/// In-process pages. Popping a page just drops it.
#[derive(Debug, Default)]
pub struct PageFlavor<F> {
    factory: F,
}

impl<F: PageFactory> PageFlavor<F> {
    #[must_use]
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    #[must_use]
    pub fn factory(&self) -> &F {
        &self.factory
    }
}

impl<F: PageFactory> DestinationMaterializer for PageFlavor<F> {
    type Handle = F::Page;
    type Parameter = F::Parameter;

    fn materialize(&mut self, locator: &Locator, parameter: Option<F::Parameter>) -> F::Page {
        log::trace!("Loading page from '{locator}'");
        self.factory.load(locator, parameter)
    }

    fn release(&mut self, handle: F::Page) {
        drop(handle);
    }
}

/// Child windows owned by the main window.
///
/// Popping closes the window. A window closed by the user pops the stack,
/// but only while it is still the top entry, so closing a window that was
/// already popped never pops a second time.
#[derive(Debug, Default)]
pub struct WindowFlavor<F> {
    factory: F,
}

impl<F: WindowFactory> WindowFlavor<F> {
    #[must_use]
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    #[must_use]
    pub fn factory(&self) -> &F {
        &self.factory
    }
}

impl<F: WindowFactory> DestinationMaterializer for WindowFlavor<F> {
    type Handle = F::Window;
    type Parameter = F::Parameter;

    fn materialize(&mut self, locator: &Locator, parameter: Option<F::Parameter>) -> F::Window {
        log::trace!("Opening window from '{locator}'");
        self.factory.create(locator, parameter)
    }

    fn release(&mut self, handle: F::Window) {
        handle.close();
    }

    fn watch_close(&mut self, handle: &F::Window, hook: CloseHook) {
        handle.on_closed(hook);
    }
}
