//! The routing facility: resolves navigation requests against a routing
//! table and maintains the navigation stack of live screens.

use super::{Destination, NavError, NavRequest};
use std::collections::HashMap;

/// Constructs a fresh screen for a destination when a dispatch resolves.
pub type ScreenFactory<S> = fn() -> S;

/// Maps destinations to screens and owns the navigation stack.
///
/// The routing table is injected at startup via [`Router::route`]; the
/// router itself has no built-in knowledge of which screens exist. A
/// dispatch either pushes a new screen onto the stack or fails with
/// [`NavError::DestinationNotFound`], leaving the stack untouched.
pub struct Router<S> {
    routes: HashMap<Destination, ScreenFactory<S>>,
    stack: Vec<S>,
}

impl<S> Router<S> {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            stack: Vec::new(),
        }
    }

    /// Register a destination in the routing table. Re-registering a
    /// destination replaces its factory.
    pub fn route(&mut self, destination: Destination, factory: ScreenFactory<S>) {
        self.routes.insert(destination, factory);
    }

    /// Resolve a request and transfer control to its destination.
    ///
    /// Fire-and-forget: the new screen lands on top of the stack and the
    /// previous screen stays underneath, to be restored by [`Router::back`].
    /// No retries, no recovery: an unregistered destination fails outright
    /// and the current screen remains displayed.
    pub fn dispatch(&mut self, request: NavRequest) -> Result<(), NavError> {
        let factory = self
            .routes
            .get(&request.destination())
            .ok_or_else(|| NavError::DestinationNotFound(request.symbolic_name().to_string()))?;
        self.stack.push(factory());
        Ok(())
    }

    /// Pop the navigation stack. The bottom screen is never popped; returns
    /// whether a screen was actually removed.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&S> {
        self.stack.last()
    }

    pub fn current_mut(&mut self) -> Option<&mut S> {
        self.stack.last_mut()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl<S> Default for Router<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_router() -> Router<&'static str> {
        let mut router = Router::new();
        router.route(Destination::Home, || "home screen");
        router.route(Destination::ProductList, || "product list screen");
        router
    }

    #[test]
    fn test_dispatch_pushes_registered_screen() {
        let mut router = test_router();
        router.dispatch(NavRequest::to(Destination::Home)).unwrap();
        router
            .dispatch(NavRequest::to(Destination::ProductList))
            .unwrap();
        assert_eq!(router.current(), Some(&"product list screen"));
        assert_eq!(router.depth(), 2);
    }

    #[test]
    fn test_dispatch_unregistered_fails_and_keeps_current() {
        let mut router = test_router();
        router.dispatch(NavRequest::to(Destination::Home)).unwrap();

        let err = router
            .dispatch(NavRequest::to(Destination::QrScanner))
            .unwrap_err();
        assert_eq!(err, NavError::DestinationNotFound("QRscanner".to_string()));
        assert_eq!(router.current(), Some(&"home screen"));
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn test_dispatch_is_repeatable() {
        let mut router = test_router();
        for _ in 0..3 {
            router
                .dispatch(NavRequest::to(Destination::ProductList))
                .unwrap();
            assert_eq!(router.current(), Some(&"product list screen"));
        }
    }

    #[test]
    fn test_back_restores_previous_screen() {
        let mut router = test_router();
        router.dispatch(NavRequest::to(Destination::Home)).unwrap();
        router
            .dispatch(NavRequest::to(Destination::ProductList))
            .unwrap();

        assert!(router.back());
        assert_eq!(router.current(), Some(&"home screen"));
    }

    #[test]
    fn test_back_never_pops_last_screen() {
        let mut router = test_router();
        router.dispatch(NavRequest::to(Destination::Home)).unwrap();

        assert!(!router.back());
        assert_eq!(router.current(), Some(&"home screen"));
        assert_eq!(router.depth(), 1);
    }
}
