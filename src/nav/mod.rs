//! Screen navigation: destinations, navigation requests, and the router.
//!
//! Every screen change in the application goes through [`router::Router`].
//! Destinations form a closed set, so a request can only ever name a screen
//! the application knows about; whether that screen is actually reachable
//! depends on the routing table the router was built with.

pub mod router;

use thiserror::Error;

/// A named target screen reachable via navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Home,
    ProductList,
    QrScanner,
}

impl Destination {
    /// The fixed symbolic name of this destination, as used in config files
    /// and the activity log.
    pub fn symbolic_name(&self) -> &'static str {
        match self {
            Destination::Home => "home",
            Destination::ProductList => "productlist",
            Destination::QrScanner => "QRscanner",
        }
    }

    /// Parse a symbolic name back into a destination. Unknown and empty
    /// names are rejected.
    pub fn from_symbolic_name(name: &str) -> Option<Self> {
        match name {
            "home" => Some(Destination::Home),
            "productlist" => Some(Destination::ProductList),
            "QRscanner" => Some(Destination::QrScanner),
            _ => None,
        }
    }
}

/// A request to transfer control to a destination screen.
///
/// Constructed at the moment of dispatch and consumed by
/// [`router::Router::dispatch`]. Carries no payload: none of the current
/// destinations take contextual data from the screen that launched them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavRequest {
    destination: Destination,
}

impl NavRequest {
    pub fn to(destination: Destination) -> Self {
        Self { destination }
    }

    pub fn destination(&self) -> Destination {
        self.destination
    }

    pub fn symbolic_name(&self) -> &'static str {
        self.destination.symbolic_name()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    #[error("no screen registered for destination \"{0}\"")]
    DestinationNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbolic_names_are_fixed() {
        assert_eq!(Destination::Home.symbolic_name(), "home");
        assert_eq!(Destination::ProductList.symbolic_name(), "productlist");
        assert_eq!(Destination::QrScanner.symbolic_name(), "QRscanner");
    }

    #[test]
    fn test_from_symbolic_name_round_trip() {
        for dest in [
            Destination::Home,
            Destination::ProductList,
            Destination::QrScanner,
        ] {
            assert_eq!(Destination::from_symbolic_name(dest.symbolic_name()), Some(dest));
        }
    }

    #[test]
    fn test_from_symbolic_name_rejects_unknown() {
        assert_eq!(Destination::from_symbolic_name(""), None);
        assert_eq!(Destination::from_symbolic_name("Productlist"), None);
        assert_eq!(Destination::from_symbolic_name("qrscanner"), None);
        assert_eq!(Destination::from_symbolic_name("settings"), None);
    }

    #[test]
    fn test_request_carries_destination_name() {
        let req = NavRequest::to(Destination::QrScanner);
        assert_eq!(req.destination(), Destination::QrScanner);
        assert_eq!(req.symbolic_name(), "QRscanner");
    }
}
