//! Click-to-navigate dispatch for the hero actions.

use std::sync::Arc;

use crate::content::NavigationAction;
use crate::services::Navigator;

/// Turns a click on a [`NavigationAction`] into one router request.
///
/// No debouncing: five clicks are five requests. The dispatcher neither waits
/// for nor inspects the outcome of a navigation.
#[derive(Clone)]
pub struct NavigationDispatcher {
    navigator: Arc<dyn Navigator>,
}

impl NavigationDispatcher {
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self { navigator }
    }

    pub fn dispatch(&self, action: &NavigationAction) {
        log::debug!("{} clicked, navigating to {}", action.label, action.target_path);
        self.navigator.navigate(action.target_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{LOGIN, SIGNUP};
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNavigator {
        paths: Mutex<Vec<String>>,
    }

    impl RecordingNavigator {
        fn paths(&self) -> Vec<String> {
            self.paths.lock().map(|p| p.clone()).unwrap_or_default()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            if let Ok(mut paths) = self.paths.lock() {
                paths.push(path.to_string());
            }
        }
    }

    fn dispatcher() -> (Arc<RecordingNavigator>, NavigationDispatcher) {
        let navigator = Arc::new(RecordingNavigator::default());
        let dispatcher = NavigationDispatcher::new(navigator.clone());
        (navigator, dispatcher)
    }

    #[test]
    fn nothing_navigates_without_a_click() {
        let (navigator, _dispatcher) = dispatcher();
        assert!(navigator.paths().is_empty());
    }

    #[test]
    fn login_click_requests_login_once() {
        let (navigator, dispatcher) = dispatcher();
        dispatcher.dispatch(&LOGIN);
        assert_eq!(navigator.paths(), ["/login"]);
    }

    #[test]
    fn signup_click_requests_signup_once() {
        let (navigator, dispatcher) = dispatcher();
        dispatcher.dispatch(&SIGNUP);
        assert_eq!(navigator.paths(), ["/signup"]);
    }

    #[test]
    fn rapid_clicks_are_not_suppressed() {
        let (navigator, dispatcher) = dispatcher();
        for _ in 0..5 {
            dispatcher.dispatch(&SIGNUP);
        }
        assert_eq!(navigator.paths(), vec!["/signup"; 5]);
    }

    #[test]
    fn cloned_dispatchers_share_the_navigator() {
        let (navigator, dispatcher) = dispatcher();
        let other = dispatcher.clone();
        dispatcher.dispatch(&SIGNUP);
        other.dispatch(&LOGIN);
        dispatcher.dispatch(&SIGNUP);
        assert_eq!(navigator.paths(), ["/signup", "/login", "/signup"]);
    }
}
