use leptos::ev;
use leptos::prelude::*;

use crate::content::{
    HERO_DESCRIPTION, HERO_HEADING_EMPHASIS, HERO_HEADING_LEAD, HERO_HEADING_TAIL, HERO_HINT,
    HERO_IMAGE_ALT, NAVIGATION_ACTIONS, NavigationAction,
};
use crate::navigation::NavigationDispatcher;
use crate::services::ImageSource;

/// Two-column hero: pitch and actions on the left, illustration on the right.
///
/// `text_style` and `image_style` are the inline entrance styles for the two
/// blocks; empty strings leave them settled.
#[component]
pub fn Hero(
    dispatcher: NavigationDispatcher,
    image: ImageSource,
    #[prop(optional, into)] text_style: String,
    #[prop(optional, into)] image_style: String,
) -> impl IntoView {
    let actions = NAVIGATION_ACTIONS
        .iter()
        .map(|action| {
            let action = *action;
            let on_click = click_handler::<ev::MouseEvent>(dispatcher.clone(), action);
            view! {
                <button
                    type="button"
                    class=action.emphasis.class()
                    on:click=on_click
                >
                    {action.label}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="hero">
            <div class="hero-text" style=text_style>
                <h1 class="hero-title">
                    {HERO_HEADING_LEAD}
                    <span class="hero-title-accent">{HERO_HEADING_EMPHASIS}</span>
                    {HERO_HEADING_TAIL}
                </h1>
                <p class="hero-description">{HERO_DESCRIPTION}</p>
                <div class="hero-actions">{actions}</div>
                <div class="hero-hint">{HERO_HINT}</div>
            </div>
            <HeroImage image=image style=image_style />
        </section>
    }
}

/// Click handler for the button rendered from `action`.
fn click_handler<E: 'static>(
    dispatcher: NavigationDispatcher,
    action: NavigationAction,
) -> impl Fn(E) + Clone + Send + Sync + 'static {
    move |_| dispatcher.dispatch(&action)
}

#[component]
fn HeroImage(image: ImageSource, style: String) -> impl IntoView {
    let loading = image.loading();
    view! {
        <div class="hero-media" style=style>
            <img
                class="hero-image"
                src=image.src
                alt=HERO_IMAGE_ALT
                width=image.width.to_string()
                height=image.height.to_string()
                loading=loading
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{LOGIN, SIGNUP};
    use crate::services::Navigator;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingNavigator {
        paths: Mutex<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.paths.lock().expect("navigator lock").push(path.to_string());
        }
    }

    fn click(action: NavigationAction) -> Vec<String> {
        let navigator = Arc::new(RecordingNavigator::default());
        let handler = click_handler::<()>(NavigationDispatcher::new(navigator.clone()), action);
        handler(());
        let paths = navigator.paths.lock().expect("navigator lock").clone();
        paths
    }

    #[test]
    fn each_button_navigates_to_its_own_target() {
        for action in NAVIGATION_ACTIONS {
            assert_eq!(click(action), [action.target_path], "{}", action.label);
        }
    }

    #[test]
    fn log_in_goes_to_login_and_sign_up_to_signup() {
        assert_eq!(click(LOGIN), ["/login"]);
        assert_eq!(click(SIGNUP), ["/signup"]);
    }
}
