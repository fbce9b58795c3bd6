//! Static copy and configuration baked into the landing screen.
//!
//! Nothing here changes at runtime. Display order of [`NAVIGATION_ACTIONS`] and
//! [`VALUE_CARDS`] is the order the screen renders them in.

/// A label/target-path pair rendered as a click-to-navigate button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationAction {
    pub label: &'static str,
    pub target_path: &'static str,
    pub emphasis: ButtonEmphasis,
}

/// Visual treatment of a navigation button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEmphasis {
    Primary,
    Secondary,
}

impl ButtonEmphasis {
    pub fn class(self) -> &'static str {
        match self {
            ButtonEmphasis::Primary => "btn btn-primary",
            ButtonEmphasis::Secondary => "btn btn-secondary",
        }
    }
}

pub const LOGIN: NavigationAction = NavigationAction {
    label: "Log In",
    target_path: "/login",
    emphasis: ButtonEmphasis::Primary,
};

pub const SIGNUP: NavigationAction = NavigationAction {
    label: "Sign Up",
    target_path: "/signup",
    emphasis: ButtonEmphasis::Secondary,
};

pub const NAVIGATION_ACTIONS: [NavigationAction; 2] = [LOGIN, SIGNUP];

/// One product benefit shown in the value-proposition grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const VALUE_CARDS: [ValueCard; 3] = [
    ValueCard {
        icon: "🎓",
        title: "Empower Your Decision-Making",
        body: "Discover detailed data on course pathways and career outcomes so you can plan your future confidently.",
    },
    ValueCard {
        icon: "📊",
        title: "Data-Driven Insights",
        body: "Explore visualizations on median salaries, job vacancies, and employment trends tailored for students.",
    },
    ValueCard {
        icon: "🚀",
        title: "Ready for Future Upgrades",
        body: "Our roadmap includes personalized recommendations and advanced filters, ensuring EduPath grows with your needs.",
    },
];

// Hero copy
pub const HERO_HEADING_LEAD: &str = "Discover Your ";
pub const HERO_HEADING_EMPHASIS: &str = "Future";
pub const HERO_HEADING_TAIL: &str = " with EduPath";
pub const HERO_DESCRIPTION: &str = "Get personalized insights into careers and courses based on your interests. \
     Empowering students to make smarter decisions for tomorrow.";
pub const HERO_HINT: &str =
    "🔍 Explore trends in salaries, job vacancies, and course pathways with real-time recommendations.";

/// Logical asset name of the hero illustration.
pub const HERO_IMAGE_ASSET: &str = "hero-image";
pub const HERO_IMAGE_ALT: &str = "EduPath Hero Illustration";
/// Intrinsic size of the hero illustration (600:400).
pub const HERO_IMAGE_WIDTH: u32 = 600;
pub const HERO_IMAGE_HEIGHT: u32 = 400;

// Value-proposition copy
pub const VALUE_HEADING: &str = "Why EduPath?";
pub const VALUE_SUBHEADING: &str = "Designed with students in mind, our platform provides critical insights \
     to help you choose the right educational and career path.";

/// Footer copyright line for `year`, e.g. `© 2025 EduPath. All rights reserved.`
pub fn copyright_line(year: i32, product_name: &str) -> String {
    format!("© {year} {product_name}. All rights reserved.")
}
