// Landing screen regions: hero, value proposition, footer

mod footer;
mod hero;
mod value_proposition;

pub use footer::Footer;
pub use hero::Hero;
pub use value_proposition::{ValueCardView, ValueProposition};
