mod about;
mod care_guide;
mod category_carousel;
mod contact;
mod footer;
mod gallery;
mod hero;
mod lightbox;
mod nav;
mod pricing;
mod testimonials;

pub use about::About;
pub use care_guide::CareGuide;
pub use category_carousel::CategoryCarousel;
pub use contact::Contact;
pub use footer::Footer;
pub use gallery::Gallery;
pub use hero::Hero;
pub use lightbox::Lightbox;
pub use nav::Nav;
pub use pricing::Pricing;
pub use testimonials::Testimonials;
