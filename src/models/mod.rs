mod content;
mod gallery;
mod testimonial;

pub use content::*;
pub use gallery::*;
pub use testimonial::*;
