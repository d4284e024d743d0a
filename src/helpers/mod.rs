//! Template helper functions.
//!
//! Stateless formatters used alongside [`crate::tweet`] by the template layer:
//! date humanization, number formatting, retina image markup and encoding.
//! Each one is also available by name through [`crate::registry::HelperRegistry`].

mod encoding;
mod images;
mod numbers;
mod time;

// Re-export public API
pub use encoding::{marshal_json, query_escape};
pub use images::{
    lazy_retina_image, lazy_retina_image_lightbox, retina_image, retina_image_title, to_2x,
};
pub use numbers::{
    in_km, number_with_delimiter, pace, rand_intn, round, round_to_string, to_stars,
};
pub use time::{
    distance_of_time_in_words, format_time, format_time_with_minute, format_time_year_month,
    month_name,
};
