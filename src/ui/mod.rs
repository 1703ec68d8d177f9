pub mod clock_face;
pub mod coverage;
pub mod panels;
pub mod quote_card;
