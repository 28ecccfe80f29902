pub mod dinner_card;
pub mod pagination;
pub mod week_slide;
