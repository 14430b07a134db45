//! Shared components used by the screens.
pub mod empty_state;
pub mod metric_card;
pub mod pico;
pub mod verification_badge;
