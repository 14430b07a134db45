pub mod use_refresher;
