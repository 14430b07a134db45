pub mod oracle_preference;
pub mod user_prefs;
