pub mod dialog;
pub mod empty_state;
pub mod error;
pub mod layout;
pub mod snackbar;
