pub(crate) mod dialog_handler;
pub(crate) mod menu_handler;
