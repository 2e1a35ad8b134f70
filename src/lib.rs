pub mod countdown;
pub mod gui;
pub mod interactivity;
pub mod locale;
pub mod logging;
pub mod placement;
pub mod settings;
pub mod win_util;
