pub(crate) mod badge;
pub(crate) mod cars;
pub(crate) mod config;
pub(crate) mod parse;
pub(crate) mod tracks;
