pub(crate) mod common;

mod classify;
