pub(crate) mod print;
pub(crate) mod shell;
