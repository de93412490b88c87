pub(crate) mod string;
pub(crate) mod utf16;
