pub(crate) mod pixmap;
