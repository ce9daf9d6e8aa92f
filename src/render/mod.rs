pub(crate) mod convolve;
pub(crate) mod nearest;
pub(crate) mod pipeline;
pub(crate) mod policy;
pub(crate) mod state;
