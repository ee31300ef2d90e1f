pub(crate) mod chart;
pub(crate) mod theme;
pub(crate) mod util;
