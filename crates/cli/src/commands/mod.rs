pub(crate) mod categories;
pub(crate) mod migrate;
pub(crate) mod search;
pub(crate) mod serve;
