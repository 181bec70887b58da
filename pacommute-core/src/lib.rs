//! shared model, loaders, and numeric coercion for the Pennsylvania commute
//! statistics pipeline. every statistic computed downstream reads its inputs
//! through [`util::coerce`], and every input table is loaded by [`source`].
pub mod model;
pub mod source;
pub mod util;
