/// Numeric formatting helpers.
///
/// This module renders `f64` results as decimal text with at most 15
/// significant digits, choosing between fixed and scientific notation
/// the way C's `%G` conversion does. It is used by the command-line
/// front end to print results and by token serialization.
pub mod fmt;
