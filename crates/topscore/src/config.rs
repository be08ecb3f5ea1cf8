//! Input and output format constants.
//!
//! The file formats are fixed:
//! - input lines are `name,surname,score`
//! - output lines are `name surname`

/// Separator between fields of an input line.
pub const FIELD_DELIMITER: char = ',';

/// Separator between name and surname in the output.
pub const OUTPUT_SEPARATOR: char = ' ';

/// Number of fields a line must have. Extra fields are ignored.
pub const MIN_FIELDS: usize = 3;
