//! Domain samplers assembled from the public combinator surface
//!
//! Each sampler is a factory returning a type-erased pipeline; none of them
//! introduce machinery of their own, they only compose primitives and
//! combinators. All of them replay bit-exactly under a seeded source.

/// RGB color sampling
pub mod color;
/// Card-network numbers with a Luhn check digit
pub mod credit_card;
/// Die rolls and dice-pool sums
pub mod dice;
/// Dotted-quad and colon-hex address strings
pub mod ip_address;
/// Geographic coordinate pairs
pub mod lat_long;
/// Grouped alphanumeric passwords
pub mod password;
/// Filled and clue-reduced Sudoku boards
pub mod sudoku;
/// UUID-shaped hex strings
pub mod uuid;
/// Semantic version strings
pub mod version_number;
