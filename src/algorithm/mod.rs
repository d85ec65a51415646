/// Mosaic assembly over all cells of a source image
pub mod assembler;
/// Compact set of tile identifiers
pub mod bitset;
/// Anti-duplication tile search
pub mod matcher;
/// Used-tile state of one conversion
pub mod session;
