/// Raw string token pulled from a line or CSV cell, already trimmed.
/// Examples: `85`, `92.5`, `x`
pub type RawToken = String;
/// Trimmed non-empty category label from the categorical input file.
/// Examples: `Mathematics`, `Computer Science`
pub type Category = String;
