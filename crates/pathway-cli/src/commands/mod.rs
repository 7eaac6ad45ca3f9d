pub mod drill;
pub mod evaluate;
pub mod forest;
pub mod lesson;
pub mod practice;
pub mod profile;
pub mod progress;
pub mod serve;
pub mod simulate;

use pathway_core::drill::Variant;

/// Parse a variant id from the command line.
pub fn parse_variant(value: &str) -> Result<Variant, String> {
    match value {
        "original" => Ok(Variant::Original),
        "increment" => Ok(Variant::Increment),
        "return_in_loop" => Ok(Variant::ReturnInLoop),
        "while_ge" => Ok(Variant::WhileGe),
        other => Err(format!(
            "unknown variant '{other}' (expected original, increment, return_in_loop, while_ge)"
        )),
    }
}
