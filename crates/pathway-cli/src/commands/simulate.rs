use pathway_core::drill::simulate;

pub fn run(variant: &str, n: i64) -> Result<(), Box<dyn std::error::Error>> {
    let variant = super::parse_variant(variant)?;
    let outcome = simulate(n, variant);
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
