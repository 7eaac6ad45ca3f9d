use pathway_core::api::{evaluate_request, EvaluateRequest};

pub fn run(reasoning: &str, mc_score: Option<i64>) -> Result<(), Box<dyn std::error::Error>> {
    let payload = EvaluateRequest {
        reasoning: Some(reasoning.to_string()),
        mc_score,
        ..Default::default()
    };
    let result = evaluate_request(&payload)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
