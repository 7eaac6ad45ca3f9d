use pathway_core::api;
use pathway_core::storage::Config;

pub fn run(port: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load()?;
    if let Some(port) = port {
        config.server.port = port;
    }
    let addr = config.server_addr();

    let runtime = tokio::runtime::Runtime::new()?;
    println!("evaluate endpoint listening on http://{addr}/api/evaluate");
    runtime.block_on(api::serve(&addr))?;
    Ok(())
}
