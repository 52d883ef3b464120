use anyhow::Result;

use farmdash::config::Config;
use farmdash::logging::{json_log, obj, v_str, Domain};
use farmdash::runtime;

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();
    json_log(
        Domain::System,
        "boot",
        obj(&[("service", v_str("farmdash"))]),
    );
    runtime::run(cfg).await
}
