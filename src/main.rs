use auto_page::config::Config;
use auto_page::services::{clock::SystemClock, generator::write_page_to};
use tracing::info;

fn main() -> anyhow::Result<()> {
    auto_page::telemetry::init();
    // before the runtime starts any threads
    let clock = SystemClock::local();

    if std::env::args().skip(1).any(|a| a == "--stdout") {
        let accent = Config::load_accent()?;
        write_page_to(&mut std::io::stdout().lock(), &clock, &mut rand::thread_rng(), accent)?;
        return Ok(());
    }

    let cfg = Config::load()?;
    let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
    let paths = runtime.block_on(auto_page::run(cfg, clock))?;
    info!(written = paths.len(), "done");
    Ok(())
}
