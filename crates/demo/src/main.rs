use esbank_demo::{DemoConfig, run_scenario};
use esbank_infra::{AccountRepository, InMemoryEventStore};

fn main() -> anyhow::Result<()> {
    esbank_observability::init();

    let config = DemoConfig::from_env()?;
    let repository = AccountRepository::new(InMemoryEventStore::new());

    let report = run_scenario(&repository, &config)?;
    if !report.replay_matches() {
        anyhow::bail!("rebuilt account diverged from the live one");
    }

    tracing::info!(
        account_id = %report.account_id,
        events = report.event_count,
        "demo finished"
    );
    Ok(())
}
