// Small dev utility: evaluate one snapshot document and print KPIs + alerts as JSON.
//
// Usage:
//   cargo run --bin evaluate_snapshot -- [snapshot.json] [locale]
//
// Without a path the built-in baseline snapshot is used.

use executive_kpi::api::kpi_card_lines;
use executive_kpi::engine::{evaluate_alerts_localized, KpiEngine, ProgressEngine};
use executive_kpi::i18n::DEFAULT_LOCALE;
use executive_kpi::Snapshot;
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);

    let snapshot = match args.next() {
        Some(path) => Snapshot::from_json_str(&std::fs::read_to_string(&path)?)?,
        None => Snapshot::baseline(),
    };
    let locale = args.next().unwrap_or_else(|| DEFAULT_LOCALE.to_string());

    let kpis = KpiEngine::new().compute(&snapshot);
    let alerts = evaluate_alerts_localized(&snapshot, &kpis, &locale)?;
    let gauges = ProgressEngine::new().target_gauges(&snapshot);

    for line in kpi_card_lines(&snapshot, &kpis) {
        eprintln!("{}", line);
    }

    let output = json!({
        "kpis": kpis,
        "alerts": alerts,
        "targetGauges": gauges,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
