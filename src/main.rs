// ==========================================
// 经营驾驶舱 KPI 引擎 - 常驻主入口
// ==========================================
// 职责: 加载配置 → 初始化日志 → 定时刷新驾驶舱
// 用法: executive-kpi [config.json] [--cycles N]
// ==========================================

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use executive_kpi::app::{run_refresh_loop, AppState, RefreshLoopOptions};
use executive_kpi::config::DashboardConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config_path: Option<PathBuf> = None;
    let mut max_cycles: Option<u64> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--cycles" {
            let raw = args.next().context("--cycles 需要一个数值")?;
            max_cycles = Some(raw.parse().with_context(|| format!("无效的周期数: {}", raw))?);
        } else {
            config_path = Some(PathBuf::from(arg));
        }
    }

    let config = match &config_path {
        Some(path) => DashboardConfig::load(path)?
            .with_overrides(|key| std::env::var(key).ok())?,
        None => DashboardConfig::load_default()?,
    };
    config.validate()?;

    // 初始化日志系统
    executive_kpi::logging::init(&config.log_filter);

    tracing::info!("==================================================");
    tracing::info!("{}", executive_kpi::APP_NAME);
    tracing::info!("系统版本: {}", executive_kpi::VERSION);
    tracing::info!("==================================================");

    let state = AppState::new(config);
    let options = RefreshLoopOptions {
        interval: Duration::from_secs(state.config.refresh_interval_secs),
        max_cycles,
        summary_dir: state.config.summary_dir.clone(),
    };

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("无法监听停止信号: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let report = run_refresh_loop(state.dashboard_api.clone(), options, shutdown).await;
    tracing::info!(
        cycles = report.cycles,
        failures = report.failures,
        "驾驶舱已退出"
    );

    Ok(())
}
