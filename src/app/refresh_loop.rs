// ==========================================
// 经营驾驶舱 - 定时刷新循环
// ==========================================
// 职责: 按固定间隔驱动 DashboardApi::refresh
// 说明: 单周期失败只记录日志,下一周期照常执行 (无本地重试)
// 退出: 收到停止信号,或达到最大周期数
// ==========================================

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};

use crate::api::{DashboardApi, ExecutiveSummary};

/// 刷新循环参数
#[derive(Debug, Clone)]
pub struct RefreshLoopOptions {
    /// 刷新间隔 (首个周期立即执行)
    pub interval: Duration,
    /// 最大周期数;None 表示直到停止信号
    pub max_cycles: Option<u64>,
    /// 每周期导出经营摘要的目录
    pub summary_dir: Option<PathBuf>,
}

/// 刷新循环统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshLoopReport {
    pub cycles: u64,   // 已执行周期数
    pub failures: u64, // 失败周期数
}

/// 运行刷新循环
///
/// # 参数
/// - api: 驾驶舱 API
/// - options: 循环参数
/// - shutdown: 停止信号 (完成即退出)
pub async fn run_refresh_loop<S>(
    api: Arc<DashboardApi>,
    options: RefreshLoopOptions,
    shutdown: S,
) -> RefreshLoopReport
where
    S: Future<Output = ()>,
{
    let mut ticker = interval(options.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(shutdown);

    let mut report = RefreshLoopReport::default();

    loop {
        if let Some(max) = options.max_cycles {
            if report.cycles >= max {
                break;
            }
        }

        tokio::select! {
            _ = &mut shutdown => {
                tracing::info!(cycles = report.cycles, "收到停止信号,刷新循环退出");
                break;
            }
            _ = ticker.tick() => {
                report.cycles += 1;
                if let Err(e) = run_cycle(&api, options.summary_dir.as_ref()).await {
                    report.failures += 1;
                    tracing::error!(cycle = report.cycles, "刷新周期失败: {}", e);
                }
            }
        }
    }

    report
}

async fn run_cycle(
    api: &DashboardApi,
    summary_dir: Option<&PathBuf>,
) -> crate::api::ApiResult<()> {
    let view = api.refresh().await?;

    if let Some(dir) = summary_dir {
        let path = ExecutiveSummary::from_view(&view).write_to_dir(dir).await?;
        tracing::debug!(path = %path.display(), "经营摘要已导出");
    }

    Ok(())
}
