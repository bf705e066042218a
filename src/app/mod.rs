// ==========================================
// 经营驾驶舱 - 应用层
// ==========================================
// 职责: 宿主装配与定时刷新
// ==========================================

pub mod refresh_loop;
pub mod state;

pub use refresh_loop::{run_refresh_loop, RefreshLoopOptions, RefreshLoopReport};
pub use state::AppState;
