// ==========================================
// 测试用展示适配器 - 记录每次渲染
// ==========================================

use std::sync::Mutex;

use executive_kpi::api::{DashboardView, PresentationAdapter};
use uuid::Uuid;

#[derive(Default)]
pub struct RecordingPresenter {
    rendered: Mutex<Vec<(Uuid, usize)>>,
}

impl RecordingPresenter {
    /// 已渲染的 (cycle_id, 告警数)
    pub fn rendered(&self) -> Vec<(Uuid, usize)> {
        self.rendered.lock().unwrap().clone()
    }
}

impl PresentationAdapter for RecordingPresenter {
    fn render(&self, view: &DashboardView) {
        self.rendered
            .lock()
            .unwrap()
            .push((view.cycle_id, view.alert_count()));
    }
}
