// ==========================================
// 集成测试辅助模块
// ==========================================

#![allow(dead_code)]

pub mod recording_presenter;
pub mod snapshot_builder;
