//! Action 系统
//!
//! 变更操作不直接调用列表加载，而是返回 Action，由 `Controller::dispatch` 执行

/// Follow-up work requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    /// Re-fetch the whole list from the backend
    RefreshUrls,
    /// 无操作
    #[default]
    Noop,
}

impl Action {
    /// 判断是否是无操作
    pub fn is_noop(&self) -> bool {
        matches!(self, Action::Noop)
    }
}
