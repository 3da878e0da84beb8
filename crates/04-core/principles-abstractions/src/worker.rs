//! 工作者能力抽象接口
//!
//! 工作、进食、睡眠是彼此独立的能力。实现者在类型定义中声明自己支持的子集，
//! 对不支持的能力的调用在编译期就会被拒绝。

use solid_common::Component;
use std::fmt;

/// 工作者执行的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// 工作
    Work,
    /// 进食
    Eat,
    /// 睡眠
    Sleep,
}

impl Action {
    /// 动作的进行时描述
    pub fn as_progressive(&self) -> &'static str {
        match self {
            Self::Work => "working",
            Self::Eat => "eating",
            Self::Sleep => "sleeping",
        }
    }
}

/// 一次动作记录
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    /// 执行者
    pub worker: &'static str,
    /// 动作
    pub action: Action,
}

impl Activity {
    /// 创建新的动作记录
    pub fn new(worker: &'static str, action: Action) -> Self {
        Self { worker, action }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}...", self.worker, self.action.as_progressive())
    }
}

/// 工作能力
pub trait Workable: Component {
    /// 工作
    fn work(&self) -> Activity;
}

/// 进食能力
pub trait Eatable: Component {
    /// 进食
    fn eat(&self) -> Activity;
}

/// 睡眠能力
pub trait Sleepable: Component {
    /// 睡眠
    fn sleep(&self) -> Activity;
}

/// 可放入异构工作队列的工作者
///
/// 可选能力通过返回句柄来收窄，不支持时返回 `None`，
/// 调用方必须先收窄再调用，不存在空实现或报错桩。
pub trait Worker: Workable {
    /// 进食能力句柄
    fn as_eatable(&self) -> Option<&dyn Eatable> {
        None
    }

    /// 睡眠能力句柄
    fn as_sleepable(&self) -> Option<&dyn Sleepable> {
        None
    }
}
