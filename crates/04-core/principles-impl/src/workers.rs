//! 按能力子集声明的工作者
//!
//! [`HumanWorker`] 可以工作、进食、睡眠；[`RobotWorker`] 只能工作。
//! 机器人上根本不存在 `eat` / `sleep` 方法，调用会在编译期失败：
//!
//! ```compile_fail
//! use principles_abstractions::Eatable;
//! use principles_impl::RobotWorker;
//!
//! RobotWorker.eat();
//! ```
//!
//! ```compile_fail
//! use principles_abstractions::Sleepable;
//! use principles_impl::RobotWorker;
//!
//! fn rest(worker: &dyn Sleepable) {
//!     worker.sleep();
//! }
//!
//! rest(&RobotWorker);
//! ```
//!
//! 同样的调用对人类工作者可以通过编译：
//!
//! ```
//! use principles_abstractions::{Eatable, Sleepable, Workable};
//! use principles_impl::HumanWorker;
//!
//! let human = HumanWorker;
//! human.work();
//! human.eat();
//! human.sleep();
//! ```

use principles_abstractions::{Action, Activity, Eatable, Sleepable, Workable, Worker};
use solid_common::Component;
use tracing::info;

fn perform(worker: &'static str, action: Action) -> Activity {
    let activity = Activity::new(worker, action);
    info!("{activity}");
    activity
}

/// 人类工作者
#[derive(Debug, Default, Clone, Copy)]
pub struct HumanWorker;

impl Component for HumanWorker {
    fn name(&self) -> &'static str {
        "Human"
    }
}

impl Workable for HumanWorker {
    fn work(&self) -> Activity {
        perform(self.name(), Action::Work)
    }
}

impl Eatable for HumanWorker {
    fn eat(&self) -> Activity {
        perform(self.name(), Action::Eat)
    }
}

impl Sleepable for HumanWorker {
    fn sleep(&self) -> Activity {
        perform(self.name(), Action::Sleep)
    }
}

impl Worker for HumanWorker {
    fn as_eatable(&self) -> Option<&dyn Eatable> {
        Some(self)
    }

    fn as_sleepable(&self) -> Option<&dyn Sleepable> {
        Some(self)
    }
}

/// 机器人工作者
#[derive(Debug, Default, Clone, Copy)]
pub struct RobotWorker;

impl Component for RobotWorker {
    fn name(&self) -> &'static str {
        "Robot"
    }
}

impl Workable for RobotWorker {
    fn work(&self) -> Activity {
        perform(self.name(), Action::Work)
    }
}

impl Worker for RobotWorker {}

/// 运行一个班次
///
/// 所有工作者先依次工作，然后支持进食的进食、支持睡眠的睡眠。
pub fn run_shift(workforce: &[Box<dyn Worker>]) -> Vec<Activity> {
    let mut activities: Vec<Activity> = workforce.iter().map(|worker| worker.work()).collect();

    for worker in workforce {
        if let Some(eater) = worker.as_eatable() {
            activities.push(eater.eat());
        }
        if let Some(sleeper) = worker.as_sleepable() {
            activities.push(sleeper.sleep());
        }
    }

    activities
}
