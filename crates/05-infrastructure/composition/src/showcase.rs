//! 组合根主入口

use crate::builder::ShowcaseBuilder;
use crate::config::ShowcaseConfig;
use principles_abstractions::{
    Activity, NotificationOutcome, Notifier, Receipt, Shape, UserStore, Worker,
};
use principles_impl::{
    print_area, run_shift, DiscountCalculator, EmailNotifier, HumanWorker, NotificationService,
    Rectangle, RobotWorker, Square, UserManager,
};
use solid_common::{Component, ShowcaseResult};
use tracing::info;

/// 演示用的订单金额
pub const DEMO_AMOUNT: f64 = 100.0;

/// 演示用的未注册客户类型
pub const UNKNOWN_CUSTOMER_TYPE: &str = "Unknown";

/// 用户管理演示结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserReport {
    /// 查询到的邮箱地址
    pub retrieved_email: Option<String>,
    /// 通知结果
    pub outcome: NotificationOutcome,
    /// 删除的邮箱地址
    pub removed_email: Option<String>,
    /// 删除后再次通知的结果
    pub outcome_after_removal: NotificationOutcome,
}

/// 一个客户类型的折扣
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountLine {
    /// 客户类型
    pub customer_type: String,
    /// 折扣值
    pub discount: f64,
}

/// 一个形状的面积
#[derive(Debug, Clone, PartialEq)]
pub struct AreaLine {
    /// 形状名称
    pub shape: &'static str,
    /// 面积
    pub area: f64,
}

/// 全部演示的结果
#[derive(Debug, Clone)]
pub struct ShowcaseReport {
    /// 用户管理
    pub users: UserReport,
    /// 折扣
    pub discounts: Vec<DiscountLine>,
    /// 面积
    pub areas: Vec<AreaLine>,
    /// 工作者动作
    pub activities: Vec<Activity>,
    /// 通知回执
    pub receipt: Receipt,
}

/// 组合根
///
/// 持有每个示例的一份实例，并负责运行各自的演示。示例之间互不依赖。
#[derive(Debug)]
pub struct Showcase {
    config: ShowcaseConfig,
    users: UserManager,
    notifier: EmailNotifier,
    calculator: DiscountCalculator,
    notifications: NotificationService,
}

impl Showcase {
    /// 创建组合根构建器
    pub fn builder() -> ShowcaseBuilder {
        ShowcaseBuilder::new()
    }

    /// 内部构造函数
    pub(crate) fn new(
        config: ShowcaseConfig,
        calculator: DiscountCalculator,
        notifications: NotificationService,
    ) -> Self {
        Self {
            config,
            users: UserManager::new(),
            notifier: EmailNotifier::new(),
            calculator,
            notifications,
        }
    }

    /// 当前配置
    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    /// 折扣计算器
    pub fn calculator(&self) -> &DiscountCalculator {
        &self.calculator
    }

    /// 通知服务
    pub fn notifications(&self) -> &NotificationService {
        &self.notifications
    }

    /// 用户存储
    pub fn users(&self) -> &UserManager {
        &self.users
    }

    /// 用户管理演示：存储与通知各司其职
    pub fn run_user_management(&mut self) -> UserReport {
        info!("=== 用户管理与通知 ===");
        let user_id = "user001";
        let message = "SRP on Task 1 is done!!!";

        self.users.add_user(user_id, "johndoe@gmail.com");
        let retrieved_email = self.users.get_user_email(user_id).map(str::to_string);
        info!(email = ?retrieved_email, "查询到邮箱");

        let outcome = self
            .notifier
            .send_notification_email(retrieved_email.as_deref(), message);

        let removed_email = self.users.remove_user(user_id);
        let outcome_after_removal = self
            .notifier
            .send_notification_email(self.users.get_user_email(user_id), message);

        UserReport {
            retrieved_email,
            outcome,
            removed_email,
            outcome_after_removal,
        }
    }

    /// 折扣演示：对每个已注册的客户类型以及一个未知类型计算折扣
    pub fn run_discounts(&self, amount: f64) -> Vec<DiscountLine> {
        info!(amount, "=== 折扣计算 ===");
        self.calculator
            .customer_types()
            .into_iter()
            .chain(std::iter::once(UNKNOWN_CUSTOMER_TYPE.to_string()))
            .map(|customer_type| {
                let discount = self.calculator.calculate_discount(&customer_type, amount);
                info!(customer_type = %customer_type, discount, "折扣");
                DiscountLine {
                    customer_type,
                    discount,
                }
            })
            .collect()
    }

    /// 面积演示：同一个例程处理每种形状
    pub fn run_shapes(&self) -> Vec<AreaLine> {
        info!("=== 形状面积 ===");
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Rectangle::new(10.0, 5.0)),
            Box::new(Square::new(10.0)),
        ];

        shapes
            .iter()
            .map(|shape| AreaLine {
                shape: shape.name(),
                area: print_area(shape.as_ref()),
            })
            .collect()
    }

    /// 工作者演示：所有人工作，只有支持的才进食和睡眠
    pub fn run_workers(&self) -> Vec<Activity> {
        info!("=== 工作者能力 ===");
        let workforce: Vec<Box<dyn Worker>> = vec![Box::new(HumanWorker), Box::new(RobotWorker)];
        run_shift(&workforce)
    }

    /// 通知演示：通过注入的发送器发送配置中的消息
    pub async fn run_notifications(&self) -> ShowcaseResult<Receipt> {
        info!(sender = self.notifications.sender_name(), "=== 依赖注入通知 ===");
        let section = &self.config.notification;
        let receipt = self
            .notifications
            .send_notification(&section.user, section.contact(), &section.message)
            .await?;
        info!(id = %receipt.id, channel = %receipt.channel, "通知已投递");
        Ok(receipt)
    }

    /// 运行全部演示
    pub async fn run_all(&mut self) -> ShowcaseResult<ShowcaseReport> {
        let users = self.run_user_management();
        let discounts = self.run_discounts(DEMO_AMOUNT);
        let areas = self.run_shapes();
        let activities = self.run_workers();
        let receipt = self.run_notifications().await?;

        Ok(ShowcaseReport {
            users,
            discounts,
            areas,
            activities,
            receipt,
        })
    }
}
