//! 用户存储、邮件通知与折扣计算的集成测试
use principles_abstractions::{DiscountStrategy, NotificationOutcome, Notifier, UserStore};
use principles_impl::{DiscountCalculator, EmailNotifier, UserManager};
use proptest::prelude::*;
use solid_common::Component;
use std::sync::Arc;

/// 测试用的员工折扣
#[derive(Debug)]
struct EmployeeDiscount;

impl Component for EmployeeDiscount {
    fn name(&self) -> &'static str {
        "employee_discount"
    }
}

impl DiscountStrategy for EmployeeDiscount {
    fn calculate_discount(&self, amount: f64) -> f64 {
        amount * 30.0 / 100.0
    }

    fn percent(&self) -> f64 {
        30.0
    }
}

#[test]
fn test_store_and_notify_are_independent() {
    let mut users = UserManager::new();
    let notifier = EmailNotifier::new();

    users.add_user("user001", "johndoe@gmail.com");
    let email = users.get_user_email("user001");
    assert_eq!(email, Some("johndoe@gmail.com"));

    let outcome = notifier.send_notification_email(email, "SRP on Task 1 is done!!!");
    assert_eq!(
        outcome,
        NotificationOutcome::Sent {
            recipient: "johndoe@gmail.com".to_string()
        }
    );

    assert_eq!(
        users.remove_user("user001").as_deref(),
        Some("johndoe@gmail.com")
    );
    assert_eq!(users.get_user_email("user001"), None);
    assert_eq!(
        notifier.send_notification_email(users.get_user_email("user001"), "again"),
        NotificationOutcome::AddressMissing
    );
}

#[test]
fn test_add_user_overwrites_email() {
    let mut users = UserManager::new();
    users.add_user("u1", "old@example.com");
    users.add_user("u1", "new@example.com");

    assert_eq!(users.get_user_email("u1"), Some("new@example.com"));
    assert_eq!(users.user_count(), 1);
}

#[test]
fn test_remove_missing_user_is_noop() {
    let mut users = UserManager::new();
    users.add_user("u1", "a@example.com");

    assert_eq!(users.remove_user("ghost"), None);
    assert_eq!(users.user_count(), 1);
}

#[test]
fn test_default_tiers_for_one_hundred() {
    let calculator = DiscountCalculator::default();

    assert_eq!(calculator.calculate_discount("Regular", 100.0), 5.0);
    assert_eq!(calculator.calculate_discount("VIP", 100.0), 15.0);
    assert_eq!(calculator.calculate_discount("Premium", 100.0), 10.0);
    assert_eq!(calculator.calculate_discount("Unknown", 100.0), 0.0);
}

#[test]
fn test_keys_are_case_sensitive() {
    let calculator = DiscountCalculator::default();

    assert_eq!(calculator.calculate_discount("vip", 100.0), 0.0);
    assert_eq!(calculator.calculate_discount("regular", 100.0), 0.0);
}

#[test]
fn test_new_type_without_touching_dispatch() {
    let mut calculator = DiscountCalculator::default();
    calculator.register("Employee", Arc::new(EmployeeDiscount));

    assert_eq!(calculator.calculate_discount("Employee", 100.0), 30.0);
    assert_eq!(calculator.calculate_discount("VIP", 100.0), 15.0);
    assert_eq!(calculator.customer_types().len(), 4);

    assert!(calculator.unregister("Employee").is_some());
    assert_eq!(calculator.calculate_discount("Employee", 100.0), 0.0);
}

proptest! {
    #[test]
    fn prop_discount_is_percent_of_amount(amount in 0.0f64..1_000_000.0) {
        let calculator = DiscountCalculator::default();

        prop_assert_eq!(calculator.calculate_discount("Regular", amount), amount * 5.0 / 100.0);
        prop_assert_eq!(calculator.calculate_discount("VIP", amount), amount * 15.0 / 100.0);
        prop_assert_eq!(calculator.calculate_discount("Premium", amount), amount * 10.0 / 100.0);
    }

    #[test]
    fn prop_unregistered_type_gets_nothing(amount in 0.0f64..1_000_000.0, key in "[a-z]{1,12}") {
        let calculator = DiscountCalculator::default();
        prop_assert_eq!(calculator.calculate_discount(&key, amount), 0.0);
    }

    #[test]
    fn prop_discount_never_exceeds_amount(amount in 0.0f64..1_000_000.0) {
        let calculator = DiscountCalculator::default();
        for customer_type in calculator.customer_types() {
            let discount = calculator.calculate_discount(&customer_type, amount);
            prop_assert!(discount >= 0.0 && discount <= amount);
        }
    }
}
