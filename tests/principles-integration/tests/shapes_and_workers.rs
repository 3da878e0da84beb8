//! 形状替换与工作者能力的集成测试
use principles_abstractions::{Action, Activity, Shape, Workable, Worker};
use principles_impl::{print_area, run_shift, HumanWorker, Rectangle, RobotWorker, Square};
use proptest::prelude::*;

#[test]
fn test_demo_shapes() {
    assert_eq!(print_area(&Rectangle::new(10.0, 5.0)), 50.0);
    assert_eq!(print_area(&Square::new(10.0)), 100.0);
}

#[test]
fn test_shapes_are_substitutable() {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Rectangle::new(3.0, 4.0)),
        Box::new(Square::new(3.0)),
    ];

    let areas: Vec<f64> = shapes.iter().map(|shape| print_area(shape.as_ref())).collect();
    assert_eq!(areas, vec![12.0, 9.0]);
}

#[test]
fn test_zero_dimensions() {
    assert_eq!(Rectangle::new(0.0, 7.0).calculate_area(), 0.0);
    assert_eq!(Square::new(0.0).calculate_area(), 0.0);
}

#[test]
fn test_shift_order() {
    let workforce: Vec<Box<dyn Worker>> = vec![Box::new(HumanWorker), Box::new(RobotWorker)];

    assert_eq!(
        run_shift(&workforce),
        vec![
            Activity::new("Human", Action::Work),
            Activity::new("Robot", Action::Work),
            Activity::new("Human", Action::Eat),
            Activity::new("Human", Action::Sleep),
        ]
    );
}

#[test]
fn test_robot_only_works() {
    let robot = RobotWorker;

    assert_eq!(robot.work().to_string(), "Robot working...");
    assert!(robot.as_eatable().is_none());
    assert!(robot.as_sleepable().is_none());
}

#[test]
fn test_empty_workforce() {
    assert!(run_shift(&[]).is_empty());
}

proptest! {
    #[test]
    fn prop_rectangle_area(width in 0.0f64..10_000.0, height in 0.0f64..10_000.0) {
        let rectangle = Rectangle::new(width, height);
        prop_assert_eq!(rectangle.calculate_area(), width * height);
        prop_assert_eq!(print_area(&rectangle), rectangle.calculate_area());
    }

    #[test]
    fn prop_rectangle_sides_are_independent(
        width in 0.0f64..10_000.0,
        height in 0.0f64..10_000.0,
        new_width in 0.0f64..10_000.0,
        new_height in 0.0f64..10_000.0,
    ) {
        let mut rectangle = Rectangle::new(width, height);

        rectangle.set_width(new_width);
        prop_assert_eq!(rectangle.height(), height);
        prop_assert_eq!(rectangle.calculate_area(), new_width * height);

        rectangle.set_height(new_height);
        prop_assert_eq!(rectangle.width(), new_width);
        prop_assert_eq!(rectangle.calculate_area(), new_width * new_height);
    }

    #[test]
    fn prop_square_area(size in 0.0f64..10_000.0, new_size in 0.0f64..10_000.0) {
        let mut square = Square::new(size);
        prop_assert_eq!(print_area(&square), size * size);

        square.set_size(new_size);
        prop_assert_eq!(square.calculate_area(), new_size * new_size);
    }
}
