//! 矩形与正方形
//!
//! 两者各自独立实现 [`Shape`]，没有继承关系，也不共享可变的尺寸布局：
//! 修改一个尺寸永远不会悄悄改动另一个尺寸。

use principles_abstractions::Shape;
use solid_common::Component;
use tracing::info;

/// 矩形
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    /// 创建矩形
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// 宽度
    pub fn width(&self) -> f64 {
        self.width
    }

    /// 高度
    pub fn height(&self) -> f64 {
        self.height
    }

    /// 设置宽度，高度保持不变
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// 设置高度，宽度保持不变
    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }
}

impl Component for Rectangle {
    fn name(&self) -> &'static str {
        "rectangle"
    }
}

impl Shape for Rectangle {
    fn calculate_area(&self) -> f64 {
        self.width * self.height
    }
}

/// 正方形
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    size: f64,
}

impl Square {
    /// 创建正方形
    pub fn new(size: f64) -> Self {
        Self { size }
    }

    /// 边长
    pub fn size(&self) -> f64 {
        self.size
    }

    /// 设置边长
    pub fn set_size(&mut self, size: f64) {
        self.size = size;
    }
}

impl Component for Square {
    fn name(&self) -> &'static str {
        "square"
    }
}

impl Shape for Square {
    fn calculate_area(&self) -> f64 {
        self.size * self.size
    }
}

/// 输出任意形状的面积并返回
pub fn print_area(shape: &dyn Shape) -> f64 {
    let area = shape.calculate_area();
    info!(shape = shape.name(), area, "面积");
    area
}
