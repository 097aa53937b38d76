use std::ops::{Add, Mul, Sub};

use crate::math::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T> {
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

impl<T: Copy> Rect<T> {
    pub fn position(&self) -> Pos<T> {
        Pos {
            x: self.x,
            y: self.y,
        }
    }

    pub fn size(&self) -> Size<T> {
        Size {
            width: self.width,
            height: self.height,
        }
    }
}

impl<T: Copy + Add<Output = T>> Rect<T> {
    /// X coordinate of the right edge.
    pub fn right(&self) -> T {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> T {
        self.y + self.height
    }
}

impl<T: Copy + PartialOrd + Add<Output = T>> Rect<T> {
    /// Inclusive containment test.
    pub fn contains(&self, point: Pos<T>) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}

impl Rect<f32> {
    /// Top-left corner as a vector.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Width and height as a vector.
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }

    pub fn cast<U: From<T>>(self) -> Size<U> {
        Size {
            width: U::from(self.width),
            height: U::from(self.height),
        }
    }
}

impl<T: Mul + Copy> Mul<T> for Size<T> {
    type Output = Size<<T as Mul>::Output>;

    fn mul(self, rhs: T) -> Self::Output {
        Size {
            width: self.width * rhs,
            height: self.height * rhs,
        }
    }
}

impl From<Size<f32>> for Vec2 {
    fn from(size: Size<f32>) -> Self {
        Vec2::new(size.width, size.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos<T> {
    pub x: T,
    pub y: T,
}

impl<T> Pos<T> {
    pub fn new(x: T, y: T) -> Self {
        Pos { x, y }
    }
}

impl<T: Sub<Output = T>> Sub for Pos<T> {
    type Output = Pos<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Pos {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl From<Pos<f32>> for Vec2 {
    fn from(pos: Pos<f32>) -> Self {
        Vec2::new(pos.x, pos.y)
    }
}
