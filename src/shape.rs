/// Spatial extent of a feature map or filter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    height: f64,
    width: f64,
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.height, self.width)
    }
}

impl Shape {
    pub fn new(height: f64, width: f64) -> Self {
        Self { height, width }
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn size(&self) -> f64 {
        self.height * self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Shape::new(28.0, 14.0).to_string(), "28 x 14");
        assert_eq!(Shape::new(112.5, 3.0).to_string(), "112.5 x 3");
    }

    #[test]
    fn size() {
        let shape = Shape::new(7.0, 5.0);
        assert_eq!(shape.size(), 35.0);
        assert_eq!(shape.height(), 7.0);
        assert_eq!(shape.width(), 5.0);
    }
}
