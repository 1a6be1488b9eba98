/// A 2D vector with X and Y components.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_traits", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn from_yx(y: f32, x: f32) -> Vec2 {
        Vec2 { y, x }
    }

    pub fn from_xy(x: f32, y: f32) -> Vec2 {
        Vec2 { x, y }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Return the magnitude of the cross product of this vector with `other`.
    pub fn cross_product_norm(&self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Return the dot product of this vector with `other`.
    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Return a copy of this vector scaled such that the length is 1.
    pub fn normalized(&self) -> Vec2 {
        let inv_len = 1. / self.length();
        Vec2::from_yx(self.y * inv_len, self.x * inv_len)
    }
}

impl std::ops::Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            y: self.y + rhs.y,
            x: self.x + rhs.x,
        }
    }
}

impl std::ops::Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            y: self.y - rhs.y,
            x: self.x - rhs.x,
        }
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2 {
            y: self.y * rhs,
            x: self.x * rhs,
        }
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2 {
            y: -self.y,
            x: -self.x,
        }
    }
}

/// A 3D vector with X, Y and Z components.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_traits", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn from_xyz(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Return the dot product of this vector with `other`.
    pub fn dot(&self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Return the cross product of this vector with `other`.
    pub fn cross(&self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Return a copy of this vector scaled such that the length is 1.
    pub fn normalized(&self) -> Vec3 {
        let inv_len = 1. / self.length();
        Vec3 {
            x: self.x * inv_len,
            y: self.y * inv_len,
            z: self.z * inv_len,
        }
    }

    /// Return the euclidean distance between this point and the closest
    /// coordinate on the segment from `start` to `end`.
    ///
    /// This is the 3D analog of [`Line::distance`](crate::Line::distance):
    /// the closest coordinate is the projection onto the infinite line,
    /// clamped to the segment's endpoints.
    pub fn segment_distance(&self, start: Vec3, end: Vec3) -> f32 {
        let ab = end - start;
        let ap = *self - start;

        let len_sq = ab.dot(ab);
        if len_sq == 0. {
            return ap.length();
        }

        let t = (ap.dot(ab) / len_sq).clamp(0., 1.);
        (ap - ab * t).length()
    }
}

impl std::ops::Add<Vec3> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl std::ops::Sub<Vec3> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl std::ops::Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Vec3 {
        Vec3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}
