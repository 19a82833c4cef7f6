use nalgebra::{Point2, Point3, Vector3};

pub type Position = Point3<f32>;
pub type Texcoord = Point2<f32>;
pub type Normal = Vector3<f32>;

/// Number of `f32` components in one corner's full attribute tuple.
pub const CORNER_COMPONENTS: usize = 3 + 2 + 3;

// GPU consumers read these as tightly packed float arrays.
static_assertions::const_assert_eq!(std::mem::size_of::<Position>(), 3 * 4);
static_assertions::const_assert_eq!(std::mem::size_of::<Texcoord>(), 2 * 4);
static_assertions::const_assert_eq!(std::mem::size_of::<Normal>(), 3 * 4);
static_assertions::const_assert_eq!(std::mem::align_of::<Position>(), std::mem::align_of::<f32>());
static_assertions::const_assert_eq!(
    std::mem::size_of::<(Position, Texcoord, Normal)>(),
    CORNER_COMPONENTS * std::mem::size_of::<f32>()
);
