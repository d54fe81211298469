pub(crate) mod circle;
mod point;
pub(crate) mod polygon;
mod rect;

#[doc(inline)]
pub use circle::GeoCircle;
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use polygon::Polygon;
#[doc(inline)]
pub use rect::Rect;
