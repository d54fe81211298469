mod fields_to_svg;
mod svg_util;

#[doc(inline)]
pub use fields_to_svg::*;

#[doc(inline)]
pub use svg_util::SvgDrawOptions;
#[doc(inline)]
pub use svg_util::SvgTheme;
