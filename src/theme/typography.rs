//! Typography - Font Sizes

/// Typography constants
pub struct Typography;

impl Typography {
    pub const TEXT_SM: f32 = 14.0;
    pub const TEXT_LG: f32 = 18.0;
    pub const TEXT_3XL: f32 = 30.0;
}
