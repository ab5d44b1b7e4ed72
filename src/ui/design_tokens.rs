// SPDX-License-Identifier: MPL-2.0
//! Design tokens for toast rendering.
//!
//! - **Palette**: base and semantic colors
//! - **Spacing**: 8px grid
//! - **Sizing**: toast dimensions
//! - **Typography**: font sizes
//! - **Border / Radius / Shadow**: card decoration

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

pub mod sizing {
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const INPUT_WIDTH: f32 = 220.0;
}

pub mod typography {
    /// Medium title - page heading
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - toast text, labels
    pub const BODY: f32 = 14.0;
}

pub mod border {
    /// Medium border - toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(sizing::TOAST_WIDTH > sizing::INPUT_WIDTH);
};
