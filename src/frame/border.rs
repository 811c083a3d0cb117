//! Border draw commands for each [`BorderVariant`].

use heapless::Vec;

use super::DrawCmd;
use crate::config::{BORDER_DASH_STEP, BORDER_INSET, OLED_HEIGHT, OLED_WIDTH};
use crate::state::BorderVariant;

const fn dashes(len: u8) -> usize {
    (len as usize).div_ceil(BORDER_DASH_STEP as usize)
}

/// Pixel count of the dashed outline, the largest variant.
pub(super) const MAX_BORDER_COMMANDS: usize = 2 * dashes(OLED_WIDTH) + 2 * dashes(OLED_HEIGHT);

pub(super) fn push_border<const N: usize>(commands: &mut Vec<DrawCmd, N>, variant: BorderVariant) {
    let outline = DrawCmd::Rect {
        x: 0,
        y: 0,
        w: OLED_WIDTH,
        h: OLED_HEIGHT,
        filled: false,
    };

    match variant {
        BorderVariant::Single => {
            let _ = commands.push(outline);
        }
        BorderVariant::Double => {
            let _ = commands.push(outline);
            let _ = commands.push(DrawCmd::Rect {
                x: BORDER_INSET,
                y: BORDER_INSET,
                w: OLED_WIDTH - 2 * BORDER_INSET,
                h: OLED_HEIGHT - 2 * BORDER_INSET,
                filled: false,
            });
        }
        BorderVariant::Dashed => {
            // Rows and columns are stepped separately; corners may be hit twice.
            for x in (0..OLED_WIDTH).step_by(BORDER_DASH_STEP as usize) {
                let _ = commands.push(DrawCmd::Pixel { x, y: 0 });
                let _ = commands.push(DrawCmd::Pixel {
                    x,
                    y: OLED_HEIGHT - 1,
                });
            }
            for y in (0..OLED_HEIGHT).step_by(BORDER_DASH_STEP as usize) {
                let _ = commands.push(DrawCmd::Pixel { x: 0, y });
                let _ = commands.push(DrawCmd::Pixel {
                    x: OLED_WIDTH - 1,
                    y,
                });
            }
        }
    }
}
