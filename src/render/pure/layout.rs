// Row placement and clipping (pure functions)

use crate::menu::Entry;
use crate::render::types::RowLayout;

/// Baseline of child `index`; the first two row slots are left for the title
pub fn row_y(index: usize, scroll: f32, row_height: f32, header_offset: f32) -> f32 {
    -scroll + header_offset + row_height * (index as f32 + 2.0)
}

/// Rows of `menu` whose baseline lies within `[0, viewport_height]`
pub fn layout_rows(
    menu: &Entry,
    viewport_height: f32,
    row_height: f32,
    header_offset: f32,
) -> Vec<RowLayout<'_>> {
    menu.children
        .iter()
        .enumerate()
        .filter_map(|(index, child)| {
            let y = row_y(index, menu.scroll, row_height, header_offset);
            if y < 0.0 || y > viewport_height {
                return None;
            }
            Some(RowLayout {
                index,
                y,
                label: &child.label,
                selected: index == menu.selected,
            })
        })
        .collect()
}
